//! Marginalization of joint transition counts into per-layer counts.
//!
//! The 4-state joint chain encodes its state as `layer1_bit + 2 * layer2_bit`,
//! and a joint transition index as `origin * 4 + dest`. Summing the counts
//! over one layer's bits leaves the transition counts of the other layer as
//! a standalone 2-state chain.

/// Number of layers in the supported decomposition.
pub const NUM_LAYERS: usize = 2;

/// Number of transitions in the 4-state joint chain.
pub const JOINT_TRANSITIONS: usize = 16;

/// Number of transitions in each 2-state layer chain.
pub const LAYER_TRANSITIONS: usize = 4;

/// Joint transition indices contributing to each layer-1 transition count.
///
/// Row `t` lists the four joint transitions whose layer-1 projection is
/// transition `t`; the layer-2 bit of origin and destination is summed out.
/// The rows encode the 2-bit joint state layout and are kept as a fixed
/// table rather than rederived at runtime.
pub(crate) const LAYER1_SOURCES: [[usize; 4]; LAYER_TRANSITIONS] = [
    [0, 2, 8, 10],
    [1, 3, 9, 11],
    [4, 6, 12, 14],
    [5, 7, 13, 15],
];

/// Joint transition indices contributing to each layer-2 transition count.
pub(crate) const LAYER2_SOURCES: [[usize; 4]; LAYER_TRANSITIONS] = [
    [0, 1, 4, 5],
    [2, 3, 6, 7],
    [8, 9, 12, 13],
    [10, 11, 14, 15],
];

/// Marginal per-layer transition counts of a two-layer joint chain.
///
/// Each returned 4-entry vector is the transition-count vector of a
/// standalone 2-state chain describing one layer's edge dynamics with the
/// other layer summed out.
pub fn marginal_counts(joint: &[u64; JOINT_TRANSITIONS]) -> [[u64; LAYER_TRANSITIONS]; NUM_LAYERS] {
    let mut layers = [[0u64; LAYER_TRANSITIONS]; NUM_LAYERS];
    for (layer, sources) in [&LAYER1_SOURCES, &LAYER2_SOURCES].into_iter().enumerate() {
        for (transition, joint_indices) in sources.iter().enumerate() {
            layers[layer][transition] = joint_indices.iter().map(|&j| joint[j]).sum();
        }
    }
    layers
}
