//! Fixed correspondence between joint and per-layer transition indices.

use crate::decompose::JOINT_TRANSITIONS;

/// For each joint transition index (`origin * 4 + dest` in the 4-state
/// joint chain), the pair of layer transition indices `(layer1, layer2)`
/// that project it onto the two layers, each `origin * 2 + dest` in the
/// matching 2-state chain.
///
/// The pairs encode the joint state layout `layer1_bit + 2 * layer2_bit`;
/// like the marginalization tables, this stays a fixed table.
pub const LAYER_INDEX_FOR_JOINT: [(usize, usize); JOINT_TRANSITIONS] = [
    (0, 0),
    (1, 0),
    (0, 1),
    (1, 1),
    (2, 0),
    (3, 0),
    (2, 1),
    (3, 1),
    (0, 2),
    (1, 2),
    (0, 3),
    (1, 3),
    (2, 2),
    (3, 2),
    (2, 3),
    (3, 3),
];
