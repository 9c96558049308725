//! Independence null model for two-layer multiplex edge dynamics.
//!
//! A two-layer multiplex network's edge dynamics form a 4-state Markov
//! chain: each edge is present or absent on each layer, and the joint state
//! is `layer1_bit + 2 * layer2_bit`. Given the 16 observed joint transition
//! counts, this crate builds the null model under which the two layers
//! evolve independently.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  marginalize  │────▶│  estimate per  │────▶│    recombine     │
//!  │  joint counts │     │  layer chain   │     │ (delta method)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use spillover_null_model::MultiplexChain;
//!
//! let chain = MultiplexChain::new(vec![
//!     400, 5, 5, 1, 4, 300, 1, 5, 5, 1, 300, 4, 1, 5, 4, 400,
//! ])?;
//!
//! let null = chain.null_model();
//! assert_eq!(null.probability().len(), 16);
//! # Ok::<(), spillover_null_model::NullModelError>(())
//! ```

pub mod correspondence;
pub mod decompose;
pub mod diagnostic;
pub mod error;
pub mod model;
pub mod multiplex;

pub use correspondence::LAYER_INDEX_FOR_JOINT;
pub use decompose::{JOINT_TRANSITIONS, LAYER_TRANSITIONS, NUM_LAYERS, marginal_counts};
pub use diagnostic::{Diagnostic, GAUSSIAN_APPROX_MIN_TOTAL};
pub use error::NullModelError;
pub use model::{NullComponent, NullModel};
pub use multiplex::MultiplexChain;
