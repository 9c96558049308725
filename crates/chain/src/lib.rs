//! Bayesian transition-parameter estimation for discrete-time Markov chains.
//!
//! Given the observed transition counts of an n-state chain (a vector of
//! length n² in `origin * n + dest` order), this crate produces the
//! posterior-mean transition probabilities under a symmetric Dirichlet(1, …, 1)
//! prior per origin state, together with a per-transition standard deviation.
//!
//! # Quick start
//!
//! ```rust
//! use spillover_chain::ChainEstimator;
//!
//! let est = ChainEstimator::from_counts(vec![10, 10, 20, 20])?;
//!
//! assert_eq!(est.state_totals(), &[20, 40]);
//! // Laplace smoothing: (10 + 1) / (20 + 2) = 0.5
//! assert!((est.parameters()[0] - 0.5).abs() < 1e-12);
//! # Ok::<(), spillover_chain::ChainError>(())
//! ```

pub mod counts;
pub mod error;
pub mod estimator;

pub use counts::TransitionCounts;
pub use error::ChainError;
pub use estimator::ChainEstimator;
