//! Model integration for gate-duel.
//!
//! Externally-scored agents see the game through two seams:
//!
//! - **Encoding**: `StateEncoder` trait and the 36-feature `CircuitEncoder`
//! - **Scoring**: `MoveScorer` trait, returning one score per move of the
//!   50-entry move space
//! - **Baselines**: `UniformScorer`, `TableScorer` for testing
//!
//! ## Usage
//!
//! ```rust
//! use gate_duel::core::GameState;
//! use gate_duel::nn::{CircuitEncoder, MoveScorer, StateEncoder, UniformScorer};
//!
//! let encoded = CircuitEncoder.encode(&GameState::standard());
//! let scores = UniformScorer.score(&encoded).unwrap();
//! assert_eq!(scores.len(), CircuitEncoder.action_space_size());
//! ```

pub mod encoder;
pub mod traits;

// Re-export main types
pub use encoder::{CircuitEncoder, StateEncoder, FEATURE_COUNT};
pub use traits::{check_scores, EncodedState, MoveScorer, ScorerError, TableScorer, UniformScorer};
