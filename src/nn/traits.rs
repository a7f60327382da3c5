//! Scorer traits for externally-scored move selection.
//!
//! These traits define the interface between the game engine and a move
//! scoring model (typically a trained network behind some runtime). The
//! crate never links a model runtime itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::MOVE_SPACE_SIZE;

/// Encoded game state as a flat tensor for model input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Failure to produce a usable score vector.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScorerError {
    /// The scorer returned the wrong number of scores.
    #[error("scorer returned {actual} scores, expected {expected}")]
    BadOutputLength { expected: usize, actual: usize },

    /// The backing model failed.
    #[error("scorer backend failed: {0}")]
    Backend(String),
}

/// Scores every move of the fixed move space for an encoded state.
///
/// Output index for a move is `slot * 5 + (gate id - 1)`, see
/// [`crate::core::Move::index`]. Higher is better; scores of illegal moves
/// are ignored by the caller.
pub trait MoveScorer: Send + Sync {
    /// Produce one score per move, `MOVE_SPACE_SIZE` in total.
    fn score(&self, encoded: &EncodedState) -> Result<Vec<f32>, ScorerError>;
}

/// Check that a score vector covers the whole move space.
pub fn check_scores(scores: &[f32]) -> Result<(), ScorerError> {
    if scores.len() != MOVE_SPACE_SIZE {
        return Err(ScorerError::BadOutputLength {
            expected: MOVE_SPACE_SIZE,
            actual: scores.len(),
        });
    }
    Ok(())
}

/// Scorer that rates every move equally (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformScorer;

impl MoveScorer for UniformScorer {
    fn score(&self, _encoded: &EncodedState) -> Result<Vec<f32>, ScorerError> {
        Ok(vec![1.0 / MOVE_SPACE_SIZE as f32; MOVE_SPACE_SIZE])
    }
}

/// Scorer backed by a fixed score table, ignoring the state.
///
/// Handy as a stand-in for a trained model with a known preference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableScorer {
    scores: Vec<f32>,
}

impl TableScorer {
    /// Create a scorer that always returns `scores`.
    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }
}

impl MoveScorer for TableScorer {
    fn score(&self, _encoded: &EncodedState) -> Result<Vec<f32>, ScorerError> {
        Ok(self.scores.clone())
    }
}
