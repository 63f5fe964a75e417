//! Error types for array construction and operations
//!
//! Every fallible operation in this crate returns [`Result`], whose error side
//! is the single [`ArrayError`] enum. Each variant corresponds to one failure
//! kind and carries the values needed to explain it.
//!
//! Validation always happens before any allocation or mutation, so an `Err`
//! means every operand is exactly as it was before the call.
//!
//! # Examples
//!
//! ```
//! use trirank_core::{Array, ArrayError};
//!
//! let err = Array::zeros(&[2, 0]).unwrap_err();
//! assert!(matches!(err, ArrayError::InvalidShape { .. }));
//!
//! let err = Array::from_slice(&[1.0, 2.0, 3.0], &[2, 2]).unwrap_err();
//! assert!(matches!(err, ArrayError::SizeMismatch { expected: 4, got: 3 }));
//! ```

use thiserror::Error;

/// Error returned by array operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// Shape is empty, has more than three axes, has a zero extent, or its
    /// element count overflows `usize`
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// Element count does not match what the shape requires
    #[error("Size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// Number of indices or operand rank disagrees with the array rank
    #[error("Rank mismatch: expected rank {expected}, got rank {got}")]
    RankMismatch { expected: usize, got: usize },

    /// An index, axis position or insertion point is not below its bound
    #[error("Index {index} out of range: must be below {bound}")]
    IndexOutOfRange { index: usize, bound: usize },

    /// Extents differ on an axis and neither of them is 1
    #[error("Shapes {lhs:?} and {rhs:?} cannot be broadcast on axis {axis}")]
    BroadcastIncompatible {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        axis: usize,
    },

    /// Lower bound is not strictly below the upper bound
    #[error("Invalid range: lower bound {low} must be below upper bound {high}")]
    InvalidRange { low: f64, high: f64 },

    /// No arrays were supplied
    #[error("Empty input: at least one array is required")]
    EmptyInput,

    /// Extents disagree on an axis that must match
    #[error("Shape mismatch on axis {axis}: {expected:?} vs {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        axis: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ArrayError>;

impl ArrayError {
    pub(crate) fn invalid_shape(shape: &[usize], reason: &'static str) -> Self {
        ArrayError::InvalidShape {
            shape: shape.to_vec(),
            reason,
        }
    }

    pub(crate) fn rank_mismatch(expected: usize, got: usize) -> Self {
        ArrayError::RankMismatch { expected, got }
    }
}
