//! Dense array implementation and operations
//!
//! This module provides the [`Array`] type organized into functional
//! sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod combining;
mod creation;
mod display;
mod elementwise;
mod indexing;
mod linalg;
mod shape_ops;

// Supporting modules
mod array_traits;
pub(crate) mod functions;
#[cfg(feature = "serde")]
mod serde_repr;

pub use display::PrintOptions;
pub use indexing::ArrayIndex;
pub use linalg::{dot, matmul};
pub use types::Array;
