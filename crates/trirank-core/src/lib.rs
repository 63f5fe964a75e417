//! # trirank-core
//!
//! Dense row-major `f64` arrays of rank 1, 2 and 3.
//!
//! This crate provides a single array type and the operations built on it:
//!
//! - **Dense array representation** ([`Array`]) with shape and row-major strides
//! - **Validated construction** from owned or borrowed values
//! - **Factories** (`zeros`, `ones`, `full`, `random`, `arange`)
//! - **Broadcasting arithmetic** (`add`, `subtract`, `multiply`) and scaling
//! - **Elementwise transforms** through the [`Transform`](transform::Transform) trait
//! - **Ownership-transferring reshape** (`view`, `unsqueeze`) and `concat`
//! - **Products** ([`dot`], [`matmul`])
//!
//! ## Core Principles
//!
//! ### Exclusive ownership
//!
//! Every array owns its buffer. `Clone` is a deep copy. [`Array::take`],
//! [`Array::view`] and [`Array::unsqueeze`] hand the buffer to a new array and
//! leave the source in the empty state, so a buffer never has two owners.
//!
//! ### Memory Layout
//!
//! Data is always contiguous and row-major. Strides are derived from the shape
//! and are never set independently.
//!
//! ### Safety
//!
//! All indexing is bounds-checked. No unsafe code.
//!
//! ## Quick Start
//!
//! ```
//! use trirank_core::Array;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let a = Array::from_slice(&values, &[2, 3]).unwrap();
//!
//! assert_eq!(a.shape(), &[2, 3]);
//! assert_eq!(a.strides(), &[3, 1]);
//! assert_eq!(a.dims(), 2);
//! assert_eq!(a[(1, 2)], 6.0);
//! ```
//!
//! ## Creating Arrays
//!
//! ```
//! use trirank_core::Array;
//!
//! let zeros = Array::zeros(&[2, 3]).unwrap();
//! let ones = Array::ones(&[4]).unwrap();
//! let sevens = Array::full(&[2, 2, 2], 7.0).unwrap();
//!
//! // Half-open integer range as a rank-1 array
//! let range = Array::arange(5, 10).unwrap();
//! assert_eq!(range.as_slice(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
//!
//! // Uniform samples in [min, max)
//! let noise = Array::random(&[3, 3], -2.0, 3.0).unwrap();
//! assert!(noise.iter().all(|&x| (-2.0..3.0).contains(&x)));
//! # let _ = (zeros, ones, sevens);
//! ```
//!
//! ## Broadcasting
//!
//! Operands must have the same rank. On each axis the extents must match or
//! one of them must be 1, in which case that operand is stretched.
//!
//! ```
//! use trirank_core::Array;
//!
//! let grid = Array::ones(&[2, 3]).unwrap();
//! let row = Array::from_slice(&[10.0, 20.0, 30.0], &[1, 3]).unwrap();
//!
//! let sum = (&grid + &row).unwrap();
//! assert_eq!(sum.as_slice(), &[11.0, 21.0, 31.0, 11.0, 21.0, 31.0]);
//! ```
//!
//! ## Views
//!
//! ```
//! use trirank_core::Array;
//!
//! let mut flat = Array::arange(0, 12).unwrap();
//! let grid = flat.view(&[3, 4]).unwrap();
//!
//! assert_eq!(grid[(2, 3)], 11.0);
//! assert!(flat.is_empty());
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`](Result) with an [`ArrayError`]
//! naming the failure kind:
//!
//! ```
//! use trirank_core::{Array, ArrayError};
//!
//! let err = Array::zeros(&[2, 0]).unwrap_err();
//! assert!(matches!(err, ArrayError::InvalidShape { .. }));
//!
//! let a = Array::ones(&[2, 3]).unwrap();
//! let b = Array::ones(&[3, 3]).unwrap();
//! assert!(matches!(a.add(&b), Err(ArrayError::BroadcastIncompatible { .. })));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of [`Array`] and
//!   [`PrintOptions`]

#![forbid(unsafe_code)]

pub mod dense;
pub mod error;
pub mod ops;
pub mod transform;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dense::{dot, matmul, Array, ArrayIndex, PrintOptions};
pub use error::{ArrayError, Result};
pub use transform::{Relu, Sigmoid, Transform};
pub use types::{Axis, Rank, Shape, Strides, MAX_NUMEL, MAX_RANK};
