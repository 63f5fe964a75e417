//! # trirank - Dense Arrays of Rank 1 to 3
//!
//! Row-major `f64` arrays with validated construction, broadcasting
//! arithmetic, ownership-transferring reshapes and matrix products.
//!
//! This is the **meta crate** that re-exports the trirank components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use trirank::prelude::*;
//!
//! let a = Array::arange(0, 6)?.into_view(&[2, 3])?;
//! let row = Array::from_slice(&[10.0, 20.0, 30.0], &[1, 3])?;
//!
//! let sum = (&a + &row)?;
//! assert_eq!(sum.as_slice(), &[10.0, 21.0, 32.0, 13.0, 24.0, 35.0]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Array Operations ([`core`])
//!
//! The [`Array`](core::Array) type, its factories, broadcasting arithmetic,
//! transforms, `view`/`unsqueeze`/`concat`, and `dot`/`matmul`.
//!
//! ```
//! use trirank::core::{matmul, Array};
//!
//! let a = Array::ones(&[2, 3])?;
//! let b = Array::ones(&[3, 4])?;
//! let c = matmul(&a, &b)?;
//! assert_eq!(c.shape(), &[2, 4]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support

#![forbid(unsafe_code)]

// Re-export all components
pub use trirank_core as core;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use trirank::prelude::*;
    //!
    //! let a = Array::zeros(&[10, 20, 3]).unwrap();
    //! let b = a.apply(&Sigmoid);
    //! assert!(b.iter().all(|&x| x == 0.5));
    //! ```

    // Core types
    pub use crate::core::{Array, ArrayError, ArrayIndex, PrintOptions};

    // Products
    pub use crate::core::{dot, matmul};

    // Transforms
    pub use crate::core::{Relu, Sigmoid, Transform};
}
