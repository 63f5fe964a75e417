//! Array operations: broadcasting arithmetic, transforms, reshape, products.
//!
//! This module documents the operations available in trirank-core.
//! All operations are implemented as methods on [`Array`](crate::dense::Array),
//! with [`dot`](crate::dense::dot) and [`matmul`](crate::dense::matmul) also
//! available as free functions.
//!
//! # Available Operations
//!
//! ## Arithmetic
//!
//! - **Add / Subtract / Multiply:** [`Array::add`](crate::dense::Array::add),
//!   [`Array::subtract`](crate::dense::Array::subtract),
//!   [`Array::multiply`](crate::dense::Array::multiply)
//!   - Element-wise with broadcasting over equal-rank operands
//!   - Also available as `&a + &b`, `&a - &b`, `&a * &b`
//!   - Example: `[2, 3]` + `[1, 3]` → `[2, 3]`
//!
//! - **Scale:** [`Array::scale`](crate::dense::Array::scale)
//!   - Multiply every element by a scalar, also `&a * k` and `k * &a`
//!
//! - **Apply:** [`Array::apply`](crate::dense::Array::apply)
//!   - Map a [`Transform`](crate::transform::Transform) over every element
//!
//! ## Shape Manipulation
//!
//! - **View:** [`Array::view`](crate::dense::Array::view)
//!   - Reinterpret the buffer under a new shape with the same element count
//!   - Moves the buffer, leaving the source empty
//!   - Example: `[12]` → `[3, 4]`
//!
//! - **Unsqueeze:** [`Array::unsqueeze`](crate::dense::Array::unsqueeze)
//!   - Insert an axis of extent 1
//!   - Example: `[3]` at 1 → `[3, 1]`
//!
//! - **Concat:** [`Array::concat`](crate::dense::Array::concat)
//!   - Join arrays along an existing axis, copying into a new buffer
//!   - Example: two `[2, 3]` along axis 1 → `[2, 6]`
//!
//! ## Products
//!
//! - **Dot:** [`dot`](crate::dense::dot) - inner product of two rank-1 arrays
//! - **Matmul:** [`matmul`](crate::dense::matmul) - `(m, k) x (k, n)` → `(m, n)`
//!
//! # Examples
//!
//! ## Broadcasting a Column
//!
//! ```
//! use trirank_core::Array;
//!
//! let grid = Array::arange(0, 6).unwrap().into_view(&[2, 3]).unwrap();
//! let col = Array::from_slice(&[100.0, 200.0], &[2, 1]).unwrap();
//!
//! let shifted = (&grid + &col).unwrap();
//! assert_eq!(shifted.as_slice(), &[100.0, 101.0, 102.0, 203.0, 204.0, 205.0]);
//! ```
//!
//! ## Transforms
//!
//! ```
//! use trirank_core::{Array, Relu};
//!
//! let a = Array::from_slice(&[-1.0, 0.5, 2.0], &[3]).unwrap();
//! assert_eq!(a.apply(&Relu).as_slice(), &[0.0, 0.5, 2.0]);
//!
//! // Any `Fn(f64) -> f64` is a transform
//! let squared = a.apply(&|x: f64| x * x);
//! assert_eq!(squared.as_slice(), &[1.0, 0.25, 4.0]);
//! ```
//!
//! ## Unsqueeze then Broadcast
//!
//! ```
//! use trirank_core::Array;
//!
//! let v = Array::from_slice(&[1.0, 2.0, 3.0], &[3]).unwrap();
//! let row = v.clone().into_unsqueeze(0).unwrap(); // [1, 3]
//! let col = v.into_unsqueeze(1).unwrap(); // [3, 1]
//!
//! let outer = (&col * &row).unwrap();
//! assert_eq!(outer.shape(), &[3, 3]);
//! assert_eq!(outer[(2, 1)], 6.0);
//! ```
//!
//! # Performance Notes
//!
//! - **View / Unsqueeze:** O(1), no copy
//! - **Arithmetic / Apply / Concat:** O(n) in the output size
//! - **Matmul:** O(m·k·n)
