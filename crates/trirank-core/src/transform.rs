//! Scalar transforms consumed by [`Array::apply`](crate::Array::apply)
//!
//! A [`Transform`] is one pure `f64 -> f64` map. Closures and function
//! pointers implement it through a blanket impl, so `apply` takes either a
//! named transform such as [`Relu`] or an ad-hoc closure.
//!
//! # Examples
//!
//! ```
//! use trirank_core::transform::{Relu, Sigmoid, Transform};
//!
//! assert_eq!(Relu.apply(-2.0), 0.0);
//! assert_eq!(Relu.apply(3.5), 3.5);
//! assert_eq!(Sigmoid.apply(0.0), 0.5);
//!
//! let double = |x: f64| 2.0 * x;
//! assert_eq!(double.apply(4.0), 8.0);
//! ```

/// A pure map from one scalar to one scalar.
pub trait Transform {
    /// Map a single element.
    fn apply(&self, x: f64) -> f64;
}

impl<F> Transform for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Rectifier: negative values become zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relu;

impl Transform for Relu {
    fn apply(&self, x: f64) -> f64 {
        if x > 0.0 {
            x
        } else {
            0.0
        }
    }
}

/// Logistic sigmoid `1 / (1 + e^-x)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Transform for Sigmoid {
    fn apply(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}
