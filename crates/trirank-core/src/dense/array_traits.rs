//! # Array - Trait Implementations
//!
//! This module contains trait implementations for `Array`.
//!
//! ## Implemented Traits
//!
//! - `Index` / `IndexMut` for `usize`, `(usize, usize)`, `(usize, usize, usize)`
//! - `Add`, `Sub`, `Mul` between array references (broadcasting, fallible)
//! - `Mul<f64>` in both operand orders (scaling, infallible)
//! - `Debug`

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::indexing::ArrayIndex;
use super::types::Array;
use crate::error::Result;

impl<I: ArrayIndex> Index<I> for Array {
    type Output = f64;

    /// # Panics
    ///
    /// Panics with the error message where [`Array::at`] would fail.
    fn index(&self, index: I) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<I: ArrayIndex> IndexMut<I> for Array {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'b> Add<&'b Array> for &Array {
    type Output = Result<Array>;

    fn add(self, rhs: &'b Array) -> Self::Output {
        Array::add(self, rhs)
    }
}

impl<'b> Sub<&'b Array> for &Array {
    type Output = Result<Array>;

    fn sub(self, rhs: &'b Array) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'b> Mul<&'b Array> for &Array {
    type Output = Result<Array>;

    fn mul(self, rhs: &'b Array) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f64> for &Array {
    type Output = Array;

    fn mul(self, scalar: f64) -> Self::Output {
        self.scale(scalar)
    }
}

impl Mul<&Array> for f64 {
    type Output = Array;

    fn mul(self, array: &Array) -> Self::Output {
        array.scale(self)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, ArrayError};

    #[test]
    fn test_index_sugar() {
        let mut a = Array::zeros(&[2, 3]).unwrap();
        a[(1, 2)] = 7.0;
        assert_eq!(a[(1, 2)], 7.0);
        assert_eq!(a.as_slice()[5], 7.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let a = Array::zeros(&[2, 3]).unwrap();
        let _value: f64 = a[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "Rank mismatch")]
    fn test_index_wrong_arity_panics() {
        let a = Array::zeros(&[2, 3]).unwrap();
        let _value: f64 = a[1];
    }

    #[test]
    fn test_operators() {
        let a = Array::from_vec(vec![1.0, 2.0, 3.0], &[1, 3]).unwrap();
        let b = Array::from_vec(vec![10.0, 20.0], &[2, 1]).unwrap();

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.as_slice(), &[11.0, 12.0, 13.0, 21.0, 22.0, 23.0]);

        let diff = (&b - &a).unwrap();
        assert_eq!(diff.as_slice(), &[9.0, 8.0, 7.0, 19.0, 18.0, 17.0]);

        let prod = (&a * &b).unwrap();
        assert_eq!(prod.as_slice(), &[10.0, 20.0, 30.0, 20.0, 40.0, 60.0]);

        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((3.0 * &a).as_slice(), &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_operator_errors_propagate() {
        let a = Array::ones(&[2, 2]).unwrap();
        let b = Array::ones(&[3, 2]).unwrap();
        assert!(matches!(
            &a + &b,
            Err(ArrayError::BroadcastIncompatible { .. })
        ));
    }

    #[test]
    fn test_debug_lists_layout() {
        let a = Array::ones(&[2]).unwrap();
        assert_eq!(
            format!("{a:?}"),
            "Array { shape: [2], strides: [1], data: [1.0, 1.0] }"
        );
    }
}
