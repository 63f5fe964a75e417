//! Element-wise arithmetic and transforms
//!
//! This module provides the broadcasting binary operations (`add`,
//! `subtract`, `multiply`), scalar scaling, and [`Array::apply`] for
//! arbitrary scalar transforms. Every operation returns a new array and
//! leaves its operands untouched.
//!
//! # Broadcasting
//!
//! Operands must have the same rank. On each axis the extents must be
//! equal, or one of them must be 1, in which case that operand is stretched
//! along the axis. The output takes the larger extent on every axis.

use super::functions::{map_elements, zip_broadcast};
use super::types::Array;
use crate::error::Result;
use crate::transform::Transform;

impl Array {
    /// Element-wise sum with broadcasting.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RankMismatch`](crate::ArrayError::RankMismatch) if the
    /// ranks differ,
    /// [`ArrayError::BroadcastIncompatible`](crate::ArrayError::BroadcastIncompatible)
    /// if an axis pair is unequal with neither extent 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let ones = Array::ones(&[2, 3]).unwrap();
    /// let row = Array::from_slice(&[10.0, 20.0, 30.0], &[1, 3]).unwrap();
    ///
    /// let sum = ones.add(&row).unwrap();
    /// assert_eq!(sum.shape(), &[2, 3]);
    /// assert_eq!(sum.as_slice(), &[11.0, 21.0, 31.0, 11.0, 21.0, 31.0]);
    /// ```
    pub fn add(&self, other: &Array) -> Result<Array> {
        zip_broadcast(self, other, |a, b| a + b)
    }

    /// Element-wise difference with broadcasting.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let a = Array::from_slice(&[5.0, 7.0, 9.0, 11.0], &[2, 2]).unwrap();
    /// let col = Array::from_slice(&[1.0, 2.0], &[2, 1]).unwrap();
    /// let diff = a.subtract(&col).unwrap();
    /// assert_eq!(diff.as_slice(), &[4.0, 6.0, 7.0, 9.0]);
    /// ```
    pub fn subtract(&self, other: &Array) -> Result<Array> {
        zip_broadcast(self, other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product with broadcasting.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let a = Array::full(&[2, 3], 2.0).unwrap();
    /// let b = Array::full(&[2, 3], 3.0).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert!(c.iter().all(|&x| x == 6.0));
    /// ```
    pub fn multiply(&self, other: &Array) -> Result<Array> {
        zip_broadcast(self, other, |a, b| a * b)
    }

    /// Multiply every element by `scalar`. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let a = Array::arange(1, 4).unwrap();
    /// assert_eq!(a.scale(0.5).as_slice(), &[0.5, 1.0, 1.5]);
    /// ```
    pub fn scale(&self, scalar: f64) -> Array {
        map_elements(self, |x| x * scalar)
    }

    /// Replace every element with `transform(element)`, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::transform::{Relu, Sigmoid};
    /// use trirank_core::Array;
    ///
    /// let a = Array::from_slice(&[-1.0, 0.0, 2.0], &[3]).unwrap();
    /// assert_eq!(a.apply(&Relu).as_slice(), &[0.0, 0.0, 2.0]);
    /// assert_eq!(a.apply(&Sigmoid)[1], 0.5);
    /// assert_eq!(a.apply(&|x: f64| x * x).as_slice(), &[1.0, 0.0, 4.0]);
    /// ```
    pub fn apply<T>(&self, transform: &T) -> Array
    where
        T: Transform + ?Sized,
    {
        map_elements(self, |x| transform.apply(x))
    }
}
