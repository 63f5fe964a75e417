//! Element access
//!
//! Arrays are indexed with `usize` (rank 1), `(usize, usize)` (rank 2) or
//! `(usize, usize, usize)` (rank 3). There is no N-ary form: the accepted
//! index types are exactly the supported ranks.

use super::types::Array;
use crate::error::Result;
use crate::types::offset_of;

mod sealed {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for (usize, usize) {}
    impl Sealed for (usize, usize, usize) {}
}

/// Index types accepted by [`Array::at`] and [`Array::at_mut`].
///
/// This trait is sealed; it is implemented for `usize`, `(usize, usize)` and
/// `(usize, usize, usize)` only.
pub trait ArrayIndex: sealed::Sealed + Copy {
    /// Compute the flat offset of this index in `array`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::RankMismatch`](crate::ArrayError::RankMismatch) if the
    /// number of components differs from the array rank,
    /// [`ArrayError::IndexOutOfRange`](crate::ArrayError::IndexOutOfRange)
    /// if a component is not below its axis extent.
    fn offset(self, array: &Array) -> Result<usize>;
}

impl ArrayIndex for usize {
    fn offset(self, array: &Array) -> Result<usize> {
        offset_of(array.shape(), array.strides(), &[self])
    }
}

impl ArrayIndex for (usize, usize) {
    fn offset(self, array: &Array) -> Result<usize> {
        offset_of(array.shape(), array.strides(), &[self.0, self.1])
    }
}

impl ArrayIndex for (usize, usize, usize) {
    fn offset(self, array: &Array) -> Result<usize> {
        offset_of(array.shape(), array.strides(), &[self.0, self.1, self.2])
    }
}

impl Array {
    /// Get a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with `RankMismatch` when the index arity differs from
    /// [`dims`](Self::dims) and with `IndexOutOfRange` when a component is
    /// out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::{Array, ArrayError};
    ///
    /// let array = Array::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(*array.at((1, 2)).unwrap(), 6.0);
    /// assert!(matches!(array.at(1), Err(ArrayError::RankMismatch { .. })));
    /// assert!(matches!(array.at((2, 0)), Err(ArrayError::IndexOutOfRange { .. })));
    /// ```
    pub fn at<I: ArrayIndex>(&self, index: I) -> Result<&f64> {
        let offset = index.offset(self)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let mut array = Array::zeros(&[2, 2, 2]).unwrap();
    /// *array.at_mut((1, 0, 1)).unwrap() = 99.0;
    /// assert_eq!(array.as_slice()[5], 99.0);
    /// ```
    pub fn at_mut<I: ArrayIndex>(&mut self, index: I) -> Result<&mut f64> {
        let offset = index.offset(self)?;
        Ok(&mut self.data[offset])
    }
}
