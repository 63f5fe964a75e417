//! Array type definition and basic operations
//!
//! This module defines the core [`Array`] type and provides basic creation,
//! accessor and ownership methods. Additional operations are organized in
//! separate modules.

use crate::error::{ArrayError, Result};
use crate::types::{row_major_strides, validate_shape, Shape, Strides};

/// Dense row-major array of `f64` with rank 1, 2 or 3
///
/// An `Array` exclusively owns a contiguous buffer of `numel()` values
/// plus its shape and the row-major strides derived from that shape.
///
/// # Empty state
///
/// [`Array::default`] and every array left behind by [`take`](Array::take),
/// [`view`](Array::view) or [`unsqueeze`](Array::unsqueeze) is the empty
/// sentinel: no shape, no strides, no buffer. It reports `dims() == 0` and
/// `numel() == 0`, and element access on it fails with
/// [`ArrayError::RankMismatch`].
///
/// # Examples
///
/// ```
/// use trirank_core::Array;
///
/// let array = Array::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(array.shape(), &[2, 3]);
/// assert_eq!(array.strides(), &[3, 1]);
/// assert_eq!(array.dims(), 2);
/// assert_eq!(array.numel(), 6);
/// ```
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "super::serde_repr::ArrayRepr", into = "super::serde_repr::ArrayRepr")
)]
pub struct Array {
    pub(crate) shape: Shape,
    pub(crate) strides: Strides,
    pub(crate) size: usize,
    pub(crate) data: Vec<f64>,
}

impl Array {
    /// Build an array over `data` without copying. The caller guarantees
    /// that `shape` is valid and matches `data.len()`.
    pub(crate) fn from_parts(shape: &[usize], data: Vec<f64>) -> Self {
        debug_assert_eq!(validate_shape(shape), Ok(data.len()));
        Self {
            shape: shape.into(),
            strides: row_major_strides(shape),
            size: data.len(),
            data,
        }
    }

    /// Create an array from a vector with the given shape, taking ownership
    /// of the vector as the buffer.
    ///
    /// # Arguments
    ///
    /// * `values` - Flattened data in row-major order
    /// * `shape` - Target shape (1 to 3 positive extents)
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidShape`] if the shape is not valid,
    /// [`ArrayError::SizeMismatch`] if `values.len()` differs from the
    /// product of the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(array[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(values: Vec<f64>, shape: &[usize]) -> Result<Self> {
        let expected = validate_shape(shape)?;
        if values.len() != expected {
            return Err(ArrayError::SizeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self::from_parts(shape, values))
    }

    /// Create an array by copying `values` into a freshly owned buffer.
    ///
    /// Validation is identical to [`from_vec`](Self::from_vec) and happens
    /// before anything is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::{Array, ArrayError};
    ///
    /// let values = [1.0, 2.0, 3.0];
    /// let array = Array::from_slice(&values, &[3]).unwrap();
    /// assert_eq!(array.as_slice(), &values);
    ///
    /// let err = Array::from_slice(&values, &[]).unwrap_err();
    /// assert!(matches!(err, ArrayError::InvalidShape { .. }));
    /// ```
    pub fn from_slice(values: &[f64], shape: &[usize]) -> Result<Self> {
        let expected = validate_shape(shape)?;
        if values.len() != expected {
            return Err(ArrayError::SizeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self::from_parts(shape, values.to_vec()))
    }

    /// Number of axes (0 for the empty state).
    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    /// Alias of [`dims`](Self::dims).
    pub fn rank(&self) -> usize {
        self.dims()
    }

    /// Total number of elements (0 for the empty state).
    pub fn numel(&self) -> usize {
        self.size
    }

    /// Alias of [`numel`](Self::numel).
    pub fn len(&self) -> usize {
        self.size
    }

    /// True only for the empty (moved-from) state; a valid array always
    /// holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Per-axis extents.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major strides, one per axis.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The buffer in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the buffer in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the array and return its buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Move the contents out, leaving `self` in the empty state.
    ///
    /// The buffer is transferred, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let mut a = Array::arange(0, 4).unwrap();
    /// let ptr = a.as_slice().as_ptr();
    ///
    /// let b = a.take();
    /// assert_eq!(a.numel(), 0);
    /// assert_eq!(a.dims(), 0);
    /// assert_eq!(b.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(b.as_slice().as_ptr(), ptr);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Reinterpret the buffer under `shape` without copying. `shape` must
    /// already be validated against `self.size`.
    pub(crate) fn rebind(self, shape: &[usize]) -> Self {
        Self::from_parts(shape, self.data)
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
