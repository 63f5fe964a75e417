//! Shape manipulation operations on arrays
//!
//! `view` and `unsqueeze` reinterpret the existing buffer under a new shape.
//! They transfer ownership instead of copying: the buffer moves into the
//! returned array and no new allocation is made.
//!
//! Each comes in two spellings:
//!
//! - `view(&mut self, ..)` / `unsqueeze(&mut self, ..)` validate first, then
//!   move the buffer out and leave the receiver in the empty state. On error
//!   the receiver is untouched.
//! - `into_view(self, ..)` / `into_unsqueeze(self, ..)` consume the receiver.

use smallvec::SmallVec;

use super::types::Array;
use crate::error::{ArrayError, Result};
use crate::types::{validate_shape, Shape, MAX_RANK};

impl Array {
    /// Check that `new_shape` can reinterpret this array's buffer.
    fn check_view(&self, new_shape: &[usize]) -> Result<()> {
        let numel = validate_shape(new_shape)?;
        if numel != self.numel() {
            return Err(ArrayError::SizeMismatch {
                expected: self.numel(),
                got: numel,
            });
        }
        Ok(())
    }

    /// Shape produced by inserting an axis of extent 1 at `dim`.
    fn unsqueezed_shape(&self, dim: usize) -> Result<Shape> {
        validate_shape(self.shape())?;
        let rank = self.dims();
        if dim > rank {
            return Err(ArrayError::IndexOutOfRange {
                index: dim,
                bound: rank + 1,
            });
        }
        let mut shape: Shape = SmallVec::from_slice(self.shape());
        shape.insert(dim, 1);
        if shape.len() > MAX_RANK {
            return Err(ArrayError::invalid_shape(&shape, "shape must have at most 3 axes"));
        }
        Ok(shape)
    }

    /// Reinterpret the buffer under `new_shape`, moving it out of `self`.
    ///
    /// On success `self` is left in the empty state. On failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidShape`] if `new_shape` is not a valid shape,
    /// [`ArrayError::SizeMismatch`] if its product differs from
    /// [`numel`](Self::numel).
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let mut flat = Array::arange(0, 12).unwrap();
    /// let grid = flat.view(&[3, 4]).unwrap();
    ///
    /// assert_eq!(grid.shape(), &[3, 4]);
    /// assert_eq!(grid[(2, 1)], 9.0);
    /// assert_eq!(flat.numel(), 0);
    /// ```
    pub fn view(&mut self, new_shape: &[usize]) -> Result<Array> {
        self.check_view(new_shape)?;
        log::debug!(
            "view {:?} -> {:?} ({} elements)",
            self.shape(),
            new_shape,
            self.numel()
        );
        Ok(self.take().rebind(new_shape))
    }

    /// Consuming form of [`view`](Self::view).
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let cube = Array::arange(0, 8).unwrap().into_view(&[2, 2, 2]).unwrap();
    /// assert_eq!(cube[(1, 1, 0)], 6.0);
    /// ```
    pub fn into_view(mut self, new_shape: &[usize]) -> Result<Array> {
        self.view(new_shape)
    }

    /// Insert an axis of extent 1 at position `dim` (`0 <= dim <= dims()`),
    /// moving the buffer out of `self`.
    ///
    /// On success `self` is left in the empty state. On failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// [`ArrayError::IndexOutOfRange`] if `dim > dims()`,
    /// [`ArrayError::InvalidShape`] if the result would have more than three
    /// axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let mut v = Array::from_slice(&[1.0, 2.0, 3.0], &[3]).unwrap();
    /// let row = v.unsqueeze(0).unwrap();
    /// assert_eq!(row.shape(), &[1, 3]);
    /// assert!(v.is_empty());
    ///
    /// let col = row.into_view(&[3]).unwrap().into_unsqueeze(1).unwrap();
    /// assert_eq!(col.shape(), &[3, 1]);
    /// assert_eq!(col.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn unsqueeze(&mut self, dim: usize) -> Result<Array> {
        let shape = self.unsqueezed_shape(dim)?;
        log::debug!("unsqueeze {:?} at {} -> {:?}", self.shape(), dim, shape);
        Ok(self.take().rebind(&shape))
    }

    /// Consuming form of [`unsqueeze`](Self::unsqueeze).
    pub fn into_unsqueeze(mut self, dim: usize) -> Result<Array> {
        self.unsqueeze(dim)
    }
}
