//! Core layout types for trirank arrays.
//!
//! This module defines the shape and stride containers and the helpers that
//! tie them together:
//!
//! - Type aliases for dimensions ([`Axis`], [`Rank`], [`Shape`], [`Strides`])
//! - Shape validation against the rank limit ([`validate_shape`])
//! - Row-major stride derivation ([`row_major_strides`])
//! - Flat offset computation from a multi-index ([`offset_of`])
//!
//! # Examples
//!
//! ```
//! use trirank_core::types::{row_major_strides, validate_shape};
//!
//! let numel = validate_shape(&[2, 3, 4]).unwrap();
//! assert_eq!(numel, 24);
//! assert_eq!(row_major_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
//! ```

use smallvec::SmallVec;

use crate::error::{ArrayError, Result};

/// Zero-based axis position.
pub type Axis = usize;

/// Number of axes of an array.
pub type Rank = usize;

/// Largest supported rank.
pub const MAX_RANK: Rank = 3;

/// Per-axis extents, stored inline for every supported rank.
///
/// # Examples
///
/// ```
/// use trirank_core::{Array, Shape};
///
/// let array = Array::zeros(&[2, 3]).unwrap();
/// let shape: Shape = array.shape().into();
/// assert_eq!(&shape[..], &[2, 3]);
/// ```
pub type Shape = SmallVec<[usize; MAX_RANK]>;

/// Per-axis element step in flat storage.
pub type Strides = SmallVec<[usize; MAX_RANK]>;

/// Largest element count whose `f64` buffer can be allocated.
pub const MAX_NUMEL: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Check that `shape` has 1 to [`MAX_RANK`] axes, all positive, and return
/// its element count.
///
/// # Errors
///
/// Returns [`ArrayError::InvalidShape`] if the shape is empty, too long,
/// contains a zero extent, or its product exceeds [`MAX_NUMEL`].
pub fn validate_shape(shape: &[usize]) -> Result<usize> {
    if shape.is_empty() {
        return Err(ArrayError::invalid_shape(shape, "shape must have at least one axis"));
    }
    if shape.len() > MAX_RANK {
        return Err(ArrayError::invalid_shape(shape, "shape must have at most 3 axes"));
    }
    if shape.contains(&0) {
        return Err(ArrayError::invalid_shape(shape, "axis extents must be positive"));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&numel| numel <= MAX_NUMEL)
        .ok_or_else(|| ArrayError::invalid_shape(shape, "element count overflows usize"))
}

/// Row-major strides: the last axis has stride 1 and each earlier axis
/// steps over the whole extent of the axes after it.
pub fn row_major_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::from_elem(1, shape.len());
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Flat offset of `index` under `shape`/`strides`, bounds-checked per axis.
///
/// # Errors
///
/// [`ArrayError::RankMismatch`] if `index` has a different length than
/// `shape`, [`ArrayError::IndexOutOfRange`] for the first index that is not
/// below its axis extent.
pub fn offset_of(shape: &[usize], strides: &[usize], index: &[usize]) -> Result<usize> {
    if index.len() != shape.len() {
        return Err(ArrayError::rank_mismatch(shape.len(), index.len()));
    }
    let mut offset = 0;
    for ((&i, &bound), &stride) in index.iter().zip(shape).zip(strides) {
        if i >= bound {
            return Err(ArrayError::IndexOutOfRange { index: i, bound });
        }
        offset += i * stride;
    }
    Ok(offset)
}
