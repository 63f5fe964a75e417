//! Array concatenation
//!
//! Unlike `view` and `unsqueeze`, concatenation copies: inputs are borrowed
//! and stay untouched, and the result owns a freshly allocated buffer.

use smallvec::SmallVec;

use super::types::Array;
use crate::error::{ArrayError, Result};
use crate::types::{validate_shape, Shape, MAX_RANK};

impl Array {
    /// Concatenate arrays along an existing axis.
    ///
    /// All arrays must have the same rank and the same extents on every axis
    /// except `dim`. The result has the sum of the inputs' extents on `dim`.
    /// `arrays` is anything yielding `&Array`: a slice or `Vec` of arrays, or
    /// an array of references.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the total number of elements across all inputs
    ///
    /// # Errors
    ///
    /// - [`ArrayError::EmptyInput`] if `arrays` is empty
    /// - [`ArrayError::RankMismatch`] if the ranks differ or are outside 1 to 3
    /// - [`ArrayError::IndexOutOfRange`] if `dim` is not below the rank
    /// - [`ArrayError::ShapeMismatch`] if another axis differs
    /// - [`ArrayError::InvalidShape`] if the joined extent is too large
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let a = Array::ones(&[2, 3]).unwrap();
    /// let b = Array::zeros(&[2, 3]).unwrap();
    ///
    /// let rows = Array::concat([&a, &b], 0).unwrap();
    /// assert_eq!(rows.shape(), &[4, 3]);
    ///
    /// let cols = Array::concat([&a, &b], 1).unwrap();
    /// assert_eq!(cols.shape(), &[2, 6]);
    /// assert_eq!(cols.as_slice(), &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn concat<'a, I>(arrays: I, dim: usize) -> Result<Array>
    where
        I: IntoIterator<Item = &'a Array>,
    {
        let arrays: Vec<&Array> = arrays.into_iter().collect();
        let first = arrays.first().ok_or(ArrayError::EmptyInput)?;

        let rank = first.dims();
        if rank == 0 || rank > MAX_RANK {
            return Err(ArrayError::rank_mismatch(1, rank));
        }
        if let Some(other) = arrays.iter().find(|a| a.dims() != rank) {
            return Err(ArrayError::rank_mismatch(rank, other.dims()));
        }
        if dim >= rank {
            return Err(ArrayError::IndexOutOfRange {
                index: dim,
                bound: rank,
            });
        }

        let reference = first.shape();
        for array in &arrays[1..] {
            let mismatch =
                (0..rank).find(|&axis| axis != dim && array.shape()[axis] != reference[axis]);
            if let Some(axis) = mismatch {
                return Err(ArrayError::ShapeMismatch {
                    expected: reference.to_vec(),
                    got: array.shape().to_vec(),
                    axis,
                });
            }
        }

        let mut out_shape: Shape = SmallVec::from_slice(reference);
        out_shape[dim] = arrays
            .iter()
            .try_fold(0usize, |acc, a| acc.checked_add(a.shape()[dim]))
            .unwrap_or(usize::MAX);
        let numel = validate_shape(&out_shape)?;

        // In row-major order each input contributes one contiguous run of
        // `shape[dim] * inner` elements per outer index.
        let outer: usize = reference[..dim].iter().product();
        let inner: usize = reference[dim + 1..].iter().product();

        let mut data = Vec::with_capacity(numel);
        for o in 0..outer {
            for array in &arrays {
                let run = array.shape()[dim] * inner;
                data.extend_from_slice(&array.data[o * run..(o + 1) * run]);
            }
        }

        log::debug!(
            "concat {} arrays along axis {} -> {:?}",
            arrays.len(),
            dim,
            out_shape
        );
        Ok(Array::from_parts(&out_shape, data))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, ArrayError};

    fn seq(start: i64, shape: &[usize]) -> Array {
        let n: usize = shape.iter().product();
        Array::arange(start, start + n as i64)
            .unwrap()
            .into_view(shape)
            .unwrap()
    }

    #[test]
    fn test_concat_rows_keeps_order() {
        let a = seq(0, &[2, 3]);
        let b = seq(10, &[2, 3]);
        let c = Array::concat([&a, &b], 0).unwrap();
        assert_eq!(c.shape(), &[4, 3]);
        assert_eq!(
            c.as_slice(),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0]
        );
        // inputs are untouched
        assert_eq!(a, seq(0, &[2, 3]));
        assert_eq!(b, seq(10, &[2, 3]));
    }

    #[test]
    fn test_concat_columns_interleaves_rows() {
        let a = seq(0, &[2, 3]);
        let b = seq(10, &[2, 3]);
        let c = Array::concat(&[a, b], 1).unwrap();
        assert_eq!(c.shape(), &[2, 6]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(c[(i, j)], (3 * i + j) as f64);
                assert_eq!(c[(i, j + 3)], (10 + 3 * i + j) as f64);
            }
        }
    }

    #[test]
    fn test_concat_uneven_extents_rank3() {
        let a = seq(0, &[2, 1, 2]);
        let b = seq(100, &[2, 2, 2]);
        let c = Array::concat(&[a, b], 1).unwrap();
        assert_eq!(c.shape(), &[2, 3, 2]);
        assert_eq!(
            c.as_slice(),
            &[0.0, 1.0, 100.0, 101.0, 102.0, 103.0, 2.0, 3.0, 104.0, 105.0, 106.0, 107.0]
        );
    }

    #[test]
    fn test_concat_accepts_owned_slices() {
        let parts = vec![seq(0, &[1, 2]), seq(2, &[1, 2]), seq(4, &[1, 2])];
        let c = Array::concat(&parts, 0).unwrap();
        assert_eq!(c, seq(0, &[3, 2]));
        assert_eq!(parts[1], seq(2, &[1, 2]));
    }

    #[test]
    fn test_concat_single_input_is_copy() {
        let a = seq(0, &[4]);
        let c = Array::concat(std::slice::from_ref(&a), 0).unwrap();
        assert_eq!(c, a);
        assert_ne!(c.as_slice().as_ptr(), a.as_slice().as_ptr());
    }

    #[test]
    fn test_concat_errors() {
        assert_eq!(
            Array::concat(Vec::<&Array>::new(), 0),
            Err(ArrayError::EmptyInput)
        );

        let a = Array::ones(&[2, 3]).unwrap();
        let v = Array::ones(&[3]).unwrap();
        assert_eq!(
            Array::concat([&a, &v], 0),
            Err(ArrayError::RankMismatch {
                expected: 2,
                got: 1
            })
        );

        assert_eq!(
            Array::concat([&a, &a], 2),
            Err(ArrayError::IndexOutOfRange { index: 2, bound: 2 })
        );

        let wide = Array::ones(&[2, 4]).unwrap();
        assert_eq!(
            Array::concat([&a, &wide], 0),
            Err(ArrayError::ShapeMismatch {
                expected: vec![2, 3],
                got: vec![2, 4],
                axis: 1
            })
        );

        assert!(matches!(
            Array::concat(&[Array::default()], 0),
            Err(ArrayError::RankMismatch { got: 0, .. })
        ));
    }
}
