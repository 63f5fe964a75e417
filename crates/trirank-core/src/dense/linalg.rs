//! Vector and matrix products

use super::types::Array;
use crate::error::{ArrayError, Result};
use crate::types::validate_shape;

/// Inner product of two rank-1 arrays of equal length.
///
/// # Errors
///
/// [`ArrayError::RankMismatch`] if either operand is not rank 1,
/// [`ArrayError::SizeMismatch`] if the lengths differ.
///
/// # Examples
///
/// ```
/// use trirank_core::{dot, Array};
///
/// let a = Array::from_slice(&[1.0, 2.0, 3.0], &[3]).unwrap();
/// let b = Array::from_slice(&[4.0, 5.0, 6.0], &[3]).unwrap();
/// assert_eq!(dot(&a, &b).unwrap(), 32.0);
/// ```
pub fn dot(a: &Array, b: &Array) -> Result<f64> {
    for operand in [a, b] {
        if operand.dims() != 1 {
            return Err(ArrayError::rank_mismatch(1, operand.dims()));
        }
    }
    if a.numel() != b.numel() {
        return Err(ArrayError::SizeMismatch {
            expected: a.numel(),
            got: b.numel(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Matrix product of a `(m, k)` and a `(k, n)` array, giving `(m, n)`.
///
/// # Complexity
///
/// O(m·k·n)
///
/// # Errors
///
/// [`ArrayError::RankMismatch`] if either operand is not rank 2,
/// [`ArrayError::ShapeMismatch`] if the inner dimensions differ,
/// [`ArrayError::InvalidShape`] if `m * n` elements cannot be allocated.
///
/// # Examples
///
/// ```
/// use trirank_core::{matmul, Array};
///
/// let a = Array::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// let b = Array::from_slice(&[5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
///
/// let c = matmul(&a, &b).unwrap();
/// // [[1*5 + 2*7, 1*6 + 2*8],
/// //  [3*5 + 4*7, 3*6 + 4*8]]
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matmul(a: &Array, b: &Array) -> Result<Array> {
    for operand in [a, b] {
        if operand.dims() != 2 {
            return Err(ArrayError::rank_mismatch(2, operand.dims()));
        }
    }

    let (m, k) = (a.shape()[0], a.shape()[1]);
    let (k2, n) = (b.shape()[0], b.shape()[1]);
    if k != k2 {
        return Err(ArrayError::ShapeMismatch {
            expected: a.shape().to_vec(),
            got: b.shape().to_vec(),
            axis: 0,
        });
    }

    validate_shape(&[m, n])?;
    log::debug!("matmul ({}, {}) x ({}, {})", m, k, k2, n);

    // Row i of the output accumulates a[i, p] * row p of b.
    let mut data = vec![0.0; m * n];
    for i in 0..m {
        let out_row = &mut data[i * n..(i + 1) * n];
        for p in 0..k {
            let lhs = a.data[i * k + p];
            let rhs_row = &b.data[p * n..(p + 1) * n];
            for (out, &rhs) in out_row.iter_mut().zip(rhs_row) {
                *out += lhs * rhs;
            }
        }
    }

    Ok(Array::from_parts(&[m, n], data))
}

impl Array {
    /// Method form of [`dot`].
    pub fn dot(&self, other: &Array) -> Result<f64> {
        dot(self, other)
    }

    /// Method form of [`matmul`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let a = Array::ones(&[2, 3]).unwrap();
    /// let b = Array::ones(&[3, 4]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.shape(), &[2, 4]);
    /// assert!(c.iter().all(|&x| x == 3.0));
    /// ```
    pub fn matmul(&self, other: &Array) -> Result<Array> {
        matmul(self, other)
    }
}
