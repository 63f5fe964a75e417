//! Broadcast shape resolution and the shared elementwise kernels.

use smallvec::smallvec;

use super::types::Array;
use crate::error::{ArrayError, Result};
use crate::types::{validate_shape, Shape, Strides};

/// Resolve the output shape of a broadcasting binary operation.
///
/// Both shapes must have the same rank. Per axis the extents must be
/// equal or one of them must be 1; the output takes the larger extent.
pub(crate) fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Shape> {
    if lhs.len() != rhs.len() {
        return Err(ArrayError::rank_mismatch(lhs.len(), rhs.len()));
    }
    let mut out = Shape::with_capacity(lhs.len());
    for (axis, (&a, &b)) in lhs.iter().zip(rhs).enumerate() {
        let extent = if a == b || b == 1 {
            a
        } else if a == 1 {
            b
        } else {
            return Err(ArrayError::BroadcastIncompatible {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
                axis,
            });
        };
        out.push(extent);
    }
    validate_shape(&out)?;
    log::trace!("broadcast {:?} with {:?} -> {:?}", lhs, rhs, out);
    Ok(out)
}

/// Strides for reading `array` in the coordinate space of a broadcast
/// output: axes of extent 1 get stride 0, so every output index along them
/// maps to offset 0.
fn stretched_strides(array: &Array) -> Strides {
    array
        .shape()
        .iter()
        .zip(array.strides())
        .map(|(&extent, &stride)| if extent == 1 { 0 } else { stride })
        .collect()
}

/// Combine two arrays elementwise under the broadcasting rule.
pub(crate) fn zip_broadcast<F>(lhs: &Array, rhs: &Array, op: F) -> Result<Array>
where
    F: Fn(f64, f64) -> f64,
{
    let out_shape = broadcast_shape(lhs.shape(), rhs.shape())?;

    if lhs.shape() == rhs.shape() {
        let data = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        return Ok(Array::from_parts(&out_shape, data));
    }

    let lhs_strides = stretched_strides(lhs);
    let rhs_strides = stretched_strides(rhs);
    let rank = out_shape.len();
    let numel: usize = out_shape.iter().product();

    let mut index: Shape = smallvec![0; rank];
    let mut data = Vec::with_capacity(numel);
    for _ in 0..numel {
        let mut l = 0;
        let mut r = 0;
        for axis in 0..rank {
            l += index[axis] * lhs_strides[axis];
            r += index[axis] * rhs_strides[axis];
        }
        data.push(op(lhs.data[l], rhs.data[r]));

        for axis in (0..rank).rev() {
            index[axis] += 1;
            if index[axis] < out_shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }

    Ok(Array::from_parts(&out_shape, data))
}

/// Map every element, keeping shape and strides. Works on the empty state
/// too, which maps to the empty state.
pub(crate) fn map_elements<F>(array: &Array, f: F) -> Array
where
    F: Fn(f64) -> f64,
{
    Array {
        shape: array.shape.clone(),
        strides: array.strides.clone(),
        size: array.size,
        data: array.data.iter().map(|&x| f(x)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_same_shape() {
        assert_eq!(broadcast_shape(&[2, 3], &[2, 3]).unwrap().as_slice(), &[2, 3]);
    }

    #[test]
    fn test_broadcast_expand_ones() {
        assert_eq!(broadcast_shape(&[1, 4], &[3, 1]).unwrap().as_slice(), &[3, 4]);
        assert_eq!(
            broadcast_shape(&[2, 1, 4], &[1, 3, 1]).unwrap().as_slice(),
            &[2, 3, 4]
        );
    }

    #[test]
    fn test_broadcast_requires_equal_rank() {
        assert_eq!(
            broadcast_shape(&[3, 4], &[4]),
            Err(ArrayError::RankMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_broadcast_incompatible() {
        assert_eq!(
            broadcast_shape(&[2, 3], &[2, 4]),
            Err(ArrayError::BroadcastIncompatible {
                lhs: vec![2, 3],
                rhs: vec![2, 4],
                axis: 1
            })
        );
    }

    #[test]
    fn test_broadcast_of_empty_shapes_is_invalid() {
        assert!(matches!(
            broadcast_shape(&[], &[]),
            Err(ArrayError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_zip_broadcast_column_against_row() {
        let col = Array::from_vec(vec![1.0, 2.0, 3.0], &[3, 1]).unwrap();
        let row = Array::from_vec(vec![10.0, 20.0], &[1, 2]).unwrap();
        let out = zip_broadcast(&col, &row, |a, b| a + b).unwrap();
        assert_eq!(out.shape(), &[3, 2]);
        assert_eq!(out.as_slice(), &[11.0, 21.0, 12.0, 22.0, 13.0, 23.0]);
    }
}
