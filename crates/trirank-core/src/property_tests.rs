//! Property-based tests for array operations
//!
//! This module uses proptest to verify layout, ownership and broadcasting
//! properties across a wide range of randomly generated inputs.

#[cfg(test)]
mod tests {
    use crate::{Array, ArrayError};
    use proptest::prelude::*;

    // Valid shapes: rank 1 to 3, small positive extents
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=3)
    }

    // A shape together with a matching row-major buffer
    fn array_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<f64>)> {
        shape_strategy().prop_flat_map(|shape| {
            let n: usize = shape.iter().product();
            (Just(shape), prop::collection::vec(-100.0f64..100.0, n))
        })
    }

    // Every multi-index of `shape` in row-major order
    fn row_major_indices(shape: &[usize]) -> Vec<Vec<usize>> {
        let mut out = vec![vec![]];
        for &extent in shape {
            out = out
                .into_iter()
                .flat_map(|prefix| {
                    (0..extent).map(move |i| {
                        let mut next = prefix.clone();
                        next.push(i);
                        next
                    })
                })
                .collect();
        }
        out
    }

    fn read(array: &Array, index: &[usize]) -> f64 {
        match *index {
            [i] => array[i],
            [i, j] => array[(i, j)],
            [i, j, k] => array[(i, j, k)],
            _ => unreachable!("rank is at most 3"),
        }
    }

    fn write(array: &mut Array, index: &[usize], value: f64) {
        match *index {
            [i] => array[i] = value,
            [i, j] => array[(i, j)] = value,
            [i, j, k] => array[(i, j, k)] = value,
            _ => unreachable!("rank is at most 3"),
        }
    }

    #[test]
    fn test_proptest_smoke() {
        let array = Array::zeros(&[2, 3]).unwrap();
        assert_eq!(array.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_numel_and_dims_follow_shape((shape, values) in array_strategy()) {
            let array = Array::from_vec(values, &shape).unwrap();
            prop_assert_eq!(array.numel(), shape.iter().product::<usize>());
            prop_assert_eq!(array.dims(), shape.len());
        }

        #[test]
        fn prop_row_major_round_trip((shape, values) in array_strategy()) {
            let array = Array::from_slice(&values, &shape).unwrap();
            let read_back: Vec<f64> = row_major_indices(&shape)
                .iter()
                .map(|index| read(&array, index))
                .collect();
            prop_assert_eq!(read_back, values);
        }

        #[test]
        fn prop_clone_is_independent(
            (shape, values) in array_strategy(),
            pick in any::<prop::sample::Index>()
        ) {
            let mut a = Array::from_vec(values, &shape).unwrap();
            let mut b = a.clone();
            let indices = row_major_indices(&shape);
            let index = pick.get(&indices);

            let before = read(&b, index);
            write(&mut a, index, before + 1.0);
            prop_assert_eq!(read(&b, index), before);

            write(&mut b, index, before - 1.0);
            prop_assert_eq!(read(&a, index), before + 1.0);
        }

        #[test]
        fn prop_take_leaves_source_empty((shape, values) in array_strategy()) {
            let mut a = Array::from_vec(values.clone(), &shape).unwrap();
            let b = a.take();
            prop_assert_eq!(a.numel(), 0);
            prop_assert_eq!(a.dims(), 0);
            prop_assert_eq!(b.shape(), shape.as_slice());
            prop_assert_eq!(b.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_broadcast_matches_explicit_loop(
            (shape, values) in array_strategy(),
            mask in prop::collection::vec(any::<bool>(), 3)
        ) {
            // Collapse the masked axes of `shape` to 1 for the right operand.
            let small: Vec<usize> = shape
                .iter()
                .zip(&mask)
                .map(|(&extent, &collapse)| if collapse { 1 } else { extent })
                .collect();
            let n: usize = small.iter().product();
            let small_values: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();

            let lhs = Array::from_vec(values, &shape).unwrap();
            let rhs = Array::from_vec(small_values, &small).unwrap();
            let sum = lhs.add(&rhs).unwrap();
            let flipped = rhs.add(&lhs).unwrap();
            prop_assert_eq!(sum.shape(), shape.as_slice());
            prop_assert_eq!(&sum, &flipped);

            for index in row_major_indices(&shape) {
                let reduced: Vec<usize> = index
                    .iter()
                    .zip(&small)
                    .map(|(&i, &extent)| if extent == 1 { 0 } else { i })
                    .collect();
                let expected = read(&lhs, &index) + read(&rhs, &reduced);
                prop_assert_eq!(read(&sum, &index), expected);
            }
        }

        #[test]
        fn prop_broadcast_rejects_unequal_extents(a in 2usize..6, b in 2usize..6) {
            prop_assume!(a != b);
            let lhs = Array::ones(&[a, 3]).unwrap();
            let rhs = Array::ones(&[b, 3]).unwrap();
            prop_assert_eq!(
                lhs.multiply(&rhs),
                Err(ArrayError::BroadcastIncompatible {
                    lhs: vec![a, 3],
                    rhs: vec![b, 3],
                    axis: 0,
                })
            );
        }

        #[test]
        fn prop_random_within_bounds(
            shape in shape_strategy(),
            low in -10.0f64..10.0,
            width in 1e-3f64..10.0
        ) {
            let high = low + width;
            let array = Array::random(&shape, low, high).unwrap();
            for &value in array.as_slice() {
                prop_assert!(value >= low && value < high,
                    "Value {} outside range [{}, {})", value, low, high);
            }
        }

        #[test]
        fn prop_arange_counts_up(start in -50i64..50, len in 1i64..40) {
            let array = Array::arange(start, start + len).unwrap();
            prop_assert_eq!(array.shape(), &[len as usize]);
            for (i, &value) in array.iter().enumerate() {
                prop_assert_eq!(value, (start + i as i64) as f64);
            }
        }

        #[test]
        fn prop_view_preserves_order(rows in 1usize..8, cols in 1usize..8) {
            let mut flat = Array::arange(0, (rows * cols) as i64).unwrap();
            let grid = flat.view(&[rows, cols]).unwrap();
            prop_assert!(flat.is_empty());
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert_eq!(grid[(i, j)], (cols * i + j) as f64);
                }
            }
        }

        #[test]
        fn prop_unsqueeze_keeps_elements(
            (shape, values) in array_strategy(),
            at in 0usize..3
        ) {
            prop_assume!(shape.len() < 3);
            let dim = at.min(shape.len());
            let mut a = Array::from_vec(values.clone(), &shape).unwrap();
            let b = a.unsqueeze(dim).unwrap();

            let mut expected = shape.clone();
            expected.insert(dim, 1);
            prop_assert_eq!(b.shape(), expected.as_slice());
            prop_assert_eq!(b.as_slice(), values.as_slice());
            prop_assert!(a.is_empty());
        }

        #[test]
        fn prop_concat_sums_extents(
            shape in shape_strategy(),
            extra in 1usize..5,
            axis in 0usize..3
        ) {
            let dim = axis % shape.len();
            let mut other_shape = shape.clone();
            other_shape[dim] = extra;

            let a = Array::ones(&shape).unwrap();
            let b = Array::zeros(&other_shape).unwrap();
            let c = Array::concat(&[a, b], dim).unwrap();

            let mut expected = shape.clone();
            expected[dim] += extra;
            prop_assert_eq!(c.shape(), expected.as_slice());
            prop_assert_eq!(c.iter().sum::<f64>(), shape.iter().product::<usize>() as f64);
        }

        #[test]
        fn prop_failed_view_leaves_source((shape, values) in array_strategy()) {
            let mut a = Array::from_vec(values, &shape).unwrap();
            let before = a.clone();
            let wrong = a.numel() + 1;
            prop_assert!(a.view(&[wrong]).is_err());
            prop_assert_eq!(a, before);
        }
    }
}
