//! Array creation and initialization methods
//!
//! This module provides the factories for arrays filled with a constant,
//! with uniform random values, or with an integer range.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::types::Array;
use crate::error::{ArrayError, Result};
use crate::types::validate_shape;

impl Array {
    /// Create an array filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::full(&[2, 3], 5.0).unwrap();
    /// assert!(array.iter().all(|&x| x == 5.0));
    /// ```
    pub fn full(shape: &[usize], value: f64) -> Result<Self> {
        let numel = validate_shape(shape)?;
        Ok(Self::from_parts(shape, vec![value; numel]))
    }

    /// Create an array of zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(array.numel(), 24);
    /// assert_eq!(array[(1, 2, 3)], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::full(shape, 0.0)
    }

    /// Create an array of ones
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::ones(&[4]).unwrap();
    /// assert_eq!(array.as_slice(), &[1.0; 4]);
    /// ```
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, 1.0)
    }

    /// Create an array with values drawn uniformly from `[min, max)`
    ///
    /// Samples come from the thread-local generator of the `rand` crate.
    /// Its seeding is outside this crate; use
    /// [`random_with`](Self::random_with) to supply a seeded generator.
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidRange`] if `min >= max` or the bounds are not
    /// finite, [`ArrayError::InvalidShape`] for an invalid shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::random(&[10, 10], -2.0, 3.0).unwrap();
    /// assert!(array.iter().all(|&x| (-2.0..3.0).contains(&x)));
    /// ```
    pub fn random(shape: &[usize], min: f64, max: f64) -> Result<Self> {
        Self::random_with(shape, min, max, &mut rand::thread_rng())
    }

    /// Create an array with values drawn uniformly from `[min, max)` using
    /// the given generator
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use trirank_core::Array;
    ///
    /// let a = Array::random_with(&[3, 3], 0.0, 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = Array::random_with(&[3, 3], 0.0, 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with<R>(shape: &[usize], min: f64, max: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        // Uniform::new panics on these, so reject them up front.
        if !(min < max) || !(max - min).is_finite() {
            return Err(ArrayError::InvalidRange {
                low: min,
                high: max,
            });
        }
        let numel = validate_shape(shape)?;
        let dist = Uniform::new(min, max);
        let data: Vec<f64> = dist.sample_iter(rng).take(numel).collect();
        Ok(Self::from_parts(shape, data))
    }

    /// Create a rank-1 array holding `start, start + 1, ..., end - 1`
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidRange`] if `end <= start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::Array;
    ///
    /// let array = Array::arange(5, 10).unwrap();
    /// assert_eq!(array.shape(), &[5]);
    /// assert_eq!(array.as_slice(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
    /// ```
    pub fn arange(start: i64, end: i64) -> Result<Self> {
        if end <= start {
            return Err(ArrayError::InvalidRange {
                low: start as f64,
                high: end as f64,
            });
        }
        let len = usize::try_from(end.abs_diff(start)).unwrap_or(usize::MAX);
        validate_shape(&[len])?;
        let data: Vec<f64> = (start..end).map(|v| v as f64).collect();
        Ok(Self::from_parts(&[len], data))
    }
}
