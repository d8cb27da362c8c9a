//! One-shot statistics over slices
//!
//! Each function builds a fresh [`Accumulator`], feeds every element through
//! [`Accumulator::add`] in order and returns the final query. Elements are
//! converted to `f64` with an `as` cast, so any primitive integer or float
//! width is accepted.

use num_traits::AsPrimitive;

use super::Accumulator;
use crate::traits::StatsError;

/// Build an accumulator over every element of `values`
pub fn accumulate<T>(values: &[T]) -> Accumulator
where
    T: AsPrimitive<f64>,
{
    let mut acc = Accumulator::new();
    for &value in values {
        acc.add(value.as_());
    }
    acc
}

/// Running mean of a slice
///
/// Returns `0.0` for an empty slice; see [`try_running_mean`].
///
/// ```
/// use runstat::statistics::running_mean;
///
/// assert_eq!(running_mean(&[1u8, 2, 3, 4]), 2.5);
/// ```
pub fn running_mean<T>(values: &[T]) -> f64
where
    T: AsPrimitive<f64>,
{
    accumulate(values).mean()
}

/// Population variance of a slice
///
/// Returns NaN for an empty slice; see [`try_running_variance`].
///
/// ```
/// use runstat::statistics::running_variance;
///
/// let x: Vec<i32> = (0..10).collect();
/// assert!((running_variance(&x) - 8.25).abs() < 1e-12);
/// ```
pub fn running_variance<T>(values: &[T]) -> f64
where
    T: AsPrimitive<f64>,
{
    accumulate(values).variance()
}

/// Population standard deviation of a slice
pub fn running_std_deviation<T>(values: &[T]) -> f64
where
    T: AsPrimitive<f64>,
{
    accumulate(values).std_deviation()
}

/// Running mean of a slice, or [`StatsError::Empty`] if it has no elements
pub fn try_running_mean<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: AsPrimitive<f64>,
{
    accumulate(values).checked_mean()
}

/// Population variance of a slice, or [`StatsError::Empty`] if it has no
/// elements
pub fn try_running_variance<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: AsPrimitive<f64>,
{
    accumulate(values).checked_variance()
}

/// Population standard deviation of a slice, or [`StatsError::Empty`] if it
/// has no elements
pub fn try_running_std_deviation<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: AsPrimitive<f64>,
{
    accumulate(values).checked_std_deviation()
}
