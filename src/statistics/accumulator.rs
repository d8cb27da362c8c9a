//! Running mean and variance
//!
//! Streaming mean, variance and standard deviation using Welford's
//! numerically stable online algorithm.

use crate::math;
use crate::traits::{OnlineStatistic, StatsError};

/// Running mean/variance accumulator using Welford's algorithm
///
/// Ingests one value at a time and answers mean, variance and standard
/// deviation queries at any point in O(1) time and space. The update keeps a
/// running sum of squared deviations from the evolving mean rather than a
/// sum of squares, so long streams with a large offset do not lose precision
/// to catastrophic cancellation.
///
/// # Example
///
/// ```
/// use runstat::statistics::Accumulator;
///
/// let mut acc = Accumulator::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.add(value);
/// }
///
/// assert!((acc.mean() - 5.0).abs() < 1e-12);
/// assert!((acc.variance() - 4.0).abs() < 1e-12);
/// assert!((acc.std_deviation() - 2.0).abs() < 1e-12);
/// ```
///
/// # Empty accumulators
///
/// The plain queries do not guard against an empty accumulator. Before the
/// first `add`, [`mean`](Self::mean) returns `0.0` and
/// [`variance`](Self::variance) returns NaN (`0 / 0`). Use the `checked_*`
/// queries to get a [`StatsError`] instead.
///
/// # Non-finite input
///
/// NaN and infinities are not rejected. They propagate through the
/// arithmetic like any other value.
///
/// ```
/// use runstat::statistics::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.add(1.0);
/// acc.add(f64::NAN);
/// assert!(acc.mean().is_nan());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accumulator {
    /// Number of observations
    count: u64,
    /// Running mean of the ingested values
    mean: f64,
    /// Sum of squared deviations from the running mean (M2)
    sum_sq_dev: f64,
    /// Accumulated weight of weighted observations, 0.0 if none
    weight_sum: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create a new empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            sum_sq_dev: 0.0,
            weight_sum: 0.0,
        }
    }

    /// Ingest one observation
    ///
    /// The first observation seeds the mean directly. After that the
    /// deviation is taken once against the previous mean and once against
    /// the updated mean; using the same mean for both factors brings back
    /// the cancellation error of the naive formula.
    pub fn add(&mut self, value: f64) {
        if self.count == 0 {
            self.count = 1;
            self.mean = value;
            self.sum_sq_dev = 0.0;
            return;
        }

        self.count += 1;
        let prev_mean = self.mean;
        self.mean = prev_mean + (value - prev_mean) / self.count as f64;
        self.sum_sq_dev += (value - prev_mean) * (value - self.mean);
    }

    /// Ingest a weighted observation
    ///
    /// Equivalent to `add(value * weight)` followed by accumulating `weight`.
    /// This rescales what [`mean`](Self::mean) reports but leaves
    /// [`variance`](Self::variance) computed over the raw `value * weight`
    /// products. The asymmetry is long-standing behavior and is kept as is.
    ///
    /// ```
    /// use runstat::statistics::Accumulator;
    ///
    /// let mut acc = Accumulator::new();
    /// acc.add_weighted(1.0, 1.0);
    /// acc.add_weighted(3.0, 3.0);
    ///
    /// // (1*1 + 3*3) / (1 + 3)
    /// assert!((acc.mean() - 2.5).abs() < 1e-12);
    /// // population variance of the products [1, 9]
    /// assert!((acc.variance() - 16.0).abs() < 1e-12);
    /// ```
    pub fn add_weighted(&mut self, value: f64, weight: f64) {
        self.add(value * weight);
        self.weight_sum += weight;
    }

    /// Get the number of observations
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the running mean
    ///
    /// When weighted observations were added, the stored mean of the
    /// `value * weight` products is rescaled by the average weight, which
    /// yields `sum(value * weight) / sum(weight)` for purely weighted
    /// streams.
    ///
    /// Returns `0.0` on an empty accumulator.
    pub fn mean(&self) -> f64 {
        if self.weight_sum == 0.0 {
            self.mean
        } else {
            self.mean / (self.weight_sum / self.count as f64)
        }
    }

    /// Get the population variance (divisor `n`)
    ///
    /// Returns NaN on an empty accumulator.
    pub fn variance(&self) -> f64 {
        self.sum_sq_dev / self.count as f64
    }

    /// Get the population standard deviation
    pub fn std_deviation(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Get the sample variance (divisor `n - 1`, Bessel's correction)
    ///
    /// Returns NaN with fewer than two observations.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.sum_sq_dev / (self.count - 1) as f64
        }
    }

    /// Get the sample standard deviation
    pub fn sample_std_deviation(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    /// Get the sum of the ingested values
    ///
    /// For weighted observations this is the sum of `value * weight`.
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Get the running sum of squared deviations from the mean
    pub fn sum_sq_dev(&self) -> f64 {
        self.sum_sq_dev
    }

    /// Get the accumulated weight of weighted observations
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// Check whether any weighted observation rescales the mean
    pub fn is_weighted(&self) -> bool {
        self.weight_sum != 0.0
    }

    /// Get the mean, or an error if no observations were added
    pub fn checked_mean(&self) -> Result<f64, StatsError> {
        self.require(1)?;
        Ok(self.mean())
    }

    /// Get the population variance, or an error if no observations were added
    pub fn checked_variance(&self) -> Result<f64, StatsError> {
        self.require(1)?;
        Ok(self.variance())
    }

    /// Get the population standard deviation, or an error if no observations
    /// were added
    pub fn checked_std_deviation(&self) -> Result<f64, StatsError> {
        self.require(1)?;
        Ok(self.std_deviation())
    }

    /// Get the sample variance, or an error with fewer than two observations
    pub fn checked_sample_variance(&self) -> Result<f64, StatsError> {
        self.require(2)?;
        Ok(self.sample_variance())
    }

    fn require(&self, required: u64) -> Result<(), StatsError> {
        match self.count {
            0 => Err(StatsError::Empty),
            found if found < required => Err(StatsError::InsufficientData { required, found }),
            _ => Ok(()),
        }
    }
}

impl OnlineStatistic for Accumulator {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for Accumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a f64> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        for &value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Accumulator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Accumulator", 4)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("sum_sq_dev", &self.sum_sq_dev)?;
        state.serialize_field("weight_sum", &self.weight_sum)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Accumulator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct AccumulatorData {
            count: u64,
            mean: f64,
            sum_sq_dev: f64,
            #[serde(default)]
            weight_sum: f64,
        }

        let data = AccumulatorData::deserialize(deserializer)?;
        let acc = Accumulator {
            count: data.count,
            mean: data.mean,
            sum_sq_dev: data.sum_sq_dev,
            weight_sum: data.weight_sum,
        };
        acc.check_reachable().map_err(serde::de::Error::custom)?;
        Ok(acc)
    }
}

#[cfg(feature = "serde")]
impl Accumulator {
    /// Reject states that no sequence of `add`/`add_weighted` calls produces
    ///
    /// NaN fields are accepted: non-finite input propagates into them.
    fn check_reachable(&self) -> Result<(), &'static str> {
        match self.count {
            0 if self.mean != 0.0 || self.sum_sq_dev != 0.0 || self.weight_sum != 0.0 => {
                Err("empty accumulator must have zero mean, sum_sq_dev and weight_sum")
            }
            1 if self.sum_sq_dev != 0.0 && !self.sum_sq_dev.is_nan() => {
                Err("single observation must have zero sum_sq_dev")
            }
            _ if self.sum_sq_dev < 0.0 => Err("sum_sq_dev must be non-negative"),
            _ => Ok(()),
        }
    }
}
