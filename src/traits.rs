//! Core traits for online statistics
//!
//! Every single-pass accumulator in this crate implements [`OnlineStatistic`].
//! Accumulators never retain the observations they were fed; they only keep
//! the constant-size state needed to answer queries.

use core::fmt::Debug;

/// Error returned by the checked queries
///
/// The unchecked queries ([`Accumulator::mean`] and friends) never fail and
/// follow IEEE-754 semantics instead; the checked forms surface the
/// degenerate cases explicitly.
///
/// [`Accumulator::mean`]: crate::statistics::Accumulator::mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// No observations have been ingested
    Empty,
    /// The query needs more observations than have been ingested
    InsufficientData { required: u64, found: u64 },
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::Empty => write!(f, "no observations"),
            StatsError::InsufficientData { required, found } => {
                write!(
                    f,
                    "insufficient data: need at least {} observations, found {}",
                    required, found
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for single-pass statistics
///
/// There is no `merge`; independently built accumulators cannot be combined.
pub trait OnlineStatistic: Clone + Debug {
    /// The type of observation this statistic ingests
    type Item: ?Sized;

    /// Ingest one observation
    fn update(&mut self, item: &Self::Item);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of observations ingested
    fn count(&self) -> u64;

    /// Check if no observations have been ingested
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StatsError::Empty.to_string(), "no observations");
        assert_eq!(
            StatsError::InsufficientData {
                required: 2,
                found: 1
            }
            .to_string(),
            "insufficient data: need at least 2 observations, found 1"
        );
    }

    #[test]
    fn test_default_is_empty() {
        #[derive(Clone, Debug)]
        struct Counter(u64);

        impl OnlineStatistic for Counter {
            type Item = f64;

            fn update(&mut self, _item: &f64) {
                self.0 += 1;
            }

            fn clear(&mut self) {
                self.0 = 0;
            }

            fn size_bytes(&self) -> usize {
                core::mem::size_of::<Self>()
            }

            fn count(&self) -> u64 {
                self.0
            }
        }

        let mut c = Counter(0);
        assert!(c.is_empty());
        c.update(&1.0);
        assert!(!c.is_empty());
        c.clear();
        assert!(c.is_empty());
    }
}
