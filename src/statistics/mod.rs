//! Running statistics for streaming data
//!
//! This module provides a single-pass accumulator for mean, variance and
//! standard deviation with constant memory, plus one-shot helpers over
//! slices of any primitive numeric type.
//!
//! # Example
//!
//! ```
//! use runstat::statistics::{running_variance, Accumulator};
//!
//! let mut acc = Accumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     acc.add(value);
//! }
//!
//! println!("Mean: {}", acc.mean());
//! println!("Stddev: {}", acc.std_deviation());
//!
//! let samples: [u16; 5] = [1, 2, 3, 4, 5];
//! assert_eq!(running_variance(&samples), acc.variance());
//! ```

mod accumulator;
mod batch;

pub use accumulator::Accumulator;
pub use batch::{
    accumulate, running_mean, running_std_deviation, running_variance, try_running_mean,
    try_running_std_deviation, try_running_variance,
};
