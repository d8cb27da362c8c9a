//! # Runstat
//!
//! Numerically stable running mean and variance for Rust.
//!
//! Runstat computes summary statistics over values that arrive one at a time
//! (streams, very large arrays, sensor feeds) without storing them. It uses
//! Welford's online algorithm, which keeps a running sum of squared
//! deviations instead of a sum of squares and so avoids the catastrophic
//! cancellation of the textbook `E[x²] - E[x]²` formula.
//!
//! ## Quick Start
//!
//! ```rust
//! use runstat::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! for reading in [20.5, 21.0, 19.5, 22.0] {
//!     acc.add(reading);
//! }
//! println!("mean={:.2} var={:.2} std={:.2}", acc.mean(), acc.variance(), acc.std_deviation());
//! ```
//!
//! ## Slices of any numeric type
//!
//! ```rust
//! use runstat::statistics::running_variance;
//!
//! let samples: Vec<u16> = (0..10).collect();
//! assert!((running_variance(&samples) - 8.25).abs() < 1e-12);
//! ```
//!
//! ## Degenerate input
//!
//! Queries on an empty accumulator are not guarded: `variance()` is NaN and
//! `mean()` is `0.0`. NaN and infinite observations propagate. The
//! `checked_*` queries and `try_running_*` helpers return a
//! [`StatsError`](traits::StatsError) instead.
//!
//! Accumulators cannot be merged; feed every value through one accumulator.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support and the [`demo`] module
//! - `serde`: Enable serialization of [`Accumulator`]
//! - `cli`: Build the `runstat` command-line tool

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod math;

// Core traits always available
pub mod traits;

pub mod statistics;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod demo;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{running_mean, running_std_deviation, running_variance, Accumulator};
}

pub use statistics::Accumulator;
pub use traits::StatsError;
