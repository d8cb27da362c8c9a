//! Step-by-step demonstration of the accumulator
//!
//! Feeds `0..count` through an [`Accumulator`] and prints the running
//! statistics after every addition:
//!
//! ```text
//! added 0  now mean=0.00 var=0.00 std=0.00
//! added 1  now mean=0.50 var=0.25 std=0.50
//! added 2  now mean=1.00 var=0.67 std=0.82
//! ```

use std::io::{self, Write};

use crate::statistics::Accumulator;

/// Format one progression line for the value just added
pub fn format_step(value: u64, acc: &Accumulator) -> String {
    format!(
        "added {:<2} now mean={:.2} var={:.2} std={:.2}",
        value,
        acc.mean(),
        acc.variance(),
        acc.std_deviation()
    )
}

/// Feed `0..count` through a fresh accumulator, writing one line per step
///
/// Returns the accumulator after the last step.
pub fn write_progression<W: Write>(out: &mut W, count: u64) -> io::Result<Accumulator> {
    let mut acc = Accumulator::new();
    for i in 0..count {
        acc.add(i as f64);
        log::trace!("step {}: {:?}", i, acc);
        writeln!(out, "{}", format_step(i, &acc))?;
    }
    Ok(acc)
}
