//! Configuration errors.
//!
//! GPIO access on this board cannot fail, so the only thing that can be wrong
//! is the timing configuration. [`crate::display_loop::Timing::new`] is a
//! `const fn`, which turns these into build errors for the constants in
//! [`crate::config`].

use core::fmt;

/// Reasons a [`Timing`](crate::display_loop::Timing) is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// The button would never be sampled.
    ZeroSampleInterval,

    /// Period in microseconds does not fit in a `u32`.
    PeriodTooLong,

    /// Fewer than one button sample per period.
    SampleIntervalExceedsPeriod,

    /// The debounce confirmation must be shorter than the period.
    DebounceNotShorterThanPeriod,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::ZeroSampleInterval => f.write_str("sample interval is zero"),
            TimingError::PeriodTooLong => f.write_str("period overflows microsecond range"),
            TimingError::SampleIntervalExceedsPeriod => {
                f.write_str("sample interval is longer than the period")
            }
            TimingError::DebounceNotShorterThanPeriod => {
                f.write_str("debounce delay is not shorter than the period")
            }
        }
    }
}

impl core::error::Error for TimingError {}
