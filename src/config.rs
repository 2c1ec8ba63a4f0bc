//! Compile-time configuration.
//!
//! Pin assignments (STM32F4 Discovery):
//!
//!   7-segment display (common anode, segments lit when low)
//!      a..g -> PD0..PD6
//!
//!   User button (B1, blue)
//!      PA0, reads high while pressed (external pull-down on the board)
//!
//! Pins are picked in `src/bin/digit_cycle.rs`; change both places together.

use crate::display_loop::Timing;
use crate::segment::Polarity;

/// Time between automatic advances (ms).
pub const PERIOD_MS: u32 = 1000;

/// Wait between a rising edge and the confirming sample (ms).
/// Kept at a tenth of the period.
pub const DEBOUNCE_MS: u32 = PERIOD_MS / 10;

/// Button sampling interval (us). 1 ms gives 1000 samples per period.
pub const SAMPLE_INTERVAL_US: u32 = 1000;

pub const TIMING: Timing = match Timing::new(PERIOD_MS, DEBOUNCE_MS, SAMPLE_INTERVAL_US) {
    Ok(timing) => timing,
    Err(_) => panic!("invalid display timing"),
};

pub const DISPLAY_POLARITY: Polarity = Polarity::ActiveLow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_is_a_tenth_of_the_period() {
        assert_eq!(TIMING.period_ms(), 10 * TIMING.debounce_ms());
        assert_eq!(TIMING.samples_per_period(), 1000);
    }
}
