//! Debounce and display loop
//!
//! A single cooperative loop that shows the current digit, advances it once
//! per period, and advances it early on every confirmed button press.
//!
//! One period looks like this:
//!
//! ```text
//! render ─┬─ sample button ── rising edge? ──no──┐
//!         │                        │ yes         │
//!         │                  debounce delay      │
//!         │                        │             │
//!         │                  still pressed? ─no──┤
//!         │                        │ yes         │
//!         │                  advance + render    │
//!         │                                      │
//!         └──────── wait one sample interval ◄───┘   (N times)
//!
//! advance
//! ```
//!
//! The debounce delay is not one of the N sample intervals, so a confirmed or
//! rejected edge stretches the period by the debounce time. A press late in
//! the period is followed shortly by the periodic advance; both happen.

use embedded_hal_async::delay::DelayNs;

use crate::error::TimingError;
use crate::hardware::{Button, OutputPort};
use crate::segment::{Digit, Polarity, SEGMENT_MASK, segments_for};

/// Durations that drive the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    period_ms: u32,
    debounce_ms: u32,
    sample_interval_us: u32,
}

impl Timing {
    /// Validates and builds a timing configuration.
    ///
    /// # Errors
    /// See [`TimingError`].
    pub const fn new(
        period_ms: u32,
        debounce_ms: u32,
        sample_interval_us: u32,
    ) -> Result<Self, TimingError> {
        if sample_interval_us == 0 {
            return Err(TimingError::ZeroSampleInterval);
        }
        if period_ms > u32::MAX / 1000 {
            return Err(TimingError::PeriodTooLong);
        }
        if sample_interval_us > period_ms * 1000 {
            return Err(TimingError::SampleIntervalExceedsPeriod);
        }
        if debounce_ms >= period_ms {
            return Err(TimingError::DebounceNotShorterThanPeriod);
        }
        Ok(Self {
            period_ms,
            debounce_ms,
            sample_interval_us,
        })
    }

    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub const fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    pub const fn sample_interval_us(&self) -> u32 {
        self.sample_interval_us
    }

    /// Button samples taken before the periodic advance.
    pub const fn samples_per_period(&self) -> u32 {
        self.period_ms * 1000 / self.sample_interval_us
    }
}

/// Result of one button sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// No rising edge on this sample.
    Idle,
    /// Rising edge seen but the button was released by the end of the
    /// debounce delay.
    Bounced,
    /// Press confirmed; the digit was advanced and re-rendered.
    AdvancedEarly,
}

/// Owns the display, the button and the loop state.
pub struct DigitCycler<P, B, D> {
    port: P,
    button: B,
    delay: D,
    timing: Timing,
    polarity: Polarity,
    digit: Digit,
    was_pressed: bool,
}

impl<P, B, D> DigitCycler<P, B, D>
where
    P: OutputPort,
    B: Button,
    D: DelayNs,
{
    /// Starts at digit 0 with the button considered released.
    pub fn new(port: P, button: B, delay: D, timing: Timing, polarity: Polarity) -> Self {
        Self {
            port,
            button,
            delay,
            timing,
            polarity,
            digit: Digit::ZERO,
            was_pressed: false,
        }
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Writes the current digit to the segment lines only.
    pub fn render(&mut self) {
        let bits = self.polarity.encode(segments_for(self.digit));
        self.port.write_masked(SEGMENT_MASK, bits);
    }

    /// Takes one button sample and handles a rising edge.
    pub async fn poll_button(&mut self) -> EdgeOutcome {
        let pressed = self.button.is_pressed();
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if !rising {
            return EdgeOutcome::Idle;
        }

        self.delay.delay_ms(self.timing.debounce_ms).await;

        if !self.button.is_pressed() {
            #[cfg(feature = "defmt")]
            defmt::trace!("button edge rejected as bounce");
            return EdgeOutcome::Bounced;
        }

        self.digit = self.digit.next();
        self.render();
        #[cfg(feature = "defmt")]
        defmt::debug!("button press, digit -> {}", self.digit.value());
        EdgeOutcome::AdvancedEarly
    }

    /// Renders, samples the button for one period, then advances.
    pub async fn run_period(&mut self) {
        self.render();

        for _ in 0..self.timing.samples_per_period() {
            self.poll_button().await;
            self.delay.delay_us(self.timing.sample_interval_us).await;
        }

        self.digit = self.digit.next();
        #[cfg(feature = "defmt")]
        defmt::trace!("period elapsed, digit -> {}", self.digit.value());
    }

    pub async fn run(mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("display loop started: {}", self.timing);
        loop {
            self.run_period().await;
        }
    }
}
