//! Seven-segment digit counter for the STM32F4 Discovery board.
//!
//! The library holds everything that does not touch a concrete chip: the
//! segment encoder, the debounce/display loop and `embedded-hal` adapters.
//! It builds on the host so the loop can be tested with simulated time
//! (`cargo test`). The firmware itself is `src/bin/digit_cycle.rs`
//! (`cargo run --release --features embedded --target thumbv7em-none-eabihf`).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod display_loop;
pub mod error;
pub mod hardware;
pub mod segment;

pub use display_loop::{DigitCycler, EdgeOutcome, Timing};
pub use error::TimingError;
pub use segment::{Digit, Polarity, SEGMENT_MASK, Segment, segments_for};
