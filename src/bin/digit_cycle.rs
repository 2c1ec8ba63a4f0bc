//! STM32F4 Discovery 7-Segment Digit Counter
//! =============================================================================================
//!
//! Shows a single decimal digit on a 7-segment display. The digit advances
//! once per second, and right away on every debounced press of the user button.
//!
//! Hardware Connections:
//!   7-Segment Display (common anode) -> Discovery
//!      a..g -> PD0..PD6 (through series resistors)
//!      COM  -> 3V
//!
//!   User Button:
//!      B1   -> PA0 (on board, active high)
//!
//! Expected Behavior:
//!   - Display counts 0 → 9 and wraps, one step per second
//!   - Each press steps the digit immediately
//!   - Holding the button counts as one press
//!   - Button presses are logged via defmt RTT

#![no_std] // Required for embedded development
#![no_main] // Bypass standard main function

use defmt::info;
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Delay;
use embedded_hal::digital::PinState;
use panic_probe as _; // Panic handler

use segment_counter::{
    DigitCycler, config,
    hardware::{GpioButton, GpioSegments},
};

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Default configuration runs from the 16 MHz HSI and enables GPIO clocks on demand
    let p = embassy_stm32::init(Default::default());

    info!("7-segment counter starting");

    // Segment lines a..g; start high so every segment is dark
    let segments = GpioSegments::new([
        Output::new(p.PD0, Level::High, Speed::Low),
        Output::new(p.PD1, Level::High, Speed::Low),
        Output::new(p.PD2, Level::High, Speed::Low),
        Output::new(p.PD3, Level::High, Speed::Low),
        Output::new(p.PD4, Level::High, Speed::Low),
        Output::new(p.PD5, Level::High, Speed::Low),
        Output::new(p.PD6, Level::High, Speed::Low),
    ]);

    // B1 has an external pull-down and reads high while pressed
    let button = GpioButton::new(Input::new(p.PA0, Pull::None), PinState::High);

    let cycler = DigitCycler::new(
        segments,
        button,
        Delay,
        config::TIMING,
        config::DISPLAY_POLARITY,
    );

    cycler.run().await
}
