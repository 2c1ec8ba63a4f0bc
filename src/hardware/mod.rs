//! Peripheral capabilities used by the display loop, plus adapters from
//! `embedded-hal` pins.

pub mod gpio_button;
pub mod gpio_segments;
pub mod traits;

pub use gpio_button::GpioButton;
pub use gpio_segments::GpioSegments;
pub use traits::{Button, OutputPort};

#[cfg(test)]
pub(crate) mod mock;
