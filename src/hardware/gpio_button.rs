use super::traits::Button;
use core::convert::Infallible;
use embedded_hal::digital::{InputPin, PinState};

/// Push button on a single GPIO input.
pub struct GpioButton<I> {
    pin: I,
    active: PinState,
}

impl<I> GpioButton<I>
where
    I: InputPin<Error = Infallible>,
{
    /// `active` is the level the pin reads while the button is held.
    pub fn new(pin: I, active: PinState) -> Self {
        Self { pin, active }
    }
}

impl<I> Button for GpioButton<I>
where
    I: InputPin<Error = Infallible>,
{
    fn is_pressed(&mut self) -> bool {
        let Ok(high) = self.pin.is_high();
        high == (self.active == PinState::High)
    }
}
