use super::traits::OutputPort;
use crate::segment::Segment;
use core::convert::Infallible;
use embedded_hal::digital::{OutputPin, PinState};

/// Seven GPIO outputs driving segments a..g, in that order.
pub struct GpioSegments<O> {
    pins: [O; 7],
}

impl<O> GpioSegments<O>
where
    O: OutputPin<Error = Infallible>,
{
    pub fn new(pins: [O; 7]) -> Self {
        Self { pins }
    }
}

impl<O> OutputPort for GpioSegments<O>
where
    O: OutputPin<Error = Infallible>,
{
    fn write_masked(&mut self, mask: u8, bits: u8) {
        for (segment, pin) in Segment::ALL.iter().zip(self.pins.iter_mut()) {
            let bit = segment.bit();
            if mask & bit == 0 {
                continue;
            }
            let Ok(()) = pin.set_state(PinState::from(bits & bit != 0));
        }
    }
}
