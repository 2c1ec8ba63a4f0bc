//! Host-side doubles driven by a shared simulated clock.

use super::traits::{Button, OutputPort};
use embedded_hal_async::delay::DelayNs;
use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

/// Simulated time in nanoseconds.
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now(&self) -> u64 {
        self.0.get()
    }

    pub fn advance(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

/// Delay that only moves the clock forward.
pub struct MockDelay {
    clock: Clock,
}

impl MockDelay {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(u64::from(ns));
    }
}

/// Button held during each `[start, end)` window.
pub struct ScriptedButton {
    clock: Clock,
    presses: Vec<(u64, u64)>,
}

impl ScriptedButton {
    pub fn new(clock: Clock, presses: &[(u64, u64)]) -> Self {
        Self {
            clock,
            presses: presses.to_vec(),
        }
    }
}

impl Button for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        let now = self.clock.now();
        self.presses
            .iter()
            .any(|&(start, end)| start <= now && now < end)
    }
}

/// Output data register with a log of every write and when it happened.
pub struct RegisterPort {
    clock: Clock,
    value: u32,
    writes: Vec<(u64, u32)>,
}

impl RegisterPort {
    pub fn new(clock: Clock, initial: u32) -> Self {
        Self {
            clock,
            value: initial,
            writes: Vec::new(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn writes(&self) -> &[(u64, u32)] {
        &self.writes
    }
}

impl OutputPort for RegisterPort {
    fn write_masked(&mut self, mask: u8, bits: u8) {
        let mask = u32::from(mask);
        self.value = (self.value & !mask) | (u32::from(bits) & mask);
        self.writes.push((self.clock.now(), self.value));
    }
}
