/// A group of output lines written through a mask.
///
/// Lines outside `mask` keep whatever level they had; the segment lines share
/// their port with pins the display code does not own.
pub trait OutputPort {
    fn write_masked(&mut self, mask: u8, bits: u8);
}

pub trait Button {
    /// One raw, undebounced sample.
    fn is_pressed(&mut self) -> bool;
}
