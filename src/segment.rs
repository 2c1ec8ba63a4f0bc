//! Seven-segment encoder
//!
//! Maps a decimal digit to the segments that have to be lit. Bit layout of
//! every pattern is fixed: bit0 = a, bit1 = b ... bit6 = g.
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```
//!
//! The table stores "segment lit" bits. Whether a lit segment means a high or
//! low output line is decided at render time by [`Polarity`].

/// Lines a..g occupy the low seven bits of the segment port.
pub const SEGMENT_MASK: u8 = 0x7F;

/// Digit to segment lookup table (a = bit0)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0011_1111, // 0: a b c d e f
    0b0000_0110, // 1: b c
    0b0101_1011, // 2: a b d e g
    0b0100_1111, // 3: a b c d g
    0b0110_0110, // 4: b c f g
    0b0110_1101, // 5: a c d f g
    0b0111_1101, // 6: a c d e f g
    0b0000_0111, // 7: a b c
    0b0111_1111, // 8: all
    0b0110_1111, // 9: a b c d f g
];

/// A displayable decimal digit, always in `0..=9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Returns `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Digit(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit, wrapping 9 -> 0.
    pub const fn next(self) -> Self {
        Digit((self.0 + 1) % 10)
    }
}

/// One segment of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Lit-segment pattern for `digit`.
pub const fn segments_for(digit: Digit) -> u8 {
    DIGIT_SEGMENTS[digit.0 as usize]
}

/// Electrical level that lights a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Segment lit when its line is driven low (common anode wiring).
    #[default]
    ActiveLow,
    /// Segment lit when its line is driven high (common cathode wiring).
    ActiveHigh,
}

impl Polarity {
    /// Converts a lit-segment pattern into the value to drive on the port.
    pub const fn encode(self, pattern: u8) -> u8 {
        match self {
            Polarity::ActiveLow => !pattern & SEGMENT_MASK,
            Polarity::ActiveHigh => pattern & SEGMENT_MASK,
        }
    }
}
