//! Addressing errors
//!
//! Every mapper and draw operation is bounds-checked and reports the first
//! coordinate that fell outside the segment set or the LED buffer.

use derive_more::Display;

/// Error returned when a logical coordinate cannot be resolved
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Segment index is not part of the set
    #[display("segment {index} out of range (set has {count} segments)")]
    SegmentOutOfRange { index: usize, count: usize },
    /// Offset is past the end of the segment
    #[display("offset {offset} out of range (segment {segment} has {length} pixels)")]
    OffsetOutOfRange {
        segment: usize,
        offset: u16,
        length: u16,
    },
    /// Segment is shorter than the requested line
    #[display("line {line} out of range (segment {segment} has {length} pixels)")]
    LineOutOfRange {
        segment: usize,
        line: u16,
        length: u16,
    },
    /// A section reaches outside of the LED buffer
    #[display("pixel {pixel} of segment {segment} is outside of {num_leds} LEDs")]
    PixelOutOfBuffer {
        segment: usize,
        pixel: i32,
        num_leds: u16,
    },
    /// Segment set has no room for another segment
    #[display("segment set is full ({capacity} segments)")]
    TooManySegments { capacity: usize },
    /// LED buffer passed to a draw call is shorter than the set requires
    #[display("LED buffer has {len} entries, set addresses {num_leds}")]
    BufferTooShort { len: usize, num_leds: u16 },
}

impl core::error::Error for AddressError {}
