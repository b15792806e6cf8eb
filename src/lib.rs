#![no_std]

pub mod color;
pub mod color_mode;
pub mod draw;
pub mod error;
pub mod math8;
pub mod offset;
pub mod segment;
pub mod transition;

pub use color_mode::{ColorMode, resolve_color};
pub use draw::{fill_line, fill_segment, fill_set, representative_color, set_pixel};
pub use error::AddressError;
pub use offset::OffsetTicker;
pub use segment::{
    Direction, PixelLocation, Segment, SegmentSection, SegmentSet, SegmentSetConfig,
};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push a rendered buffer to the strip. Segment
/// sets only write into the buffer; flushing is left to the caller.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
