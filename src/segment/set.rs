use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Direction, Segment, SegmentSection};
use crate::{color::Palette, error::AddressError, transition::ValueTransition};

/// Configuration for a segment set
#[derive(Debug, Clone)]
pub struct SegmentSetConfig<'a> {
    /// Length of the LED buffer the set addresses
    pub num_leds: u16,
    /// Brightness applied after color resolution
    pub brightness: u8,
    /// Steps in one full rainbow or palette cycle (defaults to the line count)
    pub gradient_length: Option<u16>,
    /// Wrap length of the offset counter (defaults to the gradient length)
    pub offset_wrap: Option<u16>,
    /// Palette used by gradient color modes
    pub palette: Palette<'a>,
    pub rainbow_saturation: u8,
    pub rainbow_value: u8,
}

impl<'a> SegmentSetConfig<'a> {
    pub const fn new(num_leds: u16) -> Self {
        Self {
            num_leds,
            brightness: 255,
            gradient_length: None,
            offset_wrap: None,
            palette: &[],
            rainbow_saturation: 255,
            rainbow_value: 255,
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_gradient_length(mut self, length: u16) -> Self {
        self.gradient_length = Some(length);
        self
    }

    #[must_use]
    pub const fn with_offset_wrap(mut self, wrap: u16) -> Self {
        self.offset_wrap = Some(wrap);
        self
    }

    #[must_use]
    pub const fn with_palette(mut self, palette: Palette<'a>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_rainbow(mut self, saturation: u8, value: u8) -> Self {
        self.rainbow_saturation = saturation;
        self.rainbow_value = value;
        self
    }
}

/// Ordered collection of segments addressing one LED buffer
///
/// The set does not own the buffer; draw calls borrow it. Besides the
/// segment shapes it carries the state shared by every writer: segment
/// directions, the offset counter read by scrolling color modes, the
/// gradient settings and the output brightness.
#[derive(Debug, Clone)]
pub struct SegmentSet<'a, const MAX_SEGMENTS: usize> {
    segments: Vec<Segment<'a>, MAX_SEGMENTS>,
    num_leds: u16,
    num_lines: u16,
    pixel_count: u16,

    offset: u16,
    offset_wrap: Option<u16>,
    gradient_length: Option<u16>,

    palette: Palette<'a>,
    rainbow_saturation: u8,
    rainbow_value: u8,
    brightness: ValueTransition<u8>,
}

impl<'a, const MAX_SEGMENTS: usize> SegmentSet<'a, MAX_SEGMENTS> {
    /// Create a set from its segments
    ///
    /// Fails if there are more segments than `MAX_SEGMENTS` or if any
    /// section reaches outside of `config.num_leds`.
    pub fn new(
        segments: &[Segment<'a>],
        config: &SegmentSetConfig<'a>,
    ) -> Result<Self, AddressError> {
        let mut set = Self::empty(config);
        for segment in segments {
            set.push(*segment)?;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[SegmentSet.new] {} segments, {} pixels, {} lines over {} LEDs",
            set.segments.len(),
            set.pixel_count,
            set.num_lines,
            set.num_leds
        );

        Ok(set)
    }

    /// Create a set without segments
    pub const fn empty(config: &SegmentSetConfig<'a>) -> Self {
        Self {
            segments: Vec::new(),
            num_leds: config.num_leds,
            num_lines: 0,
            pixel_count: 0,
            offset: 0,
            offset_wrap: config.offset_wrap,
            gradient_length: config.gradient_length,
            palette: config.palette,
            rainbow_saturation: config.rainbow_saturation,
            rainbow_value: config.rainbow_value,
            brightness: ValueTransition::new_u8(config.brightness),
        }
    }

    /// Append a segment to the end of the set
    pub fn push(&mut self, segment: Segment<'a>) -> Result<(), AddressError> {
        let index = self.segments.len();
        if let Err(err) = self.validate(index, &segment) {
            #[cfg(feature = "esp32-log")]
            println!("[SegmentSet.push] rejected segment {}: {}", index, err);
            return Err(err);
        }

        self.segments
            .push(segment)
            .map_err(|_| AddressError::TooManySegments {
                capacity: MAX_SEGMENTS,
            })?;
        self.num_lines = self.num_lines.max(segment.len());
        self.pixel_count = self.pixel_count.saturating_add(segment.physical_len());
        self.offset %= self.offset_wrap();
        Ok(())
    }

    /// Check that every section of the segment lies inside the buffer
    fn validate(&self, index: usize, segment: &Segment<'a>) -> Result<(), AddressError> {
        let num_leds = i32::from(self.num_leds);
        for section in segment.sections() {
            if section.length == 0 {
                continue;
            }
            for pixel in [section.pixel(0), section.last()] {
                if pixel < 0 || pixel >= num_leds {
                    return Err(AddressError::PixelOutOfBuffer {
                        segment: index,
                        pixel,
                        num_leds: self.num_leds,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of segments in the set
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Length of the LED buffer the set addresses
    pub const fn num_leds(&self) -> u16 {
        self.num_leds
    }

    /// Number of segment lines, i.e. the length of the longest segment
    pub const fn num_lines(&self) -> u16 {
        self.num_lines
    }

    /// Total number of physical LEDs covered by the segments
    pub const fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    /// Get a segment by index
    pub fn segment(&self, index: usize) -> Result<&Segment<'a>, AddressError> {
        self.segments
            .get(index)
            .ok_or(AddressError::SegmentOutOfRange {
                index,
                count: self.segments.len(),
            })
    }

    fn segment_mut(&mut self, index: usize) -> Result<&mut Segment<'a>, AddressError> {
        let count = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or(AddressError::SegmentOutOfRange { index, count })
    }

    /// Iterate over the segments in order
    pub fn segments(&self) -> impl Iterator<Item = &Segment<'a>> {
        self.segments.iter()
    }

    /// Check if all segments have the same logical length
    ///
    /// Strict line addressing only reaches every segment on uniform sets.
    pub fn is_uniform(&self) -> bool {
        self.segments.iter().all(|s| s.len() == self.num_lines)
    }

    /// Check if any physical LED is reachable through more than one pixel
    pub fn overlaps(&self) -> bool {
        let sections = || {
            self.segments
                .iter()
                .flat_map(|s| s.sections().iter())
                .filter(|s| s.length > 0)
                .map(Span::of)
        };
        let overlaps = sections()
            .enumerate()
            .any(|(i, a)| sections().skip(i + 1).any(|b| a.intersects(b)));

        #[cfg(feature = "esp32-log")]
        if overlaps {
            println!("[SegmentSet.overlaps] segments share physical LEDs");
        }

        overlaps
    }

    // Direction

    /// Get the direction of a segment
    pub fn direction(&self, segment: usize) -> Result<Direction, AddressError> {
        self.segment(segment).map(Segment::direction)
    }

    /// Set the direction of a segment
    pub fn set_direction(
        &mut self,
        segment: usize,
        direction: Direction,
    ) -> Result<(), AddressError> {
        self.segment_mut(segment)?.set_direction(direction);
        Ok(())
    }

    /// Toggle the direction of a single segment
    pub fn flip_direction(&mut self, segment: usize) -> Result<(), AddressError> {
        let segment = self.segment_mut(segment)?;
        let direction = segment.direction().flipped();
        segment.set_direction(direction);
        Ok(())
    }

    /// Toggle the direction of every segment
    pub fn flip_all_directions(&mut self) {
        for segment in &mut self.segments {
            let direction = segment.direction().flipped();
            segment.set_direction(direction);
        }
    }

    // Offset

    /// Current value of the offset counter, in `[0, offset_wrap)`
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Wrap length of the offset counter
    pub fn offset_wrap(&self) -> u16 {
        self.offset_wrap.unwrap_or_else(|| self.gradient_length()).max(1)
    }

    /// Set the offset counter, wrapping it into range
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset % self.offset_wrap();
    }

    /// Advance the offset counter by `step`, modulo the wrap length
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance_offset(&mut self, step: u16) {
        let wrap = u32::from(self.offset_wrap());
        // wrap fits into u16, so does the result
        self.offset = ((u32::from(self.offset) + u32::from(step)) % wrap) as u16;
    }

    /// Move the offset counter back by `step`, modulo the wrap length
    pub fn retreat_offset(&mut self, step: u16) {
        let wrap = self.offset_wrap();
        self.advance_offset(wrap - step % wrap);
    }

    // Gradient settings

    /// Steps in one full rainbow or palette cycle
    pub fn gradient_length(&self) -> u16 {
        self.gradient_length.unwrap_or(self.num_lines).max(1)
    }

    pub fn set_gradient_length(&mut self, length: Option<u16>) {
        self.gradient_length = length;
        self.offset %= self.offset_wrap();
    }

    pub const fn palette(&self) -> Palette<'a> {
        self.palette
    }

    pub const fn set_palette(&mut self, palette: Palette<'a>) {
        self.palette = palette;
    }

    pub const fn rainbow_saturation(&self) -> u8 {
        self.rainbow_saturation
    }

    pub const fn rainbow_value(&self) -> u8 {
        self.rainbow_value
    }

    // Brightness

    /// Current output brightness
    pub const fn brightness(&self) -> u8 {
        self.brightness.current()
    }

    /// Change the output brightness, optionally fading over `duration`
    pub fn set_brightness(&mut self, brightness: u8, duration: Duration, now: Instant) {
        self.brightness.set(brightness, duration, now);
    }

    /// Check if a brightness fade is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.brightness.is_transitioning()
    }

    /// Advance the brightness fade
    pub fn tick(&mut self, now: Instant) {
        self.brightness.tick(now);
    }
}

/// Inclusive range of physical LEDs covered by a section
#[derive(Clone, Copy)]
struct Span {
    low: i32,
    high: i32,
}

impl Span {
    fn of(section: &SegmentSection) -> Self {
        let first = section.pixel(0);
        let last = section.last();
        Self {
            low: first.min(last),
            high: first.max(last),
        }
    }

    const fn intersects(self, other: Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}
