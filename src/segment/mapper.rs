//! Logical to physical pixel mapping
//!
//! All lookups are pure functions of the set's shape and segment
//! directions. Coordinates outside the set fail with an [`AddressError`]
//! instead of producing an index into someone else's pixels.

use super::{Segment, SegmentSet};
use crate::error::AddressError;

/// A resolved pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLocation {
    /// Index into the LED buffer
    pub index: u16,
    /// Segment the pixel belongs to
    pub segment: usize,
    /// Segment line the pixel lies on
    pub line: u16,
}

impl<const MAX_SEGMENTS: usize> SegmentSet<'_, MAX_SEGMENTS> {
    /// Number of addressable pixels in a segment
    ///
    /// Mirrored segments report their logical (half) length.
    pub fn total_segment_length(&self, segment: usize) -> Result<u16, AddressError> {
        self.segment(segment).map(Segment::len)
    }

    /// Physical index of the pixel at `offset` within a segment
    ///
    /// Reversed segments count `offset` from their far end.
    pub fn segment_pixel(&self, segment: usize, offset: u16) -> Result<u16, AddressError> {
        let seg = self.segment(segment)?;
        seg.pixel(offset).ok_or(AddressError::OffsetOutOfRange {
            segment,
            offset,
            length: seg.len(),
        })
    }

    /// Physical index of the mirrored twin of a pixel, if there is one
    pub fn segment_pixel_twin(
        &self,
        segment: usize,
        offset: u16,
    ) -> Result<Option<u16>, AddressError> {
        let seg = self.segment(segment)?;
        if offset >= seg.len() {
            return Err(AddressError::OffsetOutOfRange {
                segment,
                offset,
                length: seg.len(),
            });
        }
        Ok(seg.twin(offset))
    }

    /// Physical index of the pixel where `line` crosses a segment
    ///
    /// Lines map one-to-one onto segment offsets, so a segment shorter than
    /// `line + 1` has no pixel on that line. Use
    /// [`pixel_from_line_scaled`](Self::pixel_from_line_scaled) to stretch
    /// lines over irregular sets instead.
    pub fn pixel_from_line(&self, line: u16, segment: usize) -> Result<u16, AddressError> {
        let seg = self.segment(segment)?;
        seg.pixel(line).ok_or(AddressError::LineOutOfRange {
            segment,
            line,
            length: seg.len(),
        })
    }

    /// Physical index of the pixel where `line` crosses a segment, scaling
    /// the line proportionally onto the segment's length
    ///
    /// On uniform sets this is identical to
    /// [`pixel_from_line`](Self::pixel_from_line).
    pub fn pixel_from_line_scaled(
        &self,
        line: u16,
        segment: usize,
    ) -> Result<u16, AddressError> {
        let offset = self.offset_from_line_scaled(line, segment)?;
        self.segment_pixel(segment, offset)
    }

    /// Segment offset a line crosses, scaled onto the segment's length
    pub fn offset_from_line_scaled(
        &self,
        line: u16,
        segment: usize,
    ) -> Result<u16, AddressError> {
        let seg = self.segment(segment)?;
        if line >= self.num_lines() || seg.is_empty() {
            return Err(AddressError::LineOutOfRange {
                segment,
                line,
                length: seg.len(),
            });
        }
        Ok(scale_index(line, self.num_lines(), seg.len()))
    }

    /// Segment line an offset of a segment lies on
    ///
    /// Offsets of shorter segments are stretched across all lines.
    pub fn line_from_offset(&self, segment: usize, offset: u16) -> Result<u16, AddressError> {
        let seg = self.segment(segment)?;
        if offset >= seg.len() {
            return Err(AddressError::OffsetOutOfRange {
                segment,
                offset,
                length: seg.len(),
            });
        }
        Ok(scale_index(offset, seg.len(), self.num_lines()))
    }

    /// Resolve a segment offset into a full pixel location
    pub fn locate(&self, segment: usize, offset: u16) -> Result<PixelLocation, AddressError> {
        Ok(PixelLocation {
            index: self.segment_pixel(segment, offset)?,
            segment,
            line: self.line_from_offset(segment, offset)?,
        })
    }

    /// Resolve a segment line into a full pixel location
    ///
    /// Uses the scaled mapping, so every segment has a pixel on every line.
    pub fn locate_line(&self, line: u16, segment: usize) -> Result<PixelLocation, AddressError> {
        Ok(PixelLocation {
            index: self.pixel_from_line_scaled(line, segment)?,
            segment,
            line,
        })
    }
}

/// Map an index in `0..from` onto `0..to`
#[allow(clippy::cast_possible_truncation)]
fn scale_index(index: u16, from: u16, to: u16) -> u16 {
    if from == to || from == 0 {
        return index;
    }
    // index < from, so the result is < to
    ((u32::from(index) * u32::from(to)) / u32::from(from)) as u16
}
