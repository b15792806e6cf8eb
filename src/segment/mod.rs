//! Segments and segment sets
//!
//! A segment is an ordered run of physical LED indices built from one or
//! more sections. Segments are grouped into a [`SegmentSet`], which maps
//! logical coordinates (segment, offset, line) onto the physical buffer.

mod mapper;
mod set;

pub use mapper::PixelLocation;
pub use set::{SegmentSet, SegmentSetConfig};

/// Traversal direction of a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Offsets count from the first declared pixel
    #[default]
    Forward,
    /// Offsets count from the last declared pixel
    Reversed,
}

impl Direction {
    /// Get the opposite direction
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reversed,
            Self::Reversed => Self::Forward,
        }
    }
}

/// A contiguous run of physical LEDs
///
/// Descending sections count down from `start`, e.g. a section starting
/// at 9 with length 3 covers LEDs 9, 8, 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSection {
    pub start: u16,
    pub length: u16,
    pub descending: bool,
}

impl SegmentSection {
    /// Create an ascending section
    pub const fn new(start: u16, length: u16) -> Self {
        Self {
            start,
            length,
            descending: false,
        }
    }

    /// Create a section that counts down from `start`
    pub const fn descending(start: u16, length: u16) -> Self {
        Self {
            start,
            length,
            descending: true,
        }
    }

    /// Physical index of the pixel at `offset` within the section.
    ///
    /// Signed so that malformed descending sections can be detected.
    pub const fn pixel(self, offset: u16) -> i32 {
        if self.descending {
            self.start as i32 - offset as i32
        } else {
            self.start as i32 + offset as i32
        }
    }

    /// Physical index of the last pixel in the section
    pub const fn last(self) -> i32 {
        self.pixel(self.length.saturating_sub(1))
    }
}

/// An ordered run of physical LEDs with a direction flag
///
/// The shape (sections, mirroring) is fixed at construction, only the
/// direction can change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    sections: &'a [SegmentSection],
    direction: Direction,
    mirrored: bool,
    physical_len: u16,
}

impl<'a> Segment<'a> {
    /// Create a forward segment from its sections
    pub const fn new(sections: &'a [SegmentSection]) -> Self {
        let mut physical_len: u16 = 0;
        let mut i = 0;
        while i < sections.len() {
            physical_len = physical_len.saturating_add(sections[i].length);
            i += 1;
        }

        Self {
            sections,
            direction: Direction::Forward,
            mirrored: false,
            physical_len,
        }
    }

    /// Set the initial direction
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Treat the segment as two mirrored halves
    ///
    /// Logical offset `i` then addresses both physical offset `i` and
    /// `physical_len - 1 - i`.
    #[must_use]
    pub const fn mirrored(mut self) -> Self {
        self.mirrored = true;
        self
    }

    /// Sections making up the segment
    pub const fn sections(&self) -> &'a [SegmentSection] {
        self.sections
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) const fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub const fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Number of physical LEDs covered by the sections
    pub const fn physical_len(&self) -> u16 {
        self.physical_len
    }

    /// Number of addressable (logical) pixels
    pub const fn len(&self) -> u16 {
        if self.mirrored {
            self.physical_len.div_ceil(2)
        } else {
            self.physical_len
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.physical_len == 0
    }

    /// Physical index for a logical offset, honoring direction
    ///
    /// Returns `None` if the offset is past the end of the segment or the
    /// section it falls in runs below index zero.
    pub fn pixel(&self, offset: u16) -> Option<u16> {
        let position = self.position(offset)?;
        self.walk(position)
    }

    /// Physical index of the mirrored twin for a logical offset
    ///
    /// Returns `None` for non-mirrored segments and for the center pixel
    /// of an odd-length mirrored segment, which has no twin.
    pub fn twin(&self, offset: u16) -> Option<u16> {
        if !self.mirrored {
            return None;
        }
        let position = self.position(offset)?;
        let twin = self.physical_len - 1 - position;
        if twin == position {
            return None;
        }
        self.walk(twin)
    }

    /// Position along the physical run for a logical offset
    fn position(&self, offset: u16) -> Option<u16> {
        let len = self.len();
        if offset >= len {
            return None;
        }
        Some(match self.direction {
            Direction::Forward => offset,
            Direction::Reversed => len - 1 - offset,
        })
    }

    /// Walk the sections to the pixel at `position`
    ///
    /// A section running below index zero has no pixel there.
    fn walk(&self, mut position: u16) -> Option<u16> {
        for section in self.sections {
            if position < section.length {
                return u16::try_from(section.pixel(position)).ok();
            }
            position -= section.length;
        }
        None
    }
}
