//! Color mode overlay
//!
//! A color mode decides whether the color an effect asked for is written
//! as is, or replaced by a rainbow or palette gradient computed from the
//! pixel's position. Modes travel as small integer tags, so effects can
//! pass through user-supplied values; unknown tags draw the base color.

use crate::{
    color::{Hsv, Rgb, hsv2rgb, sample_palette},
    math8::wheel8,
    segment::{PixelLocation, SegmentSet},
};

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW_PIXEL: &str = "rainbow_pixel";
const MODE_NAME_RAINBOW_LINE: &str = "rainbow_line";
const MODE_NAME_RAINBOW_SEGMENT: &str = "rainbow_segment";
const MODE_NAME_TIME_RAINBOW_PIXEL: &str = "time_rainbow_pixel";
const MODE_NAME_TIME_RAINBOW_LINE: &str = "time_rainbow_line";
const MODE_NAME_TIME_RAINBOW_SEGMENT: &str = "time_rainbow_segment";
const MODE_NAME_GRADIENT_LINE: &str = "gradient_line";
const MODE_NAME_GRADIENT_PIXEL: &str = "gradient_pixel";
const MODE_NAME_GRADIENT_SEGMENT: &str = "gradient_segment";

const MODE_ID_STATIC: u8 = 0;
const MODE_ID_RAINBOW_PIXEL: u8 = 1;
const MODE_ID_RAINBOW_LINE: u8 = 2;
const MODE_ID_RAINBOW_SEGMENT: u8 = 3;
const MODE_ID_TIME_RAINBOW_PIXEL: u8 = 4;
const MODE_ID_TIME_RAINBOW_LINE: u8 = 5;
const MODE_ID_TIME_RAINBOW_SEGMENT: u8 = 6;
const MODE_ID_GRADIENT_LINE: u8 = 7;
const MODE_ID_GRADIENT_PIXEL: u8 = 8;
const MODE_ID_GRADIENT_SEGMENT: u8 = 9;

/// How the final color of a pixel is derived
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorMode {
    /// Use the color the effect passed in
    #[default]
    Static = MODE_ID_STATIC,
    /// Rainbow spread over the physical LED index
    RainbowByPixel = MODE_ID_RAINBOW_PIXEL,
    /// Rainbow spread over segment lines
    RainbowByLine = MODE_ID_RAINBOW_LINE,
    /// One rainbow step per segment
    RainbowBySegment = MODE_ID_RAINBOW_SEGMENT,
    /// Pixel rainbow shifted by the set's offset counter
    TimeRainbowByPixel = MODE_ID_TIME_RAINBOW_PIXEL,
    /// Line rainbow shifted by the set's offset counter
    TimeRainbowByLine = MODE_ID_TIME_RAINBOW_LINE,
    /// Segment rainbow shifted by the set's offset counter
    TimeRainbowBySegment = MODE_ID_TIME_RAINBOW_SEGMENT,
    /// Palette gradient across segment lines
    GradientByLine = MODE_ID_GRADIENT_LINE,
    /// Palette gradient across the physical LED index
    GradientByPixel = MODE_ID_GRADIENT_PIXEL,
    /// Palette gradient across segments
    GradientBySegment = MODE_ID_GRADIENT_SEGMENT,
}

/// Coordinate a procedural color mode is computed from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Pixel,
    Line,
    Segment,
}

impl ColorMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC => Self::Static,
            MODE_ID_RAINBOW_PIXEL => Self::RainbowByPixel,
            MODE_ID_RAINBOW_LINE => Self::RainbowByLine,
            MODE_ID_RAINBOW_SEGMENT => Self::RainbowBySegment,
            MODE_ID_TIME_RAINBOW_PIXEL => Self::TimeRainbowByPixel,
            MODE_ID_TIME_RAINBOW_LINE => Self::TimeRainbowByLine,
            MODE_ID_TIME_RAINBOW_SEGMENT => Self::TimeRainbowBySegment,
            MODE_ID_GRADIENT_LINE => Self::GradientByLine,
            MODE_ID_GRADIENT_PIXEL => Self::GradientByPixel,
            MODE_ID_GRADIENT_SEGMENT => Self::GradientBySegment,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::RainbowByPixel => MODE_NAME_RAINBOW_PIXEL,
            Self::RainbowByLine => MODE_NAME_RAINBOW_LINE,
            Self::RainbowBySegment => MODE_NAME_RAINBOW_SEGMENT,
            Self::TimeRainbowByPixel => MODE_NAME_TIME_RAINBOW_PIXEL,
            Self::TimeRainbowByLine => MODE_NAME_TIME_RAINBOW_LINE,
            Self::TimeRainbowBySegment => MODE_NAME_TIME_RAINBOW_SEGMENT,
            Self::GradientByLine => MODE_NAME_GRADIENT_LINE,
            Self::GradientByPixel => MODE_NAME_GRADIENT_PIXEL,
            Self::GradientBySegment => MODE_NAME_GRADIENT_SEGMENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_RAINBOW_PIXEL => Some(Self::RainbowByPixel),
            MODE_NAME_RAINBOW_LINE => Some(Self::RainbowByLine),
            MODE_NAME_RAINBOW_SEGMENT => Some(Self::RainbowBySegment),
            MODE_NAME_TIME_RAINBOW_PIXEL => Some(Self::TimeRainbowByPixel),
            MODE_NAME_TIME_RAINBOW_LINE => Some(Self::TimeRainbowByLine),
            MODE_NAME_TIME_RAINBOW_SEGMENT => Some(Self::TimeRainbowBySegment),
            MODE_NAME_GRADIENT_LINE => Some(Self::GradientByLine),
            MODE_NAME_GRADIENT_PIXEL => Some(Self::GradientByPixel),
            MODE_NAME_GRADIENT_SEGMENT => Some(Self::GradientBySegment),
            _ => None,
        }
    }

    /// Check if the mode scrolls with the set's offset counter
    pub const fn uses_offset(self) -> bool {
        matches!(
            self,
            Self::TimeRainbowByPixel
                | Self::TimeRainbowByLine
                | Self::TimeRainbowBySegment
                | Self::GradientByLine
                | Self::GradientByPixel
                | Self::GradientBySegment
        )
    }

    const fn is_rainbow(self) -> bool {
        matches!(
            self,
            Self::RainbowByPixel
                | Self::RainbowByLine
                | Self::RainbowBySegment
                | Self::TimeRainbowByPixel
                | Self::TimeRainbowByLine
                | Self::TimeRainbowBySegment
        )
    }

    const fn source(self) -> Option<Source> {
        match self {
            Self::Static => None,
            Self::RainbowByPixel | Self::TimeRainbowByPixel | Self::GradientByPixel => {
                Some(Source::Pixel)
            }
            Self::RainbowByLine | Self::TimeRainbowByLine | Self::GradientByLine => {
                Some(Source::Line)
            }
            Self::RainbowBySegment | Self::TimeRainbowBySegment | Self::GradientBySegment => {
                Some(Source::Segment)
            }
        }
    }
}

impl From<u8> for ColorMode {
    /// Unknown tags fall back to [`ColorMode::Static`]
    fn from(value: u8) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }
}

/// Resolve the color to write at `location`
///
/// Static mode returns `base` untouched. Procedural modes ignore `base`
/// and derive a color from the pixel index, line or segment. One gradient
/// cycle spans the set's gradient length, or the segment count for
/// segment modes. Scrolling modes stretch that cycle over the offset wrap
/// and add the set's offset counter, which is only read here. Gradient modes on a set without a palette keep `base`.
///
/// Brightness is not applied; dim the returned color afterwards.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_color<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    location: PixelLocation,
    base: Rgb,
    mode: impl Into<ColorMode>,
) -> Rgb {
    let mode = mode.into();
    let Some(source) = mode.source() else {
        return base;
    };

    let (position, length) = match source {
        Source::Pixel => (u32::from(location.index), set.gradient_length()),
        Source::Line => (u32::from(location.line), set.gradient_length()),
        Source::Segment => (
            location.segment as u32,
            u16::try_from(set.num_segments()).unwrap_or(u16::MAX),
        ),
    };
    // Scrolling modes run on the offset counter's circle so its wrap
    // lands on the start of a gradient cycle
    let (position, length) = if mode.uses_offset() {
        let wrap = set.offset_wrap();
        let scaled = u64::from(position) * u64::from(wrap) / u64::from(length.max(1));
        (scaled as u32 + u32::from(set.offset()), wrap)
    } else {
        (position, length)
    };

    if mode.is_rainbow() {
        return hsv2rgb(Hsv {
            hue: wheel8(position, length),
            sat: set.rainbow_saturation(),
            val: set.rainbow_value(),
        });
    }

    if set.palette().is_empty() {
        return base;
    }
    sample_palette(set.palette(), position, length)
}
