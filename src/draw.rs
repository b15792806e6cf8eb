//! Writing colors through a segment set
//!
//! Every write resolves the color mode first and applies the set's
//! brightness afterwards, so dimming never shifts a computed hue.

use crate::{
    color::{Rgb, dim},
    color_mode::{ColorMode, resolve_color},
    error::AddressError,
    segment::{PixelLocation, SegmentSet},
};

/// Check that `leds` covers every LED the set can address
fn check_buffer<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &[Rgb],
) -> Result<(), AddressError> {
    if leds.len() < usize::from(set.num_leds()) {
        return Err(AddressError::BufferTooShort {
            len: leds.len(),
            num_leds: set.num_leds(),
        });
    }
    Ok(())
}

/// Final color for a location: color mode, then brightness
pub fn output_color<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    location: PixelLocation,
    color: Rgb,
    mode: impl Into<ColorMode>,
) -> Rgb {
    dim(resolve_color(set, location, color, mode), set.brightness())
}

/// Write a single pixel located by segment and offset
///
/// Mirrored segments also receive the color on the twin pixel.
pub fn set_pixel<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &mut [Rgb],
    segment: usize,
    offset: u16,
    color: Rgb,
    mode: impl Into<ColorMode>,
) -> Result<(), AddressError> {
    check_buffer(set, leds)?;
    let location = set.locate(segment, offset)?;
    let twin = set.segment_pixel_twin(segment, offset)?;
    write(set, leds, location, twin, color, mode.into());
    Ok(())
}

/// Fill a whole segment
pub fn fill_segment<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &mut [Rgb],
    segment: usize,
    color: Rgb,
    mode: impl Into<ColorMode>,
) -> Result<(), AddressError> {
    check_buffer(set, leds)?;
    let mode = mode.into();
    for offset in 0..set.total_segment_length(segment)? {
        let location = set.locate(segment, offset)?;
        let twin = set.segment_pixel_twin(segment, offset)?;
        write(set, leds, location, twin, color, mode);
    }
    Ok(())
}

/// Fill one segment line across every segment
///
/// Shorter segments are reached through the scaled line mapping, so
/// several lines may land on the same pixel of a short segment.
pub fn fill_line<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &mut [Rgb],
    line: u16,
    color: Rgb,
    mode: impl Into<ColorMode>,
) -> Result<(), AddressError> {
    check_buffer(set, leds)?;
    let mode = mode.into();
    for segment in 0..set.num_segments() {
        if set.total_segment_length(segment)? == 0 {
            continue;
        }
        let offset = set.offset_from_line_scaled(line, segment)?;
        let location = PixelLocation {
            index: set.segment_pixel(segment, offset)?,
            segment,
            line,
        };
        let twin = set.segment_pixel_twin(segment, offset)?;
        write(set, leds, location, twin, color, mode);
    }
    Ok(())
}

/// Fill every segment of the set
pub fn fill_set<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &mut [Rgb],
    color: Rgb,
    mode: impl Into<ColorMode>,
) -> Result<(), AddressError> {
    let mode = mode.into();
    for segment in 0..set.num_segments() {
        fill_segment(set, leds, segment, color, mode)?;
    }
    Ok(())
}

/// Color currently shown by a segment
///
/// Effects that paint a segment in one color read it back from the
/// segment's last logical pixel.
pub fn representative_color<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &[Rgb],
    segment: usize,
) -> Result<Rgb, AddressError> {
    check_buffer(set, leds)?;
    let length = set.total_segment_length(segment)?;
    let index = set.segment_pixel(segment, length.saturating_sub(1))?;
    Ok(leds[usize::from(index)])
}

fn write<const MAX_SEGMENTS: usize>(
    set: &SegmentSet<'_, MAX_SEGMENTS>,
    leds: &mut [Rgb],
    location: PixelLocation,
    twin: Option<u16>,
    color: Rgb,
    mode: ColorMode,
) {
    let color = output_color(set, location, color, mode);
    // Indices are validated against num_leds, and leds is at least that long
    leds[usize::from(location.index)] = color;
    if let Some(twin) = twin {
        leds[usize::from(twin)] = color;
    }
}
