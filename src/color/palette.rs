use crate::color::{BLACK, Rgb, blend_colors};

/// A looping sequence of reference colors
pub type Palette<'a> = &'a [Rgb];

/// Build a palette array from `0xRRGGBB` literals
///
/// ```
/// use myrtio_light_segments::{Rgb, hex_palette};
///
/// const EMBER: [Rgb; 2] = hex_palette![0xFF2000, 0x400000];
/// assert_eq!(EMBER[0], Rgb::new(0xFF, 0x20, 0x00));
/// ```
#[macro_export]
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $($crate::color::rgb_from_u32($color)),*
        ]
    };
}

/// Sample a looping palette gradient.
///
/// The gradient is `length` steps long and passes through every palette
/// color once, blending the last color back into the first so that
/// `step` and `step + length` produce the same color.
///
/// An empty palette samples as black, a single color palette is flat.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_palette(palette: &[Rgb], step: u32, length: u16) -> Rgb {
    let colors = palette.len();
    match colors {
        0 => return BLACK,
        1 => return palette[0],
        _ => {}
    }

    let length = u64::from(length.max(1));
    let step = u64::from(step) % length;

    // 8.8 fixed-point position across the palette
    let scaled = (step * colors as u64 * 256) / length;
    let index = (scaled >> 8) as usize % colors;
    let local_t = (scaled & 0xFF) as u8;

    blend_colors(palette[index], palette[(index + 1) % colors], local_t)
}
