mod palette;
mod utils;

pub use palette::{Palette, sample_palette};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{BLACK, blend_colors, dim, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
