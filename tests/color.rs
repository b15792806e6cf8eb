mod tests {
    use myrtio_light_segments::color::{
        BLACK, Rgb, blend_colors, dim, rgb_from_u32, sample_palette,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_dim() {
        let color = Rgb::new(200, 100, 50);
        assert_eq!(dim(color, 255), color);
        assert_eq!(dim(color, 0), BLACK);
        assert_eq!(dim(color, 128), Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_from_u32(0xFF_00_00), RED);
    }

    #[test]
    fn test_hex_palette() {
        const SUNSET: [Rgb; 3] = myrtio_light_segments::hex_palette![0xFF0000, 0x0000FF, 0xFFFFFF,];
        assert_eq!(SUNSET, [RED, BLUE, WHITE]);
        assert_eq!(sample_palette(&SUNSET, 2, 6), BLUE);
    }

    #[test]
    fn test_sample_palette_loops() {
        let palette = [RED, BLUE];
        assert_eq!(sample_palette(&palette, 0, 4), RED);
        assert_eq!(sample_palette(&palette, 1, 4), Rgb::new(127, 0, 128));
        assert_eq!(sample_palette(&palette, 2, 4), BLUE);
        // Last step blends back into the first color
        assert_eq!(sample_palette(&palette, 3, 4), Rgb::new(128, 0, 127));
        assert_eq!(sample_palette(&palette, 4, 4), RED);
        assert_eq!(sample_palette(&palette, 6, 4), BLUE);
    }

    #[test]
    fn test_sample_palette_degenerate() {
        assert_eq!(sample_palette(&[], 3, 10), BLACK);
        assert_eq!(sample_palette(&[WHITE], 3, 10), WHITE);
        assert_eq!(sample_palette(&[RED, BLUE], 5, 0), RED);
    }
}
