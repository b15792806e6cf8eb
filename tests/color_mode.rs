mod tests {
    use myrtio_light_segments::{
        ColorMode, Hsv, PixelLocation, Rgb, Segment, SegmentSection, SegmentSet,
        SegmentSetConfig, color::hsv2rgb, hex_palette, resolve_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const PALETTE: [Rgb; 2] = hex_palette![0xFF0000, 0x0000FF];

    const STRIP: [SegmentSection; 1] = [SegmentSection::new(0, 20)];
    const LEFT: [SegmentSection; 1] = [SegmentSection::new(0, 10)];
    const RIGHT: [SegmentSection; 1] = [SegmentSection::new(10, 10)];

    fn strip(config: &SegmentSetConfig<'static>) -> SegmentSet<'static, 2> {
        SegmentSet::new(&[Segment::new(&STRIP)], config).unwrap()
    }

    fn at(index: u16) -> PixelLocation {
        PixelLocation {
            index,
            segment: 0,
            line: index,
        }
    }

    fn hue(hue: u8) -> Rgb {
        hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        })
    }

    #[test]
    fn test_static_is_identity() {
        let set = strip(&SegmentSetConfig::new(20).with_palette(&PALETTE));
        for index in 0..20 {
            assert_eq!(resolve_color(&set, at(index), RED, ColorMode::Static), RED);
            assert_eq!(resolve_color(&set, at(index), BLUE, 0u8), BLUE);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_static() {
        let set = strip(&SegmentSetConfig::new(20));
        assert_eq!(ColorMode::from_raw(200), None);
        assert_eq!(ColorMode::from(200u8), ColorMode::Static);
        assert_eq!(resolve_color(&set, at(3), RED, 200u8), RED);
    }

    #[test]
    fn test_mode_ids_and_names() {
        assert_eq!(ColorMode::from_raw(1), Some(ColorMode::RainbowByPixel));
        assert_eq!(ColorMode::from_raw(7), Some(ColorMode::GradientByLine));
        assert_eq!(ColorMode::TimeRainbowByLine as u8, 5);
        assert_eq!(ColorMode::GradientByLine.as_str(), "gradient_line");
        assert_eq!(
            ColorMode::parse_from_str("time_rainbow_pixel"),
            Some(ColorMode::TimeRainbowByPixel)
        );
        assert_eq!(ColorMode::parse_from_str("sparkle"), None);
    }

    #[test]
    fn test_rainbow_by_pixel() {
        let set = strip(&SegmentSetConfig::new(20).with_gradient_length(10));
        assert_eq!(resolve_color(&set, at(0), BLUE, ColorMode::RainbowByPixel), hue(0));
        assert_eq!(resolve_color(&set, at(5), BLUE, ColorMode::RainbowByPixel), hue(128));
    }

    #[test]
    fn test_rainbow_is_periodic() {
        let set = strip(&SegmentSetConfig::new(20).with_gradient_length(10));
        for mode in [ColorMode::RainbowByPixel, ColorMode::RainbowByLine] {
            for index in 0..10 {
                assert_eq!(
                    resolve_color(&set, at(index), RED, mode),
                    resolve_color(&set, at(index + 10), RED, mode)
                );
            }
        }
    }

    #[test]
    fn test_rainbow_uses_set_saturation_and_value() {
        let set = strip(
            &SegmentSetConfig::new(20)
                .with_gradient_length(10)
                .with_rainbow(0, 100),
        );
        assert_eq!(
            resolve_color(&set, at(4), RED, ColorMode::RainbowByPixel),
            hsv2rgb(Hsv {
                hue: 102,
                sat: 0,
                val: 100
            })
        );
    }

    #[test]
    fn test_time_rainbow_reads_offset() {
        let mut set = strip(&SegmentSetConfig::new(20).with_gradient_length(10));
        set.set_offset(3);

        assert_eq!(
            resolve_color(&set, at(2), RED, ColorMode::TimeRainbowByPixel),
            resolve_color(&set, at(5), RED, ColorMode::RainbowByPixel)
        );
        // Positional modes ignore the offset
        assert_eq!(resolve_color(&set, at(2), RED, ColorMode::RainbowByPixel), hue(51));
        assert_eq!(set.offset(), 3);
    }

    #[test]
    fn test_gradient_by_line() {
        let mut set = strip(
            &SegmentSetConfig::new(20)
                .with_palette(&PALETTE)
                .with_gradient_length(4),
        );
        assert_eq!(resolve_color(&set, at(0), BLUE, ColorMode::GradientByLine), RED);
        assert_eq!(resolve_color(&set, at(2), RED, ColorMode::GradientByLine), BLUE);

        set.advance_offset(2);
        assert_eq!(resolve_color(&set, at(0), RED, ColorMode::GradientByLine), BLUE);
    }

    #[test]
    fn test_gradient_defaults_to_line_count() {
        let set = strip(&SegmentSetConfig::new(20).with_palette(&PALETTE));
        assert_eq!(set.gradient_length(), 20);
        assert_eq!(resolve_color(&set, at(10), RED, ColorMode::GradientByLine), BLUE);
    }

    #[test]
    fn test_gradient_without_palette_keeps_base() {
        let set = strip(&SegmentSetConfig::new(20));
        assert_eq!(resolve_color(&set, at(7), RED, ColorMode::GradientByPixel), RED);
    }

    #[test]
    fn test_segment_modes() {
        let set: SegmentSet<'_, 2> = SegmentSet::new(
            &[Segment::new(&LEFT), Segment::new(&RIGHT)],
            &SegmentSetConfig::new(20).with_palette(&PALETTE),
        )
        .unwrap();
        let second = PixelLocation {
            index: 12,
            segment: 1,
            line: 2,
        };
        assert_eq!(resolve_color(&set, second, RED, ColorMode::RainbowBySegment), hue(128));
        assert_eq!(resolve_color(&set, second, RED, ColorMode::GradientBySegment), BLUE);
    }

    fn scrolling_pair() -> SegmentSet<'static, 2> {
        const HEAD: [SegmentSection; 1] = [SegmentSection::new(0, 5)];
        const TAIL: [SegmentSection; 1] = [SegmentSection::new(5, 5)];
        SegmentSet::new(
            &[Segment::new(&HEAD), Segment::new(&TAIL)],
            &SegmentSetConfig::new(10).with_palette(&PALETTE),
        )
        .unwrap()
    }

    fn segment_colors(mode: ColorMode) -> [Rgb; 7] {
        let mut set = scrolling_pair();
        let first = PixelLocation {
            index: 0,
            segment: 0,
            line: 0,
        };
        let mut colors = [RED; 7];
        for color in &mut colors {
            *color = resolve_color(&set, first, RED, mode);
            set.advance_offset(1);
        }
        colors
    }

    #[test]
    fn test_segment_modes_scroll_across_offset_wrap() {
        for mode in [ColorMode::TimeRainbowBySegment, ColorMode::GradientBySegment] {
            let colors = segment_colors(mode);
            for tick in 1..colors.len() {
                assert_ne!(colors[tick], colors[tick - 1], "{mode:?} tick {tick}");
            }
            // The counter wraps after five steps and the cycle starts over
            assert_eq!(colors[5], colors[0], "{mode:?}");
            assert_eq!(colors[6], colors[1], "{mode:?}");
        }
    }

    #[test]
    fn test_time_rainbow_by_segment_spreads_over_offset_wrap() {
        let mut set = scrolling_pair();
        let head = PixelLocation {
            index: 0,
            segment: 0,
            line: 0,
        };
        let tail = PixelLocation {
            index: 5,
            segment: 1,
            line: 0,
        };
        assert_eq!(set.offset_wrap(), 5);
        let tail_color = resolve_color(&set, tail, RED, ColorMode::TimeRainbowBySegment);

        set.set_offset(2);
        assert_eq!(
            resolve_color(&set, head, RED, ColorMode::TimeRainbowBySegment),
            tail_color
        );
        assert_eq!(tail_color, hue(102));
    }
}
