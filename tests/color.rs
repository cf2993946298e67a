mod tests {
    use dice_lights::color::{BLACK, Rgb, WHITE, intensity, tinted};

    const ORANGE: Rgb = Rgb {
        r: 255,
        g: 128,
        b: 0,
    };

    #[test]
    fn test_white_tint_duplicates_sample() {
        for value in [0u8, 1, 127, 200, 255] {
            assert_eq!(tinted(WHITE, value), Rgb::new(value, value, value));
        }
    }

    #[test]
    fn test_tint_scales_each_channel() {
        assert_eq!(tinted(ORANGE, 255), ORANGE);
        assert_eq!(tinted(ORANGE, 128), Rgb::new(128, 64, 0));
        assert_eq!(tinted(ORANGE, 0), BLACK);
    }

    #[test]
    fn test_intensity() {
        assert_eq!(intensity(BLACK), 0);
        assert_eq!(intensity(ORANGE), 255);
        assert_eq!(intensity(Rgb::new(3, 90, 12)), 90);
    }
}
