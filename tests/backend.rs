mod tests {
    use core::convert::Infallible;

    use dice_lights::color::{BLACK, Rgb, WHITE};
    use dice_lights::{
        AnimationId, AnimationLibrary, GpioLeds, Instant, LED_COUNT, LedBackend, Leds,
        PlaybackChannel, RgbLeds, led_index,
    };
    use embedded_hal::digital::{ErrorType, OutputPin};
    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct MockWriter {
        frames: Vec<Vec<Rgb>>,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = Infallible;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    fn pins() -> [MockPin; LED_COUNT] {
        core::array::from_fn(|_| MockPin::default())
    }

    #[test]
    fn test_rgb_writes_only_on_flush() {
        let mut leds: RgbLeds<MockWriter> = RgbLeds::new(MockWriter::default());
        assert_eq!(leds.led_count(), LED_COUNT);

        leds.set_pixel(3, Rgb::new(1, 2, 3));
        assert!(leds.writer().frames.is_empty());
        assert_eq!(leds.pixels()[3], Rgb::new(1, 2, 3));

        leds.flush().unwrap();
        let frame = &leds.writer().frames[0];
        assert_eq!(frame.len(), LED_COUNT);
        assert_eq!(frame[3], Rgb::new(1, 2, 3));
        assert_eq!(frame[0], BLACK);

        leds.clear();
        leds.flush().unwrap();
        assert_eq!(leds.writer().frames[1], vec![BLACK; LED_COUNT]);
    }

    #[test]
    fn test_rgb_global_brightness() {
        let mut leds: RgbLeds<MockWriter> =
            RgbLeds::new(MockWriter::default()).with_brightness(128);
        leds.set_pixel(0, WHITE);
        leds.flush().unwrap();
        assert_eq!(leds.writer().frames[0][0], Rgb::new(128, 128, 128));
        // The buffer keeps the unscaled color
        assert_eq!(leds.pixels()[0], WHITE);
    }

    #[test]
    fn test_gpio_thresholds_colors() {
        let mut leds = GpioLeds::new(pins());
        leds.set_pixel(0, WHITE);
        leds.set_pixel(1, Rgb::new(0, 200, 0));
        leds.set_pixel(2, Rgb::new(127, 127, 127));
        assert!(leds.pins().iter().all(|pin| pin.writes == 0));

        leds.flush().unwrap();
        let high: Vec<bool> = leds.pins().iter().map(|pin| pin.high).collect();
        assert_eq!(&high[..3], [true, true, false]);
        assert!(high[3..].iter().all(|&high| !high));
        assert!(leds.pins().iter().all(|pin| pin.writes == 1));

        leds.clear();
        leds.flush().unwrap();
        assert!(leds.pins().iter().all(|pin| !pin.high));
    }

    #[test]
    fn test_gpio_threshold_and_polarity() {
        let mut leds = GpioLeds::new(pins()).with_threshold(1).with_active_low();
        leds.set_pixel(4, Rgb::new(1, 0, 0));
        leds.flush().unwrap();
        assert!(leds.lit()[4]);
        assert!(!leds.pins()[4].high);
        assert!(leds.pins()[5].high);
    }

    fn facade<B: LedBackend>(backend: B, channel: &PlaybackChannel<2>) -> Leds<'_, B, 2> {
        Leds::new(backend, AnimationLibrary::die(), channel.receiver())
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_face_one_pulse_through_rgb_chain() {
        let channel = PlaybackChannel::new();
        let mut leds = facade(RgbLeds::<MockWriter>::new(MockWriter::default()), &channel);
        leds.init().unwrap();
        leds.play(AnimationId::FaceOneSlowPulse, at(0)).unwrap();

        assert_eq!(leds.update(at(1500)), Ok(1));
        let mut expected = vec![BLACK; LED_COUNT];
        expected[led_index(0, 0)] = WHITE;
        let frames = &leds.backend().writer().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], expected);

        assert_eq!(leds.update(at(3100)), Ok(0));
        assert_eq!(leds.backend().writer().frames.len(), 2);
    }

    #[test]
    fn test_face_one_pulse_through_gpio_pins() {
        let channel = PlaybackChannel::new();
        let mut leds = facade(GpioLeds::new(pins()), &channel);
        leds.init().unwrap();
        leds.play(AnimationId::FaceOneSlowPulse, at(0)).unwrap();

        assert_eq!(leds.update(at(1500)), Ok(1));
        let high: Vec<bool> = leds.backend().pins().iter().map(|pin| pin.high).collect();
        let mut expected = vec![false; LED_COUNT];
        expected[led_index(0, 0)] = true;
        assert_eq!(high, expected);

        // The finished pulse leaves the pin as it was
        assert_eq!(leds.update(at(3100)), Ok(0));
        assert!(leds.backend().pins()[led_index(0, 0)].high);
        assert!(leds.backend().pins().iter().all(|pin| pin.writes == 2));
    }

    #[test]
    #[should_panic(expected = "LED backend must drive every die LED")]
    fn test_facade_rejects_short_chain() {
        let channel = PlaybackChannel::new();
        let _ = facade(RgbLeds::<MockWriter, 6>::new(MockWriter::default()), &channel);
    }
}
