mod tests {
    use dice_lights::curve::{
        CONSTANT_OFF, CONSTANT_ON, Curve, CurveError, Keyframe, MAX_KEYFRAMES, ON_128_OFF_128,
        RAMP_UP_DOWN,
    };

    const CANONICAL: [&Curve; 4] = [&CONSTANT_ON, &CONSTANT_OFF, &RAMP_UP_DOWN, &ON_128_OFF_128];

    #[test]
    fn test_sample_endpoints_match_keyframes() {
        for curve in CANONICAL {
            assert_eq!(curve.sample(0), curve.first().value);
            assert_eq!(curve.sample(255), curve.last().value);
        }
    }

    #[test]
    fn test_constant_curves() {
        for t in 0..=255u8 {
            assert_eq!(CONSTANT_ON.sample(t), 255);
            assert_eq!(CONSTANT_OFF.sample(t), 0);
        }
    }

    #[test]
    fn test_ramp_up_down() {
        assert_eq!(RAMP_UP_DOWN.sample(0), 0);
        assert_eq!(RAMP_UP_DOWN.sample(127), 255);
        assert_eq!(RAMP_UP_DOWN.sample(255), 0);
        assert_eq!(RAMP_UP_DOWN.sample(64), 128);
        assert_eq!(RAMP_UP_DOWN.sample(191), 128);

        for t in 0..127u8 {
            assert!(RAMP_UP_DOWN.sample(t) <= RAMP_UP_DOWN.sample(t + 1));
        }
        for t in 127..255u8 {
            assert!(RAMP_UP_DOWN.sample(t) >= RAMP_UP_DOWN.sample(t + 1));
        }
    }

    #[test]
    fn test_on_128_off_128() {
        assert_eq!(ON_128_OFF_128.sample(0), 255);
        assert_eq!(ON_128_OFF_128.sample(64), 255);
        assert_eq!(ON_128_OFF_128.sample(127), 255);
        assert_eq!(ON_128_OFF_128.sample(128), 0);
        assert_eq!(ON_128_OFF_128.sample(200), 0);
    }

    #[test]
    fn test_custom_curve() {
        let curve = Curve::try_new(&[
            Keyframe::new(0, 100),
            Keyframe::new(100, 200),
            Keyframe::new(255, 50),
        ])
        .unwrap();
        assert_eq!(curve.keyframes().len(), 3);
        assert_eq!(curve.sample(50), 150);
        assert_eq!(curve.sample(100), 200);
        assert_eq!(curve.sample(255), 50);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(
            Curve::try_new(&[Keyframe::new(0, 0)]),
            Err(CurveError::TooFewKeyframes)
        );
        assert_eq!(
            Curve::try_new(&[Keyframe::new(1, 0), Keyframe::new(255, 0)]),
            Err(CurveError::StartNotAtZero)
        );
        assert_eq!(
            Curve::try_new(&[Keyframe::new(0, 0), Keyframe::new(254, 0)]),
            Err(CurveError::EndNotAtMax)
        );
        assert_eq!(
            Curve::try_new(&[
                Keyframe::new(0, 0),
                Keyframe::new(100, 10),
                Keyframe::new(100, 20),
                Keyframe::new(255, 0),
            ]),
            Err(CurveError::NotAscending(2))
        );

        let too_many = [Keyframe::new(0, 0); MAX_KEYFRAMES + 1];
        assert_eq!(Curve::try_new(&too_many), Err(CurveError::TooManyKeyframes));
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_malformed_table() {
        let _ = Curve::new(&[Keyframe::new(0, 0), Keyframe::new(0, 255)]);
    }
}
