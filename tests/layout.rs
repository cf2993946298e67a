mod tests {
    use std::collections::BTreeSet;

    use dice_lights::{FaceLayout, LED_COUNT, led_index};

    fn assert_bijective(layout: FaceLayout) {
        let mut seen = BTreeSet::new();
        for face in 0..layout.faces() {
            for led in 0..layout.leds_on_face(face) {
                let index = layout.index(face, led);
                assert!(seen.insert(index), "duplicate index {}", index);
                assert_eq!(layout.coordinate(index), Some((face, led)));
            }
        }
        assert_eq!(seen.len(), layout.led_count());
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), (0..layout.led_count()).collect::<Vec<_>>());
        assert_eq!(layout.coordinate(layout.led_count()), None);
    }

    #[test]
    fn test_die_layout() {
        assert_eq!(LED_COUNT, 21);
        assert_eq!(FaceLayout::DIE.faces(), 6);
        assert_eq!(led_index(0, 0), 0);
        assert_eq!(led_index(1, 1), 2);
        assert_eq!(led_index(5, 0), 15);
        assert_eq!(led_index(5, 5), 20);
        assert_bijective(FaceLayout::DIE);
    }

    #[test]
    fn test_grid_layout() {
        let layout = FaceLayout::Grid {
            faces: 4,
            leds_per_face: 5,
        };
        assert_eq!(layout.led_count(), 20);
        assert_eq!(layout.index(2, 3), 13);
        assert!(!layout.contains(4, 0));
        assert!(!layout.contains(0, 5));
        assert_bijective(layout);
    }

    #[test]
    #[should_panic]
    fn test_missing_face_panics() {
        let _ = led_index(6, 0);
    }

    #[test]
    #[should_panic]
    fn test_missing_led_panics() {
        let _ = led_index(2, 3);
    }
}
