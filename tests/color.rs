mod tests {
    use tappulse::{Hsv, hsv_to_rgb};

    #[test]
    fn test_zero_value_is_black() {
        for hue in [0, 120, 240, 359] {
            assert_eq!(hsv_to_rgb(Hsv::new(hue, 1.0, 0.0)), tappulse::Rgb::new(0, 0, 0));
        }
    }

    #[test]
    fn test_hue_wraps_at_360() {
        assert_eq!(
            hsv_to_rgb(Hsv::new(360, 1.0, 1.0)),
            hsv_to_rgb(Hsv::new(0, 1.0, 1.0))
        );
        assert_eq!(
            hsv_to_rgb(Hsv::new(480, 1.0, 0.5)),
            hsv_to_rgb(Hsv::new(120, 1.0, 0.5))
        );
    }

    #[test]
    fn test_channels_clamp_to_unit_range() {
        assert_eq!(
            hsv_to_rgb(Hsv::new(30, 1.0, 2.0)),
            hsv_to_rgb(Hsv::new(30, 1.0, 1.0))
        );
        assert_eq!(
            hsv_to_rgb(Hsv::new(30, 1.0, -0.5)),
            hsv_to_rgb(Hsv::new(30, 1.0, 0.0))
        );
    }

    #[test]
    fn test_primary_hues_dominate() {
        let red = hsv_to_rgb(Hsv::new(0, 1.0, 1.0));
        assert!(red.r > red.g && red.r > red.b);

        let green = hsv_to_rgb(Hsv::new(120, 1.0, 1.0));
        assert!(green.g > green.r && green.g > green.b);

        let blue = hsv_to_rgb(Hsv::new(240, 1.0, 1.0));
        assert!(blue.b > blue.r && blue.b > blue.g);
    }
}
