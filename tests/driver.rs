mod tests {
    use smart_leds::{RGB8, SmartLedsWrite, brightness};
    use sonar_light_composer::{PixelStrip, Rgb, SmartLedsStrip};

    #[derive(Default)]
    struct MockWriter {
        frames: Vec<Vec<RGB8>>,
        fail: bool,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    const FRAME: [Rgb; 3] = [
        Rgb { r: 255, g: 0, b: 0 },
        Rgb {
            r: 10,
            g: 200,
            b: 30,
        },
        Rgb { r: 0, g: 0, b: 0 },
    ];

    #[test]
    fn test_full_brightness_passthrough() {
        let mut strip = SmartLedsStrip::new(MockWriter::default());
        assert_eq!(strip.brightness(), 255);

        strip.write(&FRAME);
        assert_eq!(strip.writer().frames, vec![FRAME.to_vec()]);
    }

    #[test]
    fn test_brightness_scales_frame() {
        let mut strip = SmartLedsStrip::new(MockWriter::default());
        strip.set_brightness(0.5);
        assert_eq!(strip.brightness(), 128);

        strip.write(&FRAME);
        let expected: Vec<RGB8> = brightness(FRAME.iter().copied(), 128).collect();
        assert_eq!(strip.into_inner().frames, vec![expected]);
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut strip = SmartLedsStrip::new(MockWriter::default());
        strip.set_brightness(1.7);
        assert_eq!(strip.brightness(), 255);
        strip.set_brightness(-0.2);
        assert_eq!(strip.brightness(), 0);
    }

    #[test]
    fn test_write_error_is_swallowed() {
        let mut strip = SmartLedsStrip::new(MockWriter {
            frames: Vec::new(),
            fail: true,
        });
        strip.write(&FRAME);
        assert!(strip.writer().frames.is_empty());
    }
}
