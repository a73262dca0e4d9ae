mod tests {
    use embassy_time::{Duration, Instant};
    use sonar_light_composer::{GestureConfig, GestureDetector};

    fn detector() -> GestureDetector {
        GestureDetector::new(GestureConfig::DEFAULT)
    }

    #[test]
    fn test_initial_state() {
        let detector = detector();
        assert_eq!(detector.last_distance(), 0.0);
        assert_eq!(detector.last_gesture(), Instant::from_millis(0));
    }

    #[test]
    fn test_zone_includes_edge() {
        let detector = detector();
        assert!(detector.in_zone(0.0));
        assert!(detector.in_zone(10.0));
        assert!(!detector.in_zone(10.01));
    }

    #[test]
    fn test_cooldown_gates_first_gesture() {
        let mut detector = detector();
        detector.track(50.0);
        assert!(!detector.detect(2.0, Instant::from_millis(400)));
        assert!(!detector.detect(2.0, Instant::from_millis(1_000)));
        assert!(detector.detect(2.0, Instant::from_millis(1_001)));
        assert_eq!(detector.last_gesture(), Instant::from_millis(1_001));
    }

    #[test]
    fn test_requires_abrupt_motion() {
        let mut detector = detector();
        detector.track(8.0);
        assert!(!detector.detect(4.0, Instant::from_millis(5_000)));
        assert!(!detector.detect(3.0, Instant::from_millis(5_000)));
        assert!(detector.detect(2.9, Instant::from_millis(5_000)));
    }

    #[test]
    fn test_ignores_readings_outside_zone() {
        let mut detector = detector();
        detector.track(50.0);
        assert!(!detector.detect(12.0, Instant::from_millis(5_000)));
        assert_eq!(detector.last_gesture(), Instant::from_millis(0));
    }

    #[test]
    fn test_never_fires_twice_within_cooldown() {
        let mut detector = detector();
        let mut fired_at: Vec<u64> = Vec::new();
        let mut distance = 2.0;

        for tick in 0..100u64 {
            let now = Instant::from_millis(tick * 50);
            distance = if distance < 5.0 { 9.0 } else { 2.0 };
            if detector.detect(distance, now) {
                fired_at.push(now.as_millis());
            }
            detector.track(distance);
        }

        assert!(fired_at.len() >= 3);
        for pair in fired_at.windows(2) {
            assert!(pair[1] - pair[0] > 1_000, "gestures at {pair:?}");
        }
    }

    #[test]
    fn test_detect_does_not_track() {
        let mut detector = detector();
        detector.track(30.0);
        let _ = detector.detect(5.0, Instant::from_millis(2_000));
        assert_eq!(detector.last_distance(), 30.0);
    }

    #[test]
    fn test_custom_cooldown() {
        let mut detector = GestureDetector::new(GestureConfig {
            cooldown: Duration::from_millis(100),
            ..GestureConfig::DEFAULT
        });
        detector.track(20.0);
        assert!(detector.detect(1.0, Instant::from_millis(101)));
        detector.track(1.0);
        assert!(!detector.detect(9.0, Instant::from_millis(150)));
        assert!(detector.detect(9.0, Instant::from_millis(202)));
    }
}
