mod tests {
    use embassy_time::{Duration, Instant};
    use sonar_light_composer::StepClock;

    #[test]
    fn test_first_poll_is_due() {
        let mut clock = StepClock::new(Duration::from_millis(50));
        assert_eq!(clock.next_step(), None);
        assert!(clock.poll(Instant::from_millis(7)));
        assert_eq!(clock.next_step(), Some(Instant::from_millis(57)));
    }

    #[test]
    fn test_steps_follow_interval() {
        let mut clock = StepClock::new(Duration::from_millis(50));
        assert!(clock.poll(Instant::from_millis(0)));
        assert!(!clock.poll(Instant::from_millis(10)));
        assert!(!clock.poll(Instant::from_millis(49)));
        assert!(clock.poll(Instant::from_millis(50)));
        // A late poll keeps the cadence
        assert!(clock.poll(Instant::from_millis(120)));
        assert_eq!(clock.next_step(), Some(Instant::from_millis(150)));
    }

    #[test]
    fn test_drift_correction_skips_backlog() {
        let mut clock = StepClock::new(Duration::from_millis(50));
        assert!(clock.poll(Instant::from_millis(0)));
        assert!(clock.poll(Instant::from_millis(1_000)));
        assert_eq!(clock.next_step(), Some(Instant::from_millis(1_050)));
        assert!(!clock.poll(Instant::from_millis(1_010)));
    }

    #[test]
    fn test_delay_and_reset() {
        let mut clock = StepClock::new(Duration::from_millis(50));
        clock.delay(Duration::from_millis(100));
        assert_eq!(clock.next_step(), None);

        assert!(clock.poll(Instant::from_millis(0)));
        clock.delay(Duration::from_millis(100));
        assert!(!clock.poll(Instant::from_millis(50)));
        assert!(clock.poll(Instant::from_millis(150)));

        clock.reset();
        assert!(clock.poll(Instant::from_millis(151)));
    }
}
