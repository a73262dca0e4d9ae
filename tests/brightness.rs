mod common;

mod tests {
    use sonar_light_composer::brightness::to_u8;
    use sonar_light_composer::{BrightnessConfig, BrightnessFilter, BrightnessLevels};

    use super::common::assert_close;

    const MIN: f32 = 0.10;
    const MAX: f32 = 0.95;

    fn filter() -> BrightnessFilter {
        BrightnessFilter::new(BrightnessConfig::DEFAULT)
    }

    fn settle(filter: &BrightnessFilter, distance: f32, ticks: usize) -> BrightnessLevels {
        let mut levels = BrightnessLevels::initial(filter.config());
        for _ in 0..ticks {
            levels = filter.update(distance, levels);
        }
        levels
    }

    #[test]
    fn test_initial_levels() {
        let levels = BrightnessLevels::initial(&BrightnessConfig::DEFAULT);
        assert_eq!(levels.current, MIN);
        assert_eq!(levels.last_set, MAX);
    }

    #[test]
    fn test_band_edges() {
        let filter = filter();
        assert!(filter.in_band(10.0));
        assert!(filter.in_band(40.0));
        assert!(!filter.in_band(9.99));
        assert!(!filter.in_band(40.01));
    }

    #[test]
    fn test_target_closer_is_brighter() {
        let filter = filter();
        assert_close(filter.target(10.0), MAX);
        assert_close(filter.target(40.0), MIN);
        assert_close(filter.target(25.0), MIN + (MAX - MIN) * 0.5);
    }

    #[test]
    fn test_in_band_update_eases_and_records() {
        let filter = filter();
        let levels = filter.update(25.0, BrightnessLevels::initial(filter.config()));
        assert_close(levels.current, 0.1 + (0.525 - 0.1) * 0.75);
        assert_eq!(levels.current, levels.last_set);
    }

    #[test]
    fn test_converges_at_band_midpoint() {
        let filter = filter();
        let levels = settle(&filter, 25.0, 40);
        assert_close(levels.current, MIN + (MAX - MIN) * 0.5);
    }

    #[test]
    fn test_freezes_beyond_far_edge() {
        let filter = filter();
        let held = settle(&filter, 25.0, 40);
        let mut levels = held;
        for _ in 0..100 {
            levels = filter.update(60.0, levels);
            assert_eq!(levels, held);
        }
    }

    #[test]
    fn test_below_band_returns_to_last_set() {
        let filter = filter();
        let levels = BrightnessLevels {
            current: 0.3,
            last_set: 0.8,
        };
        let next = filter.update(5.0, levels);
        assert_close(next.current, 0.3 + (0.8 - 0.3) * 0.75);
        assert_eq!(next.last_set, 0.8);

        let mut levels = next;
        for _ in 0..40 {
            levels = filter.update(5.0, levels);
        }
        assert_close(levels.current, 0.8);
    }

    #[test]
    fn test_in_band_output_stays_in_range() {
        let filter = filter();
        let mut levels = BrightnessLevels::initial(filter.config());
        for step in 0..=300 {
            let distance = 10.0 + (step % 31) as f32;
            levels = filter.update(distance, levels);
            assert!((MIN..=MAX).contains(&levels.current), "{levels:?}");
        }
    }

    #[test]
    fn test_converged_brightness_non_increasing_with_distance() {
        let filter = filter();
        let mut previous = f32::INFINITY;
        for distance in 10..=40 {
            let current = settle(&filter, distance as f32, 60).current;
            assert!(current <= previous + 1e-6, "{distance} cm: {current} > {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_easing_approaches_without_overshoot() {
        for easing in [0.1, 0.5, 0.75, 1.0] {
            let filter = BrightnessFilter::new(BrightnessConfig {
                easing,
                ..BrightnessConfig::DEFAULT
            });
            let target = 0.7;
            let mut current = 0.15;
            for _ in 0..20 {
                let next = filter.ease(current, target);
                if current != target {
                    assert!((next - target).abs() < (current - target).abs());
                }
                assert!(next <= target);
                current = next;
            }
        }
    }

    #[test]
    fn test_degenerate_band_maps_to_max() {
        let filter = BrightnessFilter::new(BrightnessConfig {
            near_cm: 20.0,
            far_cm: 20.0,
            ..BrightnessConfig::DEFAULT
        });
        assert_eq!(filter.target(20.0), MAX);
    }

    #[test]
    fn test_to_u8() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(0.95), 242);
        assert_eq!(to_u8(2.0), 255);
        assert_eq!(to_u8(-1.0), 0);
    }
}
