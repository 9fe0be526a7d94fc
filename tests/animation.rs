mod common;

mod tests {
    use neopixel_equalizer::{AnimationClock, DisplayMode, ModeMachine, RainbowColor};

    use crate::common::MockTimer;

    #[test]
    fn test_walk_hands_off_green_blue_red() {
        let ceiling = 4;
        let mut color = RainbowColor::seed(ceiling);

        // Green full, blue rises
        color.advance(ceiling);
        assert_eq!(color, RainbowColor::new(0, 4, 1));

        // Blue reaches the ceiling and green starts draining in the same tick
        for _ in 0..3 {
            color.advance(ceiling);
        }
        assert_eq!(color, RainbowColor::new(0, 3, 4));

        for _ in 0..3 {
            color.advance(ceiling);
        }
        assert_eq!(color, RainbowColor::new(0, 0, 4));

        // Red rises next
        color.advance(ceiling);
        assert_eq!(color, RainbowColor::new(1, 0, 4));
    }

    #[test]
    fn test_walk_is_bounded_and_periodic() {
        for ceiling in [1u8, 9, 100, 255] {
            let seed = RainbowColor::seed(ceiling);
            let period = RainbowColor::period(ceiling);
            let mut color = seed;
            for tick in 1..=period {
                color.advance(ceiling);
                assert!(color.r <= ceiling && color.g <= ceiling && color.b <= ceiling);
                if tick < period {
                    assert_ne!(color, seed, "ceiling {ceiling} repeated at tick {tick}");
                }
            }
            assert_eq!(color, seed, "ceiling {ceiling}");
        }
    }

    #[test]
    fn test_walk_visits_every_primary() {
        let ceiling = 255;
        let mut color = RainbowColor::seed(ceiling);
        let mut seen = [false; 3];
        for _ in 0..RainbowColor::period(ceiling) {
            color.advance(ceiling);
            seen[0] |= color == RainbowColor::new(255, 0, 0);
            seen[1] |= color == RainbowColor::new(0, 255, 0);
            seen[2] |= color == RainbowColor::new(0, 0, 255);
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_clock_ignores_ticks_while_disarmed() {
        let clock = AnimationClock::new();
        clock.on_tick();
        clock.on_tick();
        assert!(!clock.is_armed());
        assert_eq!(clock.snapshot(), RainbowColor::default());
    }

    #[test]
    fn test_entering_rainbow_arms_and_seeds() {
        let clock = AnimationClock::new();
        let mut modes = ModeMachine::new(DisplayMode::Default, &clock, MockTimer::default(), 255);
        assert!(!modes.timer().enabled);

        modes.transition(DisplayMode::Rainbow);
        assert!(modes.timer().enabled);
        assert!(clock.is_armed());
        assert_eq!(clock.snapshot(), RainbowColor::seed(255));

        clock.on_tick();
        assert_eq!(clock.snapshot(), RainbowColor::new(0, 255, 1));
    }

    #[test]
    fn test_leaving_rainbow_disarms() {
        let clock = AnimationClock::new();
        let mut modes = ModeMachine::new(DisplayMode::Rainbow, &clock, MockTimer::default(), 255);
        clock.on_tick();
        let frozen = clock.snapshot();

        modes.transition(DisplayMode::Shine);
        assert_eq!(modes.mode(), DisplayMode::Shine);
        assert!(!modes.timer().enabled);
        assert!(!clock.is_armed());

        clock.on_tick();
        assert_eq!(clock.snapshot(), frozen);
    }

    #[test]
    fn test_reentering_rainbow_restarts_walk() {
        let clock = AnimationClock::new();
        let mut modes = ModeMachine::new(DisplayMode::Rainbow, &clock, MockTimer::default(), 10);
        for _ in 0..25 {
            clock.on_tick();
        }
        assert_ne!(clock.snapshot(), RainbowColor::seed(10));

        modes.transition(DisplayMode::Default);
        modes.transition(DisplayMode::Rainbow);
        assert_eq!(clock.snapshot(), RainbowColor::seed(10));
        assert_eq!(modes.timer().enables, 2);
    }

    #[test]
    fn test_arm_uses_machine_ceiling() {
        let clock = AnimationClock::new();
        let mut modes = ModeMachine::new(DisplayMode::Default, &clock, MockTimer::default(), 40);

        modes.transition(DisplayMode::Rainbow);
        assert_eq!(clock.ceiling(), 40);
        assert_eq!(clock.snapshot(), RainbowColor::seed(40));

        for _ in 0..RainbowColor::period(40) {
            clock.on_tick();
            let color = clock.snapshot();
            assert!(color.r <= 40 && color.g <= 40 && color.b <= 40);
        }
        assert_eq!(clock.snapshot(), RainbowColor::seed(40));
    }
}
