mod tests {
    use embassy_time::{Duration, Instant};
    use tappulse::{
        App, AppConfig, Button, ButtonInput, ButtonMask, Hsv, LED_COUNT, LedDriver, TickScheduler,
    };

    struct NoButtons;

    impl ButtonInput for NoButtons {
        fn read(&mut self, _query: ButtonMask) -> ButtonMask {
            ButtonMask::EMPTY
        }
    }

    /// Presses the beat button on the second poll only.
    struct OneTap {
        polls: u32,
    }

    impl ButtonInput for OneTap {
        fn read(&mut self, _query: ButtonMask) -> ButtonMask {
            self.polls += 1;
            if self.polls == 2 {
                Button::BottomLeft.mask()
            } else {
                ButtonMask::EMPTY
            }
        }
    }

    #[derive(Default)]
    struct CountingStrip {
        writes: usize,
        last_len: usize,
    }

    impl LedDriver for &mut CountingStrip {
        fn write(&mut self, colors: &[Hsv]) {
            self.writes += 1;
            self.last_len = colors.len();
        }
    }

    fn new_app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_tick_writes_full_frame_and_advances() {
        let mut strip = CountingStrip::default();
        let mut scheduler = TickScheduler::new(new_app(), NoButtons, &mut strip);
        assert_eq!(scheduler.tick_id(), 0);

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.tick_id(), 1);
        scheduler.tick(Instant::from_millis(33));
        assert_eq!(scheduler.tick_id(), 2);

        drop(scheduler);
        assert_eq!(strip.writes, 2);
        assert_eq!(strip.last_len, LED_COUNT);
    }

    #[test]
    fn test_on_schedule_tick_requests_sleep() {
        let mut strip = CountingStrip::default();
        let mut scheduler = TickScheduler::new(new_app(), NoButtons, &mut strip);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(33));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_behind_schedule_tick_does_not_sleep() {
        let mut strip = CountingStrip::default();
        let mut scheduler = TickScheduler::new(new_app(), NoButtons, &mut strip);

        scheduler.tick(Instant::from_millis(0));
        // Late, but within the drift window: no sleep, deadline unchanged
        let result = scheduler.tick(Instant::from_millis(80));
        assert_eq!(result.next_deadline, Instant::from_millis(66));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_long_stall_skips_backlog() {
        let mut strip = CountingStrip::default();
        let mut scheduler = TickScheduler::new(new_app(), NoButtons, &mut strip);

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(5000));
        // Deadline resets to the stall point instead of bursting to catch up
        assert_eq!(result.next_deadline, Instant::from_millis(5033));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_polled_tap_reaches_the_app() {
        let mut strip = CountingStrip::default();
        let mut scheduler = TickScheduler::new(new_app(), OneTap { polls: 0 }, &mut strip);

        scheduler.tick(Instant::from_millis(0));
        assert!(scheduler.app().bottom().value < 1.0);

        scheduler.tick(Instant::from_millis(33));
        assert_eq!(scheduler.app().bottom().value, 1.0);
        assert_eq!(scheduler.app().beat_estimate(), None);
    }
}
