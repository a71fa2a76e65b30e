//! Tick pacing and I/O plumbing for the app loop.
//!
//! Portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::app::App;
use crate::{ButtonInput, LedDriver, TickId};

/// Default tick rate (30 ticks per second).
pub const DEFAULT_TICK_RATE: u32 = 30;

/// Default tick duration based on the default rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_TICK_RATE as u64);

/// Result of one scheduler step.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives the app at a fixed tick cadence.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Polls the button input, advances the controller, writes the frame
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(app, buttons, strip);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct TickScheduler<I: ButtonInput, O: LedDriver> {
    input: I,
    output: O,
    app: App,
    tick_id: TickId,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<I: ButtonInput, O: LedDriver> TickScheduler<I, O> {
    /// Create a new tick scheduler.
    ///
    /// Uses `DEFAULT_TICK_DURATION` (30 ticks per second) for pacing.
    pub fn new(app: App, input: I, output: O) -> Self {
        Self::with_tick_duration(app, input, output, DEFAULT_TICK_DURATION)
    }

    /// Create a new tick scheduler with a custom tick duration.
    pub fn with_tick_duration(app: App, input: I, output: O, tick_duration: Duration) -> Self {
        Self {
            input,
            output,
            app,
            tick_id: 0,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Polls the input, advances the controller by one tick
    /// 3. Writes the frame to the LED driver
    /// 4. Returns the deadline for the next tick
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        // Poll, advance, output
        let buttons = self.input.read(App::input_mask());
        let frame = self.app.tick(self.tick_id, buttons);
        self.output.write(frame);
        self.tick_id = self.tick_id.wrapping_add(1);

        // Calculate next tick deadline
        self.next_tick += self.tick_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Tick id the next call to [`tick`](Self::tick) will process.
    pub const fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Get a reference to the app controller.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the app controller.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
