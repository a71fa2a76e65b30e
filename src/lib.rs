#![no_std]

pub mod app;
pub mod beat;
pub mod buttons;
pub mod color;
pub mod display;
pub mod pulse;
pub mod tick_scheduler;
pub mod zone;

pub use app::{App, AppConfig, BOTTOM_LED_COUNT, LED_COUNT, TOP_LED_COUNT};
pub use beat::{BeatEstimate, BeatTracker, MIN_TAPS_FOR_ESTIMATE, STALE_AFTER_TICKS};
pub use buttons::{Button, ButtonMask, EdgeDetector};
pub use display::{TextDisplay, draw_instructions};
pub use pulse::pulse_value;
pub use tick_scheduler::{DEFAULT_TICK_DURATION, DEFAULT_TICK_RATE, TickResult, TickScheduler};
pub use zone::{DecayPolicy, ZoneState};

pub use color::{Hsv, Rgb, hsv_to_rgb};
pub use embassy_time::{Duration, Instant};

/// One discrete step of the app clock.
///
/// Supplied externally and incremented exactly once per controller call;
/// the only clock the core logic sees.
pub type TickId = u32;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Frames are HSV; strips that want RGB can convert per color with
/// [`hsv_to_rgb`].
pub trait LedDriver {
    /// Write the full ordered frame to the strip
    fn write(&mut self, colors: &[Hsv]);
}

/// Abstract button input
///
/// Expected to return stable, already-sampled state; edge detection
/// happens in the core.
pub trait ButtonInput {
    /// Return the subset of `query` that is currently pressed
    fn read(&mut self, query: ButtonMask) -> ButtonMask;
}
