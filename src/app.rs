//! Per-tick application controller.
//!
//! Orchestrates one tick: button dispatch, tempo-driven top-zone pulse,
//! periodic decay, then frame building.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::TickId;
use crate::beat::{BeatEstimate, BeatTracker};
use crate::buttons::{Button, ButtonMask, EdgeDetector};
use crate::color::Hsv;
use crate::pulse::pulse_value;
use crate::zone::{DecayPolicy, ZoneState};

/// Number of LEDs in the top zone.
pub const TOP_LED_COUNT: usize = 11;
/// Number of LEDs in the bottom zone.
pub const BOTTOM_LED_COUNT: usize = 4;
/// Total LEDs written per frame; indices 0-10 are top, 11-14 bottom.
pub const LED_COUNT: usize = TOP_LED_COUNT + BOTTOM_LED_COUNT;

/// Configuration for the app controller.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Initial top-zone hue in degrees
    pub top_hue: u16,
    /// Initial bottom-zone hue in degrees
    pub bottom_hue: u16,
    /// Degrees added to both hues per color-button press
    pub hue_step: u16,
    /// Whether the bottom zone starts showing its own beat color
    pub sync_indicator: bool,
    /// Decay for the top zone; off by default, the pulse drives that value
    pub top_decay: DecayPolicy,
    /// Decay for the bottom zone
    pub bottom_decay: DecayPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            top_hue: 0,
            bottom_hue: 120,
            hue_step: 10,
            sync_indicator: true,
            top_decay: DecayPolicy::disabled(),
            bottom_decay: DecayPolicy::every_ten_ticks(),
        }
    }
}

/// Tick-driven controller: raw button mask in, 15-color HSV frame out.
pub struct App {
    top: ZoneState,
    bottom: ZoneState,
    sync_indicator: bool,
    hue_step: u16,
    top_decay: DecayPolicy,
    bottom_decay: DecayPolicy,
    edges: EdgeDetector,
    beats: BeatTracker,
    frame: [Hsv; LED_COUNT],
}

impl App {
    /// Create a controller from `config`.
    ///
    /// The top zone starts dark and only lights up once a tempo estimate
    /// exists; the bottom zone starts at full brightness.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            top: ZoneState::new(config.top_hue, 0.0),
            bottom: ZoneState::new(config.bottom_hue, 1.0),
            sync_indicator: config.sync_indicator,
            hue_step: config.hue_step,
            top_decay: config.top_decay,
            bottom_decay: config.bottom_decay,
            edges: EdgeDetector::new(),
            beats: BeatTracker::new(),
            frame: [Hsv::new(0, 0.0, 0.0); LED_COUNT],
        }
    }

    /// Mask covering every button the controller polls each tick.
    pub const fn input_mask() -> ButtonMask {
        ButtonMask::all()
    }

    /// Process one tick.
    ///
    /// `tick` must increase by exactly one per call; `buttons` is the raw
    /// currently-pressed mask from the input driver. Returns the frame to
    /// hand to the LED driver.
    pub fn tick(&mut self, tick: TickId, buttons: ButtonMask) -> &[Hsv] {
        self.dispatch_buttons(tick, buttons);

        if let Some(estimate) = self.beats.estimate() {
            let offset = tick.saturating_sub(estimate.start_tick);
            self.top.value = pulse_value(offset, estimate.tick_delta);
        }

        self.top_decay.apply(tick, &mut self.top);
        self.bottom_decay.apply(tick, &mut self.bottom);

        self.build_frame();
        &self.frame
    }

    /// Current tempo estimate, if one has been formed.
    pub const fn beat_estimate(&self) -> Option<BeatEstimate> {
        self.beats.estimate()
    }

    /// Whether the bottom zone renders its own beat color.
    pub const fn sync_indicator(&self) -> bool {
        self.sync_indicator
    }

    /// Top zone state for observation.
    pub const fn top(&self) -> ZoneState {
        self.top
    }

    /// Bottom zone state for observation.
    pub const fn bottom(&self) -> ZoneState {
        self.bottom
    }

    fn dispatch_buttons(&mut self, tick: TickId, buttons: ButtonMask) {
        if self.edges.rising_edge(buttons, Button::BottomRight) {
            self.top.shift_hue(self.hue_step);
            self.bottom.shift_hue(self.hue_step);
        }
        if self.edges.rising_edge(buttons, Button::BottomLeft) {
            self.bottom.value = 1.0;
            self.beats.record(tick);
        }
        if self.edges.rising_edge(buttons, Button::TopRight) {
            self.sync_indicator = !self.sync_indicator;
            #[cfg(feature = "esp32-log")]
            println!("sync indicator: {}", self.sync_indicator);
        }
    }

    fn build_frame(&mut self) {
        let top_color = self.top.color();
        let bottom_color = if self.sync_indicator {
            self.bottom.color()
        } else {
            top_color
        };
        for led in &mut self.frame[..TOP_LED_COUNT] {
            *led = top_color;
        }
        for led in &mut self.frame[TOP_LED_COUNT..] {
            *led = bottom_color;
        }
    }
}
