//! Per-zone color state and periodic brightness decay.

use crate::TickId;
use crate::color::Hsv;

/// Hue/brightness state for one LED zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneState {
    /// Hue in degrees, `[0, 360)`.
    pub hue: u16,
    /// Brightness, `[0, 1]`.
    pub value: f32,
}

impl ZoneState {
    /// Create a zone at `hue` degrees with the given brightness.
    pub const fn new(hue: u16, value: f32) -> Self {
        Self { hue, value }
    }

    /// Rotate the hue by `degrees`, wrapping at 360.
    pub fn shift_hue(&mut self, degrees: u16) {
        self.hue = (self.hue + degrees) % 360;
    }

    /// Current color at full saturation.
    pub const fn color(&self) -> Hsv {
        Hsv {
            hue: self.hue,
            saturation: 1.0,
            value: self.value,
        }
    }
}

/// Periodic brightness decay for a zone.
///
/// Fires on ticks divisible by `interval` and lowers the zone value by
/// `step`, floored at 0.
#[derive(Debug, Clone, Copy)]
pub struct DecayPolicy {
    /// Whether decay is applied at all
    pub enabled: bool,
    /// Decay fires when the tick is a multiple of this; must be non-zero
    pub interval: u32,
    /// Brightness removed per firing
    pub step: f32,
}

impl DecayPolicy {
    /// Decay by 0.01 every 10th tick.
    pub const fn every_ten_ticks() -> Self {
        Self {
            enabled: true,
            interval: 10,
            step: 0.01,
        }
    }

    /// Leave the zone's value untouched.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            interval: 10,
            step: 0.01,
        }
    }

    /// Apply the policy to `zone` for this tick.
    pub fn apply(&self, tick: TickId, zone: &mut ZoneState) {
        if self.enabled && self.interval != 0 && tick.is_multiple_of(self.interval) {
            zone.value = (zone.value - self.step).max(0.0);
        }
    }
}
