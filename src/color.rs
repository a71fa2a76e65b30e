//! HSV color representation for zone state and frames.
//!
//! Zones work in degree/float HSV; conversion to `RGB8` happens only at the
//! driver boundary, for strips that take RGB.

use libm::roundf;
use smart_leds::hsv::{Hsv as Hsv8, hsv2rgb};

pub type Rgb = smart_leds::RGB8;

/// HSV color with hue in degrees and float channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`
    pub hue: u16,
    /// Saturation, `[0, 1]`
    pub saturation: f32,
    /// Value (brightness), `[0, 1]`
    pub value: f32,
}

impl Hsv {
    /// Create a color from hue degrees and float saturation/value.
    pub const fn new(hue: u16, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Convert a degree/float HSV color to `RGB8`.
///
/// Hue degrees map onto the 0-255 color wheel of `smart_leds::hsv::Hsv`;
/// float channels are clamped to `[0, 1]` before scaling.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(color: Hsv) -> Rgb {
    hsv2rgb(Hsv8 {
        hue: ((u32::from(color.hue % 360) * 255) / 359) as u8,
        sat: channel_to_u8(color.saturation),
        val: channel_to_u8(color.value),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(channel: f32) -> u8 {
    roundf(channel.clamp(0.0, 1.0) * 255.0) as u8
}
