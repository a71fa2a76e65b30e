//! Pulse brightness curve.
//!
//! Sharp attack on the beat boundary, linear decay, then a silent tail
//! until the next beat.

/// Divisor applied to the period to get the decay window length.
///
/// With 1.3 the pulse decays over roughly the first 77% of each period and
/// stays dark for the remainder.
const DECAY_WINDOW_DIVISOR: f32 = 1.3;

/// Brightness for `offset` ticks past the reference beat, given an estimated
/// period of `tick_delta` ticks.
///
/// Returns 1.0 right on a beat boundary, decays linearly to 0 over
/// `tick_delta / 1.3` ticks and stays at 0 for the rest of the period.
/// `tick_delta` must be non-zero; callers guard this by only invoking with a
/// present [`BeatEstimate`](crate::BeatEstimate).
#[allow(clippy::cast_precision_loss)]
pub fn pulse_value(offset: u32, tick_delta: u32) -> f32 {
    let decay_ticks = tick_delta as f32 / DECAY_WINDOW_DIVISOR;
    let progress = decay_ticks - (offset % tick_delta) as f32;
    let value = progress / decay_ticks;
    if value < 0.0 { 0.0 } else { value }
}
