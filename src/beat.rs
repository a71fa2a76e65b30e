//! Beat recording and tempo estimation from manual taps.
//!
//! Taps are tick indices. Once four taps of one run are in, the estimated
//! period is the sorted consecutive-gap picked at index `len / 2` and the
//! phase reference is the latest tap.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::TickId;

/// A gap larger than this many ticks since the previous tap starts a fresh run.
pub const STALE_AFTER_TICKS: u32 = 3000;

/// Minimum taps in a run before an estimate is produced.
pub const MIN_TAPS_FOR_ESTIMATE: usize = 4;

/// Taps kept per run; the oldest is evicted once full, so the estimate
/// follows a sliding window of recent taps.
const MAX_RECORDED_TAPS: usize = 16;

/// Tempo estimate derived from recorded taps.
///
/// Both fields are produced together; consumers never observe a period
/// without its matching phase reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeatEstimate {
    /// Estimated ticks between beats.
    pub tick_delta: u32,
    /// Tick of the most recent tap; beat phase is measured from here.
    pub start_tick: TickId,
}

/// Accumulates taps and maintains the current [`BeatEstimate`].
#[derive(Debug, Default)]
pub struct BeatTracker {
    taps: Vec<TickId, MAX_RECORDED_TAPS>,
    estimate: Option<BeatEstimate>,
}

impl BeatTracker {
    /// Create an empty tracker with no estimate.
    pub const fn new() -> Self {
        Self {
            taps: Vec::new(),
            estimate: None,
        }
    }

    /// Record a tap at `tick` and refresh the estimate when enough taps exist.
    ///
    /// Taps must arrive with strictly increasing ticks. A stale gap discards
    /// the old run but keeps the previous estimate playing until four fresh
    /// taps land.
    pub fn record(&mut self, tick: TickId) {
        if let Some(&last) = self.taps.last() {
            if tick.saturating_sub(last) > STALE_AFTER_TICKS {
                #[cfg(feature = "esp32-log")]
                println!("stale tap history, fresh run at tick {tick}");
                self.taps.clear();
            }
        }
        if self.taps.is_full() {
            self.taps.remove(0);
        }
        // Capacity was just ensured
        let _ = self.taps.push(tick);
        if self.taps.len() >= MIN_TAPS_FOR_ESTIMATE {
            self.update_estimate();
        }
    }

    /// Current tempo estimate. `None` until a run accumulates four taps.
    pub const fn estimate(&self) -> Option<BeatEstimate> {
        self.estimate
    }

    /// Number of taps in the current run.
    pub fn tap_count(&self) -> usize {
        self.taps.len()
    }

    fn update_estimate(&mut self) {
        let mut gaps: Vec<u32, { MAX_RECORDED_TAPS - 1 }> = Vec::new();
        for pair in self.taps.windows(2) {
            let _ = gaps.push(pair[1].saturating_sub(pair[0]));
        }
        gaps.sort_unstable();
        // Not a true statistical median: even-length runs take the gap at
        // index len / 2 after sorting.
        let tick_delta = gaps[gaps.len() / 2];
        let Some(&start_tick) = self.taps.last() else {
            return;
        };
        self.estimate = Some(BeatEstimate {
            tick_delta,
            start_tick,
        });
        #[cfg(feature = "esp32-log")]
        println!("beat estimate: delta={tick_delta} start={start_tick}");
    }
}
