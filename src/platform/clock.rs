//! Frame clock
//!
//! Hosts call [`FrameClock::advance`] once per display refresh with a
//! monotonically increasing timestamp and run as many simulation ticks as it
//! returns. Gameplay speed then stays the same on 60 Hz and 144 Hz displays.

use crate::consts::{MAX_FRAME_GAP_MS, MAX_SUBSTEPS, TICK_MS};

/// Converts frame timestamps (milliseconds) into fixed simulation ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: f64,
    max_substeps: u32,
    max_gap_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FrameClock {
    pub fn new(tick_ms: f64) -> Self {
        assert!(tick_ms > 0.0, "tick length must be positive");
        Self {
            tick_ms,
            max_substeps: MAX_SUBSTEPS,
            max_gap_ms: MAX_FRAME_GAP_MS,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Record a frame at `now_ms` and return how many ticks to run for it.
    ///
    /// The first frame always runs exactly one tick. Time running backwards
    /// counts as no time, and long stalls are clamped so the game does not
    /// fast-forward after a pause.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let ticks = match self.last_time {
            None => 1,
            Some(last) => {
                let dt = (now_ms - last).clamp(0.0, self.max_gap_ms);
                self.accumulator += dt;

                let mut ticks = 0;
                while self.accumulator >= self.tick_ms && ticks < self.max_substeps {
                    self.accumulator -= self.tick_ms;
                    ticks += 1;
                }
                if ticks == self.max_substeps {
                    // Spiral of death guard: forget the backlog
                    self.accumulator = self.accumulator.min(self.tick_ms);
                }
                ticks
            }
        };

        self.last_time = Some(now_ms);
        ticks
    }

    /// Forget timing history, so the next frame runs a single tick
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
