//! Round clock - fixed-interval tick source
//!
//! The clock does not read wall time. The host advances it with the elapsed
//! milliseconds of each frame and receives the number of whole intervals that
//! completed, which keeps rounds deterministic under test.

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    interval_ms: u32,
    accumulator_ms: u32,
    running: bool,
}

impl Clock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            running: false,
        }
    }

    /// Begin ticking. The first tick fires one full interval from now.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.accumulator_ms = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `elapsed_ms`, returning how many ticks fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        let total = self.accumulator_ms as u64 + elapsed_ms as u64;
        let ticks = total / self.interval_ms as u64;
        self.accumulator_ms = (total % self.interval_ms as u64) as u32;
        ticks as u32
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(CLOCK_TICK_MS)
    }
}
