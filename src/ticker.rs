use crate::config::MAX_FRAME_MS;

/// Fixed-period tick source fed with frame deltas.
///
/// There is only ever one period in force: `rearm` drops whatever time had
/// accumulated toward the old period and starts counting the new one from
/// zero, the same as cancelling a repeating timer and scheduling a fresh one.
#[derive(Clone, Debug)]
pub struct Ticker {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Ticker {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms: period_ms.max(1) as f64, elapsed_ms: 0.0 }
    }

    pub fn rearm(&mut self, period_ms: u32) {
        *self = Self::new(period_ms);
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms as u32
    }

    /// Adds a frame's worth of time and returns how many ticks fell due.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.clamp(0.0, MAX_FRAME_MS);
        let due = (self.elapsed_ms / self.period_ms).floor();
        self.elapsed_ms -= due * self.period_ms;
        due as u32
    }
}
