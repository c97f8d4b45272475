use std::time::Duration;

/// Fixed-interval tick source fed with elapsed wall time.
///
/// Leftover time carries into the next call. When more than
/// `max_ticks_per_advance` ticks are owed, only that many run and the
/// backlog is dropped, so a stalled host does not fast-forward the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingTimer {
    interval: Duration,
    max_ticks_per_advance: u32,
    accumulator: Duration,
}

impl RepeatingTimer {
    #[must_use]
    pub fn new(interval: Duration, max_ticks_per_advance: u32) -> Self {
        Self {
            interval,
            max_ticks_per_advance,
            accumulator: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulator = self.accumulator.saturating_add(elapsed);

        let ticks_available = self.accumulator.as_nanos() / self.interval.as_nanos();
        let max_ticks = u128::from(self.max_ticks_per_advance);

        if ticks_available > max_ticks {
            self.accumulator = Duration::ZERO;
            return self.max_ticks_per_advance;
        }

        // ticks_available <= max_ticks, which fits in a u32
        let ticks_run = ticks_available as u32;
        self.accumulator -= self.interval * ticks_run;

        ticks_run
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
