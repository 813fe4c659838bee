//! Pausable animation clock.
//!
//! The clock never reads wall time itself; every operation takes `now` (in
//! milliseconds) from the caller. Pausing freezes elapsed time, resuming
//! shifts the origin forward by the paused interval, so elapsed time is
//! monotone and excludes pause gaps entirely.

/// Monotonic elapsed-time tracker that excludes paused intervals.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    origin: f64,
    paused_at: Option<f64>,
}

impl AnimationClock {
    /// Starts a clock at `now`; elapsed time begins at zero.
    pub fn new(now: f64) -> Self {
        Self {
            origin: now,
            paused_at: None,
        }
    }

    /// Elapsed milliseconds since the origin, excluding paused intervals.
    ///
    /// While paused, this is frozen at the value it had when [`pause`] was
    /// called, regardless of `now`.
    ///
    /// [`pause`]: AnimationClock::pause
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.paused_at {
            Some(at) => at - self.origin,
            None => now - self.origin,
        }
    }

    /// True if the clock is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Freezes elapsed time. Pausing an already-paused clock is a no-op.
    pub fn pause(&mut self, now: f64) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Unfreezes the clock, shifting the origin so the paused interval does
    /// not count toward elapsed time. Resuming a running clock is a no-op.
    pub fn resume(&mut self, now: f64) {
        if let Some(at) = self.paused_at.take() {
            self.origin += now - at;
        }
    }

    /// Restarts elapsed time at zero, preserving the paused/running state.
    pub fn reset(&mut self, now: f64) {
        self.origin = now;
        if self.paused_at.is_some() {
            self.paused_at = Some(now);
        }
    }
}
