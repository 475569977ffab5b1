use std::time::Duration;

use crate::animation::timer::{TimerHandle, TimerPort};

/// Interval between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Fixed-interval repeating trigger that drives frame updates while active.
///
/// Owns at most one timer registration at a time; the clock is active
/// exactly when it holds a handle.
#[derive(Debug)]
pub struct Clock {
    interval: Duration,
    handle: Option<TimerHandle>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Start ticking. No-op (returns `false`) when already active.
    pub fn start<T: TimerPort + ?Sized>(&mut self, timers: &mut T) -> bool {
        if self.handle.is_some() {
            return false;
        }
        let handle = timers.set_repeating(self.interval);
        tracing::debug!(handle = handle.0, "clock started");
        self.handle = Some(handle);
        true
    }

    /// Stop ticking. No-op (returns `false`) when already inactive.
    pub fn stop<T: TimerPort + ?Sized>(&mut self, timers: &mut T) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        timers.cancel(handle);
        tracing::debug!(handle = handle.0, "clock stopped");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
