use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque reference to one repeating timer registered with a [`TimerPort`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerHandle(pub u64);

/// Host timer primitive: a repeating callback source.
///
/// Implementations only track registrations; the host loop delivers each
/// firing back to whoever owns the handle.
pub trait TimerPort {
    /// Register a timer firing every `interval` until cancelled.
    fn set_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Cancel a timer. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct Repeating {
    interval: Duration,
    next_due: Duration,
}

/// Deterministic virtual-time [`TimerPort`].
///
/// Time only moves when [`VirtualTimers::fire_next`] is called. When several
/// timers are due at the same instant, the smallest handle fires first.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerHandle, Repeating>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Advance virtual time to the earliest due timer, reschedule it and
    /// return its handle. Returns `None` when no timer is registered.
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        let (&handle, timer) = self
            .timers
            .iter_mut()
            .min_by_key(|(handle, timer)| (timer.next_due, **handle))?;

        self.now = timer.next_due;
        timer.next_due += timer.interval;
        tracing::trace!(handle = handle.0, now_ms = self.now.as_millis() as u64, "timer fired");
        Some(handle)
    }
}

impl TimerPort for VirtualTimers {
    fn set_repeating(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        // Zero intervals would never let time advance.
        let interval = interval.max(Duration::from_millis(1));
        self.timers.insert(
            handle,
            Repeating {
                interval,
                next_due: self.now + interval,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
