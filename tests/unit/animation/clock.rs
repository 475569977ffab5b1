use super::*;
use crate::animation::timer::VirtualTimers;

#[derive(Default)]
struct CountingTimers {
    next: u64,
    live: Vec<TimerHandle>,
    calls: Vec<&'static str>,
}

impl TimerPort for CountingTimers {
    fn set_repeating(&mut self, _interval: Duration) -> TimerHandle {
        self.calls.push("set_repeating");
        let h = TimerHandle(self.next);
        self.next += 1;
        self.live.push(h);
        h
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.calls.push("cancel");
        self.live.retain(|h| *h != handle);
    }
}

#[test]
fn default_interval_is_fifty_ms() {
    assert_eq!(Clock::default().interval(), Duration::from_millis(50));
}

#[test]
fn double_start_registers_one_timer() {
    let mut timers = CountingTimers::default();
    let mut clock = Clock::default();

    assert!(clock.start(&mut timers));
    assert!(!clock.start(&mut timers));
    assert_eq!(timers.live.len(), 1);
    assert_eq!(timers.calls, vec!["set_repeating"]);
    assert!(clock.is_active());
}

#[test]
fn stop_while_inactive_is_a_no_op() {
    let mut timers = CountingTimers::default();
    let mut clock = Clock::default();

    assert!(!clock.stop(&mut timers));
    assert!(timers.calls.is_empty());
    assert!(!clock.is_active());
}

#[test]
fn stop_releases_the_timer() {
    let mut timers = CountingTimers::default();
    let mut clock = Clock::default();

    clock.start(&mut timers);
    assert!(clock.stop(&mut timers));
    assert!(!clock.stop(&mut timers));
    assert!(timers.live.is_empty());
    assert_eq!(clock.handle(), None);
}

#[test]
fn handle_is_present_iff_active() {
    let mut timers = VirtualTimers::new();
    let mut clock = Clock::default();
    assert_eq!(clock.is_active(), clock.handle().is_some());
    clock.start(&mut timers);
    assert_eq!(clock.is_active(), clock.handle().is_some());
    assert!(timers.is_active(clock.handle().unwrap()));
    clock.stop(&mut timers);
    assert_eq!(clock.is_active(), clock.handle().is_some());
    assert_eq!(timers.active_count(), 0);
}

#[test]
fn restart_after_stop_gets_fresh_timer() {
    let mut timers = CountingTimers::default();
    let mut clock = Clock::default();
    clock.start(&mut timers);
    let first = clock.handle();
    clock.stop(&mut timers);
    clock.start(&mut timers);
    assert_ne!(clock.handle(), first);
    assert_eq!(timers.live.len(), 1);
}
