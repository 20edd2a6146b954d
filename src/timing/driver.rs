use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::{Scheduler, Step};

/// A state machine whose transitions are spaced out in time.
pub trait Machine {
    type Transition: Copy + 'static;

    /// The next transition and how long to wait before applying it.
    /// `None` means the machine is idle until something external wakes it.
    fn next_step(&mut self) -> Option<Step<Self::Transition>>;

    fn apply(&mut self, transition: Self::Transition);
}

struct Inner<M, S: Scheduler> {
    machine: M,
    scheduler: S,
    pending: Option<S::Handle>,
    on_change: Box<dyn Fn(&M)>,
    stopped: bool,
}

/// Runs a [`Machine`] on a [`Scheduler`], keeping at most one timer pending.
///
/// The next step is only scheduled after the previous transition has been
/// applied and observed, so a machine's visible states are totally ordered.
/// Dropping the driver (or calling [`Driver::stop`]) cancels the pending
/// timer; a callback that still slips through finds nothing to upgrade and
/// does nothing.
///
/// `on_change` runs while the machine is borrowed and must not call back
/// into the driver.
pub struct Driver<M: Machine + 'static, S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<M, S>>>,
}

impl<M: Machine + 'static, S: Scheduler + 'static> Driver<M, S> {
    pub fn start(machine: M, scheduler: S, on_change: impl Fn(&M) + 'static) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            machine,
            scheduler,
            pending: None,
            on_change: Box::new(on_change),
            stopped: false,
        }));
        arm(&inner);
        Self { inner }
    }

    /// Mutates the machine from outside the timer chain (a click, say).
    ///
    /// `change` returns whether it changed anything; only then are observers
    /// notified and, if no timer is pending, the next step scheduled.
    pub fn update(&self, change: impl FnOnce(&mut M) -> bool) -> bool {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if inner.stopped {
                return false;
            }
            let changed = change(&mut inner.machine);
            if changed {
                (inner.on_change)(&inner.machine);
            }
            changed
        };
        if changed && self.inner.borrow().pending.is_none() {
            arm(&self.inner);
        }
        changed
    }

    /// Reads the machine without touching the timer.
    pub fn inspect<R>(&self, read: impl FnOnce(&M) -> R) -> R {
        read(&self.inner.borrow().machine)
    }

    pub fn is_armed(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Cancels the pending timer. Safe to call at any point, any number of times.
    pub fn stop(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.stopped = true;
            inner.pending.take()
        };
        if pending.is_some() {
            debug!("driver stopped with a pending timer");
        }
        drop(pending);
    }
}

impl<M: Machine + 'static, S: Scheduler + 'static> Drop for Driver<M, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<M: Machine + 'static, S: Scheduler + 'static>(inner: &Rc<RefCell<Inner<M, S>>>) {
    let weak = Rc::downgrade(inner);
    let mut guard = inner.borrow_mut();
    if guard.stopped {
        return;
    }
    let Some(step) = guard.machine.next_step() else {
        guard.pending = None;
        return;
    };
    let handle = guard
        .scheduler
        .schedule(step.delay_ms, Box::new(move || fire(weak, step.transition)));
    guard.pending = Some(handle);
}

fn fire<M: Machine + 'static, S: Scheduler + 'static>(
    weak: Weak<RefCell<Inner<M, S>>>,
    transition: M::Transition,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let fired = {
        let mut guard = inner.borrow_mut();
        if guard.stopped {
            return;
        }
        let fired = guard.pending.take();
        guard.machine.apply(transition);
        (guard.on_change)(&guard.machine);
        fired
    };
    drop(fired);
    arm(&inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{Timeline, VirtualClock};

    struct Counter {
        value: u32,
        timeline: Timeline<u32>,
    }

    impl Machine for Counter {
        type Transition = u32;

        fn next_step(&mut self) -> Option<Step<u32>> {
            self.timeline.advance()
        }

        fn apply(&mut self, transition: u32) {
            self.value = transition;
        }
    }

    fn counter(steps: &[(u32, u32)]) -> Counter {
        Counter {
            value: 0,
            timeline: Timeline::once(steps.iter().map(|&(d, v)| Step::new(d, v)).collect()),
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<(u64, u32)>>>, impl Fn(u64, u32)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |at, v| sink.borrow_mut().push((at, v)))
    }

    #[test]
    fn steps_fire_in_order_at_cumulative_offsets() {
        let clock = VirtualClock::new();
        let (log, record) = recorder();
        let now = clock.clone();
        let driver = Driver::start(counter(&[(100, 1), (50, 2), (0, 3)]), clock.clone(), move |c| {
            record(now.now(), c.value)
        });

        clock.advance_to(1_000);

        assert_eq!(*log.borrow(), vec![(100, 1), (150, 2), (150, 3)]);
        assert!(!driver.is_armed());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn only_one_timer_is_ever_pending() {
        let clock = VirtualClock::new();
        let _driver = Driver::start(counter(&[(10, 1), (10, 2), (10, 3)]), clock.clone(), |_| {});

        for t in 0..40 {
            assert!(clock.pending() <= 1);
            clock.advance_to(t);
        }
    }

    #[test]
    fn stop_cancels_and_silences() {
        let clock = VirtualClock::new();
        let (log, record) = recorder();
        let now = clock.clone();
        let driver = Driver::start(counter(&[(100, 1), (100, 2)]), clock.clone(), move |c| {
            record(now.now(), c.value)
        });

        clock.advance_to(150);
        driver.stop();
        driver.stop();
        clock.advance_to(1_000);

        assert_eq!(*log.borrow(), vec![(100, 1)]);
        assert_eq!(clock.pending(), 0);
        assert!(!driver.update(|c| {
            c.value = 9;
            true
        }));
    }

    #[test]
    fn dropping_the_driver_cancels_its_timer() {
        let clock = VirtualClock::new();
        let driver = Driver::start(counter(&[(100, 1)]), clock.clone(), |_| {});
        assert_eq!(clock.pending(), 1);

        drop(driver);

        assert_eq!(clock.pending(), 0);
        clock.advance_to(500);
    }

    #[test]
    fn update_wakes_an_idle_machine() {
        let clock = VirtualClock::new();
        let (log, record) = recorder();
        let now = clock.clone();
        let driver = Driver::start(counter(&[]), clock.clone(), move |c| record(now.now(), c.value));
        assert!(!driver.is_armed());

        clock.advance_to(40);
        let changed = driver.update(|c| {
            c.timeline = Timeline::once(vec![Step::new(10, 7)]);
            true
        });
        clock.advance_to(100);

        assert!(changed);
        assert_eq!(*log.borrow(), vec![(40, 0), (50, 7)]);
        assert_eq!(driver.inspect(|c| c.value), 7);
    }

    #[test]
    fn unchanged_update_notifies_nobody() {
        let clock = VirtualClock::new();
        let (log, record) = recorder();
        let now = clock.clone();
        let driver = Driver::start(counter(&[]), clock.clone(), move |c| record(now.now(), c.value));

        assert!(!driver.update(|_| false));
        assert!(log.borrow().is_empty());
    }
}
