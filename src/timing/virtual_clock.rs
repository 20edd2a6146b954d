use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::Scheduler;

type Key = (u64, u64);

#[derive(Default)]
struct ClockState {
    now: u64,
    seq: u64,
    queue: BTreeMap<Key, Box<dyn FnOnce()>>,
}

/// Manually advanced clock for driving timers in tests.
///
/// Tasks due at the same instant run in the order they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct VirtualTimer {
    key: Key,
    state: Weak<RefCell<ClockState>>,
}

impl Drop for VirtualTimer {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                state.queue.remove(&self.key);
            }
        }
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Runs every task due at or before `target`, including ones scheduled
    /// along the way, then parks the clock at `target`.
    pub fn advance_to(&self, target: u64) {
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let due = match state.queue.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                state.now = due.0;
                state.queue.remove(&due)
            };
            if let Some(task) = task {
                task();
            }
        }
        let mut state = self.state.borrow_mut();
        if state.now < target {
            state.now = target;
        }
    }

    pub fn advance(&self, delta: u64) {
        let target = self.now() + delta;
        self.advance_to(target);
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualTimer;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> VirtualTimer {
        let mut state = self.state.borrow_mut();
        let key = (state.now + u64::from(delay_ms), state.seq);
        state.seq += 1;
        state.queue.insert(key, task);
        VirtualTimer {
            key,
            state: Rc::downgrade(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_due_tasks_and_cancels_dropped_ones() {
        let clock = VirtualClock::new();
        let hits = Rc::new(RefCell::new(Vec::new()));

        let h = hits.clone();
        let _kept = clock.schedule(30, Box::new(move || h.borrow_mut().push(30)));
        let h = hits.clone();
        let dropped = clock.schedule(10, Box::new(move || h.borrow_mut().push(10)));
        drop(dropped);

        clock.advance_to(29);
        assert!(hits.borrow().is_empty());
        assert_eq!(clock.now(), 29);

        clock.advance(1);
        assert_eq!(*hits.borrow(), vec![30]);
        assert_eq!(clock.pending(), 0);
    }
}
