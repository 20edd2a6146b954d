use log::debug;

use crate::config::AlbumTiming;
use crate::timing::{Machine, Step, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumStep {
    Open,
    Close,
}

/// The hero album: closed on mount, opens after a delay, then closes and
/// reopens once per period, the period counted from the first opening.
#[derive(Debug, Clone)]
pub struct AlbumCycle {
    is_open: bool,
    timeline: Timeline<AlbumStep>,
}

impl AlbumCycle {
    pub fn new(timing: AlbumTiming) -> Self {
        let open_for = timing.period_ms.saturating_sub(timing.closed_ms);
        // First close lands one full period after the first open; from then
        // on each close is `open_for` after the reopen before it.
        let timeline = Timeline::repeating(
            vec![
                Step::new(timing.open_delay_ms, AlbumStep::Open),
                Step::new(timing.period_ms, AlbumStep::Close),
                Step::new(timing.closed_ms, AlbumStep::Open),
                Step::new(open_for, AlbumStep::Close),
                Step::new(timing.closed_ms, AlbumStep::Open),
            ],
            3,
        );
        Self {
            is_open: false,
            timeline,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl Machine for AlbumCycle {
    type Transition = AlbumStep;

    fn next_step(&mut self) -> Option<Step<AlbumStep>> {
        self.timeline.advance()
    }

    fn apply(&mut self, step: AlbumStep) {
        self.is_open = step == AlbumStep::Open;
        debug!("album {}", if self.is_open { "opened" } else { "closed" });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::timing::{Driver, VirtualClock};

    fn running_album() -> (VirtualClock, Driver<AlbumCycle, VirtualClock>, Rc<Cell<usize>>) {
        let clock = VirtualClock::new();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let driver = Driver::start(AlbumCycle::new(AlbumTiming::default()), clock.clone(), move |_| {
            counter.set(counter.get() + 1)
        });
        (clock, driver, changes)
    }

    fn open_at(clock: &VirtualClock, driver: &Driver<AlbumCycle, VirtualClock>, t: u64) -> bool {
        clock.advance_to(t);
        driver.inspect(AlbumCycle::is_open)
    }

    #[test]
    fn follows_the_open_close_timeline() {
        let (clock, driver, _) = running_album();
        let expectations = [
            (0, false),
            (1_999, false),
            (2_000, true),
            (20_999, true),
            (21_000, false),
            (25_999, false),
            (26_000, true),
            (39_999, true),
            (40_000, false),
            (44_999, false),
            (45_000, true),
            (59_000, false),
            (64_000, true),
        ];
        for (t, expected) in expectations {
            assert_eq!(open_at(&clock, &driver, t), expected, "at t={}ms", t);
        }
    }

    #[test]
    fn keeps_a_single_pending_timer() {
        let (clock, _driver, _) = running_album();
        for t in (0..100_000).step_by(500) {
            clock.advance_to(t);
            assert_eq!(clock.pending(), 1, "at t={}ms", t);
        }
    }

    #[test]
    fn stop_freezes_the_album() {
        let (clock, driver, changes) = running_album();
        clock.advance_to(22_000);
        let seen = changes.get();
        assert!(!driver.inspect(AlbumCycle::is_open));

        driver.stop();
        clock.advance_to(200_000);

        assert_eq!(changes.get(), seen);
        assert!(!driver.inspect(AlbumCycle::is_open));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn stop_before_first_open_is_harmless() {
        let (clock, driver, changes) = running_album();
        clock.advance_to(500);
        driver.stop();
        clock.advance_to(10_000);

        assert_eq!(changes.get(), 0);
        assert!(!driver.inspect(AlbumCycle::is_open));
    }
}
