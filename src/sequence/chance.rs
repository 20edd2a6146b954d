use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::ChanceTiming;
use crate::timing::{Machine, Step, Timeline};

/// Rolls are drawn from `0..ROLL_RANGE`.
pub const ROLL_RANGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Intro,
    Countdown,
    Animation,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Goal,
    Miss,
}

impl Outcome {
    /// Even rolls score. Over `0..100` that is an even split.
    pub fn from_roll(roll: u32) -> Self {
        if roll % 2 == 0 {
            Outcome::Goal
        } else {
            Outcome::Miss
        }
    }
}

/// One run of the "test your chance" mini-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChanceEvent {
    pub id: u64,
    pub is_goal: bool,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
}

impl ChanceEvent {
    fn new(id: u64, outcome: Outcome) -> Self {
        Self {
            id,
            is_goal: outcome == Outcome::Goal,
            stage: Stage::Intro,
            countdown: None,
            result: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_goal {
            Outcome::Goal
        } else {
            Outcome::Miss
        }
    }
}

/// Source of rolls in `0..ROLL_RANGE`.
pub trait RollSource {
    fn roll(&mut self) -> u32;
}

/// Rolls from the thread-local RNG (`crypto.getRandomValues` in the browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRoll;

impl RollSource for ThreadRoll {
    fn roll(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..ROLL_RANGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanceStep {
    StartCountdown(u8),
    Tick(u8),
    Animate,
    Reveal,
    Remove,
}

fn chance_timeline(timing: &ChanceTiming) -> Timeline<ChanceStep> {
    let mut steps = vec![Step::new(
        timing.intro_ms,
        ChanceStep::StartCountdown(timing.countdown_from),
    )];
    steps.extend(
        (0..timing.countdown_from)
            .rev()
            .map(|n| Step::new(timing.countdown_tick_ms, ChanceStep::Tick(n))),
    );
    steps.push(Step::new(timing.pre_animation_ms, ChanceStep::Animate));
    steps.push(Step::new(timing.animation_ms, ChanceStep::Reveal));
    steps.push(Step::new(timing.result_ms, ChanceStep::Remove));
    Timeline::once(steps)
}

/// Runs at most one [`ChanceEvent`] at a time.
///
/// `trigger` is ignored while a run is live; the run ends by removing its
/// event, which re-enables `trigger`.
pub struct ChanceSequence {
    timing: ChanceTiming,
    rolls: Box<dyn RollSource>,
    next_id: u64,
    is_active: bool,
    events: Vec<ChanceEvent>,
    timeline: Option<Timeline<ChanceStep>>,
}

impl ChanceSequence {
    pub fn new(timing: ChanceTiming, rolls: impl RollSource + 'static) -> Self {
        Self {
            timing,
            rolls: Box::new(rolls),
            next_id: 0,
            is_active: false,
            events: Vec::new(),
            timeline: None,
        }
    }

    /// Starts a run and returns its id, or `None` if one is already live.
    pub fn trigger(&mut self) -> Option<u64> {
        if self.is_active {
            debug!("chance trigger ignored, a run is already live");
            return None;
        }
        self.is_active = true;

        let roll = self.rolls.roll();
        let outcome = Outcome::from_roll(roll);
        let id = self.next_id;
        self.next_id += 1;

        self.events.push(ChanceEvent::new(id, outcome));
        self.timeline = Some(chance_timeline(&self.timing));
        info!("chance #{} started (roll {} -> {:?})", id, roll, outcome);
        Some(id)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn events(&self) -> &[ChanceEvent] {
        &self.events
    }

    pub fn current(&self) -> Option<&ChanceEvent> {
        self.events.last()
    }
}

impl Machine for ChanceSequence {
    type Transition = ChanceStep;

    fn next_step(&mut self) -> Option<Step<ChanceStep>> {
        self.timeline.as_mut().and_then(Timeline::advance)
    }

    fn apply(&mut self, step: ChanceStep) {
        if step == ChanceStep::Remove {
            if let Some(event) = self.events.pop() {
                info!("chance #{} finished: {:?}", event.id, event.outcome());
            }
            self.events.clear();
            self.timeline = None;
            self.is_active = false;
            return;
        }

        let Some(event) = self.events.last_mut() else {
            return;
        };
        match step {
            ChanceStep::StartCountdown(n) => {
                event.stage = Stage::Countdown;
                event.countdown = Some(n);
            }
            ChanceStep::Tick(n) => event.countdown = Some(n),
            ChanceStep::Animate => {
                event.stage = Stage::Animation;
                event.countdown = None;
            }
            ChanceStep::Reveal => {
                event.stage = Stage::Result;
                event.result = Some(event.outcome());
            }
            ChanceStep::Remove => {}
        }
        if let Ok(json) = serde_json::to_string(&*event) {
            debug!("chance {}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::timing::{Driver, VirtualClock};

    type Snapshots = Rc<RefCell<Vec<(u64, Vec<ChanceEvent>)>>>;

    struct Scripted(VecDeque<u32>);

    impl RollSource for Scripted {
        fn roll(&mut self) -> u32 {
            self.0.pop_front().unwrap_or(0)
        }
    }

    fn scripted(rolls: &[u32]) -> Scripted {
        Scripted(rolls.iter().copied().collect())
    }

    fn running(rolls: &[u32]) -> (VirtualClock, Driver<ChanceSequence, VirtualClock>, Snapshots) {
        let clock = VirtualClock::new();
        let snapshots: Snapshots = Rc::new(RefCell::new(Vec::new()));
        let sink = snapshots.clone();
        let now = clock.clone();
        let driver = Driver::start(
            ChanceSequence::new(ChanceTiming::default(), scripted(rolls)),
            clock.clone(),
            move |seq| sink.borrow_mut().push((now.now(), seq.events().to_vec())),
        );
        (clock, driver, snapshots)
    }

    fn trigger(driver: &Driver<ChanceSequence, VirtualClock>) -> bool {
        driver.update(|seq| seq.trigger().is_some())
    }

    #[test]
    fn even_roll_plays_the_goal_timeline() {
        let (clock, driver, snapshots) = running(&[4]);
        assert!(trigger(&driver));
        clock.advance_to(60_000);

        let seen: Vec<(u64, Option<Stage>, Option<u8>, Option<Outcome>)> = snapshots
            .borrow()
            .iter()
            .map(|(t, events)| {
                let e = events.first();
                (*t, e.map(|e| e.stage), e.and_then(|e| e.countdown), e.and_then(|e| e.result))
            })
            .collect();

        assert_eq!(
            seen,
            vec![
                (0, Some(Stage::Intro), None, None),
                (2_500, Some(Stage::Countdown), Some(3), None),
                (3_500, Some(Stage::Countdown), Some(2), None),
                (4_500, Some(Stage::Countdown), Some(1), None),
                (5_500, Some(Stage::Countdown), Some(0), None),
                (6_000, Some(Stage::Animation), None, None),
                (8_500, Some(Stage::Result), None, Some(Outcome::Goal)),
                (11_000, None, None, None),
            ]
        );
        assert!(!driver.inspect(ChanceSequence::is_active));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn odd_roll_ends_in_a_miss() {
        let (clock, driver, snapshots) = running(&[37]);
        trigger(&driver);
        clock.advance_to(8_500);

        let last = snapshots.borrow().last().cloned().expect("snapshots");
        assert!(!last.1[0].is_goal);
        assert_eq!(last.1[0].result, Some(Outcome::Miss));
    }

    #[test]
    fn result_never_drifts_from_the_initial_draw() {
        for roll in 0..ROLL_RANGE {
            let (clock, driver, snapshots) = running(&[roll]);
            trigger(&driver);
            clock.advance_to(11_000);

            let snapshots = snapshots.borrow();
            let is_goal = snapshots[0].1[0].is_goal;
            assert_eq!(is_goal, roll % 2 == 0);
            for (_, events) in snapshots.iter() {
                for event in events {
                    assert_eq!(event.is_goal, is_goal);
                    if let Some(result) = event.result {
                        assert_eq!(result == Outcome::Goal, is_goal);
                    }
                }
            }
        }
    }

    #[test]
    fn countdown_shows_three_two_one_zero_exactly() {
        let (clock, driver, snapshots) = running(&[1]);
        trigger(&driver);
        clock.advance_to(11_000);

        let mut shown: Vec<u8> = snapshots
            .borrow()
            .iter()
            .filter_map(|(_, events)| events.first().and_then(|e| e.countdown))
            .collect();
        shown.dedup();
        assert_eq!(shown, vec![3, 2, 1, 0]);
    }

    #[test]
    fn stages_only_move_forward() {
        let (clock, driver, snapshots) = running(&[2]);
        trigger(&driver);
        clock.advance_to(11_000);

        let stages: Vec<Stage> = snapshots
            .borrow()
            .iter()
            .filter_map(|(_, events)| events.first().map(|e| e.stage))
            .collect();
        assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn retrigger_while_live_is_ignored() {
        let (clock, driver, snapshots) = running(&[4, 5]);
        assert!(trigger(&driver));
        assert!(!trigger(&driver));

        for t in [1_000, 2_600, 5_000, 7_000, 9_000, 10_999] {
            clock.advance_to(t);
            assert!(!trigger(&driver), "at t={}ms", t);
            assert_eq!(driver.inspect(|s| s.events().len()), 1);
            assert_eq!(driver.inspect(|s| s.current().map(|e| e.id)), Some(0));
        }

        clock.advance_to(11_000);
        let timeline: Vec<u64> = snapshots.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            timeline,
            vec![0, 2_500, 3_500, 4_500, 5_500, 6_000, 8_500, 11_000]
        );
    }

    #[test]
    fn trigger_works_again_right_after_removal() {
        let (clock, driver, _) = running(&[4, 5]);
        trigger(&driver);
        clock.advance_to(11_000);

        assert!(trigger(&driver));
        let event = driver.inspect(|s| s.current().cloned()).expect("second run");
        assert_eq!(event.id, 1);
        assert!(!event.is_goal);
        assert_eq!(event.stage, Stage::Intro);
        assert!(driver.inspect(ChanceSequence::is_active));
    }

    #[test]
    fn teardown_mid_countdown_stops_everything() {
        let (clock, driver, snapshots) = running(&[4]);
        trigger(&driver);
        clock.advance_to(3_000);
        let seen = snapshots.borrow().len();

        drop(driver);
        clock.advance_to(60_000);

        assert_eq!(snapshots.borrow().len(), seen);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn events_serialize_like_the_page_expects() {
        let mut event = ChanceEvent::new(7, Outcome::Goal);
        event.stage = Stage::Countdown;
        event.countdown = Some(2);

        let json = serde_json::to_value(&event).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "isGoal": true, "stage": "countdown", "countdown": 2})
        );
    }

    #[test]
    fn custom_countdown_length_is_respected() {
        let timing = ChanceTiming {
            countdown_from: 5,
            ..ChanceTiming::default()
        };
        let ticks: Vec<ChanceStep> = {
            let mut timeline = chance_timeline(&timing);
            std::iter::from_fn(|| timeline.advance()).map(|s| s.transition).collect()
        };
        assert_eq!(ticks[0], ChanceStep::StartCountdown(5));
        assert_eq!(
            &ticks[1..6],
            &[
                ChanceStep::Tick(4),
                ChanceStep::Tick(3),
                ChanceStep::Tick(2),
                ChanceStep::Tick(1),
                ChanceStep::Tick(0)
            ]
        );
        assert_eq!(ticks.last(), Some(&ChanceStep::Remove));
    }

    #[test]
    fn thread_roll_stays_in_range() {
        let mut rolls = ThreadRoll;
        assert!((0..500).map(|_| rolls.roll()).all(|r| r < ROLL_RANGE));
    }
}
