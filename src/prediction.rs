use thiserror::Error;

pub const MAX_SCORE: u8 = 10;

/// Degrees the wheel turns per goal, so 0..=MAX_SCORE covers a full circle.
pub const ROTATION_STEP: f64 = 360.0 / (MAX_SCORE as f64 + 1.0);

pub const ANALYST: &str = "MatchSense AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Select,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreline {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("Pick both scores to lock your prediction.")]
    Incomplete,
}

/// The score-wheel form. Nothing leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PredictionForm {
    home: Option<u8>,
    away: Option<u8>,
    locked: Option<Scoreline>,
    mode: Mode,
}

impl PredictionForm {
    pub fn score(&self, team: Team) -> Option<u8> {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }

    fn slot(&mut self, team: Team) -> &mut Option<u8> {
        match team {
            Team::Home => &mut self.home,
            Team::Away => &mut self.away,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn locked(&self) -> Option<Scoreline> {
        self.locked
    }

    pub fn select(&mut self, team: Team, score: u8) {
        *self.slot(team) = Some(score.min(MAX_SCORE));
    }

    /// Moves a wheel by one goal, treating an unset wheel as 0.
    /// Returns `false` when already at the bound.
    pub fn nudge(&mut self, team: Team, up: bool) -> bool {
        let slot = self.slot(team);
        let current = slot.unwrap_or(0);
        let next = if up {
            current.saturating_add(1).min(MAX_SCORE)
        } else {
            current.saturating_sub(1)
        };
        if next == current {
            return false;
        }
        *slot = Some(next);
        true
    }

    pub fn can_submit(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    pub fn submit(&mut self) -> Result<Scoreline, PredictionError> {
        let (Some(home), Some(away)) = (self.home, self.away) else {
            return Err(PredictionError::Incomplete);
        };
        let line = Scoreline { home, away };
        self.locked = Some(line);
        self.mode = Mode::Review;
        Ok(line)
    }

    pub fn edit(&mut self) {
        self.mode = Mode::Select;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn analyst_copy(&self) -> String {
        match self.locked {
            None => format!("Select your scoreline to lock in {}'s call.", ANALYST),
            Some(Scoreline { home, away }) if home > away => format!(
                "{} expects Barcelona to edge the match with confident attacking play.",
                ANALYST
            ),
            Some(Scoreline { home, away }) if home == away => format!(
                "Balanced battle ahead — {} sees a tight scoreline.",
                ANALYST
            ),
            Some(_) => format!(
                "{} is backing Madrid to surprise with a clinical finish.",
                ANALYST
            ),
        }
    }
}

pub fn wheel_rotation(score: Option<u8>) -> f64 {
    f64::from(score.unwrap_or(0)) * ROTATION_STEP
}

/// Position of option `score` on a wheel of the given radius, 0 at twelve o'clock.
pub fn wheel_offset(score: u8, radius: f64) -> (f64, f64) {
    let angle = f64::from(score) / (f64::from(MAX_SCORE) + 1.0) * std::f64::consts::TAU;
    (angle.sin() * radius, -angle.cos() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_needs_both_scores() {
        let mut form = PredictionForm::default();
        form.select(Team::Home, 2);

        assert!(!form.can_submit());
        assert_eq!(form.submit(), Err(PredictionError::Incomplete));
        assert_eq!(form.mode(), Mode::Select);
        assert_eq!(
            PredictionError::Incomplete.to_string(),
            "Pick both scores to lock your prediction."
        );
    }

    #[test]
    fn submit_locks_and_switches_to_review() {
        let mut form = PredictionForm::default();
        form.select(Team::Home, 2);
        form.select(Team::Away, 1);

        assert_eq!(form.submit(), Ok(Scoreline { home: 2, away: 1 }));
        assert_eq!(form.mode(), Mode::Review);

        form.edit();
        assert_eq!(form.mode(), Mode::Select);
        assert_eq!(form.score(Team::Home), Some(2));
        assert_eq!(form.locked(), Some(Scoreline { home: 2, away: 1 }));

        form.clear();
        assert_eq!(form, PredictionForm::default());
    }

    #[test]
    fn nudge_clamps_at_both_ends() {
        let mut form = PredictionForm::default();
        assert!(!form.nudge(Team::Away, false));
        assert_eq!(form.score(Team::Away), None);

        assert!(form.nudge(Team::Away, true));
        assert_eq!(form.score(Team::Away), Some(1));

        form.select(Team::Home, MAX_SCORE);
        assert!(!form.nudge(Team::Home, true));
        assert!(form.nudge(Team::Home, false));
        assert_eq!(form.score(Team::Home), Some(MAX_SCORE - 1));
    }

    #[test]
    fn select_caps_out_of_range_scores() {
        let mut form = PredictionForm::default();
        form.select(Team::Home, 42);
        assert_eq!(form.score(Team::Home), Some(MAX_SCORE));
    }

    #[test]
    fn analyst_reads_the_locked_line() {
        let mut form = PredictionForm::default();
        assert!(form.analyst_copy().starts_with("Select your scoreline"));

        for (home, away, needle) in [(3, 1, "Barcelona"), (1, 1, "tight"), (0, 2, "Madrid")] {
            form.select(Team::Home, home);
            form.select(Team::Away, away);
            form.submit().expect("complete");
            assert!(form.analyst_copy().contains(needle), "{}-{}", home, away);
        }
    }

    #[test]
    fn wheel_geometry() {
        assert_eq!(wheel_rotation(None), 0.0);
        assert!((wheel_rotation(Some(10)) - 327.272_727).abs() < 1e-3);

        let (x, y) = wheel_offset(0, 78.0);
        assert!(x.abs() < 1e-9);
        assert!((y + 78.0).abs() < 1e-9);
    }
}
