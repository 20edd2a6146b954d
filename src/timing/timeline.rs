/// One scheduled transition: wait `delay_ms` after the previous step, then apply `transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<T> {
    pub delay_ms: u32,
    pub transition: T,
}

impl<T> Step<T> {
    pub fn new(delay_ms: u32, transition: T) -> Self {
        Self { delay_ms, transition }
    }
}

/// An ordered list of steps consumed front to back.
///
/// A repeating timeline jumps back to `repeat_from` after its last step and
/// never finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
    repeat_from: Option<usize>,
    cursor: usize,
}

impl<T: Copy> Timeline<T> {
    pub fn once(steps: Vec<Step<T>>) -> Self {
        Self {
            steps,
            repeat_from: None,
            cursor: 0,
        }
    }

    pub fn repeating(steps: Vec<Step<T>>, repeat_from: usize) -> Self {
        debug_assert!(repeat_from < steps.len(), "repeat index out of range");
        Self {
            steps,
            repeat_from: Some(repeat_from),
            cursor: 0,
        }
    }

    /// Hands out the next step, or `None` once a non-repeating timeline is exhausted.
    pub fn advance(&mut self) -> Option<Step<T>> {
        if self.cursor >= self.steps.len() {
            match self.repeat_from {
                Some(start) if start < self.steps.len() => self.cursor = start,
                _ => return None,
            }
        }
        let step = self.steps[self.cursor];
        self.cursor += 1;
        Some(step)
    }

    pub fn is_finished(&self) -> bool {
        self.repeat_from.is_none() && self.cursor >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_stops_after_last_step() {
        let mut timeline = Timeline::once(vec![Step::new(10, 'a'), Step::new(20, 'b')]);

        assert_eq!(timeline.advance(), Some(Step::new(10, 'a')));
        assert!(!timeline.is_finished());
        assert_eq!(timeline.advance(), Some(Step::new(20, 'b')));
        assert!(timeline.is_finished());
        assert_eq!(timeline.advance(), None);
        assert_eq!(timeline.advance(), None);
    }

    #[test]
    fn repeating_loops_from_index() {
        let mut timeline = Timeline::repeating(
            vec![Step::new(1, 'x'), Step::new(2, 'y'), Step::new(3, 'z')],
            1,
        );
        let seen: Vec<char> = (0..7)
            .filter_map(|_| timeline.advance())
            .map(|s| s.transition)
            .collect();

        assert_eq!(seen, vec!['x', 'y', 'z', 'y', 'z', 'y', 'z']);
        assert!(!timeline.is_finished());
    }

    #[test]
    fn empty_timeline_yields_nothing() {
        let mut timeline: Timeline<u8> = Timeline::once(Vec::new());
        assert!(timeline.is_finished());
        assert_eq!(timeline.advance(), None);
    }
}
