use crate::config::TypewriterTiming;
use crate::timing::{Machine, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStep {
    Type,
    StartDeleting,
    Delete,
    NextPhrase,
}

/// Types a phrase out, holds it, deletes it, then moves on to the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    timing: TypewriterTiming,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    pub fn text(&self) -> String {
        self.phrase().chars().take(self.shown).collect()
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

impl Machine for Typewriter {
    type Transition = TypeStep;

    fn next_step(&mut self) -> Option<Step<TypeStep>> {
        if self.phrases.is_empty() {
            return None;
        }
        let t = &self.timing;
        let step = match (self.deleting, self.shown) {
            (false, n) if n < self.phrase_len() => Step::new(t.type_ms, TypeStep::Type),
            (false, _) => Step::new(t.hold_ms, TypeStep::StartDeleting),
            (true, 0) => Step::new(t.delete_ms, TypeStep::NextPhrase),
            (true, _) => Step::new(t.delete_ms, TypeStep::Delete),
        };
        Some(step)
    }

    fn apply(&mut self, step: TypeStep) {
        match step {
            TypeStep::Type => self.shown = (self.shown + 1).min(self.phrase_len()),
            TypeStep::StartDeleting => self.deleting = true,
            TypeStep::Delete => self.shown = self.shown.saturating_sub(1),
            TypeStep::NextPhrase => {
                self.deleting = false;
                self.shown = 0;
                self.index = (self.index + 1) % self.phrases.len().max(1);
            }
        }
    }
}
