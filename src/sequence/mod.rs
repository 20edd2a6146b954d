//! Timed state machines behind the animated parts of the page.

pub mod album_cycle;
pub mod chance;
pub mod typewriter;

pub use album_cycle::AlbumCycle;
pub use chance::{ChanceEvent, ChanceSequence, Outcome, RollSource, Stage, ThreadRoll};
pub use typewriter::Typewriter;
