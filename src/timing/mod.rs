//! Timer plumbing shared by every animated piece of the page.
//!
//! A [`Machine`] describes *what* happens next as a `(delay, transition)`
//! [`Step`]; a [`Scheduler`] decides *how* the delay elapses (browser
//! `setTimeout` in production, [`VirtualClock`] in tests); a [`Driver`]
//! ties the two together and owns the single pending timer.

pub mod browser;
pub mod driver;
pub mod timeline;
#[cfg(test)]
pub mod virtual_clock;

pub use browser::BrowserScheduler;
pub use driver::{Driver, Machine};
pub use timeline::{Step, Timeline};
#[cfg(test)]
pub use virtual_clock::VirtualClock;

/// Runs a task once after a delay.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}
