use gloo_timers::callback::Timeout;

use super::Scheduler;

/// `setTimeout` on the page's event loop. `Timeout` clears itself on drop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, move || task())
    }
}
