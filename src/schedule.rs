use std::time::Duration;

pub type Task = Box<dyn FnOnce() + 'static>;

/// Deferred execution used by every timed effect on the page.
///
/// The browser implementation forwards to `setTimeout` and
/// `requestAnimationFrame`; tests drive a virtual clock instead.
pub trait Scheduler {
    fn after(&self, delay: Duration, task: Task);
    fn next_frame(&self, task: Task);
}
