use std::time::Duration;

/// Handle returned by [`Scheduler::set_timeout`], usable with [`Scheduler::clear_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// Deferred work on the page's single event loop.
///
/// Nothing here is `Send`: every task runs on the thread that scheduled it, after the
/// current event handler returns.
pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;

    /// Cancels a pending timeout. Unknown or already fired handles are ignored.
    fn clear_timeout(&self, timer: TimerId);

    /// Runs `task` before the next repaint with the frame timestamp in milliseconds.
    fn request_frame(&self, task: Box<dyn FnOnce(f64)>);
}
