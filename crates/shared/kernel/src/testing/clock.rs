use crate::schedule::TimerId;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

struct PendingTimer {
    id: TimerId,
    due: f64,
    task: Box<dyn FnOnce()>,
}

/// Deterministic event loop: time only moves when a test advances it.
#[derive(Default)]
pub(crate) struct VirtualClock {
    now: Cell<f64>,
    next_id: Cell<i32>,
    timers: RefCell<Vec<PendingTimer>>,
    frames: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
}

impl VirtualClock {
    pub(crate) fn now(&self) -> f64 {
        self.now.get()
    }

    pub(crate) fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        let due = self.now.get() + delay.as_nanos() as f64 / 1_000_000.0;
        self.timers.borrow_mut().push(PendingTimer { id, due, task });
        id
    }

    pub(crate) fn clear_timeout(&self, timer: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != timer);
    }

    pub(crate) fn request_frame(&self, task: Box<dyn FnOnce(f64)>) {
        self.frames.borrow_mut().push(task);
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub(crate) fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Moves time forward, firing due timers in (due, id) order. Tasks may schedule more work;
    /// anything that falls inside the window fires in the same call.
    pub(crate) fn advance(&self, ms: f64) {
        let target = self.now.get() + ms;
        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due.max(self.now.get()));
            (timer.task)();
        }
        self.now.set(target);
    }

    /// Advances by one frame and runs every frame callback requested before it.
    pub(crate) fn next_frame(&self, frame_ms: f64) {
        self.advance(frame_ms);
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let stamp = self.now.get();
        for frame in frames {
            frame(stamp);
        }
    }

    fn pop_due(&self, target: f64) -> Option<PendingTimer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)))
            .map(|(i, _)| i)?;
        Some(timers.remove(index))
    }
}

impl fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualClock")
            .field("now", &self.now.get())
            .field("timers", &self.pending_timers())
            .field("frames", &self.pending_frames())
            .finish()
    }
}
