//! Rate limiting for scroll/resize handlers.
//!
//! Both wrappers own their state exclusively; cloning the wrapped closure is not supported,
//! create one wrapper per listener.

use crate::schedule::{Scheduler, TimerId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Leading-edge throttle: the first call runs immediately, calls inside the window are dropped.
pub struct Throttle<S: Scheduler> {
    scheduler: Rc<S>,
    limit: Duration,
    in_window: Rc<Cell<bool>>,
    f: Box<dyn Fn()>,
}

impl<S: Scheduler + 'static> Throttle<S> {
    pub fn new(scheduler: Rc<S>, limit: Duration, f: impl Fn() + 'static) -> Self {
        Self { scheduler, limit, in_window: Rc::new(Cell::new(false)), f: Box::new(f) }
    }

    /// Runs the wrapped function unless a previous call is still inside its window.
    /// Returns whether it ran.
    pub fn call(&self) -> bool {
        if self.in_window.get() {
            return false;
        }

        (self.f)();
        self.in_window.set(true);

        let in_window = Rc::clone(&self.in_window);
        self.scheduler.set_timeout(self.limit, Box::new(move || in_window.set(false)));
        true
    }

    pub fn is_throttled(&self) -> bool {
        self.in_window.get()
    }
}

impl<S: Scheduler> fmt::Debug for Throttle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("limit", &self.limit)
            .field("in_window", &self.in_window.get())
            .finish_non_exhaustive()
    }
}

/// Trailing-edge debounce: each call restarts the timer, only the last call in a burst runs.
///
/// With [`Debounce::immediate`] the first call of a burst runs instead and the trailing call is
/// skipped.
pub struct Debounce<S: Scheduler> {
    scheduler: Rc<S>,
    wait: Duration,
    immediate: bool,
    pending: Rc<Cell<Option<TimerId>>>,
    f: Rc<dyn Fn()>,
}

impl<S: Scheduler + 'static> Debounce<S> {
    pub fn new(scheduler: Rc<S>, wait: Duration, f: impl Fn() + 'static) -> Self {
        Self { scheduler, wait, immediate: false, pending: Rc::new(Cell::new(None)), f: Rc::new(f) }
    }

    /// Fire on the leading edge of a burst instead of the trailing one.
    #[must_use]
    pub const fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn call(&self) {
        let call_now = self.immediate && self.pending.get().is_none();

        if let Some(timer) = self.pending.take() {
            self.scheduler.clear_timeout(timer);
        }

        let pending = Rc::clone(&self.pending);
        let trailing = (!self.immediate).then(|| Rc::clone(&self.f));
        let timer = self.scheduler.set_timeout(
            self.wait,
            Box::new(move || {
                pending.set(None);
                if let Some(f) = trailing {
                    f();
                }
            }),
        );
        self.pending.set(Some(timer));

        if call_now {
            (self.f)();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl<S: Scheduler> fmt::Debug for Debounce<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("immediate", &self.immediate)
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryPage;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn throttle_drops_calls_inside_window() {
        let page = Rc::new(MemoryPage::new());
        let (hits, f) = counter();
        let throttle = Throttle::new(Rc::clone(&page), Duration::from_millis(100), f);

        assert!(throttle.call());
        assert!(!throttle.call());
        page.advance(99);
        assert!(!throttle.call());
        assert_eq!(hits.get(), 1);

        page.advance(1);
        assert!(!throttle.is_throttled());
        assert!(throttle.call());
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn debounce_runs_only_last_call_of_burst() {
        let page = Rc::new(MemoryPage::new());
        let (hits, f) = counter();
        let debounce = Debounce::new(Rc::clone(&page), Duration::from_millis(250), f);

        debounce.call();
        page.advance(200);
        debounce.call();
        page.advance(200);
        assert_eq!(hits.get(), 0);
        assert!(debounce.is_pending());

        page.advance(50);
        assert_eq!(hits.get(), 1);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn immediate_debounce_fires_on_leading_edge_only() {
        let page = Rc::new(MemoryPage::new());
        let (hits, f) = counter();
        let debounce = Debounce::new(Rc::clone(&page), Duration::from_millis(250), f).immediate(true);

        debounce.call();
        debounce.call();
        assert_eq!(hits.get(), 1);

        page.advance(250);
        assert_eq!(hits.get(), 1);

        debounce.call();
        assert_eq!(hits.get(), 2);
    }
}
