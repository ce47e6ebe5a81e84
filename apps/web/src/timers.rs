use fxhash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

/// Callbacks of scheduled timeouts, keyed by handle.
///
/// An entry lives from scheduling until the timeout fires or is cleared, whichever comes
/// first, so cancelled timeouts free their callback instead of leaking it.
pub(crate) struct PendingTimers<C> {
    slots: RefCell<FxHashMap<i32, C>>,
}

impl<C> PendingTimers<C> {
    pub(crate) fn new() -> Self {
        Self { slots: RefCell::new(FxHashMap::default()) }
    }

    pub(crate) fn hold(&self, id: i32, callback: C) {
        self.slots.borrow_mut().insert(id, callback);
    }

    /// Takes the callback out. The caller decides when it is dropped.
    pub(crate) fn release(&self, id: i32) -> Option<C> {
        self.slots.borrow_mut().remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl<C> fmt::Debug for PendingTimers<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTimers").field("len", &self.len()).finish()
    }
}
