//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it defines the [`Page`] seam every controller talks through,
//! the [`Scheduler`] timers behind it, rate limiting helpers and config loading.
//!
//! ## Rate limiting
//! ```rust,ignore
//! # use folio_kernel::testing::MemoryPage;
//! # use folio_kernel::timing::Throttle;
//! # use std::{cell::Cell, rc::Rc, time::Duration};
//! let page = Rc::new(MemoryPage::new());
//! let hits = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&hits);
//! let throttle = Throttle::new(Rc::clone(&page), Duration::from_millis(100), move || {
//!     counter.set(counter.get() + 1);
//! });
//!
//! throttle.call();
//! throttle.call();
//! assert_eq!(hits.get(), 1);
//! ```

pub mod config;
pub mod page;
pub mod prelude;
pub mod schedule;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod timing;

pub use folio_domain as domain;
pub use page::{
    DomEvent, EventKind, EventTarget, Handler, ImageStatus, Page, ScrollBehavior,
    VisibilityWatcher, WatchOptions,
};
pub use schedule::{Scheduler, TimerId};
