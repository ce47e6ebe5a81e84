//! Everything a slice usually needs in one import.

pub use crate::domain::config::SiteConfig;
pub use crate::domain::constants::{classes, ids, keys, selectors};
pub use crate::page::{
    DomEvent, EventKind, EventTarget, Handler, ImageStatus, Page, ScrollBehavior,
    VisibilityWatcher, WatchOptions,
};
pub use crate::schedule::{Scheduler, TimerId};
pub use crate::timing::{Debounce, Throttle};
pub use std::rc::Rc;
pub use std::time::Duration;
