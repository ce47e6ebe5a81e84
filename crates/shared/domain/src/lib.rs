//! # Domain
//!
//! Pure page vocabulary shared by every slice: element ids, selectors, marker classes and the
//! site configuration. Keep it lean: no DOM access, no timers, no logic beyond defaults.

pub mod config;
pub mod constants;
