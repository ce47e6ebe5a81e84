//! Smooth in-page scrolling: navbar-aware section offsets, `#fragment` link interception and a
//! per-frame eased fallback for engines without native smooth scrolling.

mod error;
mod offset;
mod scroller;

pub use crate::error::{ScrollingError, ScrollingErrorExt};
pub use crate::offset::{ease_in_out_quad, target_offset};
pub use crate::scroller::{ScrollMode, SmoothScroller, intercept_anchors};

use folio_kernel::config::require_positive_ms;
use folio_kernel::domain::config::ScrollingConfig;
use folio_kernel::prelude::*;

/// Initialize the scrolling feature.
///
/// The returned scroller backs the global `scrollToSection` entry point.
///
/// # Errors
/// Returns [`ScrollingError::Config`] when the fallback duration is zero.
pub fn init<P: Page>(page: &Rc<P>, config: &ScrollingConfig) -> Result<Rc<SmoothScroller<P>>, ScrollingError> {
    require_positive_ms("scrolling.fallback_duration_ms", config.fallback_duration_ms)
        .context("Validating scrolling config")?;

    let scroller = Rc::new(SmoothScroller::new(Rc::clone(page), config.clone()));
    let anchors = intercept_anchors(&scroller);

    tracing::info!(mode = ?scroller.mode(), anchors, "Scrolling slice initialized");
    Ok(scroller)
}
