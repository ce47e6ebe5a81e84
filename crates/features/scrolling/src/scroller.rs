use crate::error::ScrollingError;
use crate::offset::{ease_in_out_quad, target_offset};
use folio_kernel::domain::config::ScrollingConfig;
use folio_kernel::prelude::*;
use std::cell::Cell;
use std::fmt;
use tracing::{debug, error, trace};

/// How a scroll request reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// `window.scrollTo({ behavior: "smooth" })`.
    Native,
    /// Per-frame quadratic ease-in-out for engines without smooth scrolling.
    Eased { duration: Duration },
}

/// Navbar-aware scrolling to page sections.
pub struct SmoothScroller<P: Page> {
    page: Rc<P>,
    config: ScrollingConfig,
    mode: ScrollMode,
}

impl<P: Page> SmoothScroller<P> {
    /// Picks [`ScrollMode::Native`] when the page supports smooth scrolling, the eased
    /// fallback otherwise.
    pub fn new(page: Rc<P>, config: ScrollingConfig) -> Self {
        let mode = if page.supports_smooth_scroll() {
            ScrollMode::Native
        } else {
            ScrollMode::Eased { duration: Duration::from_millis(config.fallback_duration_ms) }
        };
        Self { page, config, mode }
    }

    pub const fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Live navbar height, or the configured fallback when the navbar is missing or collapsed.
    pub fn navbar_height(&self) -> f64 {
        self.page
            .element_by_id(ids::NAVBAR)
            .map(|navbar| self.page.offset_height(&navbar))
            .filter(|height| *height > 0.0)
            .unwrap_or(self.config.navbar_fallback_height)
    }

    /// Scroll position for `section`.
    pub fn target_for(&self, section: &P::Node) -> f64 {
        target_offset(self.page.offset_top(section), self.navbar_height(), self.config.extra_offset)
    }

    /// Scrolls to the element with `id`, returning the requested position.
    ///
    /// # Errors
    /// Returns [`ScrollingError::SectionNotFound`] (and logs it) when no element has `id`.
    /// Nothing is scrolled in that case.
    pub fn scroll_to_section(&self, id: &str) -> Result<f64, ScrollingError> {
        debug!(section = id, "Scrolling to section");

        let Some(section) = self.page.element_by_id(id) else {
            error!(section = id, "Target section not found");
            return Err(ScrollingError::SectionNotFound { id: id.to_owned(), context: None });
        };

        let top = self.target_for(&section);
        self.scroll_to(top);
        Ok(top)
    }

    /// Scrolls the window to `top` using the active [`ScrollMode`].
    pub fn scroll_to(&self, top: f64) {
        match self.mode {
            ScrollMode::Native => self.page.scroll_to(top, ScrollBehavior::Smooth),
            ScrollMode::Eased { duration } => {
                let start = self.page.scroll_y();
                let animation = Rc::new(EasedScroll {
                    page: Rc::clone(&self.page),
                    start,
                    distance: top - start,
                    duration_ms: duration.as_secs_f64() * 1000.0,
                    started_at: Cell::new(None),
                });
                self.page.request_frame(Box::new(move |now| animation.step(now)));
            },
        }
    }
}

impl<P: Page> fmt::Debug for SmoothScroller<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothScroller")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// One in-flight eased scroll; re-requests a frame until the duration has elapsed.
struct EasedScroll<P: Page> {
    page: Rc<P>,
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Cell<Option<f64>>,
}

impl<P: Page> EasedScroll<P> {
    fn step(self: Rc<Self>, now: f64) {
        let started = self.started_at.get().unwrap_or(now);
        self.started_at.set(Some(started));

        let elapsed = now - started;
        let position = ease_in_out_quad(elapsed, self.start, self.distance, self.duration_ms);
        trace!(elapsed, position, "Eased scroll frame");
        self.page.scroll_to(position, ScrollBehavior::Instant);

        if elapsed < self.duration_ms {
            let page = Rc::clone(&self.page);
            page.request_frame(Box::new(move |next| self.step(next)));
        }
    }
}

/// Routes every in-page `#fragment` link through `scroller` instead of the default jump.
///
/// Links whose fragment does not resolve are still prevented; nothing scrolls.
pub fn intercept_anchors<P: Page>(scroller: &Rc<SmoothScroller<P>>) -> usize {
    let page = &scroller.page;
    let anchors = page.query_all(selectors::IN_PAGE_ANCHOR);

    for anchor in &anchors {
        let scroller = Rc::clone(scroller);
        let link = anchor.clone();
        page.listen(
            EventTarget::Element(anchor.clone()),
            EventKind::Click,
            Box::new(move |event| {
                event.prevent_default();
                event.stop_propagation();

                let href = scroller.page.attribute(&link, "href").unwrap_or_default();
                let id = href.strip_prefix('#').unwrap_or(&href);
                if let Some(target) = scroller.page.element_by_id(id) {
                    let top = scroller.target_for(&target);
                    scroller.scroll_to(top);
                }
            }),
        );
    }

    anchors.len()
}
