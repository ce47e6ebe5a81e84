//! Decorative effects that accompany the reveal animations.

use folio_kernel::prelude::*;
use tracing::debug;

/// Fades the hero scroll indicator once the page has scrolled past `hide_after`.
pub fn apply_indicator<P: Page>(page: &P, indicator: &P::Node, hide_after: f64) {
    let (opacity, pointer_events) = if page.scroll_y() > hide_after { ("0", "none") } else { ("1", "auto") };
    page.set_style(indicator, "opacity", opacity);
    page.set_style(indicator, "pointer-events", pointer_events);
}

/// Wires the throttled scroll handler for `.scroll-indicator`. Returns false when the page has
/// no indicator.
pub fn wire_scroll_indicator<P: Page>(page: &Rc<P>, hide_after: f64, interval: Duration) -> bool {
    let Some(indicator) = page.query_all(selectors::SCROLL_INDICATOR).into_iter().next() else {
        return false;
    };

    let target = Rc::clone(page);
    let throttle = Throttle::new(Rc::clone(page), interval, move || {
        apply_indicator(target.as_ref(), &indicator, hide_after);
    });
    page.listen(
        EventTarget::Window,
        EventKind::Scroll,
        Box::new(move |_| {
            throttle.call();
        }),
    );
    true
}

/// Pauses `.hero-pattern` CSS animations while the document is hidden.
pub fn apply_visibility<P: Page>(page: &P) {
    let state = if page.is_hidden() { "paused" } else { "running" };
    for pattern in page.query_all(selectors::HERO_PATTERN) {
        page.set_style(&pattern, "animation-play-state", state);
    }
    debug!(state, "Hero animations toggled");
}

pub fn wire_visibility_pause<P: Page>(page: &Rc<P>) {
    let target = Rc::clone(page);
    page.listen(
        EventTarget::Document,
        EventKind::VisibilityChange,
        Box::new(move |_| apply_visibility(target.as_ref())),
    );
}

/// Shows whichever of the profile photo and its placeholder matches `status`.
pub fn apply_profile_image<P: Page>(page: &P, image: &P::Node, placeholder: &P::Node, status: ImageStatus) {
    match status {
        ImageStatus::Loaded => {
            page.set_style(placeholder, "display", "none");
            page.set_style(image, "display", "block");
        },
        ImageStatus::Broken => {
            page.set_style(image, "display", "none");
            page.set_style(placeholder, "display", "flex");
        },
    }
}

/// Swaps in the placeholder when the profile photo fails to load.
///
/// Needs both `.profile-image` and `.profile-placeholder`; returns false otherwise. An image
/// that already finished loading is resolved immediately.
pub fn wire_profile_image<P: Page>(page: &Rc<P>) -> bool {
    let image = page.query_all(selectors::PROFILE_IMAGE).into_iter().next();
    let placeholder = page.query_all(selectors::PROFILE_PLACEHOLDER).into_iter().next();
    let (Some(image), Some(placeholder)) = (image, placeholder) else {
        return false;
    };

    for (kind, status) in [(EventKind::Load, ImageStatus::Loaded), (EventKind::Error, ImageStatus::Broken)] {
        let target = Rc::clone(page);
        let (img, fallback) = (image.clone(), placeholder.clone());
        page.listen(
            EventTarget::Element(image.clone()),
            kind,
            Box::new(move |_| apply_profile_image(target.as_ref(), &img, &fallback, status)),
        );
    }

    if let Some(status) = page.image_status(&image) {
        apply_profile_image(page.as_ref(), &image, &placeholder, status);
    }
    true
}
