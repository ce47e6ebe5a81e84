//! Navigation feature slice: mobile menu toggling and dismissal, active-link tracking and the
//! navbar `scrolled` marker.

mod active;
mod controller;
mod error;

pub use crate::active::{SectionBounds, active_section};
pub use crate::controller::Navigation;
pub use crate::error::{NavigationError, NavigationErrorExt};

use folio_kernel::config::require_positive_ms;
use folio_kernel::domain::config::NavigationConfig;
use folio_kernel::prelude::*;

/// Initialize the navigation feature and wire its listeners.
///
/// # Errors
/// Returns [`NavigationError::Config`] when a rate-limit interval is zero.
pub fn init<P: Page>(page: &Rc<P>, config: &NavigationConfig) -> Result<Rc<Navigation<P>>, NavigationError> {
    require_positive_ms("navigation.scroll_throttle_ms", config.scroll_throttle_ms)
        .context("Validating navigation config")?;
    require_positive_ms("navigation.resize_debounce_ms", config.resize_debounce_ms)
        .context("Validating navigation config")?;

    let nav = Rc::new(Navigation::new(Rc::clone(page), config.clone()));
    wire_menu(&nav);
    wire_window(&nav);

    tracing::info!("Navigation slice initialized");
    Ok(nav)
}

fn wire_menu<P: Page>(nav: &Rc<Navigation<P>>) {
    let page = nav.page();

    if let Some(toggle) = nav.toggle().filter(|_| nav.has_menu()) {
        let nav = Rc::clone(nav);
        page.listen(
            EventTarget::Element(toggle.clone()),
            EventKind::Click,
            Box::new(move |event| {
                event.stop_propagation();
                nav.toggle_menu();
            }),
        );
    }

    for link in page.query_all(selectors::NAV_LINK) {
        let nav = Rc::clone(nav);
        page.listen(EventTarget::Element(link), EventKind::Click, Box::new(move |_| nav.close_menu()));
    }

    let outside = Rc::clone(nav);
    page.listen(
        EventTarget::Document,
        EventKind::Click,
        Box::new(move |event| {
            if outside.is_outside(event.target()) {
                outside.close_menu();
            }
        }),
    );

    let escape = Rc::clone(nav);
    page.listen(EventTarget::Document, EventKind::KeyDown, Box::new(move |event| escape.on_key(event.key())));
}

fn wire_window<P: Page>(nav: &Rc<Navigation<P>>) {
    let page = nav.page();
    let config = nav.config();

    let on_resize = Rc::clone(nav);
    let resize = Debounce::new(Rc::clone(page), Duration::from_millis(config.resize_debounce_ms), move || {
        on_resize.close_if_desktop();
    });
    page.listen(EventTarget::Window, EventKind::Resize, Box::new(move |_| resize.call()));

    let on_scroll = Rc::clone(nav);
    let scroll = Throttle::new(Rc::clone(page), Duration::from_millis(config.scroll_throttle_ms), move || {
        on_scroll.update_navbar();
        on_scroll.update_active_link();
    });
    page.listen(
        EventTarget::Window,
        EventKind::Scroll,
        Box::new(move |_| {
            scroll.call();
        }),
    );
}
