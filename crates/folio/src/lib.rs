//! Facade crate for the portfolio page's feature slices and shared modules.
//! Re-exports domain/kernel primitives and mounts every enabled slice on a [`Page`].
//! Keep this crate thin: it should compose other crates, not implement page behavior.
//!
//! ## Usage
//! - Add `folio` with the desired slice features (`full` enables all of them).
//! - Call [`Portfolio::boot`] once the document is ready.

mod error;

pub use crate::error::{FolioError, FolioErrorExt};
pub use folio_domain as domain;
pub use folio_kernel as kernel;

use folio_kernel::config::load_config;
use folio_kernel::prelude::*;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "animation")]
    pub use folio_animation as animation;
    #[cfg(feature = "contact")]
    pub use folio_contact as contact;
    #[cfg(feature = "navigation")]
    pub use folio_navigation as navigation;
    #[cfg(feature = "scrolling")]
    pub use folio_scrolling as scrolling;

    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "navigation")]
        "navigation",
        #[cfg(feature = "animation")]
        "animation",
        #[cfg(feature = "scrolling")]
        "scrolling",
        #[cfg(feature = "contact")]
        "contact",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Every mounted slice of one page.
///
/// A slice that failed to initialize is logged and left out; the others keep working.
pub struct Portfolio<P: Page> {
    page: Rc<P>,
    config: SiteConfig,
    #[cfg(feature = "navigation")]
    navigation: Option<Rc<features::navigation::Navigation<P>>>,
    #[cfg(feature = "animation")]
    animator: Option<Rc<features::animation::ScrollAnimator<P>>>,
    #[cfg(feature = "scrolling")]
    scroller: Option<Rc<features::scrolling::SmoothScroller<P>>>,
    #[cfg(feature = "contact")]
    contact: Option<Rc<features::contact::ContactForm<P>>>,
}

impl<P: Page> Portfolio<P> {
    /// Loads the embedded configuration and mounts every slice.
    ///
    /// A malformed configuration is logged and replaced with the defaults.
    pub fn boot(page: Rc<P>) -> Self {
        let config = load_config::<SiteConfig, _>(page.as_ref()).unwrap_or_else(|err| {
            warn!(%err, "Falling back to the default site config");
            SiteConfig::default()
        });
        Self::mount(page, config)
    }

    /// Mounts every enabled slice with `config`.
    pub fn mount(page: Rc<P>, config: SiteConfig) -> Self {
        page.render_icons();

        let portfolio = Self {
            #[cfg(feature = "navigation")]
            navigation: isolate("navigation", features::navigation::init(&page, &config.navigation)),
            #[cfg(feature = "animation")]
            animator: isolate("animation", features::animation::init(&page, &config.animation)),
            #[cfg(feature = "scrolling")]
            scroller: isolate("scrolling", features::scrolling::init(&page, &config.scrolling)),
            #[cfg(feature = "contact")]
            contact: isolate("contact", features::contact::init(&page, &config.contact)).flatten(),
            page,
            config,
        };

        let preloaded = preload_styles(portfolio.page.as_ref(), &portfolio.config.preload.styles);
        report_page_errors(&portfolio.page);

        info!(slices = ?features::ENABLED, preloaded, "Portfolio mounted");
        portfolio
    }

    pub const fn page(&self) -> &Rc<P> {
        &self.page
    }

    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[cfg(feature = "navigation")]
    pub fn navigation(&self) -> Option<&Rc<features::navigation::Navigation<P>>> {
        self.navigation.as_ref()
    }

    #[cfg(feature = "animation")]
    pub fn animator(&self) -> Option<&Rc<features::animation::ScrollAnimator<P>>> {
        self.animator.as_ref()
    }

    #[cfg(feature = "scrolling")]
    pub fn scroller(&self) -> Option<&Rc<features::scrolling::SmoothScroller<P>>> {
        self.scroller.as_ref()
    }

    #[cfg(feature = "contact")]
    pub fn contact(&self) -> Option<&Rc<features::contact::ContactForm<P>>> {
        self.contact.as_ref()
    }

    /// Programmatic navigation to a section by id.
    ///
    /// # Errors
    /// Returns [`FolioError::Scrolling`] when the section does not exist, or
    /// [`FolioError::Internal`] when the scrolling slice is not mounted.
    #[cfg(feature = "scrolling")]
    pub fn scroll_to_section(&self, id: &str) -> Result<f64, FolioError> {
        let scroller = self.scroller.as_ref().ok_or("scrolling slice is not mounted")?;
        Ok(scroller.scroll_to_section(id)?)
    }
}

impl<P: Page> fmt::Debug for Portfolio<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Portfolio");
        out.field("config", &self.config);
        #[cfg(feature = "navigation")]
        out.field("navigation", &self.navigation.is_some());
        #[cfg(feature = "animation")]
        out.field("animation", &self.animator.is_some());
        #[cfg(feature = "scrolling")]
        out.field("scrolling", &self.scroller.is_some());
        #[cfg(feature = "contact")]
        out.field("contact", &self.contact.is_some());
        out.finish_non_exhaustive()
    }
}

/// Keeps a failing slice from taking the page down with it.
fn isolate<T, E: Into<FolioError>>(slice: &'static str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            let err: FolioError = err.into();
            error!(slice, %err, "Slice failed to initialize, skipping");
            None
        },
    }
}

/// Adds `<link rel="preload" as="style">` hints for `urls` to `<head>`. Returns how many were
/// added.
pub fn preload_styles<P: Page + ?Sized>(page: &P, urls: &[String]) -> usize {
    let Some(head) = page.head() else {
        return 0;
    };

    let mut added = 0;
    for url in urls {
        let Some(link) = page.create_element("link") else {
            continue;
        };
        page.set_attribute(&link, "rel", "preload");
        page.set_attribute(&link, "as", "style");
        page.set_attribute(&link, "href", url);
        page.append_child(&head, &link);
        added += 1;
    }

    debug!(added, "Style preload hints added");
    added
}

/// Logs uncaught page errors.
pub fn report_page_errors<P: Page>(page: &Rc<P>) {
    page.listen(
        EventTarget::Window,
        EventKind::Error,
        Box::new(|event| {
            error!(message = event.message().unwrap_or("unknown error"), "Uncaught page error");
        }),
    );
}
