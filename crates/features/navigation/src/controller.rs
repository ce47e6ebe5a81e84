use crate::active::{SectionBounds, active_section};
use folio_kernel::domain::config::NavigationConfig;
use folio_kernel::prelude::*;
use std::fmt;
use tracing::{debug, trace};

/// Mobile menu state, active-link highlighting and the navbar scroll marker.
pub struct Navigation<P: Page> {
    page: Rc<P>,
    config: NavigationConfig,
    menu: Option<P::Node>,
    toggle: Option<P::Node>,
    navbar: Option<P::Node>,
}

impl<P: Page> Navigation<P> {
    /// Resolves `#nav-menu`, `#nav-toggle` and `#navbar` once; any of them may be absent.
    pub fn new(page: Rc<P>, config: NavigationConfig) -> Self {
        let menu = page.element_by_id(ids::NAV_MENU);
        let toggle = page.element_by_id(ids::NAV_TOGGLE);
        let navbar = page.element_by_id(ids::NAVBAR);
        Self { page, config, menu, toggle, navbar }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| self.page.has_class(menu, classes::ACTIVE))
    }

    /// Flips `active` on the menu and its toggle. Returns whether the menu is now open.
    pub fn toggle_menu(&self) -> bool {
        let open = self.menu.as_ref().is_some_and(|menu| self.page.toggle_class(menu, classes::ACTIVE));
        if let Some(toggle) = &self.toggle {
            self.page.toggle_class(toggle, classes::ACTIVE);
        }
        debug!(open, "Mobile menu toggled");
        open
    }

    pub fn close_menu(&self) {
        for node in self.menu.iter().chain(&self.toggle) {
            self.page.remove_class(node, classes::ACTIVE);
        }
    }

    /// Whether `target` lies outside both the menu and its toggle.
    ///
    /// Always false unless both elements exist. An event without an element target counts as
    /// outside.
    pub fn is_outside(&self, target: Option<&P::Node>) -> bool {
        let (Some(menu), Some(toggle)) = (&self.menu, &self.toggle) else {
            return false;
        };
        target.is_none_or(|node| !self.page.contains(menu, node) && !self.page.contains(toggle, node))
    }

    /// Current `section[id]` extents in document order.
    pub fn sections(&self) -> Vec<SectionBounds> {
        self.page
            .query_all(selectors::SECTION)
            .into_iter()
            .filter_map(|section| {
                let id = self.page.attribute(&section, "id")?;
                Some(SectionBounds::new(id, self.page.offset_top(&section), self.page.offset_height(&section)))
            })
            .collect()
    }

    /// Highlights the `.nav-link` pointing at the section under `scrollY + active_offset`.
    /// Returns the id of that section.
    pub fn update_active_link(&self) -> Option<String> {
        let probe = self.page.scroll_y() + self.config.active_offset;
        let sections = self.sections();
        let current = active_section(&sections, probe).map(|id| format!("#{id}"));

        for link in self.page.query_all(selectors::NAV_LINK) {
            self.page.remove_class(&link, classes::ACTIVE);
            if current.is_some() && self.page.attribute(&link, "href") == current {
                self.page.add_class(&link, classes::ACTIVE);
            }
        }

        trace!(probe, current = current.as_deref(), "Active link updated");
        current.map(|href| href.trim_start_matches('#').to_owned())
    }

    /// Adds `scrolled` to the navbar past the threshold, removes it otherwise.
    pub fn update_navbar(&self) {
        let Some(navbar) = &self.navbar else {
            return;
        };
        if self.page.scroll_y() > self.config.scrolled_threshold {
            self.page.add_class(navbar, classes::SCROLLED);
        } else {
            self.page.remove_class(navbar, classes::SCROLLED);
        }
    }

    /// Forces the menu closed when the viewport is wider than the mobile breakpoint.
    pub fn close_if_desktop(&self) {
        if self.page.inner_width() > self.config.mobile_breakpoint {
            self.close_menu();
        }
    }

    /// Closes an open menu on `Escape`.
    pub fn on_key(&self, key: Option<&str>) {
        if key == Some(keys::ESCAPE) && self.is_menu_open() {
            self.close_menu();
        }
    }

    pub(crate) const fn page(&self) -> &Rc<P> {
        &self.page
    }

    pub(crate) const fn toggle(&self) -> Option<&P::Node> {
        self.toggle.as_ref()
    }

    pub(crate) const fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    pub(crate) const fn config(&self) -> &NavigationConfig {
        &self.config
    }
}

impl<P: Page> fmt::Debug for Navigation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("config", &self.config)
            .field("menu", &self.menu)
            .field("toggle", &self.toggle)
            .field("navbar", &self.navbar)
            .finish_non_exhaustive()
    }
}
