//! Browser entry point: wires the logger, waits for the document and mounts the portfolio.

mod page;
mod timers;

pub use crate::page::WebPage;

use folio::Portfolio;
use folio::kernel::prelude::Rc;
use folio_logger::{LevelFilter, Logger};
use std::cell::RefCell;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    static MOUNTED: RefCell<Option<Portfolio<WebPage>>> = const { RefCell::new(None) };
    static LOGGER: RefCell<Option<Logger>> = const { RefCell::new(None) };
}

#[derive(Debug)]
pub struct WebApp {
    name: String,
    level: LevelFilter,
    filter: Option<String>,
}

impl Default for WebApp {
    fn default() -> Self {
        let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
        Self { name: env!("CARGO_PKG_NAME").to_owned(), level, filter: None }
    }
}

impl WebApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Module-directed log filter, e.g. `"folio_contact=debug"`.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Installs the logger and mounts the portfolio once the DOM is parsed.
    ///
    /// # Errors
    /// Fails when the logger cannot be installed or there is no document to attach to.
    pub fn launch(self) -> Result<(), JsValue> {
        let mut builder = Logger::builder().name(self.name).level(self.level);
        if let Some(filter) = self.filter {
            builder = builder.env_filter(filter);
        }
        let logger = builder.init().map_err(|err| JsValue::from_str(&err.to_string()))?;
        LOGGER.with(|slot| *slot.borrow_mut() = Some(logger));

        let page = WebPage::new().ok_or_else(|| JsValue::from_str("No document to attach to"))?;

        if page.document().ready_state() == "loading" {
            let document = page.document().clone();
            let on_ready = Closure::once_into_js(move || mount(page));
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            mount(page);
        }
        Ok(())
    }
}

fn mount(page: WebPage) {
    let portfolio = Portfolio::boot(Rc::new(page));
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(portfolio));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    WebApp::new().launch()
}

/// Scrolls to the section with `id`, as the in-page anchors do.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    MOUNTED.with(|slot| match slot.borrow().as_ref() {
        Some(portfolio) => match portfolio.scroll_to_section(id) {
            Ok(top) => info!(section = id, top, "Scrolled to section"),
            Err(err) => warn!(%err, "Programmatic scroll failed"),
        },
        None => warn!(section = id, "Portfolio is not mounted yet"),
    });
}
