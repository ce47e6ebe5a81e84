use folio_kernel::domain::config::ContactConfig;
use folio_kernel::prelude::*;
use tracing::debug;

const BANNER_CSS: &str = "position: fixed; top: 100px; right: 20px; \
    background: var(--portfolio-secondary); color: white; padding: 16px 20px; \
    border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); z-index: 1001; \
    transform: translateX(100%); transition: transform 0.3s ease; max-width: 300px;";

const CONTENT_CSS: &str = "display: flex; align-items: center; gap: 8px;";

const HIDDEN: &str = "translateX(100%)";
const SHOWN: &str = "translateX(0)";

/// Appends a success banner to the body and schedules its slide-in, slide-out and removal.
///
/// Returns the banner element, or `None` when the page has no body or refuses to create it.
pub fn show_success<P: Page>(page: &Rc<P>, config: &ContactConfig) -> Option<P::Node> {
    let body = page.body()?;
    let banner = page.create_element("div")?;
    page.set_attribute(&banner, "class", classes::NOTIFICATION);
    page.set_css_text(&banner, BANNER_CSS);

    let content = page.create_element("div")?;
    page.set_attribute(&content, "class", classes::NOTIFICATION_CONTENT);
    page.set_css_text(&content, CONTENT_CSS);
    page.append_child(&banner, &content);

    if let Some(icon) = page.create_element("i") {
        page.set_attribute(&icon, "data-feather", "check-circle");
        page.append_child(&content, &icon);
    }
    if let Some(label) = page.create_element("span") {
        page.set_text(&label, &config.success_message);
        page.append_child(&content, &label);
    }

    page.append_child(&body, &banner);
    page.render_icons();
    debug!("Success banner shown");

    let enter = (Rc::clone(page), banner.clone());
    page.set_timeout(
        Duration::from_millis(config.banner_enter_ms),
        Box::new(move || enter.0.set_style(&enter.1, "transform", SHOWN)),
    );

    let exit = (Rc::clone(page), banner.clone());
    let exit_after = Duration::from_millis(config.banner_exit_ms);
    page.set_timeout(
        Duration::from_millis(config.banner_visible_ms),
        Box::new(move || {
            let (page, banner) = exit;
            page.set_style(&banner, "transform", HIDDEN);
            let remover = Rc::clone(&page);
            page.set_timeout(
                exit_after,
                Box::new(move || {
                    let attached = remover.body().is_some_and(|body| remover.contains(&body, &banner));
                    if attached {
                        remover.remove(&banner);
                    }
                }),
            );
        }),
    );

    Some(banner)
}
