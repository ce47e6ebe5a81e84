use folio_kernel::domain::config::NavigationConfig;
use folio_kernel::prelude::*;
use folio_kernel::testing::{MemoryPage, NodeId};
use folio_navigation::{Navigation, NavigationError, init};

struct Layout {
    toggle: NodeId,
    menu: NodeId,
    navbar: NodeId,
    home_link: NodeId,
    about_link: NodeId,
    outside: NodeId,
}

fn layout(page: &MemoryPage) -> Layout {
    let body = page.body_id();
    let navbar = page.insert(&body, "nav#navbar");
    let toggle = page.insert(&navbar, "button#nav-toggle");
    page.insert(&toggle, "span.bar");
    let menu = page.insert(&navbar, "ul#nav-menu");
    let home_link = page.insert(&menu, r##"a.nav-link[href="#home"]"##);
    let about_link = page.insert(&menu, r##"a.nav-link[href="#about"]"##);

    let home = page.insert(&body, "section#home");
    page.set_geometry(&home, 0.0, 800.0);
    let about = page.insert(&body, "section#about");
    page.set_geometry(&about, 800.0, 600.0);
    let outside = page.insert(&about, "p");

    Layout { toggle, menu, navbar, home_link, about_link, outside }
}

fn mounted() -> (Rc<MemoryPage>, Layout, Rc<Navigation<MemoryPage>>) {
    let page = Rc::new(MemoryPage::new());
    let nodes = layout(&page);
    let nav = init(&page, &NavigationConfig::default()).expect("navigation");
    (page, nodes, nav)
}

#[test]
fn toggling_twice_returns_to_closed() {
    let (page, nodes, nav) = mounted();

    page.click(&nodes.toggle);
    assert!(nav.is_menu_open());
    assert!(page.has_class(&nodes.toggle, classes::ACTIVE));

    page.click(&nodes.toggle);
    assert!(!nav.is_menu_open());
    assert!(!page.has_class(&nodes.toggle, classes::ACTIVE));
}

#[test]
fn toggle_click_does_not_reach_the_outside_handler() {
    let (page, nodes, nav) = mounted();

    let event = page.click(&nodes.toggle);
    assert!(event.propagation_stopped());
    assert!(nav.is_menu_open());
}

#[test]
fn menu_closes_on_link_outside_click_and_escape() {
    let (page, nodes, nav) = mounted();

    nav.toggle_menu();
    page.click(&nodes.about_link);
    assert!(!nav.is_menu_open());

    nav.toggle_menu();
    page.click(&nodes.menu);
    assert!(nav.is_menu_open(), "clicks inside the menu keep it open");
    page.click(&nodes.outside);
    assert!(!nav.is_menu_open());

    nav.toggle_menu();
    page.press_key(&nodes.outside, "Enter");
    assert!(nav.is_menu_open());
    page.press_key(&nodes.outside, keys::ESCAPE);
    assert!(!nav.is_menu_open());
    assert!(!page.has_class(&nodes.toggle, classes::ACTIVE));
}

#[test]
fn widening_past_breakpoint_closes_after_debounce() {
    let (page, _, nav) = mounted();
    nav.toggle_menu();

    page.resize(700.0);
    page.advance(250);
    assert!(nav.is_menu_open());

    page.resize(900.0);
    page.advance(100);
    page.resize(1024.0);
    page.advance(249);
    assert!(nav.is_menu_open());
    page.advance(1);
    assert!(!nav.is_menu_open());
}

#[test]
fn active_link_follows_scroll_position() {
    let (page, nodes, _) = mounted();

    page.scroll_window(0.0);
    assert!(page.has_class(&nodes.home_link, classes::ACTIVE));
    assert!(!page.has_class(&nodes.navbar, classes::SCROLLED));

    page.advance(100);
    page.scroll_window(650.0);
    assert!(page.has_class(&nodes.about_link, classes::ACTIVE));
    assert!(!page.has_class(&nodes.home_link, classes::ACTIVE));
    assert!(page.has_class(&nodes.navbar, classes::SCROLLED));
}

#[test]
fn scroll_handler_is_throttled() {
    let (page, nodes, _) = mounted();

    page.scroll_window(0.0);
    page.scroll_window(650.0);
    assert!(page.has_class(&nodes.home_link, classes::ACTIVE), "second call inside the window is dropped");

    page.advance(100);
    page.scroll_window(650.0);
    assert!(page.has_class(&nodes.about_link, classes::ACTIVE));
}

#[test]
fn section_top_boundary_activates_section() {
    let (page, _, nav) = mounted();

    page.scroll_window(650.0);
    assert_eq!(nav.update_active_link().as_deref(), Some("about"));
    page.scroll_window(649.0);
    assert_eq!(nav.update_active_link().as_deref(), Some("home"));
    page.scroll_window(1400.0);
    assert_eq!(nav.update_active_link(), None);
}

#[test]
fn missing_elements_are_no_ops() {
    let page = Rc::new(MemoryPage::new());
    let nav = init(&page, &NavigationConfig::default()).expect("navigation");

    assert!(!nav.toggle_menu());
    nav.close_menu();
    page.click_document();
    page.scroll_window(500.0);
    assert_eq!(nav.update_active_link(), None);
}

#[test]
fn zero_intervals_are_rejected() {
    let page = Rc::new(MemoryPage::new());
    let config = NavigationConfig { resize_debounce_ms: 0, ..NavigationConfig::default() };

    let err = init(&page, &config).expect_err("zero debounce");
    assert!(matches!(err, NavigationError::Config { .. }));
    assert!(err.to_string().contains("navigation.resize_debounce_ms"));
}
