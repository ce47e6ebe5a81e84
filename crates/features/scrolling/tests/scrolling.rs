use folio_kernel::domain::config::ScrollingConfig;
use folio_kernel::prelude::*;
use folio_kernel::testing::{MemoryPage, NodeId, ScrollRequest};
use folio_scrolling::{ScrollMode, ScrollingError, SmoothScroller, init};
use std::io;
use std::sync::{Arc, Mutex};

fn page_with_sections(page: &MemoryPage) -> (NodeId, NodeId) {
    let body = page.body_id();
    let navbar = page.insert(&body, "nav#navbar");
    page.set_geometry(&navbar, 0.0, 80.0);
    let about = page.insert(&body, "section#about");
    page.set_geometry(&about, 600.0, 900.0);
    let contact = page.insert(&body, "section#contact");
    page.set_geometry(&contact, 2400.0, 700.0);
    (about, contact)
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn scrolls_below_the_live_navbar() {
    let page = Rc::new(MemoryPage::new());
    page_with_sections(&page);
    let scroller = init(&page, &ScrollingConfig::default()).expect("scroller");

    let top = scroller.scroll_to_section("contact").expect("known section");
    assert!((top - 2300.0).abs() < f64::EPSILON);
    assert_eq!(
        page.scroll_requests(),
        vec![ScrollRequest { top: 2300.0, behavior: ScrollBehavior::Smooth }]
    );
}

#[test]
fn missing_navbar_uses_fallback_height() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let about = page.insert(&body, "section#about");
    page.set_geometry(&about, 600.0, 900.0);
    let scroller = SmoothScroller::new(Rc::clone(&page), ScrollingConfig::default());

    assert!((scroller.navbar_height() - 70.0).abs() < f64::EPSILON);
    assert!((scroller.target_for(&about) - 510.0).abs() < f64::EPSILON);
}

#[test]
fn sections_near_the_top_clamp_to_origin() {
    let page = Rc::new(MemoryPage::new());
    let (about, _) = page_with_sections(&page);
    page.set_geometry(&about, 40.0, 900.0);
    let scroller = SmoothScroller::new(Rc::clone(&page), ScrollingConfig::default());

    assert!(scroller.scroll_to_section("about").expect("known").abs() < f64::EPSILON);
}

#[test]
fn unknown_section_logs_and_does_not_scroll() {
    let page = Rc::new(MemoryPage::new());
    page_with_sections(&page);
    let scroller = SmoothScroller::new(Rc::clone(&page), ScrollingConfig::default());

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || scroller.scroll_to_section("nowhere"));

    assert!(matches!(result, Err(ScrollingError::SectionNotFound { ref id, .. }) if id == "nowhere"));
    assert!(page.scroll_requests().is_empty());
    let logs = captured.contents();
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("Target section not found"));
}

#[test]
fn anchor_clicks_are_intercepted() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    page_with_sections(&page);
    let link = page.insert(&body, r##"a.nav-link[href="#about"]"##);
    let broken = page.insert(&body, r##"a[href="#missing"]"##);
    init(&page, &ScrollingConfig::default()).expect("scroller");

    let event = page.click(&link);
    assert!(event.default_prevented());
    assert_eq!(
        page.scroll_requests(),
        vec![ScrollRequest { top: 500.0, behavior: ScrollBehavior::Smooth }]
    );

    let event = page.click(&broken);
    assert!(event.default_prevented());
    assert_eq!(page.scroll_requests().len(), 1);
}

#[test]
fn eased_fallback_lands_on_target() {
    let page = Rc::new(MemoryPage::new().without_smooth_scroll());
    page_with_sections(&page);
    let scroller = init(&page, &ScrollingConfig::default()).expect("scroller");
    assert_eq!(scroller.mode(), ScrollMode::Eased { duration: Duration::from_millis(1000) });

    scroller.scroll_to_section("about").expect("known");
    let frames = page.run_frames(16.0, 500);

    let requests = page.scroll_requests();
    assert!(frames > 1);
    assert!(requests.iter().all(|r| r.behavior == ScrollBehavior::Instant));
    assert!(requests.windows(2).all(|w| w[0].top <= w[1].top));
    assert!((page.scroll_y() - 500.0).abs() < 1e-9);
}

#[test]
fn zero_fallback_duration_is_rejected() {
    let page = Rc::new(MemoryPage::new());
    let config = ScrollingConfig { fallback_duration_ms: 0, ..ScrollingConfig::default() };

    let err = init(&page, &config).expect_err("zero duration");
    assert!(matches!(err, ScrollingError::Config { .. }));
    assert!(err.to_string().contains("Validating scrolling config"));
}
