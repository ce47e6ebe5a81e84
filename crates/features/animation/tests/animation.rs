use folio_animation::{AnimationError, init};
use folio_kernel::domain::config::AnimationConfig;
use folio_kernel::prelude::*;
use folio_kernel::testing::MemoryPage;

#[test]
fn registration_tags_and_staggers_each_category() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let skills: Vec<_> = (0..3).map(|_| page.insert(&body, "div.skill-item")).collect();
    let about = page.insert(&body, "div.about-content");

    let animator = init(&page, &AnimationConfig::default()).expect("animator");

    assert_eq!(animator.watched_count(), 4);
    assert!(skills.iter().all(|s| page.has_class(s, classes::ANIMATE_ON_SCROLL)));
    assert_eq!(page.style(&skills[2], "transition-delay").as_deref(), Some("0.2s"));
    assert_eq!(page.style(&about, "transition-delay").as_deref(), Some("0s"));
    assert!(page.is_observed(&about));

    let watchers = page.watchers();
    let watcher = &watchers[0];
    assert!((watcher.options().threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(watcher.options().root_margin, "0px 0px -50px 0px");
}

#[test]
fn reveal_is_one_shot() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let card = page.insert(&body, "div.contact-info");
    let animator = init(&page, &AnimationConfig::default()).expect("animator");

    page.reveal(&card);
    assert!(page.has_class(&card, classes::ANIMATE));
    assert!(!page.is_observed(&card));
    assert!(!animator.is_watched(&card));

    page.remove_class(&card, classes::ANIMATE);
    animator.on_visible(&card);
    assert!(!page.has_class(&card, classes::ANIMATE), "already revealed elements are ignored");
}

#[test]
fn reveals_keep_working_after_the_handle_is_dropped() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let card = page.insert(&body, "div.venture-card");
    let icon = page.insert(&card, "div.venture-icon");
    drop(init(&page, &AnimationConfig::default()).expect("animator"));

    page.reveal(&card);

    assert!(page.has_class(&card, classes::ANIMATE));
    assert!(!page.is_observed(&card));
    page.advance(150);
    assert_eq!(page.style(&icon, "transform").as_deref(), Some("scale(1.2)"));
}

#[test]
fn skill_icon_spins_then_settles() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let skill = page.insert(&body, "div.skill-item");
    let icon = page.insert(&skill, "div.skill-icon");
    init(&page, &AnimationConfig::default()).expect("animator");

    page.reveal(&skill);
    page.advance(199);
    assert_eq!(page.style(&icon, "transform"), None);
    page.advance(1);
    assert_eq!(page.style(&icon, "transform").as_deref(), Some("rotate(360deg) scale(1.1)"));
    page.advance(500);
    assert_eq!(page.style(&icon, "transform").as_deref(), Some("rotate(0deg) scale(1)"));
}

#[test]
fn timeline_and_venture_pulses_follow_their_timings() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let item = page.insert(&body, "div.timeline-item");
    let content = page.insert(&item, "div.timeline-content");
    let venture = page.insert(&body, "div.venture-card");
    let venture_icon = page.insert(&venture, "div.venture-icon");
    init(&page, &AnimationConfig::default()).expect("animator");

    page.reveal(&item);
    page.reveal(&venture);

    page.advance(150);
    assert_eq!(page.style(&venture_icon, "transform").as_deref(), Some("scale(1.2)"));
    page.advance(150);
    assert_eq!(page.style(&content, "transform").as_deref(), Some("scale(1.05)"));
    page.advance(150);
    assert_eq!(page.style(&venture_icon, "transform").as_deref(), Some("scale(1)"));
    page.advance(50);
    assert_eq!(page.style(&content, "transform").as_deref(), Some("scale(1)"));
}

#[test]
fn cards_without_the_animated_child_only_get_revealed() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let card = page.insert(&body, "div.venture-card");
    init(&page, &AnimationConfig::default()).expect("animator");

    page.reveal(&card);
    assert!(page.has_class(&card, classes::ANIMATE));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn without_intersection_everything_is_revealed_at_init() {
    let page = Rc::new(MemoryPage::new().without_intersection_observer());
    let body = page.body_id();
    let nodes = [page.insert(&body, "div.timeline-item"), page.insert(&body, "form.contact-form")];

    let animator = init(&page, &AnimationConfig::default()).expect("animator");

    assert!(!animator.is_observing());
    assert_eq!(animator.watched_count(), 0);
    for node in &nodes {
        assert!(page.has_class(node, classes::ANIMATE_ON_SCROLL));
        assert!(page.has_class(node, classes::ANIMATE));
    }
}

#[test]
fn scroll_indicator_fades_past_threshold() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let indicator = page.insert(&body, "div.scroll-indicator");
    init(&page, &AnimationConfig::default()).expect("animator");

    page.scroll_window(150.0);
    assert_eq!(page.style(&indicator, "opacity").as_deref(), Some("0"));
    assert_eq!(page.style(&indicator, "pointer-events").as_deref(), Some("none"));

    page.advance(100);
    page.scroll_window(100.0);
    assert_eq!(page.style(&indicator, "opacity").as_deref(), Some("1"));
    assert_eq!(page.style(&indicator, "pointer-events").as_deref(), Some("auto"));
}

#[test]
fn hero_pattern_pauses_while_hidden() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let pattern = page.insert(&body, "div.hero-pattern");
    init(&page, &AnimationConfig::default()).expect("animator");

    page.set_hidden(true);
    assert_eq!(page.style(&pattern, "animation-play-state").as_deref(), Some("paused"));
    page.set_hidden(false);
    assert_eq!(page.style(&pattern, "animation-play-state").as_deref(), Some("running"));
}

#[test]
fn profile_placeholder_replaces_broken_image() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let image = page.insert(&body, "img.profile-image");
    let placeholder = page.insert(&body, "div.profile-placeholder");
    init(&page, &AnimationConfig::default()).expect("animator");
    assert_eq!(page.style(&image, "display"), None);

    page.finish_image(&image, ImageStatus::Broken);
    assert_eq!(page.style(&image, "display").as_deref(), Some("none"));
    assert_eq!(page.style(&placeholder, "display").as_deref(), Some("flex"));

    page.finish_image(&image, ImageStatus::Loaded);
    assert_eq!(page.style(&image, "display").as_deref(), Some("block"));
    assert_eq!(page.style(&placeholder, "display").as_deref(), Some("none"));
}

#[test]
fn cached_profile_image_is_resolved_at_init() {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let image = page.insert(&body, "img.profile-image");
    let placeholder = page.insert(&body, "div.profile-placeholder");
    page.set_image_status(&image, Some(ImageStatus::Loaded));

    init(&page, &AnimationConfig::default()).expect("animator");
    assert_eq!(page.style(&placeholder, "display").as_deref(), Some("none"));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let page = Rc::new(MemoryPage::new());
    let config = AnimationConfig { threshold: 1.5, ..AnimationConfig::default() };

    let err = init(&page, &config).expect_err("bad threshold");
    assert!(matches!(err, AnimationError::Config { .. }));
    assert!(err.to_string().contains("animation.threshold"));
}
