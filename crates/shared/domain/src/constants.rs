//! Element ids, selectors and marker classes the page markup is expected to carry.

/// Element ids looked up with `getElementById`.
pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_MENU: &str = "nav-menu";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const CONFIG_SCRIPT: &str = "folio-config";
}

/// Selectors passed to `querySelector(All)`.
pub mod selectors {
    pub const NAV_LINK: &str = ".nav-link";
    pub const SECTION: &str = "section[id]";
    pub const IN_PAGE_ANCHOR: &str = r##"a[href^="#"]"##;
    pub const SCROLL_INDICATOR: &str = ".scroll-indicator";
    pub const HERO_PATTERN: &str = ".hero-pattern";
    pub const PROFILE_IMAGE: &str = ".profile-image";
    pub const PROFILE_PLACEHOLDER: &str = ".profile-placeholder";

    pub const MESSAGE_FIELD: &str = "#message";
    pub const FORM_FIELDS: &str = "input, textarea";
    pub const REQUIRED_FIELDS: &str = "input[required], textarea[required]";
    pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
    pub const NOTIFICATION_CONTENT: &str = ".notification-content";

    pub const TIMELINE_ITEM: &str = ".timeline-item";
    pub const VENTURE_CARD: &str = ".venture-card";
    pub const SKILL_ITEM: &str = ".skill-item";
    pub const CONTACT_INFO: &str = ".contact-info";
    pub const CONTACT_FORM: &str = ".contact-form";
    pub const ABOUT_CONTENT: &str = ".about-content";

    pub const TIMELINE_CONTENT: &str = ".timeline-content";
    pub const SKILL_ICON: &str = ".skill-icon";
    pub const VENTURE_ICON: &str = ".venture-icon";
}

/// Marker classes used as boolean state flags.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const ANIMATE: &str = "animate";
    pub const ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
    pub const ERROR: &str = "error";
    pub const FIELD_ERROR: &str = "field-error";
    pub const TIMELINE_ITEM: &str = "timeline-item";
    pub const SKILL_ITEM: &str = "skill-item";
    pub const VENTURE_CARD: &str = "venture-card";
    pub const NOTIFICATION: &str = "form-notification success";
    pub const NOTIFICATION_CONTENT: &str = "notification-content";
}

/// Keyboard `key` values.
pub mod keys {
    pub const ESCAPE: &str = "Escape";
}
