use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Top-level page configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    pub scrolling: ScrollingConfig,
    pub contact: ContactConfig,
    pub preload: PreloadConfig,
}

/// Thin Rc-wrapped config for inexpensive cloning into controllers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Rc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Rc::make_mut(&mut self.inner)
    }
}

/// Mobile menu and active-link tracking.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    /// Viewport width (logical px) above which the mobile menu is force-closed.
    pub mobile_breakpoint: f64,
    /// Distance below `scrollY` used to probe the current section.
    pub active_offset: f64,
    pub scrolled_threshold: f64,
}

/// Scroll-triggered reveal animations and decorative effects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_step_secs: f64,
    pub indicator_hide_after: f64,
    pub indicator_throttle_ms: u64,
}

/// In-page scrolling offsets and the eased fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollingConfig {
    pub navbar_fallback_height: f64,
    pub extra_offset: f64,
    pub fallback_duration_ms: u64,
}

/// Contact form submission simulation and banner lifecycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub send_delay_ms: u64,
    pub banner_enter_ms: u64,
    pub banner_visible_ms: u64,
    pub banner_exit_ms: u64,
    pub success_message: String,
}

/// Stylesheets hinted with `<link rel="preload" as="style">`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    pub styles: Vec<String>,
}

// --- Default ---

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 100,
            resize_debounce_ms: 250,
            mobile_breakpoint: 768.0,
            active_offset: 150.0,
            scrolled_threshold: 50.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        use crate::constants::selectors;

        Self {
            selectors: [
                selectors::TIMELINE_ITEM,
                selectors::VENTURE_CARD,
                selectors::SKILL_ITEM,
                selectors::CONTACT_INFO,
                selectors::CONTACT_FORM,
                selectors::ABOUT_CONTENT,
            ]
            .map(str::to_owned)
            .to_vec(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
            stagger_step_secs: 0.1,
            indicator_hide_after: 100.0,
            indicator_throttle_ms: 100,
        }
    }
}

impl Default for ScrollingConfig {
    fn default() -> Self {
        Self { navbar_fallback_height: 70.0, extra_offset: 20.0, fallback_duration_ms: 1000 }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 2000,
            banner_enter_ms: 100,
            banner_visible_ms: 5000,
            banner_exit_ms: 300,
            success_message: "Message sent successfully! I'll get back to you soon.".to_owned(),
        }
    }
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            styles: vec![
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap"
                    .to_owned(),
                "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;600;700&display=swap"
                    .to_owned(),
            ],
        }
    }
}
