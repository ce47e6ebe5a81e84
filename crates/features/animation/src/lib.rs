//! Animation feature slice: one-shot reveal animations driven by viewport intersection,
//! per-category micro-animations and the hero section's decorative effects.

mod animator;
pub mod effects;
mod error;
mod micro;

pub use crate::animator::{ScrollAnimator, stagger_delay};
pub use crate::error::{AnimationError, AnimationErrorExt};
pub use crate::micro::{MICRO_ANIMATIONS, MicroAnimation};

use folio_kernel::config::{ConfigError, require_positive_ms};
use folio_kernel::domain::config::AnimationConfig;
use folio_kernel::prelude::*;

/// Initialize the animation feature.
///
/// # Errors
/// Returns [`AnimationError::Config`] when the intersection threshold is outside `[0, 1]` or the
/// indicator throttle interval is zero.
pub fn init<P: Page>(page: &Rc<P>, config: &AnimationConfig) -> Result<Rc<ScrollAnimator<P>>, AnimationError> {
    validate(config).context("Validating animation config")?;

    let animator = ScrollAnimator::new(Rc::clone(page), config.clone());
    let registered = animator.register();

    let indicator = effects::wire_scroll_indicator(
        page,
        config.indicator_hide_after,
        Duration::from_millis(config.indicator_throttle_ms),
    );
    effects::wire_visibility_pause(page);
    let profile = effects::wire_profile_image(page);

    tracing::info!(registered, indicator, profile, "Animation slice initialized");
    Ok(animator)
}

fn validate(config: &AnimationConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err(ConfigError::Invalid {
            message: format!("animation.threshold must be within [0, 1], got {}", config.threshold).into(),
            context: None,
        });
    }
    require_positive_ms("animation.indicator_throttle_ms", config.indicator_throttle_ms)
}
