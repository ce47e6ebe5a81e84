/// Scroll position that puts a section's top just below the fixed navbar.
///
/// Never negative: sections near the top of the page scroll to the origin.
pub fn target_offset(section_top: f64, navbar_height: f64, extra: f64) -> f64 {
    (section_top - navbar_height - extra).max(0.0)
}

/// Quadratic ease-in-out.
///
/// `elapsed` and `duration` share a unit; returns the position between `start` and
/// `start + distance`. `elapsed` is clamped to `[0, duration]`.
pub fn ease_in_out_quad(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + distance;
    }

    let t = elapsed.clamp(0.0, duration) / (duration / 2.0);
    if t < 1.0 {
        distance / 2.0 * t * t + start
    } else {
        let t = t - 1.0;
        -distance / 2.0 * (t * (t - 2.0) - 1.0) + start
    }
}
