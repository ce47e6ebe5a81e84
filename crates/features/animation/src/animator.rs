use crate::micro::{micro_animations_for, play};
use folio_kernel::domain::config::AnimationConfig;
use folio_kernel::prelude::*;
use std::cell::{OnceCell, RefCell};
use std::fmt;
use tracing::{debug, trace};

/// `transition-delay` for the `index`-th element of a category, e.g. `"0.3s"`.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    let secs = (index as f64 * step_secs * 1000.0).round() / 1000.0;
    format!("{secs}s")
}

/// One-shot reveal animations for the configured categories.
///
/// Each watched element is animated the first time it intersects the viewport and is then
/// forgotten.
pub struct ScrollAnimator<P: Page> {
    page: Rc<P>,
    config: AnimationConfig,
    watcher: OnceCell<Rc<dyn VisibilityWatcher<P::Node>>>,
    watched: RefCell<Vec<P::Node>>,
}

impl<P: Page> ScrollAnimator<P> {
    /// Creates the animator and its intersection watcher. Nothing is registered yet.
    ///
    /// The watcher callback owns the animator, so reveals keep working for the page lifetime
    /// even after the returned handle is dropped.
    pub fn new(page: Rc<P>, config: AnimationConfig) -> Rc<Self> {
        let options = WatchOptions { threshold: config.threshold, root_margin: config.root_margin.clone() };
        let animator = Rc::new(Self {
            page: Rc::clone(&page),
            config,
            watcher: OnceCell::new(),
            watched: RefCell::new(Vec::new()),
        });

        let owner = Rc::clone(&animator);
        if let Some(watcher) = page.watch_visibility(&options, Box::new(move |node| owner.on_visible(node))) {
            let _ = animator.watcher.set(watcher);
        }
        animator
    }

    /// Whether the page offered intersection detection.
    pub fn is_observing(&self) -> bool {
        self.watcher.get().is_some()
    }

    /// Tags every element of every category and starts watching it.
    ///
    /// Without intersection detection all of them are revealed immediately instead.
    /// Returns the number of elements registered.
    pub fn register(&self) -> usize {
        let mut count = 0;
        for selector in &self.config.selectors {
            for (index, node) in self.page.query_all(selector).into_iter().enumerate() {
                self.page.add_class(&node, classes::ANIMATE_ON_SCROLL);
                self.page.set_style(&node, "transition-delay", &stagger_delay(index, self.config.stagger_step_secs));

                match self.watcher.get() {
                    Some(watcher) => {
                        watcher.observe(&node);
                        self.watched.borrow_mut().push(node);
                    },
                    None => self.page.add_class(&node, classes::ANIMATE),
                }
                count += 1;
            }
        }

        debug!(count, observing = self.is_observing(), "Animated elements registered");
        count
    }

    /// Reveals a watched element. Elements already revealed, or never registered, are ignored.
    pub fn on_visible(&self, node: &P::Node) {
        {
            let mut watched = self.watched.borrow_mut();
            let Some(position) = watched.iter().position(|n| n == node) else {
                return;
            };
            watched.remove(position);
        }

        self.page.add_class(node, classes::ANIMATE);
        if let Some(watcher) = self.watcher.get() {
            watcher.unobserve(node);
        }

        for anim in micro_animations_for(self.page.as_ref(), node) {
            trace!(marker = anim.marker, "Playing micro-animation");
            play(&self.page, node, anim);
        }
    }

    pub fn is_watched(&self, node: &P::Node) -> bool {
        self.watched.borrow().contains(node)
    }

    pub fn watched_count(&self) -> usize {
        self.watched.borrow().len()
    }
}

impl<P: Page> fmt::Debug for ScrollAnimator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnimator")
            .field("config", &self.config)
            .field("observing", &self.is_observing())
            .field("watched", &self.watched.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_formatted_in_seconds() {
        assert_eq!(stagger_delay(0, 0.1), "0s");
        assert_eq!(stagger_delay(1, 0.1), "0.1s");
        assert_eq!(stagger_delay(3, 0.1), "0.3s");
        assert_eq!(stagger_delay(12, 0.1), "1.2s");
    }
}
