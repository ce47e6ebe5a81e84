use folio_kernel::prelude::*;

/// A two-step transform pulse played on a child element once its card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroAnimation {
    /// Marker class identifying the revealed card.
    pub marker: &'static str,
    /// Child that receives the transform.
    pub child: &'static str,
    pub delay: Duration,
    pub transform: &'static str,
    pub hold: Duration,
    pub revert: &'static str,
}

pub static MICRO_ANIMATIONS: [MicroAnimation; 3] = [
    MicroAnimation {
        marker: classes::TIMELINE_ITEM,
        child: selectors::TIMELINE_CONTENT,
        delay: Duration::from_millis(300),
        transform: "scale(1.05)",
        hold: Duration::from_millis(200),
        revert: "scale(1)",
    },
    MicroAnimation {
        marker: classes::SKILL_ITEM,
        child: selectors::SKILL_ICON,
        delay: Duration::from_millis(200),
        transform: "rotate(360deg) scale(1.1)",
        hold: Duration::from_millis(500),
        revert: "rotate(0deg) scale(1)",
    },
    MicroAnimation {
        marker: classes::VENTURE_CARD,
        child: selectors::VENTURE_ICON,
        delay: Duration::from_millis(150),
        transform: "scale(1.2)",
        hold: Duration::from_millis(300),
        revert: "scale(1)",
    },
];

/// Every micro-animation whose marker class `node` carries.
pub(crate) fn micro_animations_for<P: Page>(page: &P, node: &P::Node) -> Vec<&'static MicroAnimation> {
    MICRO_ANIMATIONS.iter().filter(|anim| page.has_class(node, anim.marker)).collect()
}

/// Schedules `anim` on the first matching child of `node`. Cards without that child are skipped.
pub(crate) fn play<P: Page>(page: &Rc<P>, node: &P::Node, anim: &'static MicroAnimation) {
    let Some(child) = page.query_within(node, anim.child) else {
        return;
    };

    let page_ref = Rc::clone(page);
    page.set_timeout(
        anim.delay,
        Box::new(move || {
            page_ref.set_style(&child, "transform", anim.transform);
            let revert_page = Rc::clone(&page_ref);
            page_ref.set_timeout(
                anim.hold,
                Box::new(move || revert_page.set_style(&child, "transform", anim.revert)),
            );
        }),
    );
}
