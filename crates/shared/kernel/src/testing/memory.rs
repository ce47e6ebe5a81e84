use super::clock::VirtualClock;
use super::selector::{AttrOp, Compound, parse_compound, parse_list};
use crate::page::{
    DomEvent, EventKind, EventTarget, Handler, ImageStatus, Page, ScrollBehavior,
    VisibilityWatcher, WatchOptions,
};
use crate::schedule::{Scheduler, TimerId};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

const ROOT: usize = 0;
const HEAD: usize = 1;
const BODY: usize = 2;

/// Handle to an element of a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A `scroll_to` call recorded by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    html: String,
    value: String,
    disabled: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    offset_top: f64,
    offset_height: f64,
    image: Option<ImageStatus>,
}

struct Listener {
    target: EventTarget<NodeId>,
    kind: EventKind,
    handler: Rc<dyn Fn(&DomEvent<NodeId>)>,
}

#[derive(Debug)]
struct Viewport {
    scroll_y: f64,
    inner_width: f64,
    hidden: bool,
    smooth_scroll: bool,
    intersection: bool,
}

/// Intersection watcher driven by [`MemoryPage::reveal`].
pub struct MemoryWatcher {
    options: WatchOptions,
    observed: RefCell<Vec<NodeId>>,
    on_visible: Box<dyn Fn(&NodeId)>,
}

impl MemoryWatcher {
    pub const fn options(&self) -> &WatchOptions {
        &self.options
    }

    fn is_observing(&self, node: NodeId) -> bool {
        self.observed.borrow().contains(&node)
    }
}

impl VisibilityWatcher<NodeId> for MemoryWatcher {
    fn observe(&self, node: &NodeId) {
        let mut observed = self.observed.borrow_mut();
        if !observed.contains(node) {
            observed.push(*node);
        }
    }

    fn unobserve(&self, node: &NodeId) {
        self.observed.borrow_mut().retain(|n| n != node);
    }
}

impl fmt::Debug for MemoryWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryWatcher")
            .field("options", &self.options)
            .field("observed", &self.observed.borrow())
            .finish_non_exhaustive()
    }
}

/// An in-memory document with a virtual clock.
///
/// Elements are created from compound selectors (`page.insert(&body, "input#email[required]")`),
/// events bubble from the target through its ancestors to the document and window, and
/// timers only fire when the test calls [`MemoryPage::advance`].
pub struct MemoryPage {
    nodes: RefCell<Vec<NodeData>>,
    listeners: RefCell<Vec<Listener>>,
    watchers: RefCell<Vec<Rc<MemoryWatcher>>>,
    clock: VirtualClock,
    viewport: RefCell<Viewport>,
    scrolls: RefCell<Vec<ScrollRequest>>,
    icon_renders: Cell<usize>,
    focused: Cell<Option<NodeId>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// An empty `html > (head, body)` document, 1280px wide, with every capability present.
    #[must_use]
    pub fn new() -> Self {
        let node = |tag: &str, parent: Option<usize>| NodeData {
            tag: tag.to_owned(),
            parent,
            ..NodeData::default()
        };
        let mut root = node("html", None);
        root.children = vec![HEAD, BODY];

        Self {
            nodes: RefCell::new(vec![root, node("head", Some(ROOT)), node("body", Some(ROOT))]),
            listeners: RefCell::new(Vec::new()),
            watchers: RefCell::new(Vec::new()),
            clock: VirtualClock::default(),
            viewport: RefCell::new(Viewport {
                scroll_y: 0.0,
                inner_width: 1280.0,
                hidden: false,
                smooth_scroll: true,
                intersection: true,
            }),
            scrolls: RefCell::new(Vec::new()),
            icon_renders: Cell::new(0),
            focused: Cell::new(None),
        }
    }

    /// Simulates an engine without `scroll-behavior: smooth`.
    #[must_use]
    pub fn without_smooth_scroll(self) -> Self {
        self.viewport.borrow_mut().smooth_scroll = false;
        self
    }

    /// Simulates an engine without `IntersectionObserver`.
    #[must_use]
    pub fn without_intersection_observer(self) -> Self {
        self.viewport.borrow_mut().intersection = false;
        self
    }

    // --- building ---

    pub const fn body_id(&self) -> NodeId {
        NodeId(BODY)
    }

    pub const fn head_id(&self) -> NodeId {
        NodeId(HEAD)
    }

    /// Appends an element described by a compound selector, e.g.
    /// `r#"input#email.field[type="email"][name="email"][required]"#`. Tag defaults to `div`.
    pub fn insert(&self, parent: &NodeId, markup: &str) -> NodeId {
        let spec = parse_compound(markup).unwrap_or_else(|e| panic!("bad markup: {e}"));
        let mut data = NodeData { tag: spec.tag.unwrap_or_else(|| "div".to_owned()), ..NodeData::default() };
        if let Some(id) = spec.id {
            data.attributes.insert("id".to_owned(), id);
        }
        data.classes = spec.classes;
        for attr in spec.attrs {
            let value = match attr.op {
                AttrOp::Exists => String::new(),
                AttrOp::Equals(value) => value,
                AttrOp::Prefix(_) => panic!("prefix match is not valid markup: {markup}"),
            };
            if attr.name == "value" {
                data.value.clone_from(&value);
            }
            data.attributes.insert(attr.name, value);
        }

        let id = {
            let mut nodes = self.nodes.borrow_mut();
            nodes.push(data);
            nodes.len() - 1
        };
        self.attach(parent.0, id);
        NodeId(id)
    }

    pub fn set_geometry(&self, node: &NodeId, top: f64, height: f64) {
        self.with_node(node, |n| {
            n.offset_top = top;
            n.offset_height = height;
        });
    }

    pub fn set_value(&self, node: &NodeId, value: &str) {
        self.with_node(node, |n| value.clone_into(&mut n.value));
    }

    pub fn set_image_status(&self, node: &NodeId, status: Option<ImageStatus>) {
        self.with_node(node, |n| n.image = status);
    }

    pub fn set_inner_width(&self, width: f64) {
        self.viewport.borrow_mut().inner_width = width;
    }

    // --- inspection ---

    pub fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.nodes.borrow().get(node.0).and_then(|n| n.styles.get(property).cloned())
    }

    pub fn classes(&self, node: &NodeId) -> Vec<String> {
        self.nodes.borrow().get(node.0).map(|n| n.classes.clone()).unwrap_or_default()
    }

    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|n| n.children.iter().copied().map(NodeId).collect())
            .unwrap_or_default()
    }

    /// Whether the node is still reachable from the document root.
    pub fn is_attached(&self, node: &NodeId) -> bool {
        self.contains(&NodeId(ROOT), node)
    }

    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scrolls.borrow().clone()
    }

    pub fn icon_renders(&self) -> usize {
        self.icon_renders.get()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn is_observed(&self, node: &NodeId) -> bool {
        self.watchers.borrow().iter().any(|w| w.is_observing(*node))
    }

    pub fn watchers(&self) -> Vec<Rc<MemoryWatcher>> {
        self.watchers.borrow().clone()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().iter().filter(|l| l.kind == kind).count()
    }

    // --- time ---

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn advance(&self, ms: u64) {
        self.clock.advance(ms as f64);
    }

    pub fn pending_timers(&self) -> usize {
        self.clock.pending_timers()
    }

    /// Runs animation frames `frame_ms` apart until none are requested or `limit` is reached.
    /// Returns the number of frames run.
    pub fn run_frames(&self, frame_ms: f64, limit: usize) -> usize {
        let mut count = 0;
        while self.clock.pending_frames() > 0 && count < limit {
            self.clock.next_frame(frame_ms);
            count += 1;
        }
        count
    }

    // --- events ---

    /// Dispatches `event` at `target`, bubbling when the event kind bubbles.
    pub fn dispatch(&self, target: EventTarget<NodeId>, event: DomEvent<NodeId>) -> DomEvent<NodeId> {
        let untargeted = event.target().is_none();
        let event = match &target {
            EventTarget::Element(node) if untargeted => event.with_target(*node),
            _ => event,
        };

        let path = if event.kind().bubbles() { self.propagation_path(&target) } else { vec![target] };

        for hop in path {
            let handlers: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .filter(|l| l.kind == event.kind() && l.target == hop)
                .map(|l| Rc::clone(&l.handler))
                .collect();
            for handler in handlers {
                handler(&event);
            }
            if event.propagation_stopped() {
                break;
            }
        }
        event
    }

    pub fn click(&self, node: &NodeId) -> DomEvent<NodeId> {
        self.dispatch(EventTarget::Element(*node), DomEvent::new(EventKind::Click))
    }

    pub fn click_document(&self) -> DomEvent<NodeId> {
        self.dispatch(EventTarget::Document, DomEvent::new(EventKind::Click))
    }

    pub fn press_key(&self, node: &NodeId, key: &str) -> DomEvent<NodeId> {
        self.dispatch(EventTarget::Element(*node), DomEvent::new(EventKind::KeyDown).with_key(key))
    }

    pub fn submit(&self, form: &NodeId) -> DomEvent<NodeId> {
        self.dispatch(EventTarget::Element(*form), DomEvent::new(EventKind::Submit))
    }

    pub fn blur(&self, node: &NodeId) -> DomEvent<NodeId> {
        self.dispatch(EventTarget::Element(*node), DomEvent::new(EventKind::Blur))
    }

    /// Replaces the field value and fires `input`, like a user edit.
    pub fn type_into(&self, node: &NodeId, value: &str) -> DomEvent<NodeId> {
        self.set_value(node, value);
        self.dispatch(EventTarget::Element(*node), DomEvent::new(EventKind::Input))
    }

    /// Moves the viewport and fires `scroll` on the window.
    pub fn scroll_window(&self, y: f64) {
        self.viewport.borrow_mut().scroll_y = y;
        self.dispatch(EventTarget::Window, DomEvent::new(EventKind::Scroll));
    }

    /// Changes the viewport width and fires `resize` on the window.
    pub fn resize(&self, width: f64) {
        self.set_inner_width(width);
        self.dispatch(EventTarget::Window, DomEvent::new(EventKind::Resize));
    }

    /// Changes document visibility and fires `visibilitychange`.
    pub fn set_hidden(&self, hidden: bool) {
        self.viewport.borrow_mut().hidden = hidden;
        self.dispatch(EventTarget::Document, DomEvent::new(EventKind::VisibilityChange));
    }

    /// Finishes loading an image and fires `load` or `error` on it.
    pub fn finish_image(&self, node: &NodeId, status: ImageStatus) {
        self.set_image_status(node, Some(status));
        let kind = match status {
            ImageStatus::Loaded => EventKind::Load,
            ImageStatus::Broken => EventKind::Error,
        };
        self.dispatch(EventTarget::Element(*node), DomEvent::new(kind));
    }

    /// Fires a window `error` event, as an uncaught script error would.
    pub fn raise_error(&self, message: &str) {
        self.dispatch(EventTarget::Window, DomEvent::new(EventKind::Error).with_message(message));
    }

    /// Reports `node` as intersecting to every watcher observing it.
    pub fn reveal(&self, node: &NodeId) {
        let watchers: Vec<_> =
            self.watchers.borrow().iter().filter(|w| w.is_observing(*node)).cloned().collect();
        for watcher in watchers {
            (watcher.on_visible)(node);
        }
    }

    // --- internals ---

    fn with_node<R>(&self, node: &NodeId, f: impl FnOnce(&mut NodeData) -> R) -> Option<R> {
        self.nodes.borrow_mut().get_mut(node.0).map(f)
    }

    fn read<R>(&self, node: &NodeId, f: impl FnOnce(&NodeData) -> R) -> Option<R> {
        self.nodes.borrow().get(node.0).map(f)
    }

    fn attach(&self, parent: usize, child: usize) {
        self.detach(child);
        let mut nodes = self.nodes.borrow_mut();
        if parent >= nodes.len() || child >= nodes.len() {
            return;
        }
        nodes[child].parent = Some(parent);
        nodes[parent].children.push(child);
    }

    fn detach(&self, child: usize) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        nodes[parent].children.retain(|c| *c != child);
        nodes[child].parent = None;
    }

    fn propagation_path(&self, target: &EventTarget<NodeId>) -> Vec<EventTarget<NodeId>> {
        let mut path = Vec::new();
        if let EventTarget::Element(node) = target {
            let nodes = self.nodes.borrow();
            let mut current = Some(node.0);
            while let Some(index) = current {
                path.push(EventTarget::Element(NodeId(index)));
                current = nodes.get(index).and_then(|n| n.parent);
            }
        }
        if !matches!(target, EventTarget::Window) {
            path.push(EventTarget::Document);
        }
        path.push(EventTarget::Window);
        path
    }

    /// Pre-order descendants of `root`, excluding `root`.
    fn descendants(&self, root: usize) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> =
            nodes.get(root).map(|n| n.children.iter().rev().copied().collect()).unwrap_or_default();
        while let Some(index) = stack.pop() {
            out.push(index);
            stack.extend(nodes[index].children.iter().rev().copied());
        }
        out
    }

    fn select(&self, root: usize, selector: &str) -> Vec<NodeId> {
        let list = parse_list(selector).unwrap_or_else(|e| panic!("bad selector: {e}"));
        let candidates = self.descendants(root);
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|index| list.iter().any(|compound| matches_compound(&nodes[*index], compound)))
            .map(NodeId)
            .collect()
    }
}

fn matches_compound(node: &NodeData, compound: &Compound) -> bool {
    if compound.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
        return false;
    }
    if compound.id.as_ref().is_some_and(|id| node.attributes.get("id") != Some(id)) {
        return false;
    }
    if !compound.classes.iter().all(|class| node.classes.contains(class)) {
        return false;
    }
    compound.attrs.iter().all(|attr| {
        let value = node.attributes.get(&attr.name);
        match &attr.op {
            AttrOp::Exists => value.is_some(),
            AttrOp::Equals(expected) => value == Some(expected),
            AttrOp::Prefix(prefix) => value.is_some_and(|v| v.starts_with(prefix.as_str())),
        }
    })
}

fn parse_declarations(css: &str) -> BTreeMap<String, String> {
    css.split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| (prop.trim().to_owned(), value.trim().to_owned()))
        .filter(|(prop, _)| !prop.is_empty())
        .collect()
}

impl Scheduler for MemoryPage {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        self.clock.set_timeout(delay, task)
    }

    fn clear_timeout(&self, timer: TimerId) {
        self.clock.clear_timeout(timer);
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) {
        self.clock.request_frame(task);
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        self.descendants(ROOT)
            .into_iter()
            .find(|index| nodes[*index].attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(ROOT, selector)
    }

    fn query_all_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(root.0, selector)
    }

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(BODY))
    }

    fn head(&self) -> Option<NodeId> {
        Some(NodeId(HEAD))
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.read(node, |n| n.parent).flatten().map(NodeId)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == ancestor.0 {
                return true;
            }
            current = nodes.get(index).and_then(|n| n.parent);
        }
        false
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.read(node, |n| n.classes.iter().any(|c| c == class)).unwrap_or(false)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.with_node(node, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.with_node(node, |n| n.classes.retain(|c| c != class));
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.read(node, |n| {
            if name == "class" {
                (!n.classes.is_empty()).then(|| n.classes.join(" "))
            } else {
                n.attributes.get(name).cloned()
            }
        })
        .flatten()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.with_node(node, |n| {
            if name == "class" {
                n.classes = value.split_whitespace().map(str::to_owned).collect();
            } else {
                n.attributes.insert(name.to_owned(), value.to_owned());
            }
        });
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.with_node(node, |n| {
            if value.is_empty() {
                n.styles.remove(property);
            } else {
                n.styles.insert(property.to_owned(), value.to_owned());
            }
        });
    }

    fn set_css_text(&self, node: &NodeId, css: &str) {
        self.with_node(node, |n| n.styles = parse_declarations(css));
    }

    fn text(&self, node: &NodeId) -> String {
        self.read(node, |n| n.html.clone()).unwrap_or_default()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.with_node(node, |n| text.clone_into(&mut n.html));
    }

    fn inner_html(&self, node: &NodeId) -> String {
        self.text(node)
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.set_text(node, html);
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData { tag: tag.to_ascii_lowercase(), ..NodeData::default() });
        Some(NodeId(nodes.len() - 1))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.attach(parent.0, child.0);
    }

    fn remove(&self, node: &NodeId) {
        self.detach(node.0);
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.read(node, |n| n.offset_top).unwrap_or_default()
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.read(node, |n| n.offset_height).unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.viewport.borrow().scroll_y
    }

    fn inner_width(&self) -> f64 {
        self.viewport.borrow().inner_width
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.viewport.borrow_mut().scroll_y = top;
        self.scrolls.borrow_mut().push(ScrollRequest { top, behavior });
    }

    fn is_hidden(&self) -> bool {
        self.viewport.borrow().hidden
    }

    fn value(&self, node: &NodeId) -> String {
        self.read(node, |n| n.value.clone()).unwrap_or_default()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.read(node, |n| n.tag.clone()).unwrap_or_default()
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.with_node(node, |n| n.disabled = disabled);
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.read(node, |n| n.disabled).unwrap_or(false)
    }

    fn reset_form(&self, form: &NodeId) {
        for field in self.query_all_within(form, "input, textarea") {
            self.with_node(&field, |n| {
                n.value = n.attributes.get("value").cloned().unwrap_or_default();
            });
        }
    }

    fn focus(&self, node: &NodeId) {
        self.focused.set(Some(*node));
    }

    fn image_status(&self, node: &NodeId) -> Option<ImageStatus> {
        self.read(node, |n| n.image).flatten()
    }

    fn supports_smooth_scroll(&self) -> bool {
        self.viewport.borrow().smooth_scroll
    }

    fn watch_visibility(
        &self,
        options: &WatchOptions,
        on_visible: Box<dyn Fn(&NodeId)>,
    ) -> Option<Rc<dyn VisibilityWatcher<NodeId>>> {
        if !self.viewport.borrow().intersection {
            return None;
        }
        let watcher = Rc::new(MemoryWatcher {
            options: options.clone(),
            observed: RefCell::new(Vec::new()),
            on_visible,
        });
        self.watchers.borrow_mut().push(Rc::clone(&watcher));
        Some(watcher)
    }

    fn render_icons(&self) {
        self.icon_renders.set(self.icon_renders.get() + 1);
    }

    fn listen(&self, target: EventTarget<NodeId>, kind: EventKind, handler: Handler<NodeId>) {
        self.listeners.borrow_mut().push(Listener { target, kind, handler: Rc::from(handler) });
    }
}

impl fmt::Debug for MemoryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryPage")
            .field("nodes", &self.nodes.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .field("viewport", &self.viewport.borrow())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_follow_document_order() {
        let page = MemoryPage::new();
        let body = page.body_id();
        let first = page.insert(&body, "section#about");
        let nested = page.insert(&first, "a.nav-link[href=\"#about\"]");
        let second = page.insert(&body, "section#contact");

        assert_eq!(page.query_all("section[id]"), vec![first, second]);
        assert_eq!(page.query_all(r##"a[href^="#"]"##), vec![nested]);
        assert_eq!(page.element_by_id("contact"), Some(second));
        assert!(page.contains(&first, &nested));
        assert!(!page.contains(&second, &nested));
    }

    #[test]
    fn click_bubbles_until_stopped() {
        let page = Rc::new(MemoryPage::new());
        let body = page.body_id();
        let outer = page.insert(&body, "div.outer");
        let inner = page.insert(&outer, "button.inner");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        page.listen(
            EventTarget::Element(inner),
            EventKind::Click,
            Box::new(move |e| {
                log.borrow_mut().push("inner");
                e.stop_propagation();
            }),
        );
        let log = Rc::clone(&seen);
        page.listen(
            EventTarget::Document,
            EventKind::Click,
            Box::new(move |_| log.borrow_mut().push("document")),
        );

        page.click(&inner);
        page.click(&outer);
        assert_eq!(*seen.borrow(), vec!["inner", "document"]);
    }

    #[test]
    fn css_text_replaces_declarations() {
        let page = MemoryPage::new();
        let body = page.body_id();
        let node = page.insert(&body, "div");
        page.set_style(&node, "color", "red");
        page.set_css_text(&node, "position: fixed; top: 100px;");

        assert_eq!(page.style(&node, "color"), None);
        assert_eq!(page.style(&node, "top").as_deref(), Some("100px"));
    }

    #[test]
    fn timers_fire_in_due_order() {
        let page = MemoryPage::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(300, 'b'), (100, 'a'), (300, 'c')] {
            let order = Rc::clone(&order);
            page.set_timeout(Duration::from_millis(delay), Box::new(move || order.borrow_mut().push(tag)));
        }
        let cancelled = {
            let order = Rc::clone(&order);
            page.set_timeout(Duration::from_millis(200), Box::new(move || order.borrow_mut().push('x')))
        };
        page.clear_timeout(cancelled);

        page.advance(299);
        assert_eq!(*order.borrow(), vec!['a']);
        page.advance(1);
        assert_eq!(*order.borrow(), vec!['a', 'b', 'c']);
        assert_eq!(page.pending_timers(), 0);
    }
}
