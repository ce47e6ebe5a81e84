//! The seam between controllers and the host document.
//!
//! Controllers never touch `web-sys` directly. They hold an `Rc<P: Page>` and describe what
//! they need in terms of element handles, marker classes, styles and events. The browser
//! backend lives in `folio-web`; an in-memory implementation lives in [`crate::testing`].

use crate::schedule::Scheduler;
use std::cell::Cell;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Boxed event listener. Listeners live for the lifetime of the page.
pub type Handler<N> = Box<dyn Fn(&DomEvent<N>)>;

/// Browser events the controllers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    Blur,
    Input,
    KeyDown,
    MouseDown,
    Submit,
    Scroll,
    Resize,
    Load,
    Error,
    VisibilityChange,
}

impl EventKind {
    /// The DOM event type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Input => "input",
            Self::KeyDown => "keydown",
            Self::MouseDown => "mousedown",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Load => "load",
            Self::Error => "error",
            Self::VisibilityChange => "visibilitychange",
        }
    }

    /// Whether the event travels from its target up to the document and window.
    #[must_use]
    pub const fn bubbles(self) -> bool {
        matches!(self, Self::Click | Self::Input | Self::KeyDown | Self::MouseDown | Self::Submit)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTarget<N> {
    Window,
    Document,
    Element(N),
}

/// A dispatched event as seen by a listener.
///
/// `prevent_default` and `stop_propagation` only record intent; the page backend applies it
/// once the listener returns.
pub struct DomEvent<N> {
    kind: EventKind,
    target: Option<N>,
    key: Option<String>,
    message: Option<String>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl<N> DomEvent<N> {
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            key: None,
            message: None,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: N) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// The element the event was originally dispatched to, if it was an element.
    pub const fn target(&self) -> Option<&N> {
        self.target.as_ref()
    }

    /// `KeyboardEvent.key` for key events.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// `ErrorEvent.message` for window error events.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

impl<N: Debug> Debug for DomEvent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomEvent")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("key", &self.key)
            .field("default_prevented", &self.default_prevented.get())
            .field("propagation_stopped", &self.propagation_stopped.get())
            .finish_non_exhaustive()
    }
}

/// `ScrollToOptions.behavior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Outcome of an image that finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loaded,
    Broken,
}

/// Intersection detection options.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// A live viewport-intersection watcher.
pub trait VisibilityWatcher<N> {
    fn observe(&self, node: &N);
    fn unobserve(&self, node: &N);
}

/// The host document, its window, and the capabilities the controllers feature-detect.
///
/// Every lookup returns `Option`/`Vec` so a missing element is an ordinary value rather than a
/// failure. Mutating calls on detached or unknown nodes are no-ops.
pub trait Page: Scheduler + 'static {
    /// Element handle. Cheap to clone, compares by identity.
    type Node: Clone + PartialEq + Debug + 'static;

    // --- lookup ---

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_all_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node> {
        self.query_all_within(root, selector).into_iter().next()
    }

    fn body(&self) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// `Node.contains`: true for the node itself and any descendant.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // --- marker classes ---

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    // --- attributes, styles, content ---

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Sets one inline style property; an empty value removes it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Replaces the whole inline style declaration.
    fn set_css_text(&self, node: &Self::Node, css: &str);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn inner_html(&self, node: &Self::Node) -> String;
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    /// Creates a detached element; `None` when the document refuses the tag.
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn remove(&self, node: &Self::Node);

    // --- geometry & viewport ---

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    fn inner_width(&self) -> f64;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// `document.visibilityState == "hidden"`.
    fn is_hidden(&self) -> bool;

    // --- form controls ---

    /// Current value of an input or textarea; empty for anything else.
    fn value(&self, node: &Self::Node) -> String;

    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn set_disabled(&self, node: &Self::Node, disabled: bool);
    fn is_disabled(&self, node: &Self::Node) -> bool;
    fn reset_form(&self, form: &Self::Node);
    fn focus(&self, node: &Self::Node);

    // --- media ---

    /// `None` while the image is still loading.
    fn image_status(&self, node: &Self::Node) -> Option<ImageStatus>;

    // --- capabilities & integrations ---

    /// `CSS.supports("scroll-behavior", "smooth")`.
    fn supports_smooth_scroll(&self) -> bool;

    /// Creates an intersection watcher, or `None` when the capability is missing.
    fn watch_visibility(
        &self,
        options: &WatchOptions,
        on_visible: Box<dyn Fn(&Self::Node)>,
    ) -> Option<Rc<dyn VisibilityWatcher<Self::Node>>>;

    /// Materializes `data-feather` icon placeholders.
    fn render_icons(&self);

    // --- events ---

    fn listen(&self, target: EventTarget<Self::Node>, kind: EventKind, handler: Handler<Self::Node>);
}
