//! [`Page`] over the live browser document.

use crate::timers::PendingTimers;
use folio::kernel::prelude::*;
use js_sys::{Array, Reflect};
use std::cell::Cell;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, ErrorEvent, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollToOptions, VisibilityState, Window,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = feather, js_name = replace)]
    fn feather_replace() -> Result<(), JsValue>;
}

/// Logs a rejected DOM call. The page keeps going either way.
fn report(action: &'static str, err: &JsValue) {
    warn!(action, error = ?err, "DOM call failed");
}

/// The browser window and its document.
#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
    timers: Rc<PendingTimers<Closure<dyn FnMut()>>>,
}

impl WebPage {
    /// `None` outside a browsing context (workers, node).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document, timers: Rc::new(PendingTimers::new()) })
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    fn html(node: &Element) -> Option<&HtmlElement> {
        node.dyn_ref::<HtmlElement>()
    }

    fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl Scheduler for WebPage {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let handle = Rc::new(Cell::new(None::<i32>));
        let slot = Rc::clone(&handle);
        let pending = Rc::clone(&self.timers);
        let mut task = Some(task);
        let callback = Closure::<dyn FnMut()>::new(move || {
            let task = task.take();
            // Freed once this call returns.
            let fired = slot.get().and_then(|id| pending.release(id));
            if let Some(task) = task {
                task();
            }
            drop(fired);
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(id) => {
                handle.set(Some(id));
                self.timers.hold(id, callback);
                TimerId(id)
            },
            Err(err) => {
                report("setTimeout", &err);
                TimerId(0)
            },
        }
    }

    fn clear_timeout(&self, timer: TimerId) {
        self.window.clear_timeout_with_handle(timer.0);
        drop(self.timers.release(timer.0));
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) {
        let callback = Closure::once_into_js(move |timestamp: f64| task(timestamp));
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            report("requestAnimationFrame", &err);
        }
    }
}

/// Live `IntersectionObserver` plus the callback it calls into.
struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher<Element> for IntersectionWatcher {
    fn observe(&self, node: &Element) {
        self.observer.observe(node);
    }

    fn unobserve(&self, node: &Element) {
        self.observer.unobserve(node);
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        Self::collect(self.document.query_selector_all(selector))
    }

    fn query_all_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        Self::collect(root.query_selector_all(selector))
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn head(&self) -> Option<Element> {
        self.document.query_selector("head").ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            report("classList.add", &err);
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            report("classList.remove", &err);
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            report("setAttribute", &err);
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(style) = Self::html(node).map(HtmlElement::style) else {
            return;
        };
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            report("style.setProperty", &err);
        }
    }

    fn set_css_text(&self, node: &Element, css: &str) {
        if let Some(element) = Self::html(node) {
            element.style().set_css_text(css);
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn inner_html(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).inspect_err(|err| report("createElement", err)).ok()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            report("appendChild", &err);
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn offset_top(&self, node: &Element) -> f64 {
        Self::html(node).map_or(0.0, |element| f64::from(element.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        Self::html(node).map_or(0.0, |element| f64::from(element.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn inner_width(&self) -> f64 {
        self.window.inner_width().ok().and_then(|width| width.as_f64()).unwrap_or_default()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn is_hidden(&self) -> bool {
        self.document.visibility_state() == VisibilityState::Hidden
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_lowercase()
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Err(err) = node.toggle_attribute_with_force("disabled", disabled) {
            report("toggleAttribute", &err);
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        node.has_attribute("disabled")
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn focus(&self, node: &Element) {
        if let Some(Err(err)) = Self::html(node).map(HtmlElement::focus) {
            report("focus", &err);
        }
    }

    fn image_status(&self, node: &Element) -> Option<ImageStatus> {
        let image = node.dyn_ref::<HtmlImageElement>()?;
        if !image.complete() {
            return None;
        }
        Some(if image.natural_width() > 0 { ImageStatus::Loaded } else { ImageStatus::Broken })
    }

    fn supports_smooth_scroll(&self) -> bool {
        web_sys::css::supports_with_value("scroll-behavior", "smooth").unwrap_or(false)
    }

    fn watch_visibility(
        &self,
        options: &WatchOptions,
        on_visible: Box<dyn Fn(&Element)>,
    ) -> Option<Rc<dyn VisibilityWatcher<Element>>> {
        let available =
            Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !available {
            return None;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .inspect_err(|err| report("new IntersectionObserver", err))
            .ok()?;

        Some(Rc::new(IntersectionWatcher { observer, _callback: callback }))
    }

    fn render_icons(&self) {
        if let Err(err) = feather_replace() {
            warn!(error = ?err, "Icon library unavailable");
        }
    }

    fn listen(&self, target: EventTarget<Element>, kind: EventKind, handler: Handler<Element>) {
        let host: &web_sys::EventTarget = match &target {
            EventTarget::Window => self.window.as_ref(),
            EventTarget::Document => self.document.as_ref(),
            EventTarget::Element(node) => node.as_ref(),
        };

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
            let mut event = DomEvent::new(kind);
            if let Some(node) = raw.target().and_then(|node| node.dyn_into::<Element>().ok()) {
                event = event.with_target(node);
            }
            if let Some(key) = raw.dyn_ref::<KeyboardEvent>() {
                event = event.with_key(key.key());
            }
            if let Some(error) = raw.dyn_ref::<ErrorEvent>() {
                event = event.with_message(error.message());
            }

            handler(&event);

            if event.default_prevented() {
                raw.prevent_default();
            }
            if event.propagation_stopped() {
                raw.stop_propagation();
            }
        });

        match host.add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref()) {
            Ok(()) => callback.forget(),
            Err(err) => report("addEventListener", &err),
        }
    }
}
