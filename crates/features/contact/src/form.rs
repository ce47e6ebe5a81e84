use crate::banner;
use crate::validation::{FieldSpec, ValidationError, validate};
use folio_kernel::domain::config::ContactConfig;
use folio_kernel::prelude::*;
use std::cell::Cell;
use std::fmt;
use tracing::{debug, info, warn};

const ERROR_BORDER: &str = "#dc3545";
const FIELD_ERROR_CSS: &str = "color: #dc3545; font-size: 12px; margin-top: 4px; display: block;";
const SENDING_LABEL: &str = r#"<i data-feather="loader"></i> Sending..."#;

/// Inline validation and simulated submission for `#contact-form`.
pub struct ContactForm<P: Page> {
    page: Rc<P>,
    config: ContactConfig,
    form: P::Node,
    sending: Cell<bool>,
}

impl<P: Page> ContactForm<P> {
    /// `None` when the page has no `#contact-form`.
    pub fn new(page: Rc<P>, config: ContactConfig) -> Option<Self> {
        let form = page.element_by_id(ids::CONTACT_FORM)?;
        Some(Self { page, config, form, sending: Cell::new(false) })
    }

    pub const fn form(&self) -> &P::Node {
        &self.form
    }

    pub(crate) const fn page(&self) -> &Rc<P> {
        &self.page
    }

    /// Whether a simulated send is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Checks one control against its rules without touching the page.
    ///
    /// # Errors
    /// Returns the first rule the current value breaks.
    pub fn check(&self, field: &P::Node) -> Result<(), ValidationError> {
        let kind = self.page.attribute(field, "type");
        let name = self.page.attribute(field, "name");
        let spec = FieldSpec {
            required: self.page.has_attribute(field, "required"),
            kind: kind.as_deref(),
            name: name.as_deref(),
        };
        validate(&spec, &self.page.value(field))
    }

    /// Validates `field` and renders the outcome inline. Returns whether it is valid.
    pub fn validate_field(&self, field: &P::Node) -> bool {
        self.clear_error(field);
        match self.check(field) {
            Ok(()) => true,
            Err(err) => {
                self.show_error(field, &err.to_string());
                false
            },
        }
    }

    /// Marks `field` invalid and puts `message` in the single `.field-error` of its parent.
    pub fn show_error(&self, field: &P::Node, message: &str) {
        self.page.add_class(field, classes::ERROR);
        self.page.set_style(field, "border-color", ERROR_BORDER);

        let Some(parent) = self.page.parent(field) else {
            return;
        };
        self.remove_field_errors(&parent);

        let Some(label) = self.page.create_element("div") else {
            return;
        };
        self.page.set_attribute(&label, "class", classes::FIELD_ERROR);
        self.page.set_text(&label, message);
        self.page.set_css_text(&label, FIELD_ERROR_CSS);
        self.page.append_child(&parent, &label);
    }

    pub fn clear_error(&self, field: &P::Node) {
        self.page.remove_class(field, classes::ERROR);
        self.page.set_style(field, "border-color", "");
        if let Some(parent) = self.page.parent(field) {
            self.remove_field_errors(&parent);
        }
    }

    /// Clears the error as the user types, re-validating fields that were invalid before.
    pub fn on_input(&self, field: &P::Node) {
        let was_invalid = self.page.has_class(field, classes::ERROR);
        self.clear_error(field);
        if was_invalid {
            self.validate_field(field);
        }
    }

    /// Validates every required control, all of them even after a failure.
    pub fn validate_all(&self) -> bool {
        self.page
            .query_all_within(&self.form, selectors::REQUIRED_FIELDS)
            .iter()
            .fold(true, |valid, field| self.validate_field(field) && valid)
    }

    /// Handles a submit attempt. Returns whether a send was started.
    pub fn submit(self: &Rc<Self>) -> bool {
        if self.sending.get() {
            debug!("Submission already in flight, ignoring");
            return false;
        }
        if !self.validate_all() {
            debug!("Contact form has invalid fields");
            return false;
        }

        self.begin_send();
        true
    }

    fn begin_send(self: &Rc<Self>) {
        self.sending.set(true);

        let button = self.page.query_within(&self.form, selectors::SUBMIT_BUTTON);
        let label = button.as_ref().map(|button| {
            let original = self.page.inner_html(button);
            self.page.set_inner_html(button, SENDING_LABEL);
            self.page.set_disabled(button, true);
            original
        });
        if button.is_none() {
            warn!("Contact form has no submit button");
        }
        self.page.render_icons();
        info!(delay_ms = self.config.send_delay_ms, "Sending contact message");

        let this = Rc::clone(self);
        self.page.set_timeout(
            Duration::from_millis(self.config.send_delay_ms),
            Box::new(move || this.finish_send(button.zip(label))),
        );
    }

    fn finish_send(&self, button: Option<(P::Node, String)>) {
        self.page.reset_form(&self.form);
        for field in self.page.query_all_within(&self.form, &format!(".{}", classes::ERROR)) {
            self.page.remove_class(&field, classes::ERROR);
            self.page.set_style(&field, "border-color", "");
        }
        self.remove_field_errors(&self.form);

        if let Some((button, label)) = button {
            self.page.set_inner_html(&button, &label);
            self.page.set_disabled(&button, false);
        }
        self.page.render_icons();

        banner::show_success(&self.page, &self.config);
        self.sending.set(false);
        info!("Contact message sent");
    }

    fn remove_field_errors(&self, root: &P::Node) {
        for stale in self.page.query_all_within(root, &format!(".{}", classes::FIELD_ERROR)) {
            self.page.remove(&stale);
        }
    }
}

impl<P: Page> fmt::Debug for ContactForm<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("config", &self.config)
            .field("form", &self.form)
            .field("sending", &self.sending.get())
            .finish_non_exhaustive()
    }
}
