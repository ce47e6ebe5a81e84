//! Contact feature slice: inline field validation, a simulated asynchronous send and the
//! self-dismissing success banner.

mod banner;
mod error;
mod form;
pub mod validation;

pub use crate::banner::show_success;
pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::form::ContactForm;
pub use crate::validation::{FieldSpec, ValidationError, validate};

use folio_kernel::config::require_positive_ms;
use folio_kernel::domain::config::ContactConfig;
use folio_kernel::prelude::*;

/// Initialize the contact feature and wire the form's listeners.
///
/// Returns `Ok(None)` when the page has no contact form.
///
/// # Errors
/// Returns [`ContactError::Config`] when the send delay or banner visibility is zero.
pub fn init<P: Page>(page: &Rc<P>, config: &ContactConfig) -> Result<Option<Rc<ContactForm<P>>>, ContactError> {
    require_positive_ms("contact.send_delay_ms", config.send_delay_ms).context("Validating contact config")?;
    require_positive_ms("contact.banner_visible_ms", config.banner_visible_ms)
        .context("Validating contact config")?;

    let Some(form) = ContactForm::new(Rc::clone(page), config.clone()) else {
        tracing::debug!("No contact form on this page");
        return Ok(None);
    };
    let form = Rc::new(form);

    wire_submit(&form);
    wire_fields(&form);
    wire_message_focus(&form);

    tracing::info!("Contact slice initialized");
    Ok(Some(form))
}

fn wire_submit<P: Page>(form: &Rc<ContactForm<P>>) {
    let this = Rc::clone(form);
    form.page().listen(
        EventTarget::Element(form.form().clone()),
        EventKind::Submit,
        Box::new(move |event| {
            event.prevent_default();
            this.submit();
        }),
    );
}

fn wire_fields<P: Page>(form: &Rc<ContactForm<P>>) {
    let page = form.page();

    for field in page.query_all_within(form.form(), selectors::FORM_FIELDS) {
        let this = Rc::clone(form);
        let target = field.clone();
        page.listen(
            EventTarget::Element(field.clone()),
            EventKind::Blur,
            Box::new(move |event| {
                event.stop_propagation();
                this.validate_field(&target);
            }),
        );

        let this = Rc::clone(form);
        let target = field.clone();
        page.listen(
            EventTarget::Element(field.clone()),
            EventKind::Input,
            Box::new(move |event| {
                event.stop_propagation();
                this.on_input(&target);
            }),
        );

        if page.tag_name(&field) == "textarea" {
            for kind in [EventKind::MouseDown, EventKind::KeyDown] {
                page.listen(EventTarget::Element(field.clone()), kind, Box::new(|event| event.stop_propagation()));
            }
        }
    }
}

/// Keeps page-level click and focus handlers away from the message box.
fn wire_message_focus<P: Page>(form: &Rc<ContactForm<P>>) {
    let page = form.page();
    let Some(message) = page.query_within(form.form(), selectors::MESSAGE_FIELD) else {
        return;
    };

    let focus_page = Rc::clone(page);
    let target = message.clone();
    page.listen(
        EventTarget::Element(message.clone()),
        EventKind::Click,
        Box::new(move |event| {
            event.stop_propagation();
            focus_page.focus(&target);
        }),
    );
    page.listen(EventTarget::Element(message), EventKind::Focus, Box::new(|event| event.stop_propagation()));
}
