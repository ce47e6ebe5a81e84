use folio_contact::{ContactError, ContactForm, init};
use folio_kernel::domain::config::ContactConfig;
use folio_kernel::prelude::*;
use folio_kernel::testing::{MemoryPage, NodeId};

struct Form {
    form: NodeId,
    name: NodeId,
    email: NodeId,
    subject: NodeId,
    message: NodeId,
    button: NodeId,
}

fn contact_page() -> (Rc<MemoryPage>, Form) {
    let page = Rc::new(MemoryPage::new());
    let body = page.body_id();
    let form = page.insert(&body, "form#contact-form.contact-form");

    let group = |markup: &str| {
        let wrapper = page.insert(&form, "div.form-group");
        page.insert(&wrapper, markup)
    };
    let name = group(r#"input#name[type="text"][name="name"][required]"#);
    let email = group(r#"input#email[type="email"][name="email"][required]"#);
    let subject = group(r#"input#subject[type="text"][name="subject"]"#);
    let message = group(r#"textarea#message[name="message"][required]"#);
    let button = page.insert(&form, r#"button.btn[type="submit"]"#);
    page.set_inner_html(&button, r#"<i data-feather="send"></i> Send Message"#);

    (page, Form { form, name, email, subject, message, button })
}

fn mounted() -> (Rc<MemoryPage>, Form, Rc<ContactForm<MemoryPage>>) {
    let (page, nodes) = contact_page();
    let controller = init(&page, &ContactConfig::default()).expect("config").expect("form present");
    (page, nodes, controller)
}

fn field_errors(page: &MemoryPage, field: &NodeId) -> Vec<String> {
    let parent = page.parent(field).expect("wrapped field");
    page.query_all_within(&parent, ".field-error").iter().map(|e| page.text(e)).collect()
}

fn fill_valid(page: &MemoryPage, form: &Form) {
    page.set_value(&form.name, "Ada Lovelace");
    page.set_value(&form.email, "ada@example.com");
    page.set_value(&form.subject, "Engines");
    page.set_value(&form.message, "Let's talk about the analytical engine.");
}

fn banners(page: &MemoryPage) -> Vec<NodeId> {
    page.query_all(".form-notification")
}

#[test]
fn blur_on_empty_required_field_shows_one_error() {
    let (page, form, _) = mounted();

    page.blur(&form.name);
    page.blur(&form.name);

    assert!(page.has_class(&form.name, classes::ERROR));
    assert_eq!(page.style(&form.name, "border-color").as_deref(), Some("#dc3545"));
    assert_eq!(field_errors(&page, &form.name), vec!["This field is required".to_owned()]);
}

#[test]
fn invalid_email_message() {
    let (page, form, _) = mounted();

    page.set_value(&form.email, "a@b");
    page.blur(&form.email);
    assert_eq!(field_errors(&page, &form.email), vec!["Please enter a valid email address".to_owned()]);

    page.set_value(&form.email, "a@b.co");
    page.blur(&form.email);
    assert!(field_errors(&page, &form.email).is_empty());
    assert!(!page.has_class(&form.email, classes::ERROR));
    assert_eq!(page.style(&form.email, "border-color"), None);
}

#[test]
fn typing_revalidates_only_previously_invalid_fields() {
    let (page, form, _) = mounted();

    page.type_into(&form.subject, "Hi");
    assert!(field_errors(&page, &form.subject).is_empty(), "untouched fields are not validated on input");

    page.blur(&form.subject);
    assert_eq!(
        field_errors(&page, &form.subject),
        vec!["Subject must be at least 3 characters long".to_owned()]
    );

    page.type_into(&form.subject, "Hi!");
    assert!(field_errors(&page, &form.subject).is_empty());
    assert!(!page.has_class(&form.subject, classes::ERROR));
}

#[test]
fn still_invalid_input_keeps_a_fresh_error() {
    let (page, form, _) = mounted();

    page.set_value(&form.message, "short");
    page.blur(&form.message);
    page.type_into(&form.message, "shorter");

    assert!(page.has_class(&form.message, classes::ERROR));
    assert_eq!(
        field_errors(&page, &form.message),
        vec!["Message must be at least 10 characters long".to_owned()]
    );
}

#[test]
fn submit_validates_every_required_field() {
    let (page, form, controller) = mounted();

    let event = page.submit(&form.form);

    assert!(event.default_prevented());
    assert!(!controller.is_sending());
    for field in [&form.name, &form.email, &form.message] {
        assert_eq!(field_errors(&page, field), vec!["This field is required".to_owned()]);
    }
    assert!(field_errors(&page, &form.subject).is_empty(), "optional fields are skipped");
    assert!(!page.is_disabled(&form.button));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn valid_submission_runs_the_full_lifecycle() {
    let (page, form, controller) = mounted();
    let icons_before = page.icon_renders();
    fill_valid(&page, &form);

    page.submit(&form.form);
    assert!(controller.is_sending());
    assert!(page.is_disabled(&form.button));
    assert_eq!(page.inner_html(&form.button), r#"<i data-feather="loader"></i> Sending..."#);
    assert_eq!(page.icon_renders(), icons_before + 1);

    page.advance(1999);
    assert!(page.is_disabled(&form.button));
    assert!(banners(&page).is_empty());

    page.advance(1);
    assert!(!controller.is_sending());
    assert!(!page.is_disabled(&form.button));
    assert_eq!(page.inner_html(&form.button), r#"<i data-feather="send"></i> Send Message"#);
    assert!(page.value(&form.name).is_empty());
    assert!(page.value(&form.message).is_empty());

    let shown = banners(&page);
    assert_eq!(shown.len(), 1);
    let banner = shown[0];
    assert!(page.has_class(&banner, "success"));
    assert_eq!(page.style(&banner, "transform").as_deref(), Some("translateX(100%)"));
    let content = page.query_within(&banner, ".notification-content").expect("content");
    let label = page.query_within(&content, "span").expect("label");
    assert_eq!(page.text(&label), "Message sent successfully! I'll get back to you soon.");
    assert!(page.query_within(&content, r#"i[data-feather="check-circle"]"#).is_some());

    page.advance(100);
    assert_eq!(page.style(&banner, "transform").as_deref(), Some("translateX(0)"));

    page.advance(4900);
    assert_eq!(page.style(&banner, "transform").as_deref(), Some("translateX(100%)"));
    assert!(page.is_attached(&banner));

    page.advance(300);
    assert!(!page.is_attached(&banner));
    assert!(banners(&page).is_empty());
}

#[test]
fn resubmitting_while_sending_is_ignored() {
    let (page, form, controller) = mounted();
    fill_valid(&page, &form);

    page.submit(&form.form);
    page.submit(&form.form);
    assert!(controller.is_sending());

    page.advance(2000);
    assert_eq!(banners(&page).len(), 1);
}

#[test]
fn stray_errors_are_cleared_after_sending() {
    let (page, form, controller) = mounted();
    fill_valid(&page, &form);
    controller.show_error(&form.subject, "stale");

    assert!(controller.submit());
    page.advance(2000);

    assert!(!page.has_class(&form.subject, classes::ERROR));
    assert!(page.query_all_within(&form.form, ".field-error").is_empty());
}

#[test]
fn textarea_keeps_events_to_itself() {
    let (page, form, _) = mounted();
    let clicks = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&clicks);
    page.listen(
        EventTarget::Document,
        EventKind::Click,
        Box::new(move |_| counter.set(counter.get() + 1)),
    );

    assert!(page.click(&form.message).propagation_stopped());
    assert_eq!(page.focused(), Some(form.message));
    assert!(page.press_key(&form.message, "a").propagation_stopped());
    assert!(!page.press_key(&form.name, "a").propagation_stopped());

    page.click(&form.name);
    assert_eq!(clicks.get(), 1);
}

#[test]
fn page_without_form_is_skipped() {
    let page = Rc::new(MemoryPage::new());
    assert!(init(&page, &ContactConfig::default()).expect("config").is_none());
}

#[test]
fn zero_send_delay_is_rejected() {
    let page = Rc::new(MemoryPage::new());
    let config = ContactConfig { send_delay_ms: 0, ..ContactConfig::default() };

    let err = init(&page, &config).expect_err("zero delay");
    assert!(matches!(err, ContactError::Config { .. }));
}
