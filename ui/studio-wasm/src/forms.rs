//! Form validation and submission.
//!
//! Controls are validated on blur, and on input only while they carry the
//! `error` class so a field being typed into is not nagged. Submit checks
//! every required control and hands the form to the submission gateway.

use crate::config::CONFIG;
use crate::dom;
use crate::events::listen;
use crate::notify;
use crate::state::Site;
use nas_backend::SubmissionRequest;
use nas_interaction::submission::{SubmissionTracker, SubmitTicket};
use nas_interaction::validation::{
    ERROR_CLASS, ERROR_MESSAGE_CLASS, ERROR_MESSAGE_STYLE, FieldSpec, FieldValidity, FormReport, validate_form,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const CONTROL_SELECTOR: &str = ".form-control";
const REQUIRED_SELECTOR: &str = ".form-control[required]";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

// ── Reading controls ──

/// Value, required flag and input type of a form control.
fn control_parts(control: &Element) -> Option<(String, bool, String)> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        Some((input.value(), input.required(), input.type_()))
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        Some((area.value(), area.required(), "textarea".to_owned()))
    } else {
        control
            .dyn_ref::<HtmlSelectElement>()
            .map(|select| (select.value(), select.required(), "select".to_owned()))
    }
}

fn read_field(control: &Element) -> Option<FieldSpec> {
    let (value, required, input_type) = control_parts(control)?;
    let minlength = control.get_attribute("minlength");
    Some(FieldSpec::from_attributes(&value, required, &input_type, minlength.as_deref()))
}

fn field_name(control: &Element) -> String {
    control
        .get_attribute("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| control.id())
}

// ── Inline errors ──

fn clear_message(control: &Element) {
    if let Some(existing) = control
        .parent_element()
        .and_then(|parent| dom::query_within(&parent, &format!(".{ERROR_MESSAGE_CLASS}")))
    {
        existing.remove();
    }
}

fn show_validity(control: &Element, validity: &FieldValidity) {
    clear_message(control);
    dom::toggle_class(control, ERROR_CLASS, validity.is_invalid());
    match validity.aria_invalid() {
        Some(value) => {
            let _ = control.set_attribute("aria-invalid", value);
        }
        None => {
            let _ = control.remove_attribute("aria-invalid");
        }
    }

    let (Some(err), Some(parent)) = (validity.error(), control.parent_element()) else {
        return;
    };
    let Some(message) = dom::create_element("div") else {
        return;
    };
    message.set_class_name(ERROR_MESSAGE_CLASS);
    message.set_text_content(Some(&err.to_string()));
    dom::set_styles(&message, &ERROR_MESSAGE_STYLE);
    let _ = parent.append_child(&message);
}

/// Validate one control and render the outcome next to it.
fn validate_control(control: &Element) -> bool {
    let Some(field) = read_field(control) else {
        return true;
    };
    let validity = FieldValidity::of(&field);
    show_validity(control, &validity);
    !validity.is_invalid()
}

fn reset_validity(form: &HtmlFormElement) {
    for control in dom::query_all_within(form, CONTROL_SELECTOR) {
        show_validity(&control, &FieldValidity::Unvalidated);
    }
}

/// Check every required control of `form`, rendering each result.
pub fn validate(form: &HtmlFormElement) -> FormReport {
    let controls = dom::query_all_within(form, REQUIRED_SELECTOR);
    let fields: Vec<(String, FieldSpec)> = controls
        .iter()
        .filter_map(|control| {
            let field = read_field(control)?;
            show_validity(control, &FieldValidity::of(&field));
            Some((field_name(control), field))
        })
        .collect();
    validate_form(fields.iter().map(|(name, field)| (name.as_str(), field)))
}

// ── Submission ──

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    dom::query_within(form, SUBMIT_SELECTOR).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn collect_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    dom::query_all_within(form, CONTROL_SELECTOR)
        .iter()
        .filter_map(|control| {
            let (value, _, _) = control_parts(control)?;
            Some((field_name(control), value))
        })
        .collect()
}

fn submit(site: &Site, form: &HtmlFormElement, tracker: &Rc<RefCell<SubmissionTracker>>) {
    let button = submit_button(form);
    let label = button.as_ref().and_then(|b| b.text_content()).unwrap_or_default();
    let Some(ticket) = tracker.borrow_mut().begin(&label) else {
        return;
    };
    if let Some(button) = &button {
        button.set_text_content(Some(&CONFIG.submit_pending_label));
        button.set_disabled(true);
    }

    let request = SubmissionRequest {
        form_id: form.id(),
        fields: collect_fields(form),
    };
    info!(form = %request.form_id, "submitting form");

    let gateway = site.backends.submissions();
    let form = form.clone();
    let tracker = tracker.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = match gateway.submit(request).await {
            Ok(receipt) if receipt.accepted => Ok(receipt.message),
            Ok(receipt) => Err(receipt.message),
            Err(err) => Err(err.to_string()),
        };
        complete(&form, button.as_ref(), &tracker, ticket, result);
    });
}

fn complete(
    form: &HtmlFormElement,
    button: Option<&HtmlButtonElement>,
    tracker: &RefCell<SubmissionTracker>,
    ticket: SubmitTicket,
    result: Result<String, String>,
) {
    let Some(done) = tracker.borrow_mut().finish(ticket, result) else {
        return;
    };
    if !form.is_connected() {
        debug!("form left the page before submission finished");
        return;
    }

    if done.clear_fields {
        form.reset();
        reset_validity(form);
    }
    if let Some(button) = button {
        restore_button(button, &done.restore_label);
    }
    let (severity, message) = done.notify;
    notify::show(&message, severity);
}

fn restore_button(button: &HtmlButtonElement, label: &str) {
    button.set_text_content(Some(label));
    button.set_disabled(false);
}

/// Leaving the page abandons an in-flight submission so a page restored
/// from the back/forward cache shows a usable form. The late completion is
/// then dropped by its stale ticket.
fn abandon_on_pagehide(form: &HtmlFormElement, tracker: &Rc<RefCell<SubmissionTracker>>) {
    let form = form.clone();
    let tracker = tracker.clone();
    listen(&dom::window(), "pagehide", move |_| {
        let Some(label) = tracker.borrow_mut().cancel() else {
            return;
        };
        debug!(form = %form.id(), "pending submission abandoned");
        if let Some(button) = submit_button(&form) {
            restore_button(&button, &label);
        }
    });
}

// ── Wiring ──

fn bind_form(site: &Site, form: &HtmlFormElement) {
    let tracker = Rc::new(RefCell::new(SubmissionTracker::default()));
    abandon_on_pagehide(form, &tracker);
    {
        let site = site.clone();
        let form2 = form.clone();
        listen(form, "submit", move |e| {
            e.prevent_default();
            let report = validate(&form2);
            if report.valid {
                submit(&site, &form2, &tracker);
            } else {
                debug!(invalid = report.fields.iter().filter(|f| f.error.is_some()).count(), "form rejected");
            }
        });
    }

    for control in dom::query_all_within(form, CONTROL_SELECTOR) {
        let on_blur = control.clone();
        listen(&control, "blur", move |_| {
            validate_control(&on_blur);
        });
        let on_input = control.clone();
        listen(&control, "input", move |_| {
            if dom::has_class(&on_input, ERROR_CLASS) {
                validate_control(&on_input);
            }
        });
    }
}

pub fn setup(site: &Site) {
    for form in &site.els.forms {
        bind_form(site, form);
    }
}
