//! Toast rendering.

use crate::config::CONFIG;
use crate::dom;
use gloo_timers::callback::Timeout;
use nas_interaction::notify::{Notification, ToastPhase, timeline};
use nas_types::Severity;
use tracing::{debug, warn};
use web_sys::Element;

/// Show a toast that slides in, holds, slides out and removes itself.
pub fn show(message: &str, severity: Severity) {
    let toast = Notification::new(message, severity);
    let Some(el) = render(&toast) else {
        warn!("could not show notification: {message}");
        return;
    };
    debug!(severity = severity.as_str(), "notification shown");

    for (delay, phase) in timeline(&CONFIG) {
        let el = el.clone();
        Timeout::new(delay, move || step(&el, phase)).forget();
    }
}

fn render(toast: &Notification) -> Option<Element> {
    let el = dom::create_element("div")?;
    el.set_class_name(&toast.class_name());
    el.set_text_content(Some(&toast.message));
    let _ = el.set_attribute("role", "status");
    dom::set_styles(&el, &toast.initial_style());
    gloo_utils::document().body()?.append_child(&el).ok()?;
    Some(el)
}

fn step(el: &Element, phase: ToastPhase) {
    match phase.transform() {
        Some(transform) => dom::set_style(el, "transform", transform),
        None => el.remove(),
    }
}
