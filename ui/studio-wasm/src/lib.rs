//! Nail studio site front end.
//!
//! Rust + WASM interaction layer for the salon's static pages. Each concern
//! lives in its own module; [`events::bind_events`] wires them at load.

pub mod backend;
pub mod booking;
pub mod chrome;
pub mod config;
pub mod dashboard;
pub mod dom;
pub mod events;
pub mod forms;
pub mod gallery;
pub mod logger;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod state;
pub mod theme;

use nas_types::Severity;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logger::init_logger();

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        events::listen(&document, "DOMContentLoaded", |_| init());
    } else {
        init();
    }
}

fn init() {
    let site = state::Site::new(dom::Elements::bind());
    events::bind_events(&site);
    state::install(site);
    info!("site interactions ready");
}

fn with_site(export: &str, f: impl FnOnce(&state::Site)) {
    match state::current() {
        Some(site) => f(&site),
        None => warn!("{export} called before the page finished loading"),
    }
}

// ── JS API ──

/// `showNotification(message, type?)`; unknown types render as info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    let severity = severity.as_deref().map_or(Severity::Info, Severity::parse_lenient);
    notify::show(message, severity);
}

#[wasm_bindgen(js_name = setupAppointmentBooking)]
pub fn setup_appointment_booking() {
    with_site("setupAppointmentBooking", booking::setup);
}

#[wasm_bindgen(js_name = setupDashboard)]
pub fn setup_dashboard() {
    with_site("setupDashboard", dashboard::setup);
}

/// Validate every required control of `form`, showing inline errors, and
/// return `{ valid, fields: [{ name, error }] }`.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: HtmlFormElement) -> Result<JsValue, JsValue> {
    let report = forms::validate(&form);
    serde_wasm_bindgen::to_value(&report).map_err(Into::into)
}
