//! Event binding.
//!
//! Wires every page-wide controller. Booking and dashboard widgets are bound
//! on demand through the exported JS functions instead.
//! Listeners live for the page's lifetime, so their closures are leaked.

use crate::chrome;
use crate::forms;
use crate::gallery;
use crate::nav;
use crate::reveal;
use crate::state::Site;
use crate::theme;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Attach a listener for `event` on `target`.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        warn!("could not bind {event} listener: {err:?}");
        return;
    }
    cb.forget();
}

/// Helper: attach a click handler that receives the site controller.
macro_rules! on_click {
    ($el:expr, $site:expr, $handler:expr) => {{
        let site = $site.clone();
        crate::events::listen(&$el, "click", move |e: web_sys::Event| {
            $handler(&site, e);
        });
    }};
}
pub(crate) use on_click;

/// Bind all page-wide listeners. Call once after init.
pub fn bind_events(site: &Site) {
    // ── Chrome ──
    chrome::setup_header(site);
    theme::setup(site);
    chrome::setup_mobile_menu(site);
    nav::setup(site);

    // ── Content ──
    gallery::setup(site);
    reveal::setup();
    forms::setup(site);

    // ── Scrolling ──
    chrome::setup_smooth_scrolling(site);
    chrome::setup_scroll_up_button();
    chrome::inject_tablet_fixes();
}
