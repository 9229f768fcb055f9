//! Fade-in of cards as they scroll into view.

use crate::config::CONFIG;
use crate::dom;
use nas_interaction::reveal::{REVEAL_SELECTOR, REVEALED_CLASS, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_ID_ATTR: &str = "data-reveal-id";

fn reveal_id(el: &Element) -> Option<usize> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

fn observer(tracker: Rc<RefCell<RevealTracker>>) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(id) = reveal_id(&target) else {
                continue;
            };
            if tracker.borrow_mut().on_intersection(id, entry.is_intersecting()) {
                dom::add_class(&target, REVEALED_CLASS);
                observer.unobserve(&target);
            }
        }
        if tracker.borrow().pending() == 0 {
            debug!("all reveal targets shown, disconnecting observer");
            observer.disconnect();
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(CONFIG.reveal_threshold));
    options.set_root_margin(&CONFIG.reveal_root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

pub fn setup() {
    let targets = dom::query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    let observer = match observer(tracker.clone()) {
        Ok(observer) => observer,
        Err(err) => {
            // Without an observer nothing would ever fade in.
            warn!("IntersectionObserver unavailable, revealing all: {err:?}");
            for target in &targets {
                dom::add_class(target, REVEALED_CLASS);
            }
            return;
        }
    };

    for target in &targets {
        let id = tracker.borrow_mut().register();
        let _ = target.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        observer.observe(target);
    }
    debug!(count = targets.len(), "reveal targets observed");
}
