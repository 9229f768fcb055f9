//! Appointment booking widgets: date picker, time slots and price preview.

use crate::dom;
use crate::events::listen;
use crate::state::Site;
use nas_interaction::booking::{
    BookingSelection, SLOT_DISABLED_CLASS, SLOT_SELECTED_CLASS, date_input_value, format_price, slot_look,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

type Selection = Rc<RefCell<BookingSelection>>;

fn slot_label(slot: &Element) -> String {
    slot.text_content().unwrap_or_default().trim().to_owned()
}

fn today() -> String {
    let now = js_sys::Date::new_0();
    date_input_value(now.get_full_year(), now.get_month(), now.get_date())
}

// ── Date & availability ──

fn refresh_slots(site: &Site, selection: &Selection, slots: &[Element], date: String) {
    for slot in slots {
        dom::remove_class(slot, SLOT_SELECTED_CLASS);
    }
    let source = site.backends.availability();
    let selection = selection.clone();
    let slots = slots.to_vec();
    wasm_bindgen_futures::spawn_local(async move {
        let available = match source.available_slots(&date).await {
            Ok(available) => available,
            Err(err) => {
                warn!("availability for {date} failed: {err}");
                return;
            }
        };
        // A later date change owns the slots now.
        if selection.borrow().date.as_deref() != Some(date.as_str()) {
            return;
        }
        for slot in &slots {
            let look = slot_look(&slot_label(slot), &available);
            dom::toggle_class(slot, SLOT_DISABLED_CLASS, look.disabled);
            dom::set_style(slot, "pointer-events", look.pointer_events);
            dom::set_style(slot, "opacity", look.opacity);
        }
        debug!(%date, available = available.len(), "time slots refreshed");
    });
}

fn bind_date(site: &Site, selection: &Selection, slots: &[Element]) {
    let Some(input) = dom::by_id_typed::<HtmlInputElement>("appointment-date") else {
        return;
    };
    input.set_min(&today());

    let site = site.clone();
    let selection = selection.clone();
    let slots = slots.to_vec();
    let input2 = input.clone();
    listen(&input, "change", move |_| {
        let date = input2.value();
        selection.borrow_mut().choose_date(&date);
        let Some(date) = selection.borrow().date.clone() else {
            return;
        };
        refresh_slots(&site, &selection, &slots, date);
    });
}

// ── Time slots ──

fn bind_slots(selection: &Selection, slots: &[Element]) {
    for slot in slots {
        let selection = selection.clone();
        let all = slots.to_vec();
        let clicked = slot.clone();
        listen(slot, "click", move |_| {
            if dom::has_class(&clicked, SLOT_DISABLED_CLASS) {
                return;
            }
            for other in &all {
                dom::toggle_class(other, SLOT_SELECTED_CLASS, other == &clicked);
            }
            selection.borrow_mut().choose_slot(&slot_label(&clicked));
        });
    }
}

// ── Pricing ──

fn bind_service(site: &Site, selection: &Selection) {
    let Some(select) = dom::by_id_typed::<HtmlSelectElement>("service-select") else {
        return;
    };
    let site = site.clone();
    let selection = selection.clone();
    let select2 = select.clone();
    listen(&select, "change", move |_| {
        selection.borrow_mut().choose_service(&select2.value());
        let Some(service) = selection.borrow().service.clone() else {
            return;
        };
        let catalog = site.backends.prices();
        wasm_bindgen_futures::spawn_local(async move {
            match catalog.price_for(&service).await {
                Ok(Some(price)) => {
                    if let Some(display) = dom::by_id("price-display") {
                        display.set_text_content(Some(&format_price(price)));
                    }
                }
                Ok(None) => debug!(service = %service.0, "no price listed"),
                Err(err) => warn!("price lookup failed: {err}"),
            }
        });
    });
}

/// Bind the booking widgets. Later calls are no-ops.
pub fn setup(site: &Site) {
    if !site.claim_booking() {
        debug!("booking already bound");
        return;
    }
    let selection: Selection = Rc::default();
    let slots = dom::query_all(".time-slot");

    bind_date(site, &selection, &slots);
    bind_slots(&selection, &slots);
    bind_service(site, &selection);
    info!(slots = slots.len(), "appointment booking ready");
}
