//! Gallery category filter.
//!
//! Hiding fades an item out before `display: none`; showing restores
//! `display` first so the fade-in is visible. A newer click supersedes any
//! pending deferred step for the same item.

use crate::config::CONFIG;
use crate::dom;
use crate::events::listen;
use crate::state::Site;
use gloo_timers::callback::Timeout;
use nas_interaction::gallery::{Gallery, ItemTransition};
use nas_types::CategoryFilter;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use web_sys::Element;

struct GalleryController {
    gallery: Gallery,
    items: Vec<Element>,
    buttons: Vec<Element>,
    // Replacing a slot cancels the timer it held.
    timers: Vec<Option<Timeout>>,
}

fn filter_of(button: &Element) -> CategoryFilter {
    CategoryFilter::parse(&button.get_attribute("data-filter").unwrap_or_default())
}

/// The button marked `active` in the markup decides the starting filter.
fn initial_filter(buttons: &[Element]) -> CategoryFilter {
    buttons
        .iter()
        .find(|button| dom::has_class(button, "active"))
        .map(filter_of)
        .unwrap_or(CategoryFilter::All)
}

pub fn setup(site: &Site) {
    let buttons = site.els.filter_buttons.clone();
    let items = site.els.gallery_items.clone();
    if buttons.is_empty() || items.is_empty() {
        return;
    }

    let categories = items.iter().map(|item| item.get_attribute("data-category")).collect();
    let gallery = Gallery::new(categories, initial_filter(&buttons));
    let timers = items.iter().map(|_| None).collect();
    let ctl = Rc::new(RefCell::new(GalleryController {
        gallery,
        items,
        buttons: buttons.clone(),
        timers,
    }));

    for button in buttons {
        let ctl = ctl.clone();
        let clicked = button.clone();
        listen(&button, "click", move |_| on_filter(&ctl, &clicked));
    }
}

fn on_filter(ctl: &Rc<RefCell<GalleryController>>, clicked: &Element) {
    let filter = filter_of(clicked);
    let mut state = ctl.borrow_mut();

    for button in &state.buttons {
        dom::toggle_class(button, "active", button == clicked);
    }

    let Some(started) = state.gallery.select(filter) else {
        debug!("gallery filter unchanged");
        return;
    };

    for (index, transition) in started {
        let Some(item) = state.items.get(index).cloned() else {
            continue;
        };
        dom::set_styles(&item, transition.immediate());

        let weak = Rc::downgrade(ctl);
        let timer = Timeout::new(transition.delay_ms(&CONFIG), move || {
            if let Some(ctl) = weak.upgrade() {
                finish(&ctl, index, transition, &item);
            }
        });
        state.timers[index] = Some(timer);
    }
}

fn finish(ctl: &Rc<RefCell<GalleryController>>, index: usize, transition: ItemTransition, item: &Element) {
    if ctl.borrow_mut().gallery.settle(index, transition) {
        dom::set_styles(item, transition.deferred());
    }
}
