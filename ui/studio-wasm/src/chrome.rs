//! Viewport chrome: header, mobile drawer, scroll-to-top button and
//! in-page anchor scrolling.

use crate::config::CONFIG;
use crate::dom;
use crate::events::listen;
use crate::state::Site;
use gloo_timers::callback::Timeout;
use nas_interaction::chrome::{
    Drawer, DrawerEvent, HeaderMode, SCROLL_UP_ICON, TABLET_FIX_CSS, Throttle, ThrottleDecision,
    anchor_scroll_top, anchor_selector, scroll_up_visible,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

// ── Header ──

/// Re-evaluate header height and shadow for the current scroll position.
pub fn update_header(site: &Site) {
    let Some(header) = &site.els.header else {
        return;
    };
    let style = HeaderMode::for_scroll(dom::scroll_y(), &CONFIG).style(&CONFIG);
    dom::set_style(header, "box-shadow", style.box_shadow);
    dom::set_style(header, "height", &style.height);
}

pub fn setup_header(site: &Site) {
    if site.els.header.is_none() {
        warn!("no .header on page, skipping header effects");
        return;
    }
    let site2 = site.clone();
    listen(&dom::window(), "scroll", move |_| update_header(&site2));
    update_header(site);
}

// ── Mobile drawer ──

fn render_drawer(drawer: Drawer, nav_center: &Element, menu_toggle: &Element) {
    dom::toggle_class(nav_center, "mobile-active", drawer.is_open());
    dom::toggle_class(menu_toggle, "active", drawer.is_open());
    if let Some(body) = gloo_utils::document().body() {
        dom::set_style(&body, "overflow", drawer.body_overflow());
    }
}

pub fn setup_mobile_menu(site: &Site) {
    let (Some(menu_toggle), Some(nav_center)) = (&site.els.menu_toggle, &site.els.nav_center) else {
        debug!("no mobile menu on page");
        return;
    };
    let drawer = Rc::new(Cell::new(Drawer::Closed));

    let send = {
        let drawer = drawer.clone();
        let nav_center = nav_center.clone();
        let menu_toggle = menu_toggle.clone();
        Rc::new(move |event: DrawerEvent| {
            let next = drawer.get().on(event);
            drawer.set(next);
            render_drawer(next, &nav_center, &menu_toggle);
        })
    };

    {
        let send = send.clone();
        listen(menu_toggle, "click", move |e| {
            // Keep the document-level outside-click handler from closing it again.
            e.stop_propagation();
            send(DrawerEvent::Toggle);
        });
    }

    // Clicks outside the header close the drawer. Without a header the
    // drawer and its toggle are the boundary.
    {
        let send = send.clone();
        let boundary: Vec<Element> = match &site.els.header {
            Some(header) => vec![header.clone().into()],
            None => vec![nav_center.clone(), menu_toggle.clone()],
        };
        listen(&gloo_utils::document(), "click", move |e| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = boundary.iter().any(|el| el.contains(target.as_ref()));
            if !inside && drawer.get().is_open() {
                send(DrawerEvent::OutsideClick);
            }
        });
    }

    for link in dom::query_all_within(nav_center, ".nav-link") {
        let send = send.clone();
        listen(&link, "click", move |_| send(DrawerEvent::NavSelected));
    }
}

// ── Anchor scrolling ──

pub fn setup_smooth_scrolling(site: &Site) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let header = site.els.header.clone();
        let anchor2 = anchor.clone();
        listen(&anchor, "click", move |e| {
            e.prevent_default();
            let href = anchor2.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let Some(target) = dom::query(selector).and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
                return;
            };
            let header_height = header.as_ref().map_or(0, |h| h.offset_height());
            let top = anchor_scroll_top(f64::from(target.offset_top()), f64::from(header_height), &CONFIG);
            dom::smooth_scroll_to(top);
        });
    }
}

// ── Scroll-to-top ──

fn create_scroll_up_button() -> Option<Element> {
    let button = dom::create_element("button")?;
    button.set_class_name("scroll-up-btn");
    let _ = button.set_attribute("aria-label", "Scroll to top");
    button.set_inner_html(SCROLL_UP_ICON);
    gloo_utils::document().body()?.append_child(&button).ok()?;
    Some(button)
}

pub fn setup_scroll_up_button() {
    let Some(button) = dom::query(".scroll-up-btn").or_else(create_scroll_up_button) else {
        warn!("scroll-up button unavailable");
        return;
    };
    listen(&button, "click", |_| dom::smooth_scroll_to(0.0));

    let throttle = Rc::new(RefCell::new(Throttle::new(CONFIG.scroll_throttle_ms)));
    listen(&dom::window(), "scroll", move |_| {
        let decision = throttle.borrow_mut().on_event(js_sys::Date::now());
        match decision {
            ThrottleDecision::Fire => update_scroll_up(&button),
            ThrottleDecision::Defer(delay) => {
                let throttle = throttle.clone();
                let button = button.clone();
                Timeout::new(delay, move || {
                    throttle.borrow_mut().fire_trailing(js_sys::Date::now());
                    update_scroll_up(&button);
                })
                .forget();
            }
            ThrottleDecision::Skip => {}
        }
    });
}

fn update_scroll_up(button: &Element) {
    dom::toggle_class(button, "visible", scroll_up_visible(dom::scroll_y(), &CONFIG));
}

// ── Tablet / mobile logo fix ──

pub fn inject_tablet_fixes() {
    let document = gloo_utils::document();
    let (Some(head), Some(style)) = (document.head(), dom::create_element("style")) else {
        return;
    };
    style.set_text_content(Some(TABLET_FIX_CSS));
    if head.append_child(&style).is_err() {
        warn!("could not inject tablet fixes");
    }
}
