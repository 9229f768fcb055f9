//! DOM element bindings.
//!
//! Page-wide handles are resolved once at startup into [`Elements`]. Every
//! field is optional or a possibly-empty list: pages only carry the parts
//! they use, and a controller whose elements are absent is skipped.

use gloo_utils::document;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, HtmlFormElement, NodeList, SvgElement};

// ── Helpers ──

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    collect(document().query_selector_all(selector))
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect(parent.query_selector_all(selector))
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nl) = list else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        el.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

/// Set an inline style property. An empty value clears it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(style) = style_of(el) else {
        return;
    };
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}

pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

// ── Elements struct ──

/// Page-wide element references.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Chrome
    pub header: Option<HtmlElement>,
    pub menu_toggle: Option<Element>,
    pub nav_center: Option<Element>,
    pub nav_links: Vec<Element>,
    pub theme_toggles: Vec<Element>,

    // Gallery
    pub filter_buttons: Vec<Element>,
    pub gallery_items: Vec<Element>,

    // Forms
    pub forms: Vec<HtmlFormElement>,
}

impl Elements {
    /// Resolve page-wide references. Call once after DOMContentLoaded.
    pub fn bind() -> Elements {
        let els = Elements {
            header: query(".header").and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            menu_toggle: query(".menu-toggle"),
            nav_center: query(".nav-center"),
            nav_links: query_all(".nav-link"),
            theme_toggles: query_all(".theme-toggle"),

            filter_buttons: query_all(".filter-btn"),
            gallery_items: query_all(".gallery-item"),

            forms: query_all("form")
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlFormElement>().ok())
                .collect(),
        };
        debug!(
            header = els.header.is_some(),
            nav_links = els.nav_links.len(),
            theme_toggles = els.theme_toggles.len(),
            gallery_items = els.gallery_items.len(),
            forms = els.forms.len(),
            "elements bound"
        );
        els
    }
}
