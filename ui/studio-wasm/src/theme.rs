//! Light/dark theme.
//!
//! The theme lives in the `data-theme` attribute on `<html>` and in
//! `localStorage`. Every change re-renders all `.theme-toggle` controls in
//! the same call so no toggle ever shows a stale icon.

use crate::chrome;
use crate::dom;
use crate::events::on_click;
use crate::state::Site;
use nas_interaction::theme::{MOBILE_TOGGLE_CLASS, toggle_appearance};
use nas_types::Theme;
use tracing::info;
use web_sys::Element;

/// Apply `theme` document-wide and refresh every toggle.
pub fn apply_theme(site: &Site, theme: Theme) {
    if let Some(root) = gloo_utils::document().document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    // Re-query: the mobile header may have added toggles after startup.
    for toggle in dom::query_all(".theme-toggle") {
        render_toggle(&toggle, theme);
    }

    chrome::update_header(site);
}

fn render_toggle(toggle: &Element, theme: Theme) {
    let look = toggle_appearance(theme, dom::has_class(toggle, MOBILE_TOGGLE_CLASS));
    let _ = toggle.set_attribute("aria-pressed", look.aria_pressed);
    let _ = toggle.set_attribute("aria-label", look.aria_label);

    if let Some(svg) = dom::query_within(toggle, "svg") {
        svg.set_inner_html(look.icon);
        if let Some(tint) = look.tint {
            dom::set_style(&svg, "fill", tint);
            dom::set_style(&svg, "color", tint);
        }
    }
}

fn on_toggle(site: &Site, _: web_sys::Event) {
    let theme = site.themes.toggle();
    info!(%theme, "theme toggled");
    apply_theme(site, theme);
}

/// Restore the saved theme and wire the toggles.
pub fn setup(site: &Site) {
    apply_theme(site, site.themes.get_theme());

    for toggle in &site.els.theme_toggles {
        on_click!(toggle, site, on_toggle);
    }
}
