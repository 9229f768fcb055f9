//! What a theme toggle control shows for a given theme.

use nas_types::Theme;

/// Marks toggles placed in the mobile header; their icon is tinted inline.
pub const MOBILE_TOGGLE_CLASS: &str = "mobile-header-toggle";

const SUN_ICON: &str = concat!(
    r#"<circle cx="12" cy="12" r="5" fill="none" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36" stroke="currentColor" stroke-width="2"/>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22" stroke="currentColor" stroke-width="2"/>"#,
);

const MOON_ICON: &str =
    r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" fill="currentColor"/>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAppearance {
    /// Inner markup for the toggle's `<svg>`.
    pub icon: &'static str,
    pub aria_pressed: &'static str,
    pub aria_label: &'static str,
    /// Inline fill/color for mobile-header toggles only.
    pub tint: Option<&'static str>,
}

/// Dark mode shows the sun (click to go light), light mode the moon.
pub fn toggle_appearance(theme: Theme, mobile_header: bool) -> ToggleAppearance {
    let (icon, aria_label, tint) = match theme {
        Theme::Dark => (SUN_ICON, "Switch to light mode", "white"),
        Theme::Light => (MOON_ICON, "Switch to dark mode", "var(--primary-color)"),
    };
    ToggleAppearance {
        icon,
        aria_pressed: if theme.is_dark() { "true" } else { "false" },
        aria_label,
        tint: mobile_header.then_some(tint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_offers_the_sun() {
        let look = toggle_appearance(Theme::Dark, false);
        assert!(look.icon.starts_with("<circle"));
        assert_eq!(look.aria_pressed, "true");
        assert_eq!(look.tint, None);
    }

    #[test]
    fn mobile_toggle_is_tinted_per_theme() {
        assert_eq!(toggle_appearance(Theme::Dark, true).tint, Some("white"));
        assert_eq!(
            toggle_appearance(Theme::Light, true).tint,
            Some("var(--primary-color)")
        );
    }

    #[test]
    fn every_toggle_gets_the_same_look_for_one_theme() {
        let a = toggle_appearance(Theme::Light, false);
        let b = toggle_appearance(Theme::Light, true);
        assert_eq!(a.icon, b.icon);
        assert_eq!(a.aria_pressed, b.aria_pressed);
        assert_eq!(a.aria_label, b.aria_label);
    }
}
