//! Viewport chrome: header sizing, the mobile drawer, the scroll-to-top
//! affordance and in-page anchor scrolling.

use crate::config::InteractionConfig;
use tracing::debug;

pub const SCROLL_UP_ICON: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M12 4l-8 8h5v8h6v-8h5z"/></svg>"#;

/// Keeps the logo above the open drawer on tablet and phone widths.
pub const TABLET_FIX_CSS: &str = r#"
@media (max-width: 991px) {
    .logo { z-index: 1002; position: relative; }
    .logo span, .logo-icon {
        z-index: 1002;
        position: relative;
        display: inline-block !important;
        opacity: 1 !important;
        visibility: visible !important;
    }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    Compact,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    pub box_shadow: &'static str,
    pub height: String,
}

impl HeaderMode {
    /// No hysteresis: strictly above the threshold is compact.
    pub fn for_scroll(scroll_y: f64, config: &InteractionConfig) -> HeaderMode {
        if scroll_y > config.compact_header_threshold {
            HeaderMode::Compact
        } else {
            HeaderMode::Expanded
        }
    }

    pub fn style(self, config: &InteractionConfig) -> HeaderStyle {
        match self {
            HeaderMode::Compact => HeaderStyle {
                box_shadow: "var(--shadow-hover)",
                height: format!("{}px", config.compact_header_height),
            },
            HeaderMode::Expanded => HeaderStyle {
                box_shadow: "var(--shadow-soft)",
                height: format!("{}px", config.expanded_header_height),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Drawer {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Toggle,
    /// A click landing outside the header.
    OutsideClick,
    NavSelected,
}

impl Drawer {
    pub fn on(self, event: DrawerEvent) -> Drawer {
        let next = match (self, event) {
            (Drawer::Closed, DrawerEvent::Toggle) => Drawer::Open,
            _ => Drawer::Closed,
        };
        if next != self {
            debug!(?event, ?next, "drawer transition");
        }
        next
    }

    pub fn is_open(self) -> bool {
        self == Drawer::Open
    }

    /// Inline `overflow` for `<body>`; an empty string clears the lock.
    pub fn body_overflow(self) -> &'static str {
        match self {
            Drawer::Open => "hidden",
            Drawer::Closed => "",
        }
    }
}

/// What a throttled handler should do with an incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Run now.
    Fire,
    /// Inside the interval: run once more after this many ms so the last
    /// event of a burst is never lost.
    Defer(u32),
    /// A trailing run is already scheduled.
    Skip,
}

/// Throttle firing on both edges: the first event runs immediately, and a
/// burst inside the interval ends with one trailing run.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_fired: None,
            trailing: false,
        }
    }

    pub fn on_event(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing {
                    return ThrottleDecision::Skip;
                }
                self.trailing = true;
                let wait = (self.interval_ms - (now_ms - last)).ceil();
                ThrottleDecision::Defer(wait as u32)
            }
            _ if self.trailing => ThrottleDecision::Skip,
            _ => {
                self.last_fired = Some(now_ms);
                ThrottleDecision::Fire
            }
        }
    }

    /// Records the deferred run scheduled by [`ThrottleDecision::Defer`].
    pub fn fire_trailing(&mut self, now_ms: f64) {
        self.trailing = false;
        self.last_fired = Some(now_ms);
    }
}

pub fn scroll_up_visible(scroll_y: f64, config: &InteractionConfig) -> bool {
    scroll_y > config.scroll_up_threshold
}

/// Selector for an in-page anchor href, or `None` for a bare `#` and
/// non-fragment links.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Scroll position that lands `offset_top` just below the fixed header.
pub fn anchor_scroll_top(offset_top: f64, header_height: f64, config: &InteractionConfig) -> f64 {
    (offset_top - header_height - config.smooth_scroll_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_compacts_strictly_above_fifty() {
        let config = InteractionConfig::default();
        assert_eq!(HeaderMode::for_scroll(0.0, &config), HeaderMode::Expanded);
        assert_eq!(HeaderMode::for_scroll(50.0, &config), HeaderMode::Expanded);
        assert_eq!(HeaderMode::for_scroll(50.5, &config), HeaderMode::Compact);

        let style = HeaderMode::Compact.style(&config);
        assert_eq!(style.height, "70px");
        assert_eq!(style.box_shadow, "var(--shadow-hover)");
        assert_eq!(HeaderMode::Expanded.style(&config).height, "80px");
    }

    #[test]
    fn drawer_toggles_and_closes_from_every_exit() {
        let open = Drawer::Closed.on(DrawerEvent::Toggle);
        assert!(open.is_open());
        assert_eq!(open.body_overflow(), "hidden");

        assert_eq!(open.on(DrawerEvent::Toggle), Drawer::Closed);
        assert_eq!(open.on(DrawerEvent::OutsideClick), Drawer::Closed);
        assert_eq!(open.on(DrawerEvent::NavSelected), Drawer::Closed);
        assert_eq!(Drawer::Closed.on(DrawerEvent::OutsideClick), Drawer::Closed);
        assert_eq!(Drawer::Closed.body_overflow(), "");
    }

    #[test]
    fn throttle_runs_leading_edge_then_one_trailing_check() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.on_event(1_000.0), ThrottleDecision::Fire);
        assert_eq!(throttle.on_event(1_030.0), ThrottleDecision::Defer(70));
        assert_eq!(throttle.on_event(1_060.0), ThrottleDecision::Skip);
        assert_eq!(throttle.on_event(1_099.9), ThrottleDecision::Skip);

        throttle.fire_trailing(1_100.0);
        assert_eq!(throttle.on_event(1_150.0), ThrottleDecision::Defer(50));
        throttle.fire_trailing(1_200.0);
        assert_eq!(throttle.on_event(1_300.0), ThrottleDecision::Fire);
    }

    #[test]
    fn burst_that_stops_inside_the_interval_still_rechecks() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.on_event(0.0), ThrottleDecision::Fire);
        // Last scroll event of the burst lands 10ms later; without a trailing
        // run the final position would never be evaluated.
        assert!(matches!(throttle.on_event(10.0), ThrottleDecision::Defer(90)));
    }

    #[test]
    fn scroll_up_button_appears_past_three_hundred() {
        let config = InteractionConfig::default();
        assert!(!scroll_up_visible(300.0, &config));
        assert!(scroll_up_visible(301.0, &config));
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("#services"), Some("#services"));
        assert_eq!(anchor_selector("gallery.html"), None);
    }

    #[test]
    fn anchor_offset_accounts_for_header() {
        let config = InteractionConfig::default();
        assert_eq!(anchor_scroll_top(900.0, 80.0, &config), 800.0);
        assert_eq!(anchor_scroll_top(50.0, 80.0, &config), 0.0);
    }
}
