//! Toast notifications.
//!
//! Each toast is independent: no queue, no deduplication. Overlapping
//! toasts stack visually on top of each other.

use crate::config::InteractionConfig;
use nas_types::Severity;

pub const OFFSCREEN_TRANSFORM: &str = "translateX(400px)";
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    SlideIn,
    SlideOut,
    Remove,
}

impl ToastPhase {
    pub fn transform(self) -> Option<&'static str> {
        match self {
            ToastPhase::SlideIn => Some(ONSCREEN_TRANSFORM),
            ToastPhase::SlideOut => Some(OFFSCREEN_TRANSFORM),
            ToastPhase::Remove => None,
        }
    }
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    /// Inline style for a freshly created, still off-screen toast.
    pub fn initial_style(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("position", "fixed"),
            ("top", "100px"),
            ("right", "20px"),
            ("background", self.severity.background()),
            ("color", "white"),
            ("padding", "1rem 1.5rem"),
            ("border-radius", "8px"),
            ("box-shadow", "0 4px 20px rgba(0,0,0,0.15)"),
            ("z-index", "9999"),
            ("transform", OFFSCREEN_TRANSFORM),
            ("transition", "transform 0.3s ease"),
        ]
    }
}

/// Phases with their delay in ms from creation.
pub fn timeline(config: &InteractionConfig) -> [(u32, ToastPhase); 3] {
    [
        (config.toast_enter_delay_ms, ToastPhase::SlideIn),
        (config.toast_hold_ms, ToastPhase::SlideOut),
        (config.toast_hold_ms + config.toast_exit_ms, ToastPhase::Remove),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_background_follow_severity() {
        let toast = Notification::new("Saved", Severity::Success);
        assert_eq!(toast.class_name(), "notification notification-success");
        assert!(toast.initial_style().contains(&("background", "#27ae60")));

        let info = Notification::new("Hi", Severity::Info);
        assert!(info.initial_style().contains(&("background", "#3498db")));
    }

    #[test]
    fn toast_starts_off_screen() {
        let style = Notification::new("x", Severity::Error).initial_style();
        assert!(style.contains(&("transform", OFFSCREEN_TRANSFORM)));
    }

    #[test]
    fn timeline_is_ordered_and_ends_in_removal() {
        let phases = timeline(&InteractionConfig::default());
        assert_eq!(phases[0], (100, ToastPhase::SlideIn));
        assert_eq!(phases[1], (3000, ToastPhase::SlideOut));
        assert_eq!(phases[2], (3300, ToastPhase::Remove));
        assert!(phases.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        assert_eq!(ToastPhase::Remove.transform(), None);
    }
}
