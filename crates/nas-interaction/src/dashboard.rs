//! Admin dashboard shell: sidebar tabs, status badges and placeholder widgets.

use nas_types::AppointmentStatus;
use tracing::debug;

pub const LOADING_PLACEHOLDER: &str = r#"<div class="spinner"></div>"#;
pub const STATUS_UPDATED_MESSAGE: &str = "Appointment status updated";
pub const ROW_HOVER_BACKGROUND: &str = "#f8f9fa";
pub const CHART_CAPTION: &str = "<p>Chart Data</p>";
pub const CHART_STYLE: [(&str, &str); 7] = [
    ("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    ("border-radius", "8px"),
    ("height", "200px"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("color", "white"),
];

/// Sidebar selection. At most one tab is active.
#[derive(Debug, Default)]
pub struct DashboardTabs {
    active: Option<String>,
}

impl DashboardTabs {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activates `page`; every click reloads, even on the active tab.
    pub fn select(&mut self, page: &str) -> &str {
        debug!(page, "dashboard tab");
        self.active.insert(page.to_owned())
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active.as_deref() == Some(page)
    }
}

pub fn badge_class(status: &AppointmentStatus) -> String {
    format!("status-badge status-{}", status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tab_active_at_a_time() {
        let mut tabs = DashboardTabs::default();
        assert_eq!(tabs.active(), None);
        tabs.select("appointments");
        tabs.select("clients");
        assert!(tabs.is_active("clients"));
        assert!(!tabs.is_active("appointments"));
    }

    #[test]
    fn badge_class_carries_the_status() {
        assert_eq!(
            badge_class(&AppointmentStatus::from_value("pending")),
            "status-badge status-pending"
        );
        assert_eq!(
            badge_class(&AppointmentStatus::from_value("rescheduled")),
            "status-badge status-rescheduled"
        );
    }
}
