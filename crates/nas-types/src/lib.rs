use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses the value persisted under the theme key. Anything unknown is `None`.
    pub fn from_stored(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Unknown severities from script callers fall back to `Info`.
    pub fn parse_lenient(value: &str) -> Severity {
        match value.trim() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#27ae60",
            Severity::Error => "#e74c3c",
            Severity::Info => "#3498db",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Other,
}

impl FieldKind {
    /// Maps an input's `type` attribute. Textareas and selects report their
    /// own tag-like type and land in `Other`.
    pub fn from_input_type(input_type: &str) -> FieldKind {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    pub fn from_value(value: &str) -> AppointmentStatus {
        match value {
            "confirmed" => AppointmentStatus::Confirmed,
            "pending" => AppointmentStatus::Pending,
            "cancelled" => AppointmentStatus::Cancelled,
            other => AppointmentStatus::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Other(value) => value,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "#27ae60",
            AppointmentStatus::Pending => "#f39c12",
            AppointmentStatus::Cancelled => "#e74c3c",
            AppointmentStatus::Other(_) => "#95a5a6",
        }
    }
}

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> CategoryFilter {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_owned())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(tag) => category == Some(tag.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ServiceId(pub String);
