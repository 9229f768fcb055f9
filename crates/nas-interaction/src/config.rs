//! Tunables for every controller.
//!
//! Defaults reproduce the shipped site. Pages may override any subset with an
//! inline JSON block; missing keys keep their default.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub theme_storage_key: String,
    pub default_page: String,

    // Header / scroll chrome (px)
    pub compact_header_threshold: f64,
    pub compact_header_height: u32,
    pub expanded_header_height: u32,
    pub scroll_up_threshold: f64,
    pub scroll_throttle_ms: u32,
    pub smooth_scroll_offset: f64,

    // Gallery
    pub gallery_show_delay_ms: u32,
    pub gallery_hide_ms: u32,

    // Reveal-on-scroll
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    // Toasts
    pub toast_enter_delay_ms: u32,
    pub toast_hold_ms: u32,
    pub toast_exit_ms: u32,

    // Simulated collaborators
    pub submit_delay_ms: u32,
    pub submit_pending_label: String,
    pub dashboard_load_ms: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            default_page: "index.html".to_owned(),
            compact_header_threshold: 50.0,
            compact_header_height: 70,
            expanded_header_height: 80,
            scroll_up_threshold: 300.0,
            scroll_throttle_ms: 100,
            smooth_scroll_offset: 20.0,
            gallery_show_delay_ms: 10,
            gallery_hide_ms: 300,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            toast_enter_delay_ms: 100,
            toast_hold_ms: 3000,
            toast_exit_ms: 300,
            submit_delay_ms: 2000,
            submit_pending_label: "Sending...".to_owned(),
            dashboard_load_ms: 500,
        }
    }
}

impl InteractionConfig {
    /// Parses page-supplied overrides. A malformed block is logged and ignored.
    pub fn from_overrides(json: Option<&str>) -> Self {
        let Some(raw) = json.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<InteractionConfig>(raw) {
            Ok(config) => config.sanitized(),
            Err(err) => {
                warn!("ignoring malformed site config: {err}");
                Self::default()
            }
        }
    }

    /// A zero throttle would run layout work on every scroll event.
    fn sanitized(mut self) -> Self {
        if self.scroll_throttle_ms == 0 {
            self.scroll_throttle_ms = Self::default().scroll_throttle_ms;
        }
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_uses_defaults() {
        assert_eq!(InteractionConfig::from_overrides(None), InteractionConfig::default());
        assert_eq!(InteractionConfig::from_overrides(Some("  ")), InteractionConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = InteractionConfig::from_overrides(Some(r#"{"submit_delay_ms": 50, "theme_storage_key": "nas-theme"}"#));
        assert_eq!(config.submit_delay_ms, 50);
        assert_eq!(config.theme_storage_key, "nas-theme");
        assert_eq!(config.toast_hold_ms, 3000);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn malformed_block_falls_back() {
        let config = InteractionConfig::from_overrides(Some("{not json"));
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn zero_throttle_is_rejected() {
        let config = InteractionConfig::from_overrides(Some(r#"{"scroll_throttle_ms": 0, "reveal_threshold": 4.0}"#));
        assert_eq!(config.scroll_throttle_ms, 100);
        assert_eq!(config.reveal_threshold, 1.0);
    }
}
