//! Appointment booking selection.

use nas_types::ServiceId;

pub const SLOT_SELECTED_CLASS: &str = "selected";
pub const SLOT_DISABLED_CLASS: &str = "disabled";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub date: Option<String>,
    pub slot: Option<String>,
    pub service: Option<ServiceId>,
}

impl BookingSelection {
    /// A new date invalidates the chosen slot.
    pub fn choose_date(&mut self, date: &str) {
        let date = date.trim();
        self.date = (!date.is_empty()).then(|| date.to_owned());
        self.slot = None;
    }

    pub fn choose_slot(&mut self, slot: &str) {
        self.slot = Some(slot.trim().to_owned());
    }

    pub fn choose_service(&mut self, service: &str) {
        self.service = Some(ServiceId(service.to_owned()));
    }
}

/// Inline style and class state for a time-slot control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLook {
    pub disabled: bool,
    pub pointer_events: &'static str,
    pub opacity: &'static str,
}

pub fn slot_look(slot_label: &str, available: &[String]) -> SlotLook {
    let label = slot_label.trim();
    if available.iter().any(|slot| slot == label) {
        SlotLook {
            disabled: false,
            pointer_events: "auto",
            opacity: "1",
        }
    } else {
        SlotLook {
            disabled: true,
            pointer_events: "none",
            opacity: "0.5",
        }
    }
}

pub fn format_price(dollars: u32) -> String {
    format!("${dollars}")
}

/// `YYYY-MM-DD` for the date input's `min`, built from local calendar
/// fields. `month_index` is zero-based as in JS `Date::getMonth`.
pub fn date_input_value(year: u32, month_index: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month_index + 1)
}
