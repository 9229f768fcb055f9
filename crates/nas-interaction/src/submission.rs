//! Per-form submission lifecycle.
//!
//! `Idle -> Pending -> Idle`. The pending state remembers the submit
//! control's label so it can be restored, and a ticket so a completion that
//! arrives after a cancel is dropped.

use nas_types::Severity;
use tracing::debug;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Pending {
        ticket: SubmitTicket,
        original_label: String,
    },
}

#[derive(Debug, Default)]
pub struct SubmissionTracker {
    state: State,
    issued: u64,
}

/// What to do once a pending submission ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub restore_label: String,
    pub clear_fields: bool,
    pub notify: (Severity, String),
}

impl SubmissionTracker {
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// Enters `Pending`. Returns `None` while a submission is in flight.
    pub fn begin(&mut self, current_label: &str) -> Option<SubmitTicket> {
        if self.is_pending() {
            debug!("submission already pending, ignoring");
            return None;
        }
        self.issued += 1;
        let ticket = SubmitTicket(self.issued);
        self.state = State::Pending {
            ticket,
            original_label: current_label.to_owned(),
        };
        Some(ticket)
    }

    /// Leaves `Pending` for `ticket`. Stale tickets yield `None`.
    pub fn finish(&mut self, ticket: SubmitTicket, result: Result<String, String>) -> Option<Completion> {
        let State::Pending {
            ticket: current,
            original_label,
        } = &self.state
        else {
            return None;
        };
        if *current != ticket {
            return None;
        }
        let restore_label = original_label.clone();
        self.state = State::Idle;

        let completion = match result {
            Ok(message) => Completion {
                restore_label,
                clear_fields: true,
                notify: (Severity::Success, message),
            },
            Err(reason) => {
                debug!(%reason, "submission failed");
                Completion {
                    restore_label,
                    clear_fields: false,
                    notify: (Severity::Error, FAILURE_MESSAGE.to_owned()),
                }
            }
        };
        Some(completion)
    }

    /// Abandons the pending submission; returns the label to restore.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            State::Pending { original_label, .. } => Some(original_label),
            State::Idle => None,
        }
    }
}
