use crate::core::constants::*;

pub const SENDING_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
pub const SENT_HTML: &str = "<i class=\"fas fa-check\"></i> Message Sent!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn next(self) -> Self {
        match self {
            SubmitPhase::Idle => SubmitPhase::Sending,
            SubmitPhase::Sending => SubmitPhase::Sent,
            SubmitPhase::Sent => SubmitPhase::Idle,
        }
    }

    /// How long the button stays in this phase before advancing.
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(CONTACT_SENDING_MS),
            SubmitPhase::Sent => Some(CONTACT_SENT_MS),
        }
    }

    pub fn disabled(self) -> bool {
        self != SubmitPhase::Idle
    }

    /// Inline background; empty clears the override.
    pub fn background(self) -> &'static str {
        match self {
            SubmitPhase::Sent => CONTACT_SENT_BACKGROUND,
            _ => "",
        }
    }
}

/// Button label and phase bookkeeping for one contact form.
#[derive(Clone, Debug, Default)]
pub struct ContactFlow {
    phase: SubmitPhase,
    original_html: String,
    delivered: bool,
}

impl ContactFlow {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Begin a submission. Returns `false` if one is already running.
    pub fn submit(&mut self, current_button_html: &str) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.original_html = current_button_html.to_string();
        self.phase = SubmitPhase::Sending;
        self.delivered = false;
        true
    }

    /// Move to the next phase; returns the phase entered.
    pub fn advance(&mut self) -> SubmitPhase {
        self.delivered = self.phase == SubmitPhase::Sent;
        self.phase = self.phase.next();
        self.phase
    }

    /// Drop straight back to idle, e.g. when a timer cannot be armed.
    pub fn abort(&mut self) {
        self.phase = SubmitPhase::Idle;
        self.delivered = false;
    }

    /// Whether the last submission ran through to the end. Only then is the
    /// form cleared and the visitor thanked.
    pub fn delivered(&self) -> bool {
        self.delivered
    }

    pub fn button_html(&self) -> &str {
        match self.phase {
            SubmitPhase::Idle => &self.original_html,
            SubmitPhase::Sending => SENDING_HTML,
            SubmitPhase::Sent => SENT_HTML,
        }
    }
}
