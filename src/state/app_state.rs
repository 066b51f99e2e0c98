//! Application state definitions

use super::forms::{AmtForm, Form, InspectionForm};
use super::transition::{Notice, SuccessPulse};
use crate::lifecycle::SubmitState;
use std::time::Instant;

/// Current tab in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Amt,
    Inspection,
}

impl View {
    pub const ALL: [View; 2] = [View::Amt, View::Inspection];

    pub fn next(&self) -> Self {
        match self {
            Self::Amt => Self::Inspection,
            Self::Inspection => Self::Amt,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs, so both directions land on the other one
        self.next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Amt => "AMT Parameters",
            Self::Inspection => "Inspection",
        }
    }

    /// Submit button text while nothing is happening
    pub fn idle_button_label(&self) -> &'static str {
        match self {
            Self::Amt => "Submit Parameters",
            Self::Inspection => "Submit",
        }
    }
}

/// Modal overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Result message, dismissed with Enter/Esc
    Message {
        title: String,
        message: String,
        is_error: bool,
    },
    /// "Clear all form data?" with Cancel/Clear selection
    ConfirmClear { confirm_selected: bool },
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Message {
            title: title.into(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Message {
            title: "Error".to_string(),
            message: message.into(),
            is_error: true,
        }
    }
}

/// One form plus the adapter state that surrounds it
#[derive(Debug, Clone, Default)]
pub struct FormPanel<F> {
    pub form: F,
    /// Mirror of the controller state
    pub submit_state: SubmitState,
    /// Set between spawning a submit and receiving its outcome
    pub pending: bool,
    pub notice: Option<Notice>,
    pub pulse: Option<SuccessPulse>,
}

impl<F: Form> FormPanel<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            submit_state: SubmitState::Idle,
            pending: false,
            notice: None,
            pulse: None,
        }
    }

    /// True while a submit is running or its result is on display
    pub fn is_busy(&self) -> bool {
        self.pending || self.submit_state.is_busy()
    }

    /// Label for the submit button
    pub fn button_label(&self, idle_label: &str) -> String {
        if let Some(notice) = &self.notice {
            return notice.text.clone();
        }
        if self.pending {
            return "Submitting...".to_string();
        }
        match self.submit_state {
            SubmitState::Idle => idle_label.to_string(),
            SubmitState::Validating | SubmitState::Submitting => "Submitting...".to_string(),
            SubmitState::Success => "Submitted Successfully!".to_string(),
            SubmitState::Error => "Submission failed".to_string(),
        }
    }

    /// Drop expired notices and pulses
    pub fn expire(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.notice = None;
        }
        if self.pulse.as_ref().is_some_and(|p| p.is_expired_at(now)) {
            self.pulse = None;
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub amt: FormPanel<AmtForm>,
    pub inspection: FormPanel<InspectionForm>,
    pub dialog: Option<Dialog>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_view: View::default(),
            amt: FormPanel::new(AmtForm::new()),
            inspection: FormPanel::new(InspectionForm::default()),
            dialog: None,
        }
    }

    /// The form on the current tab
    pub fn active_form_mut(&mut self) -> &mut dyn Form {
        match self.current_view {
            View::Amt => &mut self.amt.form,
            View::Inspection => &mut self.inspection.form,
        }
    }

    pub fn is_busy(&self, view: View) -> bool {
        match view {
            View::Amt => self.amt.is_busy(),
            View::Inspection => self.inspection.is_busy(),
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }
}
