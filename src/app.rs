//! Application state and core logic

use crate::config::TuiConfig;
use crate::lifecycle::{
    apply_marks, mark_on_input, FormLifecycleController, HttpJsonTransport, LogTransport,
    SubmitOutcome, SubmitState, SubmitTransport, ValidationResult,
};
use crate::state::{today, AppState, Dialog, Field, Form, Notice, SuccessPulse, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

/// Button text shown while required fields are missing
const REQUIRED_NOTICE: &str = "Please fill required fields";

/// Controller and transport for one form
struct Submitter {
    controller: FormLifecycleController,
    transport: Arc<dyn SubmitTransport>,
    state_rx: watch::Receiver<SubmitState>,
}

impl Submitter {
    fn new(display_delay: Duration, transport: Arc<dyn SubmitTransport>) -> Self {
        let controller = FormLifecycleController::new(display_delay);
        let state_rx = controller.subscribe();
        Self {
            controller,
            transport,
            state_rx,
        }
    }

    /// Latest controller state if it changed since the last call
    fn poll_state(&mut self) -> Option<SubmitState> {
        if self.state_rx.has_changed().unwrap_or(false) {
            Some(*self.state_rx.borrow_and_update())
        } else {
            None
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    amt: Submitter,
    inspection: Submitter,
    outcome_tx: mpsc::UnboundedSender<(View, SubmitOutcome)>,
    outcome_rx: mpsc::UnboundedReceiver<(View, SubmitOutcome)>,
    notice_delay: Duration,
    display_delay: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let amt: Arc<dyn SubmitTransport> = Arc::new(LogTransport::new(config.simulated_latency()));
        let http = HttpJsonTransport::new(config.endpoint(), config.request_timeout())?;
        tracing::info!(endpoint = %http.endpoint(), "inspection transport ready");

        Ok(Self::with_transports(
            amt,
            Arc::new(http),
            config.display_delay(),
            config.notice_delay(),
        ))
    }

    /// Create an App with explicit transports
    pub fn with_transports(
        amt: Arc<dyn SubmitTransport>,
        inspection: Arc<dyn SubmitTransport>,
        display_delay: Duration,
        notice_delay: Duration,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            amt: Submitter::new(display_delay, amt),
            inspection: Submitter::new(display_delay, inspection),
            outcome_tx,
            outcome_rx,
            notice_delay,
            display_delay,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether an animation is running and the loop should redraw quickly
    pub fn is_animating(&self) -> bool {
        self.state.amt.pulse.is_some()
            || self.state.inspection.pulse.is_some()
            || self.state.is_busy(View::Amt)
            || self.state.is_busy(View::Inspection)
    }

    /// Pull submit outcomes and state changes into the UI state
    pub fn tick(&mut self) {
        while let Ok((view, outcome)) = self.outcome_rx.try_recv() {
            self.apply_outcome(view, outcome);
        }

        if let Some(state) = self.amt.poll_state() {
            self.state.amt.submit_state = state;
        }
        if let Some(state) = self.inspection.poll_state() {
            self.state.inspection.submit_state = state;
        }

        let now = Instant::now();
        self.state.amt.expire(now);
        self.state.inspection.expire(now);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if self.state.has_dialog() {
            self.handle_dialog_key(key);
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(1) => self.switch_view(View::Amt),
            KeyCode::F(2) => self.switch_view(View::Inspection),
            KeyCode::Right if ctrl => self.switch_view(self.state.current_view.next()),
            KeyCode::Left if ctrl => self.switch_view(self.state.current_view.prev()),
            KeyCode::Char('s') if ctrl => self.submit_current(),
            KeyCode::Char('l') if ctrl => {
                if self.state.current_view == View::Inspection {
                    self.state.dialog = Some(Dialog::ConfirmClear {
                        confirm_selected: false,
                    });
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.active_form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.active_form_mut().prev_field(),
            KeyCode::Enter => {
                if self.state.active_form_mut().is_button_row_active() {
                    self.submit_current();
                } else {
                    self.state.active_form_mut().next_field();
                }
            }
            KeyCode::Char(c) if !ctrl => self.edit_active_field(|field| field.push_char(c)),
            KeyCode::Backspace => self.edit_active_field(|field| field.pop_char()),
            _ => {}
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match self.state.dialog.as_mut() {
            Some(Dialog::Message { .. }) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.state.dialog = None;
                }
            }
            Some(Dialog::ConfirmClear { confirm_selected }) => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    *confirm_selected = !*confirm_selected;
                }
                KeyCode::Enter => {
                    let confirmed = *confirm_selected;
                    self.state.dialog = None;
                    if confirmed {
                        self.clear_inspection_form();
                    }
                }
                KeyCode::Char('y') => {
                    self.state.dialog = None;
                    self.clear_inspection_form();
                }
                KeyCode::Char('n') | KeyCode::Esc => self.state.dialog = None,
                _ => {}
            },
            None => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        if self.state.current_view != view {
            tracing::debug!(tab = view.label(), "selected tab");
            self.state.current_view = view;
        }
    }

    fn edit_active_field(&mut self, edit: impl FnOnce(&mut Field)) {
        if let Some(field) = self.state.active_form_mut().get_active_field_mut() {
            edit(field);
            mark_on_input(field);
        }
    }

    fn clear_inspection_form(&mut self) {
        self.state.inspection.form.reset(today());
        tracing::debug!("inspection form cleared");
    }

    /// Spawn a submit for the current tab unless one is already running
    pub fn submit_current(&mut self) {
        let view = self.state.current_view;
        if self.state.is_busy(view) {
            tracing::debug!(tab = view.label(), "submit ignored while busy");
            return;
        }

        let (fields, submitter) = match view {
            View::Amt => {
                self.state.amt.pending = true;
                (self.state.amt.form.fields.clone(), &self.amt)
            }
            View::Inspection => {
                self.state.inspection.pending = true;
                (self.state.inspection.form.fields.clone(), &self.inspection)
            }
        };

        let controller = submitter.controller.clone();
        let transport = Arc::clone(&submitter.transport);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.submit(&fields, transport.as_ref()).await;
            let _ = tx.send((view, outcome));
        });
    }

    fn apply_outcome(&mut self, view: View, outcome: SubmitOutcome) {
        match view {
            View::Amt => self.state.amt.pending = false,
            View::Inspection => self.state.inspection.pending = false,
        }

        match outcome {
            SubmitOutcome::ValidationFailed {
                invalid_field_names,
            } => {
                let result = ValidationResult {
                    valid: false,
                    invalid_field_names,
                };
                let notice = Notice::new(REQUIRED_NOTICE, self.notice_delay);
                match view {
                    View::Amt => {
                        apply_marks(&mut self.state.amt.form.fields, &result);
                        self.state.amt.notice = Some(notice);
                    }
                    View::Inspection => {
                        apply_marks(&mut self.state.inspection.form.fields, &result);
                        self.state.inspection.notice = Some(notice);
                    }
                }
            }
            SubmitOutcome::Submitted { snapshot } => {
                tracing::debug!(tab = view.label(), fields = snapshot.len(), "submit accepted");
                match view {
                    View::Amt => {
                        let accepted = ValidationResult {
                            valid: true,
                            ..Default::default()
                        };
                        apply_marks(&mut self.state.amt.form.fields, &accepted);
                        self.state.amt.pulse = Some(SuccessPulse::new(self.display_delay));
                    }
                    View::Inspection => {
                        self.state.inspection.form.reset(today());
                        self.state.inspection.pulse = Some(SuccessPulse::new(self.display_delay));
                        self.state.dialog =
                            Some(Dialog::info("Submitted", "Form submitted successfully!"));
                    }
                }
            }
            SubmitOutcome::TransportFailed { message } => {
                self.state.dialog = Some(Dialog::error(format!("Error: {message}")));
            }
        }
    }

    /// Wait for the next submit outcome and apply it
    #[cfg(test)]
    async fn settle(&mut self) {
        if let Some((view, outcome)) = self.outcome_rx.recv().await {
            self.apply_outcome(view, outcome);
        }
        self.tick();
    }
}
