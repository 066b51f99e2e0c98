//! Submit lifecycle: validate, lock, send, report, unlock

use super::snapshot::FormSnapshot;
use super::transport::SubmitTransport;
use super::validation::{validate, ValidationResult};
use crate::state::Field;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Message used when a failure reply carries no text of its own
const FALLBACK_FAILURE_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again.";

/// Visible state of one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

impl SubmitState {
    /// Whether the trigger should be locked
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmitState::Idle)
    }
}

/// What a submit call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were blank; nothing was sent
    ValidationFailed { invalid_field_names: BTreeSet<String> },
    Submitted { snapshot: FormSnapshot },
    TransportFailed { message: String },
}

struct Shared {
    state: watch::Sender<SubmitState>,
    /// Bumped when a submit starts and when it settles; a delayed reset only
    /// applies if nothing happened since it was scheduled
    generation: AtomicU64,
}

/// Owns the submit state machine for one form.
///
/// Clones share the same state, so a submit can run on a spawned task while
/// the UI observes transitions through [`FormLifecycleController::subscribe`].
#[derive(Clone)]
pub struct FormLifecycleController {
    shared: Arc<Shared>,
    display_delay: Duration,
}

impl FormLifecycleController {
    pub fn new(display_delay: Duration) -> Self {
        let (state, _) = watch::channel(SubmitState::Idle);
        Self {
            shared: Arc::new(Shared {
                state,
                generation: AtomicU64::new(0),
            }),
            display_delay,
        }
    }

    pub fn state(&self) -> SubmitState {
        *self.shared.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmitState> {
        self.shared.state.subscribe()
    }

    pub fn validate(&self, fields: &[Field]) -> ValidationResult {
        validate(fields)
    }

    pub fn build_snapshot(&self, fields: &[Field]) -> FormSnapshot {
        FormSnapshot::from_fields(fields)
    }

    /// Run one submit lifecycle.
    ///
    /// Returns as soon as the transport answers. The Success/Error state is
    /// held for the display delay by a spawned timer, then reset to Idle.
    pub async fn submit(&self, fields: &[Field], transport: &dyn SubmitTransport) -> SubmitOutcome {
        // Pending resets must not clobber this lifecycle's Validating/Submitting
        self.next_generation();
        self.set_state(SubmitState::Validating);

        let result = self.validate(fields);
        if !result.valid {
            tracing::debug!(invalid = ?result.invalid_field_names, "validation failed");
            self.set_state(SubmitState::Idle);
            return SubmitOutcome::ValidationFailed {
                invalid_field_names: result.invalid_field_names,
            };
        }

        self.set_state(SubmitState::Submitting);
        let snapshot = self.build_snapshot(fields);

        let outcome = match transport.send(&snapshot).await {
            Ok(response) if response.is_success() => {
                tracing::info!(fields = snapshot.len(), "form submitted");
                SubmitOutcome::Submitted { snapshot }
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());
                tracing::warn!(status = %response.status, %message, "submission rejected");
                SubmitOutcome::TransportFailed { message }
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                SubmitOutcome::TransportFailed {
                    message: err.to_string(),
                }
            }
        };

        let settled = match outcome {
            SubmitOutcome::Submitted { .. } => SubmitState::Success,
            _ => SubmitState::Error,
        };
        // Whoever settles last owns the reset
        let generation = self.next_generation();
        self.set_state(settled);
        self.schedule_reset(generation);

        outcome
    }

    fn next_generation(&self) -> u64 {
        self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn set_state(&self, state: SubmitState) {
        self.shared.state.send_replace(state);
    }

    fn schedule_reset(&self, generation: u64) {
        let shared = Arc::clone(&self.shared);
        let delay = self.display_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if shared.generation.load(Ordering::SeqCst) == generation {
                shared.state.send_replace(SubmitState::Idle);
            }
        });
    }
}
