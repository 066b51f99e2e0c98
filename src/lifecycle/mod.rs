//! Form lifecycle core
//!
//! Validation, snapshots and the submit state machine, independent of how
//! fields are rendered or how snapshots are transported.

mod controller;
mod http;
mod snapshot;
mod transport;
mod validation;

pub use controller::{FormLifecycleController, SubmitOutcome, SubmitState};
pub use http::{HttpJsonTransport, DEFAULT_ENDPOINT};
pub use transport::{LogTransport, SubmitTransport};
pub use validation::{apply_marks, mark_on_blur, mark_on_input, ValidationResult};

#[cfg(test)]
pub use transport::{MockSubmitTransport, TransportError, TransportResponse};
