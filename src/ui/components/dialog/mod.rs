//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod message_dialog;

pub use confirm_dialog::render_confirm_clear_dialog;
pub use message_dialog::render_message_dialog;
