//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_tab_button, BUTTON_HEIGHT};
pub use dialog::{render_confirm_clear_dialog, render_message_dialog};
