//! Result message dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render a submit result overlay; errors are drawn in red
pub fn render_message_dialog(frame: &mut Frame, title: &str, message: &str, is_error: bool) {
    let accent = if is_error { Color::Red } else { Color::Green };

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message,
            body: Vec::new(),
            hint: Some(key_hint(&[("Enter/Esc", "dismiss")])),
            max_width: 60,
        },
    );
}
