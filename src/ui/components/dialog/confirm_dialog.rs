//! Confirmation dialog for clearing form data

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the "clear all form data?" confirmation
pub fn render_confirm_clear_dialog(frame: &mut Frame, confirm_selected: bool) {
    let options = [("Cancel", false, Color::White), ("Clear", true, Color::Red)];

    let mut body = vec![Line::from("")];
    body.extend(options.iter().map(|&(label, is_confirm, color)| {
        let is_selected = confirm_selected == is_confirm;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(format!("{prefix}{label}"), style))
    }));

    render_dialog(
        frame,
        DialogConfig {
            title: "Clear Form",
            accent: Color::Yellow,
            message: "Are you sure you want to clear all form data?",
            body,
            hint: Some(key_hint(&[
                ("←→", "select"),
                ("Enter", "confirm"),
                ("y/n", "answer"),
                ("Esc", "cancel"),
            ])),
            max_width: 56,
        },
    );
}
