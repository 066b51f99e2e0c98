//! Inspection report form rendering

use super::field_renderer::{draw_field, draw_help_text, form_border_color};
use crate::app::App;
use crate::state::{Form, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the inspection form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.state.inspection;
    let form = &panel.form;
    let dim = panel.pulse.as_ref().map(|p| p.dim()).unwrap_or(0.0);

    let block = Block::default()
        .title(" Mechanical Inspection Report ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(form_border_color(dim)));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[index], field, form.active_field_index == index);
    }

    let button_row = form.fields.len();
    let button_area = Rect {
        width: chunks[button_row].width.min(32),
        ..chunks[button_row]
    };
    render_button(
        frame,
        button_area,
        &panel.button_label(View::Inspection.idle_button_label()),
        form.is_button_row_active(),
        !panel.is_busy(),
    );

    draw_help_text(
        frame,
        chunks[button_row + 2],
        &[
            ("Tab", "next field"),
            ("Ctrl+S", "submit"),
            ("Ctrl+L", "clear"),
        ],
    );
}
