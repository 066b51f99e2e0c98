//! AMT parameter panel rendering
//!
//! The three sections sit side by side, one line per field, with the submit
//! button underneath.

use super::field_renderer::{draw_help_text, field_line, form_border_color};
use crate::app::App;
use crate::state::{Form, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the AMT parameter form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.state.amt;
    let form = &panel.form;
    let dim = panel.pulse.as_ref().map(|p| p.dim()).unwrap_or(0.0);

    let block = Block::default()
        .title(" Advanced Measurement Tool ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(form_border_color(dim)));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Sections
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let groups = form.sections_with_fields();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, groups.len().max(1) as u32); groups.len()])
        .split(chunks[0]);

    let label_width = form
        .fields
        .iter()
        .map(|f| f.display_label().chars().count())
        .max()
        .unwrap_or(0)
        .min(28);

    let mut offset = 0;
    for ((section, fields), column) in groups.iter().zip(columns.iter()) {
        let lines: Vec<Line> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                field_line(field, form.active_field_index == offset + i, label_width)
            })
            .collect();
        offset += fields.len();

        let has_focus = (offset - fields.len()..offset).contains(&form.active_field_index);
        let border = if has_focus { Color::Cyan } else { Color::DarkGray };
        let section_block = Block::default()
            .title(format!(" {} ", section.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        frame.render_widget(Paragraph::new(lines).block(section_block), *column);
    }

    let button_area = Rect {
        width: chunks[1].width.min(36),
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        &panel.button_label(View::Amt.idle_button_label()),
        form.is_button_row_active(),
        !panel.is_busy(),
    );

    draw_help_text(
        frame,
        chunks[2],
        &[("Tab", "next field"), ("Enter", "next/submit"), ("Ctrl+S", "submit")],
    );
}
