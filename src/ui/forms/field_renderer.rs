//! Field rendering utilities for forms

use crate::state::{Field, FieldMark};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border color for fields that failed validation
pub const ERROR_COLOR: Color = Color::Rgb(0xd9, 0x30, 0x25);
/// Border color for fields that passed validation
pub const SUCCESS_COLOR: Color = Color::Rgb(0x1e, 0x8e, 0x3e);

/// Color for a field, mark first, then focus
pub fn field_color(field: &Field, is_active: bool) -> Color {
    match field.mark {
        FieldMark::Error => ERROR_COLOR,
        FieldMark::Success => SUCCESS_COLOR,
        FieldMark::Neutral if is_active => Color::Cyan,
        FieldMark::Neutral => Color::DarkGray,
    }
}

/// Form frame color, darkened by the success dim factor
pub fn form_border_color(dim: f32) -> Color {
    let scale = (1.0 - dim).clamp(0.0, 1.0);
    let channel = |c: u8| (c as f32 * scale).round() as u8;
    Color::Rgb(channel(0x00), channel(0xbc), channel(0xd4))
}

/// Draw a boxed form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &Field, is_active: bool) {
    let border_style = Style::default().fg(field_color(field, is_active));

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Single-line `label  value` rendering for dense forms
pub fn field_line(field: &Field, is_active: bool, label_width: usize) -> Line<'_> {
    let marker = if is_active { "▸ " } else { "  " };
    let label_style = Style::default().fg(field_color(field, is_active));
    let label_style = if is_active {
        label_style.add_modifier(Modifier::BOLD)
    } else {
        label_style
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{:<width$} ", field.display_label(), width = label_width),
            label_style,
        ),
        Span::raw(field.display_value()),
    ];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Draw a one-line help text with key/description pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, desc) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {desc}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
