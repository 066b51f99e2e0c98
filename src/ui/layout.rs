//! Layout components (tab header, status bar)

use super::components::{render_tab_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tab header width per tab
const TAB_WIDTH: u16 = 24;

/// Split the screen into (tabs, content, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Tabs
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab header with boxed buttons
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = View::ALL
        .iter()
        .map(|_| Constraint::Length(TAB_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        let key = format!("F{}", idx + 1);
        render_tab_button(
            frame,
            chunks[idx],
            &key,
            view.label(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let busy = app.state.is_busy(app.state.current_view);
    let indicator = if busy {
        Span::styled(" ◐ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };

    let spans = vec![
        indicator,
        Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(Color::Gray),
        ),
    ];
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Amt => "F1/F2:tab  Tab/S-Tab:field  ^S:submit",
        View::Inspection => "F1/F2:tab  Tab/S-Tab:field  ^S:submit  ^L:clear",
    }
}
