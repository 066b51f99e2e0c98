//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::{Dialog, View};
use components::{render_confirm_clear_dialog, render_message_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    match app.state.current_view {
        View::Amt => forms::amt_form::draw(frame, main_area, app),
        View::Inspection => forms::inspection_form::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Dialogs overlay everything else
    match &app.state.dialog {
        Some(Dialog::Message {
            title,
            message,
            is_error,
        }) => render_message_dialog(frame, title, message, *is_error),
        Some(Dialog::ConfirmClear { confirm_selected }) => {
            render_confirm_clear_dialog(frame, *confirm_selected)
        }
        None => {}
    }
}
