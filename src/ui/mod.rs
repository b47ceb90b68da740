//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;
mod model_form;
mod result_panel;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14), // Form and action panel
            Constraint::Min(5),     // Result panel
        ])
        .split(content_area);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(chunks[0]);

    model_form::draw_form(frame, row[0], app);
    model_form::draw_action_panel(frame, row[1], app);
    result_panel::draw(frame, chunks[1], app);

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
