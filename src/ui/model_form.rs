//! Model form rendering (fields and action panel)

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::Form;
use crate::state::RequestKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form fields
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Size
            Constraint::Length(3), // Complexity
            Constraint::Length(3), // Modification
        ])
        .margin(1)
        .split(area);

    let form = &app.state.form;

    // Form is focused when not on the action panel
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" CADscribe: Conversational 3D CAD Modeling ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (idx, chunk) in chunks.iter().enumerate() {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, *chunk, field, form.active_field_index == idx);
        }
    }
}

/// Draw the action panel sidebar
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();
    let selected_button = form.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Layout for buttons vertically
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Generate (primary)
            Constraint::Length(BUTTON_HEIGHT), // Modify
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        RequestKind::Generate.label(),
        is_focused && selected_button == 0,
        Color::Green,
    );

    render_action_button(
        frame,
        button_chunks[1],
        RequestKind::Modify.label(),
        is_focused && selected_button == 1,
        Color::Blue,
    );
}
