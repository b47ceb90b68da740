//! Field rendering utilities for the model form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Complexity fields cycle with the arrow keys instead of a text cursor
    if let FieldValue::Complexity(level) = &field.value {
        let display = if is_active {
            format!("◂ {} ▸", level.label())
        } else {
            level.label().to_string()
        };
        let block = Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(display, style))).block(block), area);
        return;
    }

    let display_value = field.display_value();
    let (display_str, text_style) = if display_value.is_empty() && !field.placeholder.is_empty() {
        (field.placeholder.clone(), Style::default().fg(Color::DarkGray))
    } else {
        (display_value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
