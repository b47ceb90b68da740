//! Layout components (content split, status bar)

use crate::app::App;
use crate::platform::{GENERATE_SHORTCUT, MODIFY_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and the bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.service_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // Keyboard hints
    let hints = format!(
        "Tab:next  {GENERATE_SHORTCUT}:generate  {MODIFY_SHORTCUT}:modify  Esc:clear/quit"
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Copy feedback message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Service address
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.server_url().to_string(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
