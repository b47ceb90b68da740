//! Result panel rendering
//!
//! The operation result is a single tagged value, so exactly one of the
//! loading, success and error blocks is ever shown.

use crate::app::App;
use crate::platform::COPY_LINK_SHORTCUT;
use crate::service::artifact_url;
use crate::state::OperationResult;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the result panel for the current operation state
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (title, border_color, lines) = match &app.state.operation {
        OperationResult::Idle => (
            " Result ".to_string(),
            Color::DarkGray,
            vec![Line::from(Span::styled(
                "Describe a shape, then run Generate Model.",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        OperationResult::Loading => (
            " Result ".to_string(),
            Color::Yellow,
            vec![Line::from(Span::styled(
                "Processing your request...",
                Style::default().fg(Color::Yellow),
            ))],
        ),
        OperationResult::Success { kind, file_ref } => {
            let url = artifact_url(app.server_url(), file_ref);
            (
                format!(" {} ", kind.result_title()),
                Color::Green,
                vec![
                    Line::from(Span::styled(
                        url,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    )),
                    Line::from(Span::styled(
                        format!("{COPY_LINK_SHORTCUT}: copy download link"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ],
            )
        }
        OperationResult::DomainError { message } | OperationResult::TransportError { message } => (
            " Error ".to_string(),
            Color::Red,
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))],
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
