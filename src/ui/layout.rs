//! Screen layout: header, form area and status bar

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "FORMULÁRIO ACADÊMICO ADS";

/// Split the screen into (header, main, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Draw key hints, plus a CEP hint while the CEP field is being edited
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": próximo campo  "),
        Span::styled("Shift+Tab", key_style),
        Span::raw(": anterior  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": finalizar  "),
        Span::styled("Esc", key_style),
        Span::raw(": sair"),
    ];

    if app.is_editing_cep() {
        spans.push(Span::styled(
            "  | saia do campo para buscar o endereço",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
