//! Blocking alert dialog for submission results

use super::base::{render_dialog, DialogConfig};
use crate::state::{Alert, AlertKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let (title, color) = match alert.kind {
        AlertKind::Error => ("Atenção", Color::Red),
        AlertKind::Success => ("Sucesso", Color::Green),
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled("Enter", key_style),
        Span::raw(" ou "),
        Span::styled("Esc", key_style),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            color,
            message: &alert.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_alert_renders_message() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let alert = Alert {
            kind: AlertKind::Error,
            message: "CPF inválido!".to_string(),
        };

        terminal
            .draw(|frame| render_alert_dialog(frame, &alert))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.contains("Atenção"));
        assert!(rendered.contains("CPF inválido!"));
    }
}
