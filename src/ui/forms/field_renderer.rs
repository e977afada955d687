//! Field rendering utilities for forms

use crate::state::FieldId;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Labels are padded to this many characters so values line up
const LABEL_WIDTH: usize = 22;

const CURSOR: &str = "▌";

fn label_span(label: &str, is_active: bool) -> Span<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("  {label:<LABEL_WIDTH$} "), style)
}

/// Text shown for a value: bullets for passwords
fn display_value(field: FieldId, value: &str) -> String {
    if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Render one editable field as a single line
pub fn field_line(field: FieldId, value: &str, is_active: bool) -> Line<'static> {
    let label = if field.is_required() {
        format!("{}:", field.label())
    } else {
        format!("{} (opcional):", field.label())
    };

    let mut spans = vec![label_span(&label, is_active)];

    if value.is_empty() {
        if let Some(placeholder) = field.placeholder() {
            spans.push(Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            if is_active {
                // Cursor goes before the placeholder hint
                spans.insert(1, Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
            return Line::from(spans);
        }
    }

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(display_value(field, value), value_style));
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Render a read-only yes/no flag
pub fn flag_line(label: &str, value: bool) -> Line<'static> {
    let (mark, text, color) = if value {
        ("[x]", "Sim", Color::Yellow)
    } else {
        ("[ ]", "Não", Color::DarkGray)
    };
    Line::from(vec![
        label_span(label, false),
        Span::styled(format!("{mark} {text}"), Style::default().fg(color)),
    ])
}

/// Render a message under a field (loading indicator or error)
pub fn message_line(message: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 3)),
        Span::styled(message.to_string(), Style::default().fg(color)),
    ])
}
