//! Enrollment form rendering

use super::field_renderer::{field_line, flag_line, message_line};
use crate::app::App;
use crate::state::{visible_sections, AppState, FieldId, Focus, Section, BUTTON_QUIT, BUTTON_SUBMIT};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MINOR_FLAG_LABEL: &str = "Menor de 18 anos?";
const LOADING_MESSAGE: &str = "Carregando...";

/// Draw the enrollment form with action sidebar
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.state);
    draw_action_panel(frame, main_chunks[1], &app.state);
}

/// Build every form line and return the index of the active field's line
fn form_lines(state: &AppState) -> (Vec<Line<'static>>, usize) {
    let data = &state.form.data;
    let active = state.active_field();
    let mut lines = Vec::new();
    let mut active_line = 0;

    for section in visible_sections(data.is_minor) {
        lines.push(Line::from(Span::styled(
            section.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));

        for &field in section.fields() {
            if active == Some(field) {
                active_line = lines.len();
            }
            lines.push(field_line(field, data.value(field), active == Some(field)));

            if field == FieldId::ZipCode {
                if state.form.cep.loading {
                    lines.push(message_line(LOADING_MESSAGE, Color::Yellow));
                }
                if let Some(error) = &state.form.cep.error {
                    lines.push(message_line(error, Color::Red));
                }
            }
        }

        if section == Section::Personal {
            lines.push(flag_line(MINOR_FLAG_LABEL, data.is_minor));
        }
        lines.push(Line::from(""));
    }

    (lines, active_line)
}

/// Rows to scroll so the active line stays visible with a little context
fn scroll_offset(active_line: usize, visible_height: usize) -> u16 {
    let wanted = active_line + 3;
    wanted.saturating_sub(visible_height) as u16
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form_focused = state.focus != Focus::Actions;
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Cadastro ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (lines, active_line) = form_lines(state);
    let scroll = scroll_offset(active_line, inner.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.focus == Focus::Actions;
    let selected_button = state.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Ações ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Finalizar (primary)
            Constraint::Length(BUTTON_HEIGHT), // Sair
            Constraint::Min(0),                // Help text
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Finalizar",
        is_focused && selected_button == BUTTON_SUBMIT,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Sair",
        is_focused && selected_button == BUTTON_QUIT,
        Some(Color::Gray),
    );

    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "↑↓ escolher",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Enter confirmar",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(help, button_chunks[2]);
}
