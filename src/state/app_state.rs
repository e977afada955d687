//! Application state definitions

use super::field::FieldId;
use super::form_data::FormModel;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    /// The Finalizar / Sair button panel
    Actions,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::FullName)
    }
}

/// Action panel buttons (0=Finalizar, 1=Sair)
pub const BUTTON_SUBMIT: usize = 0;
pub const BUTTON_QUIT: usize = 1;
pub const BUTTON_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Blocking message shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormModel,
    pub focus: Focus,
    pub selected_button: usize,
    pub alert: Option<Alert>,
}

impl AppState {
    /// Focus stops in tab order: visible fields, then the action panel
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self
            .form
            .data
            .visible_fields()
            .into_iter()
            .map(Focus::Field)
            .collect();
        order.push(Focus::Actions);
        order
    }

    fn focus_index(&self, order: &[Focus]) -> Option<usize> {
        order.iter().position(|f| *f == self.focus)
    }

    /// Move focus forward (wraps around)
    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        self.focus = match self.focus_index(&order) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        };
    }

    /// Move focus backward (wraps around)
    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        self.focus = match self.focus_index(&order) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        };
    }

    /// Field receiving input, if any. A field hidden by the minor toggle
    /// never counts as active.
    pub fn active_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(field) if self.form.data.visible_fields().contains(&field) => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Move the selected button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn show_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alert = Some(Alert {
            kind,
            message: message.into(),
        });
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
