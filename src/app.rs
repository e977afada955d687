//! Application state and core logic

use crate::cep::{resolve, CepLookup};
use crate::state::{
    reduce, AlertKind, AppState, Command, FieldId, Focus, FormEvent, BUTTON_QUIT, BUTTON_SUBMIT,
};
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub const SUCCESS_MESSAGE: &str = "Formulário enviado com sucesso!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// CEP service used for address auto-fill
    lookup: Arc<dyn CepLookup>,
    /// Lookup tasks report back through this channel
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(lookup: Arc<dyn CepLookup>) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            state: AppState::default(),
            lookup,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Run one event through the form reducer and carry out its command
    pub fn dispatch(&mut self, event: FormEvent) {
        let model = std::mem::take(&mut self.state.form);
        let (model, command) = reduce(model, event, Local::now().year());
        self.state.form = model;

        if let Some(command) = command {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::LookupCep { token, cep } => self.spawn_lookup(token, cep),
            Command::Reject(err) => {
                tracing::info!(error = %err, "submission rejected");
                self.state.show_alert(AlertKind::Error, err.to_string());
            }
            Command::Accept(data) => {
                match serde_json::to_string(&data) {
                    Ok(record) => tracing::info!(%record, "Dados do Formulário"),
                    Err(e) => tracing::warn!(error = %e, ?data, "failed to serialize form"),
                }
                self.state.show_alert(AlertKind::Success, SUCCESS_MESSAGE);
            }
        }
    }

    /// Run the lookup in the background; the result comes back as a
    /// `CepLookupFinished` event carrying the same token
    fn spawn_lookup(&self, token: u64, cep: String) {
        let lookup = Arc::clone(&self.lookup);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = resolve(lookup.as_ref(), &cep).await;
            tracing::debug!(token, ?outcome, "CEP lookup finished");
            // Receiver only goes away when the app shuts down
            let _ = tx.send(FormEvent::CepLookupFinished { token, outcome });
        });
    }

    /// Apply every lookup result that has arrived since the last call
    pub fn poll_lookups(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
        }
    }

    /// Move focus and report a blur when it leaves a field
    fn move_focus(&mut self, forward: bool) {
        let previous = self.state.active_field();
        if forward {
            self.state.next_focus();
        } else {
            self.state.prev_focus();
        }
        if let Some(field) = previous {
            if self.state.focus != Focus::Field(field) {
                self.dispatch(FormEvent::FieldBlurred(field));
            }
        }
    }

    /// Submit the form. Focus moves to the submit button first, so the field
    /// being edited gets its blur (a CEP typed right before submitting is
    /// still looked up).
    pub fn submit(&mut self) {
        if let Some(field) = self.state.active_field() {
            self.state.focus = Focus::Actions;
            self.state.selected_button = BUTTON_SUBMIT;
            self.dispatch(FormEvent::FieldBlurred(field));
        }
        self.dispatch(FormEvent::Submit);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Alerts are modal
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        let on_action_panel = self.state.focus == Focus::Actions;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Esc => self.request_quit(),
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            // Up/Down pick a button on the action panel
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => self.state.next_button(),
            KeyCode::Enter if on_action_panel => match self.state.selected_button {
                BUTTON_SUBMIT => self.submit(),
                BUTTON_QUIT => self.request_quit(),
                _ => {}
            },
            KeyCode::Up => self.move_focus(false),
            KeyCode::Down | KeyCode::Enter => self.move_focus(true),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.active_field() {
                    let value = field.with_char(self.state.form.data.value(field), c);
                    self.dispatch(FormEvent::FieldChanged { field, value });
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.active_field() {
                    let value = field.without_last(self.state.form.data.value(field));
                    self.dispatch(FormEvent::FieldChanged { field, value });
                }
            }
            _ => {}
        }
    }

    /// Whether the field under focus is the CEP field (used for hints)
    pub fn is_editing_cep(&self) -> bool {
        self.state.active_field() == Some(FieldId::ZipCode)
    }
}
