//! Keyboard shortcut configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut. Control on every platform: most macOS
/// terminals never forward Cmd to the application.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
