//! Key mapping from terminal events to raw input codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{InputCode, NamedKey, MAX_FUNCTION_KEY};

/// Map a terminal key event to the code the binding layer understands.
///
/// Letters are folded to lowercase so `A` and `a` are the same physical key.
pub fn input_code(key: &KeyEvent) -> Option<InputCode> {
    match key.code {
        KeyCode::Char(c) => Some(InputCode::from_char(c)),

        // Navigation
        KeyCode::Left => Some(NamedKey::Left.into()),
        KeyCode::Right => Some(NamedKey::Right.into()),
        KeyCode::Up => Some(NamedKey::Up.into()),
        KeyCode::Down => Some(NamedKey::Down.into()),
        KeyCode::Home => Some(NamedKey::Home.into()),
        KeyCode::End => Some(NamedKey::End.into()),
        KeyCode::PageUp => Some(NamedKey::PageUp.into()),
        KeyCode::PageDown => Some(NamedKey::PageDown.into()),

        // Editing
        KeyCode::Enter => Some(NamedKey::Enter.into()),
        KeyCode::Esc => Some(NamedKey::Escape.into()),
        KeyCode::Tab | KeyCode::BackTab => Some(NamedKey::Tab.into()),
        KeyCode::Backspace => Some(NamedKey::Backspace.into()),
        KeyCode::Insert => Some(NamedKey::Insert.into()),
        KeyCode::Delete => Some(NamedKey::Delete.into()),

        KeyCode::F(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Some(InputCode::Function(n)),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
