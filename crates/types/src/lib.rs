//! Core types module - raw input codes, binding namespaces and constants
//!
//! This module defines the fundamental types shared by every other crate.
//! All types are plain data with no external dependencies, so they can be used
//! by the binding core, the terminal backend and the presentation layer alike.
//!
//! # Raw Input Codes
//!
//! An [`InputCode`] is the opaque identifier the host backend understands. The
//! binding layer never interprets it beyond equality and hashing.
//!
//! - **Char**: a printable key, ASCII letters stored lowercase
//! - **Named**: a non-printable key (arrows, enter, escape, ...)
//! - **Function**: F1..F24
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Axis Defaults
//!
//! - `DEFAULT_EASE`: 1.0 - no smoothing, the axis snaps to its target every step
//! - `DEFAULT_SNAP`: false - reversing direction glides through zero
//!
//! # Examples
//!
//! ```
//! use tui_bindings_types::{BindingKind, InputCode, NamedKey};
//!
//! let code = InputCode::from_name("Left").unwrap();
//! assert_eq!(code, InputCode::Named(NamedKey::Left));
//! assert_eq!(code.name(), "left");
//!
//! assert_eq!(InputCode::from_name("F5"), Some(InputCode::Function(5)));
//! assert_eq!(InputCode::from_name("W"), Some(InputCode::Char('w')));
//!
//! assert_eq!(BindingKind::Axis.as_str(), "axis");
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default per-step ease factor (1.0 = instantaneous).
pub const DEFAULT_EASE: f32 = 1.0;

/// Default snap policy for newly defined axes.
pub const DEFAULT_SNAP: bool = false;

/// Held keys are released after this long without a press/repeat event
/// when the terminal does not report key releases.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Maximum number of simultaneously held codes tracked by a backend.
pub const MAX_HELD_CODES: usize = 32;

/// Highest function key number accepted by [`InputCode::Function`].
pub const MAX_FUNCTION_KEY: u8 = 24;

/// Non-printable keys understood by the backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Tab,
    Backspace,
    Space,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
}

impl NamedKey {
    pub const ALL: [NamedKey; 15] = [
        NamedKey::Left,
        NamedKey::Right,
        NamedKey::Up,
        NamedKey::Down,
        NamedKey::Enter,
        NamedKey::Escape,
        NamedKey::Tab,
        NamedKey::Backspace,
        NamedKey::Space,
        NamedKey::Home,
        NamedKey::End,
        NamedKey::PageUp,
        NamedKey::PageDown,
        NamedKey::Insert,
        NamedKey::Delete,
    ];

    /// Parse a named key (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bindings_types::NamedKey;
    ///
    /// assert_eq!(NamedKey::from_name("ESC"), Some(NamedKey::Escape));
    /// assert_eq!(NamedKey::from_name("pageup"), Some(NamedKey::PageUp));
    /// assert_eq!(NamedKey::from_name("nope"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(NamedKey::Left),
            "right" => Some(NamedKey::Right),
            "up" => Some(NamedKey::Up),
            "down" => Some(NamedKey::Down),
            "enter" | "return" => Some(NamedKey::Enter),
            "escape" | "esc" => Some(NamedKey::Escape),
            "tab" => Some(NamedKey::Tab),
            "backspace" => Some(NamedKey::Backspace),
            "space" => Some(NamedKey::Space),
            "home" => Some(NamedKey::Home),
            "end" => Some(NamedKey::End),
            "pageup" => Some(NamedKey::PageUp),
            "pagedown" => Some(NamedKey::PageDown),
            "insert" => Some(NamedKey::Insert),
            "delete" | "del" => Some(NamedKey::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::Enter => "enter",
            NamedKey::Escape => "escape",
            NamedKey::Tab => "tab",
            NamedKey::Backspace => "backspace",
            NamedKey::Space => "space",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "pageup",
            NamedKey::PageDown => "pagedown",
            NamedKey::Insert => "insert",
            NamedKey::Delete => "delete",
        }
    }
}

/// Opaque identifier for a physical input, understood only by the host backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCode {
    /// Printable key. ASCII letters are stored lowercase.
    Char(char),
    /// Non-printable key.
    Named(NamedKey),
    /// Function key F1..F24.
    Function(u8),
}

impl InputCode {
    /// Build a character code, folding ASCII letters to lowercase.
    ///
    /// A space character maps to [`NamedKey::Space`] so that both spellings
    /// name the same physical key.
    pub fn from_char(c: char) -> Self {
        if c == ' ' {
            InputCode::Named(NamedKey::Space)
        } else {
            InputCode::Char(c.to_ascii_lowercase())
        }
    }

    /// Parse a code from its name (case-insensitive).
    ///
    /// Accepts named keys (`"left"`, `"space"`), function keys (`"f1"`..`"f24"`)
    /// and single characters (`"a"`, `"/"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bindings_types::{InputCode, NamedKey};
    ///
    /// assert_eq!(InputCode::from_name("space"), Some(InputCode::Named(NamedKey::Space)));
    /// assert_eq!(InputCode::from_name("f12"), Some(InputCode::Function(12)));
    /// assert_eq!(InputCode::from_name("f25"), None);
    /// assert_eq!(InputCode::from_name(""), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        if let Some(named) = NamedKey::from_name(s) {
            return Some(InputCode::Named(named));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(InputCode::from_char(c)),
            (Some('f') | Some('F'), Some(_)) => {
                let n: u8 = s[1..].parse().ok()?;
                if (1..=MAX_FUNCTION_KEY).contains(&n) {
                    Some(InputCode::Function(n))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Canonical lowercase name, accepted back by [`InputCode::from_name`].
    pub fn name(&self) -> String {
        match self {
            InputCode::Char(c) => c.to_string(),
            InputCode::Named(named) => named.as_str().to_string(),
            InputCode::Function(n) => format!("f{}", n),
        }
    }
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputCode::Char(c) => write!(f, "{}", c),
            InputCode::Named(named) => f.write_str(named.as_str()),
            InputCode::Function(n) => write!(f, "f{}", n),
        }
    }
}

impl From<NamedKey> for InputCode {
    fn from(key: NamedKey) -> Self {
        InputCode::Named(key)
    }
}

/// The two independent binding namespaces.
///
/// A name may be bound in both at once without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Key,
    Axis,
}

impl BindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Key => "key",
            BindingKind::Axis => "axis",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_and_axis_constants() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DEFAULT_EASE, 1.0);
        assert!(!DEFAULT_SNAP);
        assert_eq!(DEFAULT_KEY_RELEASE_TIMEOUT_MS, 150);
        assert!(MAX_HELD_CODES >= 8);
    }

    #[test]
    fn named_keys_round_trip_through_names() {
        for key in NamedKey::ALL {
            let code = InputCode::Named(key);
            assert_eq!(InputCode::from_name(&code.name()), Some(code));
        }
    }

    #[test]
    fn function_keys_parse_in_range_only() {
        assert_eq!(InputCode::from_name("f1"), Some(InputCode::Function(1)));
        assert_eq!(InputCode::from_name("F24"), Some(InputCode::Function(24)));
        assert_eq!(InputCode::from_name("f0"), None);
        assert_eq!(InputCode::from_name("fx"), None);
        assert_eq!(InputCode::Function(7).to_string(), "f7");
    }

    #[test]
    fn chars_fold_to_lowercase_and_space_is_named() {
        assert_eq!(InputCode::from_char('A'), InputCode::Char('a'));
        assert_eq!(InputCode::from_char('/'), InputCode::Char('/'));
        assert_eq!(InputCode::from_char(' '), InputCode::Named(NamedKey::Space));
        assert_eq!(InputCode::from_name("f"), Some(InputCode::Char('f')));
    }

    #[test]
    fn multi_char_non_key_names_are_rejected() {
        assert_eq!(InputCode::from_name("jump"), None);
        assert_eq!(InputCode::from_name("ab"), None);
    }

    #[test]
    fn binding_kind_display() {
        assert_eq!(BindingKind::Key.to_string(), "key");
        assert_eq!(BindingKind::Axis.to_string(), "axis");
    }
}
