//! Terminal loop configuration from environment variables.
//!
//! Every variable is optional; missing or unparsable values fall back to the
//! defaults in [`crate::types`].
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TUI_BINDINGS_TICK_MS` | `TICK_MS` |
//! | `TUI_BINDINGS_RELEASE_TIMEOUT_MS` | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` |
//! | `TUI_BINDINGS_ENHANCED_KEYBOARD` | off |
//! | `TUI_BINDINGS_EASE` | `DEFAULT_EASE` |
//! | `TUI_BINDINGS_SNAP` | `DEFAULT_SNAP` |

use crate::handler::TerminalKeys;
use crate::types::{DEFAULT_EASE, DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_SNAP, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    pub tick_ms: u32,
    pub key_release_timeout_ms: u32,
    /// Request key release events from the terminal and disable the timeout.
    pub enhanced_keyboard: bool,
    pub ease: f32,
    pub snap: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            enhanced_keyboard: false,
            ease: DEFAULT_EASE,
            snap: DEFAULT_SNAP,
        }
    }
}

impl TerminalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tick_ms = lookup("TUI_BINDINGS_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms: &u32| *ms > 0)
            .unwrap_or(defaults.tick_ms);

        let key_release_timeout_ms = lookup("TUI_BINDINGS_RELEASE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let enhanced_keyboard = lookup("TUI_BINDINGS_ENHANCED_KEYBOARD")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.enhanced_keyboard);

        let ease = lookup("TUI_BINDINGS_EASE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.ease);

        let snap = lookup("TUI_BINDINGS_SNAP")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.snap);

        Self {
            tick_ms,
            key_release_timeout_ms,
            enhanced_keyboard,
            ease,
            snap,
        }
    }

    /// Terminal backend configured for this loop.
    pub fn terminal_keys(&self) -> TerminalKeys {
        if self.enhanced_keyboard {
            TerminalKeys::new().without_release_timeout()
        } else {
            TerminalKeys::new().with_key_release_timeout_ms(self.key_release_timeout_ms)
        }
    }
}

fn parse_flag(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
}
