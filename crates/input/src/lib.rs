//! Terminal input module (host backend).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::InputCode`]s and provides [`TerminalKeys`], a
//! [`HostInput`](crate::core::HostInput) backend suitable for terminal
//! environments (including terminals without key-release events).

pub mod config;
pub mod handler;
pub mod map;

pub use tui_bindings_core as core;
pub use tui_bindings_types as types;

pub use config::TerminalConfig;
pub use handler::TerminalKeys;
pub use map::{input_code, should_quit};
