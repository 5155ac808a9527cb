//! TUI Bindings (workspace facade crate).
//!
//! Exposes `tui_bindings::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_bindings_core as core;
pub use tui_bindings_engine as engine;
pub use tui_bindings_input as input;
pub use tui_bindings_term as term;
pub use tui_bindings_types as types;
