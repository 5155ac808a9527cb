//! Terminal presentation for the binding layer.
//!
//! Small and text-based: [`BindingsView`] turns an input system into lines,
//! [`TerminalRenderer`] puts those lines on screen.
//!
//! Goals:
//! - Keep the view pure so it can be unit-tested
//! - Only rewrite lines that changed between frames

pub mod renderer;
pub mod view;

pub use tui_bindings_engine as engine;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{render_axis_bar, BindingsView, DEFAULT_BAR_WIDTH};
