//! Input engine - the facade applications talk to.
//!
//! Composes a host backend with the binding registry behind one explicitly
//! owned value, [`InputSystem`]. A typical fixed-step loop:
//!
//! ```
//! use tui_bindings_engine::InputSystem;
//! use tui_bindings_engine::core::{AxisConfig, KeyState};
//! use tui_bindings_engine::types::{InputCode, NamedKey};
//!
//! let mut input = InputSystem::new(KeyState::new());
//! input.define_key("Jump", InputCode::Named(NamedKey::Space));
//! input.define_axis(
//!     "Horizontal",
//!     AxisConfig::new(InputCode::Char('a'), InputCode::Char('d')).with_ease(0.5),
//! );
//!
//! // One step: feed device events, then update.
//! input.host_mut().begin_step();
//! input.host_mut().press(InputCode::Char('d'));
//! input.update();
//!
//! assert_eq!(input.axis("Horizontal").unwrap(), 0.5);
//! assert!(!input.is_down("Jump").unwrap());
//! assert!(input.is_down("Crouch").is_err());
//! ```

pub mod snapshot;
pub mod system;

pub use tui_bindings_core as core;
pub use tui_bindings_types as types;

pub use snapshot::{AxisSnapshot, KeySnapshot};
pub use system::InputSystem;
