//! Binding core - runtime-definable keys and axes over a host input backend
//!
//! This crate holds everything with real behaviour in the binding layer. It has
//! **no dependency** on a terminal, window system or device API:
//!
//! - **Deterministic**: the only input is the host's held/pressed/released answers
//! - **Testable**: [`KeyState`] is a complete in-memory backend
//! - **Allocation-free per step**: [`BindingRegistry::update_all`] never allocates
//!
//! # Module Structure
//!
//! - [`host`]: the [`HostInput`] backend trait and the [`KeyState`] backend
//! - [`key`]: [`KeyBinding`], a stateless pass-through for one raw code
//! - [`axis`]: [`AxisFilter`], the smoothing/snap state machine
//! - [`registry`]: [`BindingRegistry`], the name-to-binding store
//! - [`error`]: [`UndefinedBindingError`], the only error kind
//!
//! # Example
//!
//! ```
//! use tui_bindings_core::{AxisConfig, BindingRegistry, KeyState};
//! use tui_bindings_types::{InputCode, NamedKey};
//!
//! let left = InputCode::Named(NamedKey::Left);
//! let right = InputCode::Named(NamedKey::Right);
//!
//! let mut registry = BindingRegistry::new();
//! registry.define_axis("Horizontal", AxisConfig::new(left, right).with_ease(0.5));
//!
//! let mut keys = KeyState::new();
//! keys.begin_step();
//! keys.press(right);
//! registry.update_all(&keys);
//!
//! assert_eq!(registry.axis("Horizontal").unwrap().value(), 0.5);
//! assert!(registry.axis("Vertical").is_err());
//! ```
//!
//! # Timing
//!
//! The ease factor is applied once per call to `update_all`. Call it exactly
//! once per fixed step (see [`types::TICK_MS`]); calling it more or less often
//! changes the effective smoothing speed.

pub mod axis;
pub mod error;
pub mod host;
pub mod key;
pub mod registry;

pub use tui_bindings_types as types;

pub use axis::{AxisConfig, AxisDirection, AxisFilter};
pub use error::{BindingResult, UndefinedBindingError};
pub use host::{HostInput, KeyState};
pub use key::KeyBinding;
pub use registry::BindingRegistry;
