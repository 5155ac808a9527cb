//! The application-facing input system.
//!
//! [`InputSystem`] owns a host backend and a [`BindingRegistry`] and is passed
//! explicitly to whatever needs input. It replaces process-wide input state:
//! construction is initialization, [`InputSystem::teardown`] consumes it.

use log::info;

use crate::core::{AxisConfig, AxisFilter, BindingRegistry, BindingResult, HostInput, KeyBinding};
use crate::snapshot::{AxisSnapshot, KeySnapshot};
use crate::types::InputCode;

pub struct InputSystem<H: HostInput> {
    host: H,
    registry: BindingRegistry,
    step: u64,
}

impl<H: HostInput> InputSystem<H> {
    pub fn new(host: H) -> Self {
        info!("input system initialized");
        Self {
            host,
            registry: BindingRegistry::new(),
            step: 0,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Advance every axis by one step.
    ///
    /// Must be called exactly once per host step whenever an axis is defined.
    /// Feed the step's device events into [`host_mut`](Self::host_mut) first.
    pub fn update(&mut self) {
        self.registry.update_all(&self.host);
        self.step += 1;
    }

    /// Return every axis to rest.
    pub fn reset_axes(&mut self) {
        self.registry.reset_all();
    }

    /// Drop all bindings and hand the host backend back.
    pub fn teardown(mut self) -> H {
        info!(
            "input system torn down after {} step(s) ({} key(s), {} axis binding(s))",
            self.step,
            self.registry.key_count(),
            self.registry.axis_count()
        );
        self.registry.clear();
        self.host
    }

    /// Number of completed [`update`](Self::update) calls.
    pub fn step(&self) -> u64 {
        self.step
    }

    // =========================================================================
    // Definition
    // =========================================================================

    pub fn define_key(&mut self, name: &str, code: InputCode) -> &mut KeyBinding {
        self.registry.define_key(name, code)
    }

    pub fn define_axis(&mut self, name: &str, config: AxisConfig) -> &mut AxisFilter {
        self.registry.define_axis(name, config)
    }

    pub fn remove_key(&mut self, name: &str) -> Option<KeyBinding> {
        self.registry.remove_key(name)
    }

    pub fn remove_axis(&mut self, name: &str) -> Option<AxisFilter> {
        self.registry.remove_axis(name)
    }

    // =========================================================================
    // Query by name
    // =========================================================================

    pub fn is_down(&self, name: &str) -> BindingResult<bool> {
        Ok(self.registry.key(name)?.is_held(&self.host))
    }

    pub fn is_pressed(&self, name: &str) -> BindingResult<bool> {
        Ok(self.registry.key(name)?.was_pressed(&self.host))
    }

    pub fn is_released(&self, name: &str) -> BindingResult<bool> {
        Ok(self.registry.key(name)?.was_released(&self.host))
    }

    pub fn axis(&self, name: &str) -> BindingResult<f32> {
        Ok(self.registry.axis(name)?.value())
    }

    pub fn axis_state(&self, name: &str) -> BindingResult<AxisSnapshot> {
        Ok(AxisSnapshot::from(self.registry.axis(name)?))
    }

    pub fn key_state(&self, name: &str) -> BindingResult<KeySnapshot> {
        Ok(KeySnapshot::capture(self.registry.key(name)?, &self.host))
    }

    // =========================================================================
    // Query by raw code (no binding lookup)
    // =========================================================================

    #[inline]
    pub fn is_code_down(&self, code: InputCode) -> bool {
        self.host.is_held(code)
    }

    #[inline]
    pub fn is_code_pressed(&self, code: InputCode) -> bool {
        self.host.was_pressed(code)
    }

    #[inline]
    pub fn is_code_released(&self, code: InputCode) -> bool {
        self.host.was_released(code)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }
}

impl<H: HostInput + Default> Default for InputSystem<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyState, UndefinedBindingError};
    use crate::types::{BindingKind, NamedKey};

    const NEG: InputCode = InputCode::Named(NamedKey::Left);
    const POS: InputCode = InputCode::Named(NamedKey::Right);
    const X: InputCode = InputCode::Char('x');

    fn system() -> InputSystem<KeyState> {
        InputSystem::new(KeyState::new())
    }

    #[test]
    fn update_drives_axes_and_counts_steps() {
        let mut input = system();
        input.define_axis("H", AxisConfig::new(NEG, POS).with_ease(0.5));

        input.host_mut().begin_step();
        input.host_mut().press(POS);
        input.update();

        assert_eq!(input.axis("H").unwrap(), 0.5);
        assert_eq!(input.step(), 1);
    }

    #[test]
    fn name_queries_fail_for_undefined_bindings() {
        let input = system();
        assert_eq!(input.is_down("Jump"), Err(UndefinedBindingError::key("Jump")));
        assert!(input.is_pressed("Jump").is_err());
        assert!(input.is_released("Jump").is_err());

        let err = input.axis("H").unwrap_err();
        assert_eq!(err.kind, BindingKind::Axis);
        assert_eq!(err.name, "H");
    }

    #[test]
    fn key_name_does_not_satisfy_axis_query() {
        let mut input = system();
        input.define_key("Move", X);
        assert!(input.is_down("Move").is_ok());
        assert!(input.axis("Move").is_err());
    }

    #[test]
    fn code_queries_bypass_the_registry() {
        let mut input = system();
        input.host_mut().begin_step();
        input.host_mut().press(X);

        assert!(input.is_code_down(X));
        assert!(input.is_code_pressed(X));
        assert!(!input.is_code_released(X));
        assert!(!input.is_code_down(POS));
    }

    #[test]
    fn reset_axes_zeroes_values() {
        let mut input = system();
        input.define_axis("H", AxisConfig::new(NEG, POS));
        input.host_mut().press(NEG);
        input.update();
        assert_eq!(input.axis("H").unwrap(), -1.0);

        input.reset_axes();
        assert_eq!(input.axis("H").unwrap(), 0.0);
        assert_eq!(input.axis_state("H").unwrap().target, 0.0);
    }

    #[test]
    fn teardown_returns_host() {
        let mut input = system();
        input.define_key("Jump", X);
        input.host_mut().press(X);

        let host = input.teardown();
        assert!(host.is_held(X));
    }

    #[test]
    fn key_state_snapshot() {
        let mut input = system();
        input.define_key("Jump", X);
        input.host_mut().begin_step();
        input.host_mut().press(X);

        let snap = input.key_state("Jump").unwrap();
        assert_eq!(snap.code, X);
        assert!(snap.down && snap.pressed && !snap.released);
    }
}
