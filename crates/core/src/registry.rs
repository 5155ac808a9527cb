//! Name-to-binding store.
//!
//! Keys and axes live in two independent maps, so the same name may be bound
//! as a key and as an axis at the same time. Defining an existing name updates
//! the binding in place: a key gets its new code, an axis gets its new
//! configuration while keeping its current value and target.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::axis::{AxisConfig, AxisFilter};
use crate::error::{BindingResult, UndefinedBindingError};
use crate::host::HostInput;
use crate::key::KeyBinding;
use crate::types::InputCode;

#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    keys: HashMap<String, KeyBinding>,
    axes: HashMap<String, AxisFilter>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Definition
    // =========================================================================

    /// Bind `name` to `code`, updating the existing key binding if there is one.
    pub fn define_key(&mut self, name: &str, code: InputCode) -> &mut KeyBinding {
        if self.keys.contains_key(name) {
            debug!("redefining key {:?} -> {}", name, code);
        } else {
            debug!("defining key {:?} -> {}", name, code);
        }

        let binding = self
            .keys
            .entry(name.to_string())
            .or_insert_with(|| KeyBinding::new(code));
        binding.set_code(code);
        binding
    }

    /// Bind `name` to an axis, reconfiguring the existing axis if there is one.
    ///
    /// Redefinition keeps the axis' value and target.
    pub fn define_axis(&mut self, name: &str, config: AxisConfig) -> &mut AxisFilter {
        match self.axes.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                debug!(
                    "redefining axis {:?} -> ({}, {}) ease={} snap={}",
                    name, config.negative, config.positive, config.ease, config.snap
                );
                let axis = entry.into_mut();
                axis.reconfigure(config);
                axis
            }
            Entry::Vacant(entry) => {
                debug!(
                    "defining axis {:?} -> ({}, {}) ease={} snap={}",
                    name, config.negative, config.positive, config.ease, config.snap
                );
                entry.insert(AxisFilter::new(config))
            }
        }
    }

    pub fn remove_key(&mut self, name: &str) -> Option<KeyBinding> {
        let removed = self.keys.remove(name);
        if removed.is_some() {
            debug!("removed key {:?}", name);
        }
        removed
    }

    pub fn remove_axis(&mut self, name: &str) -> Option<AxisFilter> {
        let removed = self.axes.remove(name);
        if removed.is_some() {
            debug!("removed axis {:?}", name);
        }
        removed
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn key(&self, name: &str) -> BindingResult<&KeyBinding> {
        self.keys
            .get(name)
            .ok_or_else(|| UndefinedBindingError::key(name))
    }

    pub fn key_mut(&mut self, name: &str) -> BindingResult<&mut KeyBinding> {
        self.keys
            .get_mut(name)
            .ok_or_else(|| UndefinedBindingError::key(name))
    }

    pub fn axis(&self, name: &str) -> BindingResult<&AxisFilter> {
        self.axes
            .get(name)
            .ok_or_else(|| UndefinedBindingError::axis(name))
    }

    pub fn axis_mut(&mut self, name: &str) -> BindingResult<&mut AxisFilter> {
        self.axes
            .get_mut(name)
            .ok_or_else(|| UndefinedBindingError::axis(name))
    }

    pub fn has_key(&self, name: &str) -> bool {
        self.keys.contains_key(name)
    }

    pub fn has_axis(&self, name: &str) -> bool {
        self.axes.contains_key(name)
    }

    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = (&str, &KeyBinding)> {
        self.keys.iter().map(|(name, key)| (name.as_str(), key))
    }

    pub fn axes(&self) -> impl Iterator<Item = (&str, &AxisFilter)> {
        self.axes.iter().map(|(name, axis)| (name.as_str(), axis))
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.axes.is_empty()
    }

    // =========================================================================
    // Per-step
    // =========================================================================

    /// Step every axis once.
    pub fn update_all<H: HostInput + ?Sized>(&mut self, host: &H) {
        for axis in self.axes.values_mut() {
            axis.update(host);
        }
    }

    /// Return every axis to rest.
    pub fn reset_all(&mut self) {
        for axis in self.axes.values_mut() {
            axis.reset();
        }
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        debug!(
            "clearing {} key(s) and {} axis binding(s)",
            self.keys.len(),
            self.axes.len()
        );
        self.keys.clear();
        self.axes.clear();
    }
}
