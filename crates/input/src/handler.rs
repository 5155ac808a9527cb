//! Terminal host backend.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};
use log::debug;

use crate::core::{HostInput, KeyState};
use crate::map::input_code;
use crate::types::{InputCode, DEFAULT_KEY_RELEASE_TIMEOUT_MS, MAX_HELD_CODES};

/// Tracks held keys and per-step edges from terminal key events.
#[derive(Debug, Clone)]
pub struct TerminalKeys {
    keys: KeyState,
    /// Milliseconds since the last press/repeat event, per held code.
    ages: ArrayVec<(InputCode, u32), MAX_HELD_CODES>,
    key_release_timeout_ms: Option<u32>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self {
            keys: KeyState::new(),
            ages: ArrayVec::new(),
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Rely on real release events (keyboard enhancement enabled).
    pub fn without_release_timeout(mut self) -> Self {
        self.key_release_timeout_ms = None;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Start a new step `elapsed_ms` after the previous one.
    ///
    /// Clears last step's edges, then auto-releases codes that have not seen a
    /// press or repeat event within the release timeout. Those releases are
    /// reported as edges on this step.
    pub fn begin_step(&mut self, elapsed_ms: u32) {
        self.keys.begin_step();

        let Some(timeout) = self.key_release_timeout_ms else {
            return;
        };

        let mut i = 0;
        while i < self.ages.len() {
            let entry = &mut self.ages[i];
            entry.1 = entry.1.saturating_add(elapsed_ms);
            if entry.1 > timeout {
                let code = entry.0;
                self.ages.swap_remove(i);
                self.keys.release(code);
                debug!("auto-released {} after {}ms without events", code, timeout);
            } else {
                i += 1;
            }
        }
    }

    /// Apply one terminal key event. Returns the mapped code, if any.
    pub fn handle_key_event(&mut self, key: &KeyEvent) -> Option<InputCode> {
        let code = input_code(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(code),
            KeyEventKind::Release => self.release(code),
        }
        Some(code)
    }

    pub fn press(&mut self, code: InputCode) {
        self.keys.press(code);
        if !self.keys.is_held(code) {
            return;
        }
        match self.ages.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = 0,
            None => {
                let _ = self.ages.try_push((code, 0));
            }
        }
    }

    pub fn release(&mut self, code: InputCode) {
        self.keys.release(code);
        if let Some(idx) = self.ages.iter().position(|(c, _)| *c == code) {
            self.ages.swap_remove(idx);
        }
    }

    /// Release everything, e.g. when the terminal loses focus.
    pub fn release_all(&mut self) {
        self.keys.release_all();
        self.ages.clear();
    }

    pub fn held(&self) -> &[InputCode] {
        self.keys.held()
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInput for TerminalKeys {
    fn is_held(&self, code: InputCode) -> bool {
        self.keys.is_held(code)
    }

    fn was_pressed(&self, code: InputCode) -> bool {
        self.keys.was_pressed(code)
    }

    fn was_released(&self, code: InputCode) -> bool {
        self.keys.was_released(code)
    }
}
