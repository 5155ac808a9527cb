//! Host input backend seam.
//!
//! The binding layer never polls devices itself. Everything it knows about the
//! physical world comes through [`HostInput`]: whether a code is held, and
//! whether it changed state during the current step.

use arrayvec::ArrayVec;
use log::warn;

use crate::types::{InputCode, MAX_HELD_CODES};

/// The three raw-input primitives a host backend must provide.
///
/// Edge queries are relative to the backend's own notion of a step; the
/// binding layer does not track edges.
pub trait HostInput {
    /// True while the code is held down.
    fn is_held(&self, code: InputCode) -> bool;

    /// True only on the step the code went from released to held.
    fn was_pressed(&self, code: InputCode) -> bool;

    /// True only on the step the code went from held to released.
    fn was_released(&self, code: InputCode) -> bool;
}

impl<T: HostInput + ?Sized> HostInput for &T {
    #[inline]
    fn is_held(&self, code: InputCode) -> bool {
        (**self).is_held(code)
    }

    #[inline]
    fn was_pressed(&self, code: InputCode) -> bool {
        (**self).was_pressed(code)
    }

    #[inline]
    fn was_released(&self, code: InputCode) -> bool {
        (**self).was_released(code)
    }
}

type CodeSet = ArrayVec<InputCode, MAX_HELD_CODES>;

/// Deterministic, allocation-free host backend.
///
/// Device events are fed with [`press`](KeyState::press) and
/// [`release`](KeyState::release) between steps. [`begin_step`](KeyState::begin_step)
/// must be called once at the start of every step, before the step's events are
/// applied, so that edges are visible for exactly one step.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: CodeSet,
    pressed: CodeSet,
    released: CodeSet,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous step's edges. Held state is kept.
    pub fn begin_step(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Mark `code` as held.
    ///
    /// Returns `true` if the code was not held before (a pressed edge was recorded).
    pub fn press(&mut self, code: InputCode) -> bool {
        if self.held.contains(&code) {
            return false;
        }
        if self.held.try_push(code).is_err() {
            warn!(
                "dropping press of {}: more than {} codes held",
                code, MAX_HELD_CODES
            );
            return false;
        }
        if !self.pressed.contains(&code) {
            // Edge lists share the held capacity; extra distinct taps in one step are dropped.
            let _ = self.pressed.try_push(code);
        }
        true
    }

    /// Mark `code` as released.
    ///
    /// Returns `true` if the code was held (a released edge was recorded).
    pub fn release(&mut self, code: InputCode) -> bool {
        let Some(idx) = self.held.iter().position(|c| *c == code) else {
            return false;
        };
        self.held.swap_remove(idx);
        if !self.released.contains(&code) {
            let _ = self.released.try_push(code);
        }
        true
    }

    /// Release every held code, recording a released edge for each.
    pub fn release_all(&mut self) {
        while let Some(code) = self.held.pop() {
            if !self.released.contains(&code) {
                let _ = self.released.try_push(code);
            }
        }
    }

    /// Codes currently held, in no particular order.
    pub fn held(&self) -> &[InputCode] {
        &self.held
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl HostInput for KeyState {
    fn is_held(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    fn was_pressed(&self, code: InputCode) -> bool {
        self.pressed.contains(&code)
    }

    fn was_released(&self, code: InputCode) -> bool {
        self.released.contains(&code)
    }
}
