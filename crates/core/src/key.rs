//! Discrete key binding.

use crate::host::HostInput;
use crate::types::InputCode;

/// A named key bound to one raw code.
///
/// Holds no state of its own: every query is answered by the host backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: InputCode,
}

impl KeyBinding {
    pub fn new(code: InputCode) -> Self {
        Self { code }
    }

    pub fn code(&self) -> InputCode {
        self.code
    }

    /// Rebind to a different code in place.
    pub fn set_code(&mut self, code: InputCode) {
        self.code = code;
    }

    #[inline]
    pub fn is_held<H: HostInput + ?Sized>(&self, host: &H) -> bool {
        host.is_held(self.code)
    }

    #[inline]
    pub fn was_pressed<H: HostInput + ?Sized>(&self, host: &H) -> bool {
        host.was_pressed(self.code)
    }

    #[inline]
    pub fn was_released<H: HostInput + ?Sized>(&self, host: &H) -> bool {
        host.was_released(self.code)
    }
}
