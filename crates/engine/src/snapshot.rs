use crate::core::{AxisFilter, HostInput, KeyBinding};
use crate::types::InputCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnapshot {
    pub value: f32,
    pub target: f32,
    pub negative: InputCode,
    pub positive: InputCode,
}

impl From<&AxisFilter> for AxisSnapshot {
    fn from(axis: &AxisFilter) -> Self {
        Self {
            value: axis.value(),
            target: axis.target(),
            negative: axis.negative(),
            positive: axis.positive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySnapshot {
    pub code: InputCode,
    pub down: bool,
    pub pressed: bool,
    pub released: bool,
}

impl KeySnapshot {
    pub fn capture<H: HostInput + ?Sized>(key: &KeyBinding, host: &H) -> Self {
        Self {
            code: key.code(),
            down: key.is_held(host),
            pressed: key.was_pressed(host),
            released: key.was_released(host),
        }
    }
}
