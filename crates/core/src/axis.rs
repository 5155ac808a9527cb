//! Axis filter: two opposing discrete signals smoothed into a value in [-1, 1].
//!
//! Each call to [`AxisFilter::update`] is one step:
//!
//! 1. **Target**: -1 if the negative code is held, else +1 if the positive code
//!    is held, else 0. Negative wins when both are held.
//! 2. **Snap**: with snap enabled, holding the direction opposite to the sign of
//!    the current value zeroes the value first, so the axis flips sign at once
//!    instead of gliding through zero.
//! 3. **Ease**: `value += (target - value) * ease`. An ease of 1 assigns the
//!    target exactly; an ease of 0 freezes the value.
//!
//! The ease factor is a per-step decay constant, not a time-normalized rate, so
//! the update must run exactly once per host step.

use log::warn;

use crate::host::HostInput;
use crate::types::{InputCode, DEFAULT_EASE, DEFAULT_SNAP};

/// Direction requested by the held codes on a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Negative,
    Positive,
    None,
}

impl AxisDirection {
    /// Resolve the direction from host state, checking negative first.
    pub fn resolve<H: HostInput + ?Sized>(host: &H, negative: InputCode, positive: InputCode) -> Self {
        if host.is_held(negative) {
            AxisDirection::Negative
        } else if host.is_held(positive) {
            AxisDirection::Positive
        } else {
            AxisDirection::None
        }
    }

    pub fn target(self) -> f32 {
        match self {
            AxisDirection::Negative => -1.0,
            AxisDirection::Positive => 1.0,
            AxisDirection::None => 0.0,
        }
    }

    /// True when this direction points against the sign of `value`.
    pub fn opposes(self, value: f32) -> bool {
        match self {
            AxisDirection::Negative => value > 0.0,
            AxisDirection::Positive => value < 0.0,
            AxisDirection::None => false,
        }
    }
}

/// Configuration of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub negative: InputCode,
    pub positive: InputCode,
    pub ease: f32,
    pub snap: bool,
}

impl AxisConfig {
    pub fn new(negative: InputCode, positive: InputCode) -> Self {
        Self {
            negative,
            positive,
            ease: DEFAULT_EASE,
            snap: DEFAULT_SNAP,
        }
    }

    pub fn with_ease(mut self, ease: f32) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    /// Force `ease` into [0, 1]; NaN falls back to the default.
    fn sanitized(mut self) -> Self {
        if self.ease.is_nan() {
            warn!("axis ease is NaN, using default {}", DEFAULT_EASE);
            self.ease = DEFAULT_EASE;
        } else if !(0.0..=1.0).contains(&self.ease) {
            let clamped = self.ease.clamp(0.0, 1.0);
            warn!("axis ease {} out of range, clamped to {}", self.ease, clamped);
            self.ease = clamped;
        }
        self
    }
}

/// Per-axis smoothing and snap state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFilter {
    config: AxisConfig,
    value: f32,
    target: f32,
}

impl AxisFilter {
    /// Create an axis at rest (value and target zero).
    pub fn new(config: AxisConfig) -> Self {
        Self {
            config: config.sanitized(),
            value: 0.0,
            target: 0.0,
        }
    }

    /// Advance one step using the host's held state.
    pub fn update<H: HostInput + ?Sized>(&mut self, host: &H) {
        let direction = AxisDirection::resolve(host, self.config.negative, self.config.positive);
        self.step(direction);
    }

    /// Advance one step with an already resolved direction.
    pub fn step(&mut self, direction: AxisDirection) {
        self.target = direction.target();

        if self.config.snap && direction.opposes(self.value) {
            self.value = 0.0;
        }

        if self.config.ease >= 1.0 {
            self.value = self.target;
        } else {
            self.value += (self.target - self.value) * self.config.ease;
            self.value = self.value.clamp(-1.0, 1.0);
        }
    }

    /// Current value, always within [-1, 1].
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Target resolved on the most recent step: -1, 0 or 1.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Return the axis to rest. Configuration is untouched.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.target = 0.0;
    }

    /// Replace the configuration, keeping value and target.
    pub fn reconfigure(&mut self, config: AxisConfig) {
        self.config = config.sanitized();
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn negative(&self) -> InputCode {
        self.config.negative
    }

    pub fn positive(&self) -> InputCode {
        self.config.positive
    }

    pub fn ease(&self) -> f32 {
        self.config.ease
    }

    pub fn snap(&self) -> bool {
        self.config.snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyState;
    use crate::types::NamedKey;

    const NEG: InputCode = InputCode::Named(NamedKey::Left);
    const POS: InputCode = InputCode::Named(NamedKey::Right);

    fn axis(ease: f32, snap: bool) -> AxisFilter {
        AxisFilter::new(AxisConfig::new(NEG, POS).with_ease(ease).with_snap(snap))
    }

    fn hold(codes: &[InputCode]) -> KeyState {
        let mut keys = KeyState::new();
        for code in codes {
            keys.press(*code);
        }
        keys
    }

    #[test]
    fn new_axis_is_at_rest_with_defaults() {
        let a = AxisFilter::new(AxisConfig::new(NEG, POS));
        assert_eq!(a.value(), 0.0);
        assert_eq!(a.target(), 0.0);
        assert_eq!(a.ease(), DEFAULT_EASE);
        assert_eq!(a.snap(), DEFAULT_SNAP);
    }

    #[test]
    fn full_ease_reaches_target_in_one_step() {
        let mut a = axis(1.0, false);

        a.update(&hold(&[POS]));
        assert_eq!(a.value(), 1.0);

        a.update(&hold(&[NEG]));
        assert_eq!(a.value(), -1.0);

        a.update(&hold(&[]));
        assert_eq!(a.value(), 0.0);
    }

    #[test]
    fn negative_wins_when_both_held() {
        let mut a = axis(1.0, false);
        a.update(&hold(&[POS, NEG]));
        assert_eq!(a.target(), -1.0);
        assert_eq!(a.value(), -1.0);
    }

    #[test]
    fn half_ease_sequence() {
        let mut a = axis(0.5, false);
        let pos = hold(&[POS]);

        a.update(&pos);
        assert_eq!(a.value(), 0.5);
        a.update(&pos);
        assert_eq!(a.value(), 0.75);
        a.update(&hold(&[]));
        assert_eq!(a.value(), 0.375);
    }

    #[test]
    fn snap_zeroes_before_easing_on_reversal() {
        let mut a = axis(0.25, true);
        for _ in 0..4 {
            a.update(&hold(&[POS]));
        }
        assert!(a.value() > 0.0);

        a.update(&hold(&[NEG]));
        assert_eq!(a.value(), -0.25);
    }

    #[test]
    fn without_snap_reversal_glides() {
        let mut a = axis(0.25, false);
        a.update(&hold(&[POS]));
        let v = a.value();

        a.update(&hold(&[NEG]));
        assert_eq!(a.value(), v + (-1.0 - v) * 0.25);
        assert!(a.value() > -0.25);
    }

    #[test]
    fn snap_does_not_fire_when_released() {
        let mut a = axis(0.5, true);
        a.update(&hold(&[POS]));
        a.update(&hold(&[]));
        assert_eq!(a.value(), 0.25);
    }

    #[test]
    fn zero_ease_freezes_value() {
        let mut a = axis(0.0, false);
        a.update(&hold(&[POS]));
        assert_eq!(a.value(), 0.0);
        assert_eq!(a.target(), 1.0);
    }

    #[test]
    fn reset_returns_to_rest_and_keeps_config() {
        let mut a = axis(0.5, true);
        a.update(&hold(&[NEG]));
        a.reset();

        assert_eq!(a.value(), 0.0);
        assert_eq!(a.target(), 0.0);
        assert_eq!(a.ease(), 0.5);
        assert!(a.snap());
    }

    #[test]
    fn reconfigure_preserves_motion() {
        let mut a = axis(0.5, false);
        a.update(&hold(&[POS]));

        let other = AxisConfig::new(InputCode::Char('a'), InputCode::Char('d')).with_ease(0.1);
        a.reconfigure(other);

        assert_eq!(a.value(), 0.5);
        assert_eq!(a.target(), 1.0);
        assert_eq!(a.positive(), InputCode::Char('d'));
        assert_eq!(a.ease(), 0.1);
    }

    #[test]
    fn out_of_range_ease_is_clamped() {
        assert_eq!(axis(3.0, false).ease(), 1.0);
        assert_eq!(axis(-0.5, false).ease(), 0.0);
        assert_eq!(axis(f32::NAN, false).ease(), DEFAULT_EASE);
    }

    #[test]
    fn direction_opposition() {
        assert!(AxisDirection::Negative.opposes(0.1));
        assert!(!AxisDirection::Negative.opposes(-0.1));
        assert!(AxisDirection::Positive.opposes(-0.1));
        assert!(!AxisDirection::Positive.opposes(0.0));
        assert!(!AxisDirection::None.opposes(1.0));
    }
}
