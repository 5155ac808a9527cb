//! Integration tests for the input system in a fixed-step loop

use tui_bindings::core::{AxisConfig, KeyState, UndefinedBindingError};
use tui_bindings::engine::InputSystem;
use tui_bindings::types::{BindingKind, InputCode, NamedKey};

const NEG: InputCode = InputCode::Named(NamedKey::Left);
const POS: InputCode = InputCode::Named(NamedKey::Right);
const X: InputCode = InputCode::Char('x');

/// One host step: clear edges, apply events, update.
fn step(input: &mut InputSystem<KeyState>, press: &[InputCode], release: &[InputCode]) {
    let keys = input.host_mut();
    keys.begin_step();
    for code in press {
        keys.press(*code);
    }
    for code in release {
        keys.release(*code);
    }
    input.update();
}

#[test]
fn test_axis_half_ease_sequence() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_axis("H", AxisConfig::new(NEG, POS).with_ease(0.5).with_snap(false));

    step(&mut input, &[POS], &[]);
    assert_eq!(input.axis("H").unwrap(), 0.5);

    step(&mut input, &[], &[]);
    assert_eq!(input.axis("H").unwrap(), 0.75);

    step(&mut input, &[], &[POS]);
    assert_eq!(input.axis("H").unwrap(), 0.375);
}

#[test]
fn test_key_edges_over_steps() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_key("Jump", X);

    // X goes down.
    step(&mut input, &[X], &[]);
    assert!(input.is_down("Jump").unwrap());
    assert!(input.is_pressed("Jump").unwrap());
    assert!(!input.is_released("Jump").unwrap());

    // X stays down.
    for _ in 0..3 {
        step(&mut input, &[], &[]);
        assert!(input.is_down("Jump").unwrap());
        assert!(!input.is_pressed("Jump").unwrap());
        assert!(!input.is_released("Jump").unwrap());
    }

    // X comes up.
    step(&mut input, &[], &[X]);
    assert!(!input.is_down("Jump").unwrap());
    assert!(!input.is_pressed("Jump").unwrap());
    assert!(input.is_released("Jump").unwrap());

    step(&mut input, &[], &[]);
    assert!(!input.is_released("Jump").unwrap());
}

#[test]
fn test_redefinition_preserves_motion() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_axis("X", AxisConfig::new(NEG, POS).with_ease(0.5));
    step(&mut input, &[POS], &[]);
    let before = input.axis("X").unwrap();
    assert!(before != 0.0);

    input.define_axis(
        "X",
        AxisConfig::new(InputCode::Char('a'), InputCode::Char('d'))
            .with_ease(0.1)
            .with_snap(true),
    );
    assert_eq!(input.axis("X").unwrap(), before);

    // Old codes no longer drive the axis: the new config eases back to zero.
    step(&mut input, &[], &[]);
    assert_eq!(input.axis("X").unwrap(), before - before * 0.1);
}

#[test]
fn test_redefining_key_moves_it_to_new_code() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_key("Fire", X);
    step(&mut input, &[X], &[]);
    assert!(input.is_down("Fire").unwrap());

    input.define_key("Fire", InputCode::Named(NamedKey::Enter));
    assert!(!input.is_down("Fire").unwrap());
}

#[test]
fn test_undefined_names_error_defined_never_do() {
    let mut input = InputSystem::new(KeyState::new());

    assert_eq!(input.is_down("Jump"), Err(UndefinedBindingError::key("Jump")));
    assert_eq!(input.axis("H"), Err(UndefinedBindingError::axis("H")));

    input.define_key("Jump", X);
    input.define_axis("H", AxisConfig::new(NEG, POS));
    assert!(input.is_down("Jump").is_ok());
    assert!(input.is_pressed("Jump").is_ok());
    assert!(input.is_released("Jump").is_ok());
    assert!(input.axis("H").is_ok());

    let err = input.axis("Jump").unwrap_err();
    assert_eq!(err.kind, BindingKind::Axis);
}

#[test]
fn test_raw_code_queries_never_need_bindings() {
    let mut input = InputSystem::new(KeyState::new());
    step(&mut input, &[X], &[]);
    assert!(input.is_code_down(X));
    assert!(input.is_code_pressed(X));

    step(&mut input, &[], &[X]);
    assert!(!input.is_code_down(X));
    assert!(input.is_code_released(X));
}

#[test]
fn test_reset_axes_mid_motion() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_axis("H", AxisConfig::new(NEG, POS).with_ease(0.5));
    input.define_axis("V", AxisConfig::new(InputCode::Char('s'), InputCode::Char('w')));
    step(&mut input, &[NEG, InputCode::Char('w')], &[]);

    input.reset_axes();
    assert_eq!(input.axis("H").unwrap(), 0.0);
    assert_eq!(input.axis("V").unwrap(), 0.0);

    // Still held: motion resumes from rest on the next step.
    step(&mut input, &[], &[]);
    assert_eq!(input.axis("H").unwrap(), -0.5);
    assert_eq!(input.axis("V").unwrap(), 1.0);
}

#[test]
fn test_removed_binding_becomes_undefined() {
    let mut input = InputSystem::new(KeyState::new());
    input.define_axis("H", AxisConfig::new(NEG, POS));
    assert!(input.remove_axis("H").is_some());
    assert!(input.axis("H").is_err());
    // Updating with no axes is fine.
    step(&mut input, &[POS], &[]);
    assert_eq!(input.step(), 1);
}
