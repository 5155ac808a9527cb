//! Interactive axis demo (default binary).
//!
//! Defines a few keys and axes at runtime and shows their live state.
//! Arrow keys and `a`/`d` drive the axes, `r` resets them, `t` toggles snap
//! by redefining the axes in place, `q` quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_bindings::core::AxisConfig;
use tui_bindings::engine::InputSystem;
use tui_bindings::input::{should_quit, TerminalConfig, TerminalKeys};
use tui_bindings::term::{BindingsView, TerminalRenderer};
use tui_bindings::types::{InputCode, NamedKey};

const DEMO_AXES: [(&str, InputCode, InputCode); 3] = [
    (
        "Horizontal",
        InputCode::Named(NamedKey::Left),
        InputCode::Named(NamedKey::Right),
    ),
    (
        "Vertical",
        InputCode::Named(NamedKey::Down),
        InputCode::Named(NamedKey::Up),
    ),
    ("Strafe", InputCode::Char('a'), InputCode::Char('d')),
];

fn main() -> Result<()> {
    env_logger::init();

    let config = TerminalConfig::from_env();
    let mut term = TerminalRenderer::new().with_enhanced_keyboard(config.enhanced_keyboard);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn define_axes(input: &mut InputSystem<TerminalKeys>, ease: f32, snap: bool) {
    for (name, negative, positive) in DEMO_AXES {
        input.define_axis(
            name,
            AxisConfig::new(negative, positive)
                .with_ease(ease)
                .with_snap(snap),
        );
    }
}

fn run(term: &mut TerminalRenderer, config: &TerminalConfig) -> Result<()> {
    let mut input = InputSystem::new(config.terminal_keys());
    define_axes(&mut input, config.ease, config.snap);
    input.define_key("Jump", InputCode::Named(NamedKey::Space));
    input.define_key("Reset", InputCode::Char('r'));
    input.define_key("ToggleSnap", InputCode::Char('t'));

    let view = BindingsView::default();
    let mut lines = Vec::new();
    let mut frame = Vec::new();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    input.host_mut().begin_step(0);

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(&key) {
                        break;
                    }
                    input.host_mut().handle_key_event(&key);
                }
                Event::FocusLost => input.host_mut().release_all(),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            input.update();

            if input.is_pressed("Reset")? {
                input.reset_axes();
            }
            if input.is_pressed("ToggleSnap")? {
                let snap = !input.registry().axis("Horizontal")?.snap();
                info!("snap {} at step {}", if snap { "on" } else { "off" }, input.step());
                define_axes(&mut input, config.ease, snap);
            }

            view.render(&input, &mut lines);
            frame.clear();
            frame.push(format!(
                "step {}  ease {:.2}  snap {}",
                input.step(),
                input.registry().axis("Horizontal")?.ease(),
                if input.registry().axis("Horizontal")?.snap() { "on" } else { "off" },
            ));
            frame.push("arrows / a,d: axes   space: jump   r: reset   t: toggle snap   q: quit".to_string());
            frame.push(String::new());
            frame.append(&mut lines);
            term.draw_lines(&frame)?;

            input.host_mut().begin_step(config.tick_ms);
        }
    }

    input.teardown();
    Ok(())
}
