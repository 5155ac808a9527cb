//! Raw input probe.
//!
//! Prints every terminal key event with the code it maps to, and the per-step
//! pressed/released edges the terminal backend derives from them. Useful for
//! checking which keys a terminal reports and how the release timeout behaves.
//! Press `q` to quit.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_bindings::engine::InputSystem;
use tui_bindings::input::{should_quit, TerminalConfig, TerminalKeys};
use tui_bindings::types::InputCode;

fn main() -> Result<()> {
    env_logger::init();

    let config = TerminalConfig::from_env();
    terminal::enable_raw_mode()?;
    let result = run(&config);
    let _ = terminal::disable_raw_mode();
    result
}

fn run(config: &TerminalConfig) -> Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "input probe: tick {}ms, release timeout {}\r\n",
        config.tick_ms,
        match config.terminal_keys().key_release_timeout_ms() {
            Some(ms) => format!("{}ms", ms),
            None => "off".to_string(),
        }
    )?;
    out.flush()?;

    let mut input = InputSystem::new(config.terminal_keys());
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut seen: Vec<InputCode> = Vec::new();
    input.host_mut().begin_step(0);

    loop {
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(&key) {
                    break;
                }
                let code = input.host_mut().handle_key_event(&key);
                write!(out, "event {:?} {:?} -> {:?}\r\n", key.kind, key.code, code)?;
                if let Some(code) = code {
                    if !seen.contains(&code) {
                        seen.push(code);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            input.update();

            for code in &seen {
                if input.is_code_pressed(*code) {
                    write!(out, "step {:>6}  pressed  {}\r\n", input.step(), code)?;
                }
                if input.is_code_released(*code) {
                    write!(out, "step {:>6}  released {}\r\n", input.step(), code)?;
                }
            }
            out.flush()?;

            input.host_mut().begin_step(config.tick_ms);
        }
    }

    let keys: TerminalKeys = input.teardown();
    write!(out, "still held at exit: {:?}\r\n", keys.held())?;
    out.flush()?;
    Ok(())
}
