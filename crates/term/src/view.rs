//! BindingsView: maps an `InputSystem` into text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::engine::InputSystem;
use crate::engine::core::HostInput;

/// Width of an axis bar in columns, excluding the brackets.
pub const DEFAULT_BAR_WIDTH: usize = 41;

/// Render `value` in [-1, 1] as a bar centred on zero.
///
/// The centre column is `|`; filled cells run from the centre towards the
/// value's side. Out-of-range values are clamped.
///
/// ```
/// use tui_bindings_term::render_axis_bar;
///
/// assert_eq!(render_axis_bar(0.0, 5), "[  |  ]");
/// assert_eq!(render_axis_bar(1.0, 5), "[  |##]");
/// assert_eq!(render_axis_bar(-0.5, 5), "[ #|  ]");
/// ```
pub fn render_axis_bar(value: f32, width: usize) -> String {
    let width = width.max(3) | 1;
    let half = width / 2;
    let v = if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) };
    let fill = (v.abs() * half as f32).round() as usize;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        let ch = if i == half {
            '|'
        } else if (v < 0.0 && i < half && half - i <= fill)
            || (v > 0.0 && i > half && i - half <= fill)
        {
            '#'
        } else {
            ' '
        };
        bar.push(ch);
    }
    bar.push(']');
    bar
}

pub struct BindingsView {
    bar_width: usize,
}

impl Default for BindingsView {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl BindingsView {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    /// Render axes then keys, each group sorted by name, replacing `out`.
    pub fn render<H: HostInput>(&self, input: &InputSystem<H>, out: &mut Vec<String>) {
        out.clear();
        let registry = input.registry();

        let mut axes: Vec<_> = registry.axes().collect();
        axes.sort_by(|a, b| a.0.cmp(b.0));
        let name_w = registry
            .axis_names()
            .chain(registry.key_names())
            .map(str::len)
            .max()
            .unwrap_or(0);

        for (name, axis) in axes {
            let mut line = String::new();
            let _ = write!(
                line,
                "{:<name_w$}  {} {:+.3}  ({} / {})",
                name,
                render_axis_bar(axis.value(), self.bar_width),
                axis.value(),
                axis.negative(),
                axis.positive(),
                name_w = name_w
            );
            out.push(line);
        }

        let mut keys: Vec<_> = registry.keys().collect();
        keys.sort_by(|a, b| a.0.cmp(b.0));
        for (name, key) in keys {
            let host = input.host();
            let mut line = String::new();
            let _ = write!(
                line,
                "{:<name_w$}  [{}] {}{}{}",
                name,
                key.code(),
                if key.is_held(host) { "down" } else { "up  " },
                if key.was_pressed(host) { " pressed" } else { "" },
                if key.was_released(host) { " released" } else { "" },
                name_w = name_w
            );
            out.push(line);
        }
    }
}
