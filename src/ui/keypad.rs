//! Text rendering of the keypad grid.
//!
//! The grid is four cells wide. Half-width buttons (the zero) span two
//! cells. The last clicked button is drawn in brackets.

use crate::calculator::{ButtonDescriptor, ButtonRegistry, CalculatorState};

pub const KEYPAD_COLUMNS: usize = 4;

fn span(button: &ButtonDescriptor) -> usize {
    if button.class.starts_with("is-half-btn") {
        2
    } else {
        1
    }
}

fn render_cell(button: &ButtonDescriptor, state: &CalculatorState, width: usize) -> String {
    let label = button.display_label(state);
    let span = span(button);
    // Spanned cells also absorb the gap between them.
    let cell_width = width * span + (span - 1);

    let text = if state.last_click.as_deref() == Some(label) {
        format!("[{label}]")
    } else {
        label.to_string()
    };

    format!("{text:^cell_width$}")
}

/// Render the keypad, one line per row.
pub fn render_keypad(registry: &ButtonRegistry, state: &CalculatorState, width: usize) -> String {
    let mut lines = Vec::new();
    let mut row = Vec::new();
    let mut used = 0;

    for button in registry.iter() {
        row.push(render_cell(button, state, width));
        used += span(button);

        if used >= KEYPAD_COLUMNS {
            lines.push(row.join(" "));
            row.clear();
            used = 0;
        }
    }

    if !row.is_empty() {
        lines.push(row.join(" "));
    }

    lines.join("\n")
}
