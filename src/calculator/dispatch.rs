//! Button press dispatch and highlight timers.
//!
//! A press records the button as last clicked, schedules the highlight
//! to be cleared when the button has a timeout, and runs its handler.
//! Timers are fire-and-forget: every press schedules its own clear and an
//! earlier timer may clear the highlight of a later press.

use super::engine::{CalculatorState, ClearLabel};
use super::operator::Token;
use super::registry::ButtonDescriptor;
use super::registry::ButtonRegistry;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Pending highlight clears, earliest first.
#[derive(Clone, Debug, Default)]
pub struct HighlightTimers {
    deadlines: BinaryHeap<Reverse<Instant>>,
}

impl HighlightTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a clear of `last_click` after `delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadlines.push(Reverse(now + delay));
    }

    /// When the next clear is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.peek().map(|Reverse(deadline)| *deadline)
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Fire every timer due at `now`. Returns the number fired.
    pub fn fire_due(&mut self, state: &mut CalculatorState, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            if deadline > now {
                break;
            }
            self.deadlines.pop();
            state.last_click = None;
            fired += 1;
        }
        fired
    }
}

/// Apply a button press to the state.
pub fn on_button_press(
    state: &mut CalculatorState,
    button: &ButtonDescriptor,
    timers: &mut HighlightTimers,
    now: Instant,
) {
    let label = button.display_label(state);
    tracing::debug!(label, "button pressed");

    state.last_click = Some(label.to_string());

    if let Some(timeout) = button.highlight_timeout {
        timers.schedule(now, timeout);
    }

    (button.handler)(state, button);
}

/// Read-only view of the state for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Display text.
    pub display: String,
    /// Numeric display value.
    pub value: f64,
    pub last_click: Option<String>,
    pub clear_label: ClearLabel,
    pub replace: bool,
    pub stack: Vec<Token>,
}

/// One calculator widget: keypad, state and timers.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    registry: ButtonRegistry,
    state: CalculatorState,
    timers: HighlightTimers,
}

impl Calculator {
    pub fn new(registry: ButtonRegistry) -> Self {
        Self {
            registry,
            state: CalculatorState::new(),
            timers: HighlightTimers::new(),
        }
    }

    pub fn registry(&self) -> &ButtonRegistry {
        &self.registry
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn timers(&self) -> &HighlightTimers {
        &self.timers
    }

    /// Press the button at `index`. Returns false for an unknown index.
    pub fn press(&mut self, index: usize) -> bool {
        self.press_at(index, Instant::now())
    }

    /// Press the button at `index` as if it happened at `now`.
    pub fn press_at(&mut self, index: usize, now: Instant) -> bool {
        let Some(button) = self.registry.get(index) else {
            tracing::warn!(index, "no button at index");
            return false;
        };
        on_button_press(&mut self.state, button, &mut self.timers, now);
        true
    }

    /// Press the button with the given label.
    pub fn press_label(&mut self, label: &str) -> bool {
        self.press_label_at(label, Instant::now())
    }

    /// Press the button with the given label as if it happened at `now`.
    pub fn press_label_at(&mut self, label: &str, now: Instant) -> bool {
        match self.registry.find(label) {
            Some((index, _)) => self.press_at(index, now),
            None => {
                tracing::warn!(label, "no button with label");
                false
            }
        }
    }

    /// Fire highlight timers due at `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.timers.fire_due(&mut self.state, now)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.state.value.text(),
            value: self.state.value.as_number(),
            last_click: self.state.last_click.clone(),
            clear_label: self.state.clear_label,
            replace: self.state.replace,
            stack: self.state.stack.clone(),
        }
    }
}
