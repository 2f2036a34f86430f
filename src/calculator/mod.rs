//! Calculator engine driven by keypad buttons.
//!
//! This module provides:
//! - The display value and its in-progress literal entry
//! - The button registry with per-category defaults
//! - The state handlers and left-to-right evaluation
//! - Press dispatch with highlight timers

mod dispatch;
mod engine;
mod operator;
mod registry;
mod value;

pub use dispatch::{Calculator, HighlightTimers, Snapshot, on_button_press};
pub use engine::{CalculatorState, ClearLabel, Handler, is_alternating, reduce};
pub use operator::{Operator, Token};
pub use registry::{
    ButtonCategory, ButtonDescriptor, ButtonRegistry, CLEAR_LABEL, DEFAULT_HIGHLIGHT_TIMEOUT,
};
pub use value::{DisplayValue, format_number};
