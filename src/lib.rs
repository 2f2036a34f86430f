//! A keypad calculator: button registry, left-to-right evaluation engine
//! and a text presentation layer.

pub mod calculator;
pub mod config;
pub mod replay;
pub mod script;
pub mod ui;

pub use calculator::{ButtonRegistry, Calculator, CalculatorState, Snapshot};
pub use config::Config;
pub use script::{ScriptError, parse_script};
