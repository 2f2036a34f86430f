//! Calculator state and the button handlers that transition it.
//!
//! Evaluation is strictly left to right: `5 + 6 × 2 =` is `(5 + 6) × 2`.

use super::operator::{Operator, Token};
use super::registry::ButtonDescriptor;
use super::value::DisplayValue;
use serde::Serialize;

/// Label of the clear button.
///
/// `AC` clears everything, `C` only cancels the literal being typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ClearLabel {
    #[default]
    #[serde(rename = "AC")]
    AllClear,
    #[serde(rename = "C")]
    Cancel,
}

impl ClearLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::Cancel => "C",
        }
    }
}

/// Mutable state of one calculator widget.
#[derive(Clone, Debug, Default)]
pub struct CalculatorState {
    /// Value shown on the display.
    pub value: DisplayValue,
    /// Pending operands and operators, oldest first.
    pub stack: Vec<Token>,
    /// When set, the next digit starts a new literal.
    pub replace: bool,
    /// Label of the most recently pressed button, for highlighting.
    pub last_click: Option<String>,
    /// Current label of the clear button.
    pub clear_label: ClearLabel,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    fn ends_with_operator(&self) -> bool {
        self.stack.last().is_some_and(Token::is_operator)
    }
}

/// Signature shared by every button handler.
pub type Handler = fn(&mut CalculatorState, &ButtonDescriptor);

/// Handler for buttons that only highlight.
pub fn handle_nothing(_state: &mut CalculatorState, _button: &ButtonDescriptor) {}

/// Default handler for the digit buttons.
pub fn handle_number(state: &mut CalculatorState, button: &ButtonDescriptor) {
    state.clear_label = ClearLabel::Cancel;

    if state.ends_with_operator() && state.replace {
        state.value = append_label(&DisplayValue::default(), button.label);
        state.replace = false;
    } else {
        state.value = append_label(&state.value, button.label);
    }

    tracing::trace!(value = %state.value, "digit entered");
}

/// Handler for the decimal point.
pub fn handle_point(state: &mut CalculatorState, _button: &ButtonDescriptor) {
    state.value = state.value.append_point();
}

/// Handler for the clear button.
pub fn handle_clear(state: &mut CalculatorState, _button: &ButtonDescriptor) {
    state.value = DisplayValue::default();

    match state.clear_label {
        ClearLabel::Cancel => state.clear_label = ClearLabel::AllClear,
        ClearLabel::AllClear => state.stack.clear(),
    }

    tracing::trace!(depth = state.stack.len(), "cleared");
}

/// Handler for the sign toggle. Zero stays positive.
pub fn handle_toggle_sign(state: &mut CalculatorState, _button: &ButtonDescriptor) {
    let value = state.value.as_number();
    let toggled = if value > 0.0 {
        -value.abs()
    } else {
        value.abs()
    };
    state.value = DisplayValue::Number(toggled);
}

/// Handler for the percent button.
pub fn handle_percent(state: &mut CalculatorState, _button: &ButtonDescriptor) {
    state.value = DisplayValue::Number(state.value.as_number() / 100.0);
}

/// Default handler for the binary operator buttons.
///
/// Pressing a second operator before any digit replaces the pending one.
pub fn handle_operator(state: &mut CalculatorState, button: &ButtonDescriptor) {
    let Some(operator) = button.operator else {
        tracing::warn!(label = button.label, "operator button without an operator");
        return;
    };

    if state.ends_with_operator() && state.replace {
        if let Some(last) = state.stack.last_mut() {
            *last = Token::Operator(operator);
        }
    } else {
        state.stack.push(Token::Operand(state.value.as_number()));
        state.stack.push(Token::Operator(operator));
    }

    state.replace = true;
    tracing::trace!(depth = state.stack.len(), ?operator, "operator pending");
}

/// Handler for the equals button.
pub fn handle_equals(state: &mut CalculatorState, _button: &ButtonDescriptor) {
    let current = state.value.as_number();
    state.stack.push(Token::Operand(current));

    debug_assert!(
        is_alternating(&state.stack),
        "malformed stack: {:?}",
        state.stack
    );

    let result = reduce(&state.stack).unwrap_or(current);
    state.value = DisplayValue::Number(result);
    state.stack.clear();

    tracing::trace!(result, "evaluated");
}

/// Fold a token sequence left to right.
///
/// Returns `None` when the sequence contains no operand.
pub fn reduce(tokens: &[Token]) -> Option<f64> {
    let mut accumulator: Option<f64> = None;
    let mut pending: Option<Operator> = None;

    for token in tokens {
        match *token {
            Token::Operand(value) => {
                accumulator = Some(match (pending.take(), accumulator) {
                    (Some(operator), Some(acc)) => operator.apply(acc, value),
                    _ => value,
                });
            }
            Token::Operator(operator) => pending = Some(operator),
        }
    }

    accumulator
}

/// Check that tokens alternate operand, operator, operand, ... starting
/// and ending with an operand.
pub fn is_alternating(tokens: &[Token]) -> bool {
    tokens.len() % 2 == 1
        && tokens
            .iter()
            .enumerate()
            .all(|(i, token)| token.is_operand() == (i % 2 == 0))
}

fn append_label(value: &DisplayValue, label: &str) -> DisplayValue {
    label
        .chars()
        .fold(value.clone(), |value, digit| value.append_digit(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_left_to_right() {
        let tokens = [
            Token::Operand(5.0),
            Token::Operator(Operator::Add),
            Token::Operand(6.0),
            Token::Operator(Operator::Multiply),
            Token::Operand(2.0),
        ];
        assert_eq!(reduce(&tokens), Some(22.0));
    }

    #[test]
    fn test_reduce_single_operand() {
        assert_eq!(reduce(&[Token::Operand(123.0)]), Some(123.0));
        assert_eq!(reduce(&[]), None);
    }

    #[test]
    fn test_reduce_division_by_zero() {
        let tokens = [
            Token::Operand(1.0),
            Token::Operator(Operator::Divide),
            Token::Operand(0.0),
        ];
        assert_eq!(reduce(&tokens), Some(f64::INFINITY));
    }

    #[test]
    fn test_is_alternating() {
        assert!(is_alternating(&[Token::Operand(1.0)]));
        assert!(is_alternating(&[
            Token::Operand(1.0),
            Token::Operator(Operator::Add),
            Token::Operand(2.0),
        ]));
        assert!(!is_alternating(&[]));
        assert!(!is_alternating(&[
            Token::Operand(1.0),
            Token::Operator(Operator::Add),
        ]));
        assert!(!is_alternating(&[
            Token::Operand(1.0),
            Token::Operand(2.0),
            Token::Operand(3.0),
        ]));
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.value, DisplayValue::Number(0.0));
        assert!(state.stack.is_empty());
        assert!(!state.replace);
        assert_eq!(state.last_click, None);
        assert_eq!(state.clear_label, ClearLabel::AllClear);
    }
}
