//! Binary operators and the tokens of the pending-operation stack.

use serde::Serialize;

/// A binary arithmetic operator bound to one of the operator buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Divide,
    Multiply,
    Subtract,
    Add,
}

impl Operator {
    /// Apply the operator with plain floating-point semantics.
    ///
    /// Division by zero gives an infinity or NaN, it never fails.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Divide => x / y,
            Self::Multiply => x * y,
            Self::Subtract => x - y,
            Self::Add => x + y,
        }
    }

    /// The symbol printed on the button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Divide => "÷",
            Self::Multiply => "×",
            Self::Subtract => "−",
            Self::Add => "+",
        }
    }
}

/// An entry on the pending-operation stack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Token {
    Operand(f64),
    Operator(Operator),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(5.0, 6.0), 11.0);
        assert_eq!(Operator::Subtract.apply(5.0, 6.0), -1.0);
        assert_eq!(Operator::Multiply.apply(5.0, 6.0), 30.0);
        assert_eq!(Operator::Divide.apply(3.0, 4.0), 0.75);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_string(&Token::Operator(Operator::Add)).unwrap();
        assert_eq!(json, r#"{"type":"operator","value":"add"}"#);
        let json = serde_json::to_string(&Token::Operand(2.5)).unwrap();
        assert_eq!(json, r#"{"type":"operand","value":2.5}"#);
    }
}
