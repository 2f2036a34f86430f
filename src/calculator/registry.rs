//! The fixed set of keypad buttons.
//!
//! Each button starts from the defaults of its category and overrides
//! whatever differs (label, handler, CSS class, operator).

use super::engine::{
    CalculatorState, Handler, handle_clear, handle_equals, handle_nothing, handle_number,
    handle_operator, handle_percent, handle_point, handle_toggle_sign,
};
use super::operator::Operator;
use serde::Serialize;
use std::time::Duration;

/// Highlight duration used when no configuration says otherwise.
pub const DEFAULT_HIGHLIGHT_TIMEOUT: Duration = Duration::from_millis(100);

/// Label the clear button is registered under.
pub const CLEAR_LABEL: &str = "AC";

/// Visual category of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonCategory {
    Number,
    Function,
    Operator,
}

impl ButtonCategory {
    /// Build the default descriptor for this category.
    ///
    /// Number and function buttons get a highlight timeout, operator
    /// buttons stay highlighted until the next press.
    pub fn defaults(self, highlight_timeout: Duration) -> ButtonDescriptor {
        match self {
            Self::Number => ButtonDescriptor {
                label: "",
                category: self,
                class: "is-quarter-btn num-btn",
                highlight_class: "num-highlight",
                highlight_timeout: Some(highlight_timeout),
                handler: handle_number,
                operator: None,
            },
            Self::Function => ButtonDescriptor {
                label: "",
                category: self,
                class: "is-quarter-btn fun-btn",
                highlight_class: "fun-highlight",
                highlight_timeout: Some(highlight_timeout),
                handler: handle_nothing,
                operator: None,
            },
            Self::Operator => ButtonDescriptor {
                label: "",
                category: self,
                class: "is-quarter-btn opp-btn",
                highlight_class: "opp-highlight",
                highlight_timeout: None,
                handler: handle_operator,
                operator: None,
            },
        }
    }
}

/// Immutable description of a single button.
#[derive(Clone, Debug)]
pub struct ButtonDescriptor {
    /// Text printed on the button.
    pub label: &'static str,
    pub category: ButtonCategory,
    /// Opaque style class for the presentation layer.
    pub class: &'static str,
    /// Opaque style class applied while the button is highlighted.
    pub highlight_class: &'static str,
    /// How long the highlight lasts, if it is cleared automatically.
    pub highlight_timeout: Option<Duration>,
    /// State transition run when the button is pressed.
    pub handler: Handler,
    /// Binary function for operator buttons.
    pub operator: Option<Operator>,
}

impl ButtonDescriptor {
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.handler = handler;
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Bind an operator, taking its symbol as the label.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.label = operator.symbol();
        self.operator = Some(operator);
        self
    }

    /// Check if this is the clear button.
    pub fn is_clear(&self) -> bool {
        self.label == CLEAR_LABEL
    }

    /// Label to render for this button given the current state.
    pub fn display_label(&self, state: &CalculatorState) -> &'static str {
        if self.is_clear() {
            state.clear_label.as_str()
        } else {
            self.label
        }
    }
}

/// Ordered keypad, left to right and top to bottom.
#[derive(Clone, Debug)]
pub struct ButtonRegistry {
    buttons: Vec<ButtonDescriptor>,
}

impl Default for ButtonRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_TIMEOUT)
    }
}

impl ButtonRegistry {
    /// Build the keypad with the given highlight duration for number and
    /// function buttons.
    pub fn new(highlight_timeout: Duration) -> Self {
        let number = |label: &'static str| {
            ButtonCategory::Number
                .defaults(highlight_timeout)
                .with_label(label)
        };
        let function = |label: &'static str, handler: Handler| {
            ButtonCategory::Function
                .defaults(highlight_timeout)
                .with_label(label)
                .with_handler(handler)
        };
        let operator = |op: Operator| {
            ButtonCategory::Operator
                .defaults(highlight_timeout)
                .with_operator(op)
        };

        let buttons = vec![
            function(CLEAR_LABEL, handle_clear),
            function("±", handle_toggle_sign),
            function("%", handle_percent),
            operator(Operator::Divide),
            number("7"),
            number("8"),
            number("9"),
            operator(Operator::Multiply),
            number("4"),
            number("5"),
            number("6"),
            operator(Operator::Subtract),
            number("1"),
            number("2"),
            number("3"),
            operator(Operator::Add),
            number("0").with_class("is-half-btn num-btn"),
            number(".").with_handler(handle_point),
            ButtonCategory::Operator
                .defaults(highlight_timeout)
                .with_label("=")
                .with_handler(handle_equals),
        ];

        Self { buttons }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ButtonDescriptor> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ButtonDescriptor> {
        self.buttons.iter()
    }

    /// Find a button by label. `C` and `AC` both name the clear button.
    pub fn find(&self, label: &str) -> Option<(usize, &ButtonDescriptor)> {
        let label = if label == "C" { CLEAR_LABEL } else { label };
        self.buttons
            .iter()
            .enumerate()
            .find(|(_, button)| button.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::engine::ClearLabel;

    #[test]
    fn test_button_order() {
        let registry = ButtonRegistry::default();
        let labels: Vec<&str> = registry.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![
                "AC", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "−", "1", "2", "3", "+",
                "0", ".", "="
            ]
        );
    }

    #[test]
    fn test_category_defaults() {
        let registry = ButtonRegistry::new(Duration::from_millis(250));

        let (_, seven) = registry.find("7").unwrap();
        assert_eq!(seven.category, ButtonCategory::Number);
        assert_eq!(seven.class, "is-quarter-btn num-btn");
        assert_eq!(seven.highlight_class, "num-highlight");
        assert_eq!(seven.highlight_timeout, Some(Duration::from_millis(250)));

        let (_, percent) = registry.find("%").unwrap();
        assert_eq!(percent.category, ButtonCategory::Function);
        assert_eq!(percent.highlight_class, "fun-highlight");
        assert_eq!(percent.highlight_timeout, Some(Duration::from_millis(250)));

        let (_, plus) = registry.find("+").unwrap();
        assert_eq!(plus.category, ButtonCategory::Operator);
        assert_eq!(plus.highlight_timeout, None);
        assert_eq!(plus.operator, Some(Operator::Add));
    }

    #[test]
    fn test_overrides() {
        let registry = ButtonRegistry::default();
        let (_, zero) = registry.find("0").unwrap();
        assert_eq!(zero.class, "is-half-btn num-btn");
        assert_eq!(zero.highlight_class, "num-highlight");

        let (_, equals) = registry.find("=").unwrap();
        assert_eq!(equals.operator, None);
        assert_eq!(equals.class, "is-quarter-btn opp-btn");
    }

    #[test]
    fn test_find_clear_aliases() {
        let registry = ButtonRegistry::default();
        assert_eq!(registry.find("AC").map(|(i, _)| i), Some(0));
        assert_eq!(registry.find("C").map(|(i, _)| i), Some(0));
        assert!(registry.find("^").is_none());
    }

    #[test]
    fn test_clear_display_label_follows_state() {
        let registry = ButtonRegistry::default();
        let clear = registry.get(0).unwrap();
        let mut state = CalculatorState::new();
        assert_eq!(clear.display_label(&state), "AC");

        state.clear_label = ClearLabel::Cancel;
        assert_eq!(clear.display_label(&state), "C");
        assert_eq!(registry.get(4).unwrap().display_label(&state), "7");
    }
}
