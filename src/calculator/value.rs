//! The value shown on the calculator display.
//!
//! While the user is typing a literal such as `1.05` the value is kept as
//! text, so a trailing point or trailing zeros after the point survive
//! until the literal is used in a calculation.

use std::fmt;

/// Current display value.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayValue {
    /// A committed number (result of a calculation or an integer entry).
    Number(f64),
    /// A literal being typed: optional `-`, digits, at most one `.`.
    Entry(String),
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl DisplayValue {
    /// Numeric value of the display.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            // Entry buffers are always valid literals ("5." included).
            Self::Entry(text) => text.parse().unwrap_or(f64::NAN),
        }
    }

    /// Text as it should appear on the display.
    pub fn text(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Entry(text) => text.clone(),
        }
    }

    /// Check if the value is still being typed.
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Entry(_))
    }

    /// Append a digit to the text form of the value.
    ///
    /// Integer results are committed straight away, which drops leading
    /// zeros. Results with a decimal point stay as an entry buffer.
    /// Infinity and NaN swallow further digits.
    pub fn append_digit(&self, digit: char) -> Self {
        if !self.as_number().is_finite() {
            return self.clone();
        }

        let mut text = self.text();
        text.push(digit);

        if text.contains('.') {
            return Self::Entry(text);
        }

        match text.parse::<f64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Entry(text),
        }
    }

    /// Append a decimal point unless the literal already has one.
    pub fn append_point(&self) -> Self {
        if !self.as_number().is_finite() {
            return self.clone();
        }

        let text = self.text();
        if text.contains('.') {
            self.clone()
        } else {
            Self::Entry(format!("{text}."))
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Format a number for the display.
///
/// Whole numbers have no fractional part, `-0` shows as `0`, and the
/// IEEE special values are spelled out.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        // f64's Display never uses exponent notation, so the text can be
        // extended by further digit presses.
        format!("{value}")
    }
}
