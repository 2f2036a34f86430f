//! Display line rendering.

use crate::calculator::CalculatorState;

/// CSS font size for the display, shrinking as the text grows so long
/// numbers still fit.
pub fn font_size(text: &str) -> &'static str {
    match text.chars().count() {
        len if len > 18 => "0.75rem",
        len if len > 16 => "1rem",
        len if len > 14 => "1.25rem",
        len if len > 12 => "1.5rem",
        len if len > 10 => "1.75rem",
        len if len > 8 => "2rem",
        len if len > 6 => "2.5rem",
        _ => "3rem",
    }
}

/// Render the display text right-aligned in `width` columns.
pub fn render_display(state: &CalculatorState, width: usize) -> String {
    format!("{:>width$}", state.value.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::DisplayValue;

    #[test]
    fn test_font_size_thresholds() {
        assert_eq!(font_size("0"), "3rem");
        assert_eq!(font_size("123456"), "3rem");
        assert_eq!(font_size("1234567"), "2.5rem");
        assert_eq!(font_size("123456789"), "2rem");
        assert_eq!(font_size("12345678901"), "1.75rem");
        assert_eq!(font_size("1234567890123"), "1.5rem");
        assert_eq!(font_size("123456789012345"), "1.25rem");
        assert_eq!(font_size("12345678901234567"), "1rem");
        assert_eq!(font_size("1234567890123456789"), "0.75rem");
    }

    #[test]
    fn test_render_display() {
        let mut state = CalculatorState::new();
        state.value = DisplayValue::Entry("3.".into());
        assert_eq!(render_display(&state, 6), "    3.");

        state.value = DisplayValue::Number(f64::NEG_INFINITY);
        assert_eq!(render_display(&state, 4), "-Infinity");
    }
}
