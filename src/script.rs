//! Press scripts: a compact text form of a sequence of button presses.
//!
//! `12 + 3 × 4 =` presses `1`, `2`, `+`, `3`, `×`, `4`, `=`. ASCII
//! stand-ins are accepted for the operator symbols.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one button at the start of the remaining input.
    static ref BUTTON: Regex = Regex::new(
        r"^(?:AC|C|\+/-|±|[0-9]|\.|%|÷|/|×|\*|x|−|-|\+|=)"
    ).unwrap();
}

/// Errors raised while parsing a press script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown button {text:?} at byte {position}")]
    UnknownButton { position: usize, text: String },
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Map an accepted spelling to the label printed on the keypad.
fn canonical(token: &str) -> Option<&'static str> {
    let label = match token {
        "AC" => "AC",
        "C" => "C",
        "+/-" | "±" => "±",
        "/" | "÷" => "÷",
        "*" | "x" | "×" => "×",
        "-" | "−" => "−",
        "+" => "+",
        "=" => "=",
        "%" => "%",
        "." => ".",
        digit => return digit.parse::<usize>().ok().and_then(|d| DIGITS.get(d).copied()),
    };
    Some(label)
}

/// Parse a script into keypad labels.
pub fn parse_script(input: &str) -> Result<Vec<&'static str>, ScriptError> {
    let mut labels = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let rest = &input[position..];

        if let Some(c) = rest.chars().next()
            && c.is_whitespace()
        {
            position += c.len_utf8();
            continue;
        }

        match BUTTON.find(rest).and_then(|m| Some((canonical(m.as_str())?, m.end()))) {
            Some((label, len)) => {
                labels.push(label);
                position += len;
            }
            None => {
                let text = rest.chars().next().map(String::from).unwrap_or_default();
                return Err(ScriptError::UnknownButton { position, text });
            }
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_script() {
        assert_eq!(
            parse_script("12 + 3 × 4 =").unwrap(),
            vec!["1", "2", "+", "3", "×", "4", "="]
        );
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(
            parse_script("8/2*3-1x2").unwrap(),
            vec!["8", "÷", "2", "×", "3", "−", "1", "×", "2"]
        );
        assert_eq!(parse_script("5 +/- %").unwrap(), vec!["5", "±", "%"]);
    }

    #[test]
    fn test_clear_labels() {
        assert_eq!(parse_script("AC 5 C").unwrap(), vec!["AC", "5", "C"]);
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_button() {
        assert_eq!(
            parse_script("2 ^ 3"),
            Err(ScriptError::UnknownButton {
                position: 2,
                text: "^".to_string()
            })
        );
        assert_eq!(
            parse_script("1 + √"),
            Err(ScriptError::UnknownButton {
                position: 4,
                text: "√".to_string()
            })
        );
    }
}
