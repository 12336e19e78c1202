// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tokenizer for delimited device responses.
//!
//! Field devices report lists as comma-separated text, often with
//! surrounding whitespace or `name = value` assignments mixed in. These
//! helpers split such responses into the value arrays the codec consumes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier-like value token: letters, digits, `_`, `.`, `@`, `-`.
static VALUE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_.@-]+").expect("valid literal pattern"));

/// A `= <number>` assignment suffix, including surrounding whitespace.
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*=\s*\d*\.?\d*").expect("valid literal pattern"));

/// A numeric token, integer or decimal.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("valid literal pattern"));

/// Split a comma-separated response into trimmed value tokens.
///
/// An input without a comma passes through unchanged as a single element,
/// so free-form single values survive the split.
///
/// # Example
///
/// ```
/// use regcodec::tokenize::split_comma_values;
///
/// let tokens = split_comma_values("ch1, ch2 ,ch3");
/// assert_eq!(tokens, vec!["ch1", "ch2", "ch3"]);
/// ```
#[must_use]
pub fn split_comma_values(input: &str) -> Vec<String> {
    if !input.contains(',') {
        return vec![input.to_string()];
    }
    VALUE_TOKEN
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip `= <number>` assignments from a response line, leaving the names.
#[must_use]
pub fn strip_assignments(input: &str) -> String {
    ASSIGNMENT.replace_all(input, "").into_owned()
}

/// Extract the numeric tokens of a comma-separated list as floats.
///
/// Non-numeric text between separators is skipped rather than failing the
/// whole list.
#[must_use]
pub fn split_float_values(input: &str) -> Vec<f32> {
    NUMBER
        .find_iter(input)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma_values() {
        assert_eq!(
            split_comma_values("a,b,c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(
            split_comma_values(" ch1 , ch2.in@plc , ch-3 "),
            vec!["ch1", "ch2.in@plc", "ch-3"]
        );
    }

    #[test]
    fn test_single_value_passes_through() {
        // No comma means no tokenization, even with inner whitespace.
        assert_eq!(split_comma_values("one value"), vec!["one value"]);
        assert_eq!(split_comma_values(""), vec![""]);
    }

    #[test]
    fn test_strip_assignments() {
        assert_eq!(strip_assignments("temp = 21.5"), "temp");
        assert_eq!(strip_assignments("a = 1, b = 2.25"), "a, b");
        assert_eq!(strip_assignments("no assignment here"), "no assignment here");
    }

    #[test]
    fn test_split_float_values() {
        assert_eq!(split_float_values("1.5, 2, .25"), vec![1.5, 2.0, 0.25]);
        assert_eq!(split_float_values("no numbers"), Vec::<f32>::new());
        assert_eq!(split_float_values("x, 3.5, y"), vec![3.5]);
    }
}
