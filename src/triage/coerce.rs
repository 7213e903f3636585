//! Total coercion of raw form strings into typed values.
//!
//! Every function here returns `None` (or `false`) instead of failing: a
//! missing field and a malformed one look the same to the classifier.
//!
//! Numeric fields accept Arabic-Indic and Eastern Arabic-Indic digits and
//! `_` separators between digits, matching what the intake forms submit.

use std::num::IntErrorKind;

/// Integer field. Surrounding whitespace is ignored; decimals are rejected.
/// Literals beyond the `i64` range saturate.
pub fn int_field(raw: Option<&str>) -> Option<i64> {
    let literal = normalize_digits(raw?.trim());
    match literal.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Decimal field. Surrounding whitespace is ignored.
pub fn float_field(raw: Option<&str>) -> Option<f64> {
    normalize_digits(raw?.trim()).parse().ok()
}

/// ASCII value of an Arabic-Indic (U+0660..U+0669) or Eastern Arabic-Indic
/// (U+06F0..U+06F9) digit.
fn arabic_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

/// Map non-ASCII decimal digits to ASCII and drop single `_` separators
/// that sit between two digits. Anything else is left for the parser to
/// reject.
fn normalize_digits(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().map(|c| arabic_digit(c).unwrap_or(c)).collect();
    let is_digit = |i: usize| chars.get(i).is_some_and(char::is_ascii_digit);

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| !(c == '_' && i > 0 && is_digit(i - 1) && is_digit(i + 1)))
        .map(|(_, &c)| c)
        .collect()
}

/// Boolean field with a single accepted literal.
///
/// The comparison is exact: `"True"`, `"YES"` or `" yes"` are all false.
/// Callers must submit the literal the form uses.
pub fn flag_field(raw: Option<&str>, truthy: &str) -> bool {
    raw == Some(truthy)
}

/// Categorical field matched by exact tag. Unknown tags fall back to the
/// field's default.
pub fn tag_field<T: Default>(raw: Option<&str>, lookup: fn(&str) -> Option<T>) -> T {
    raw.and_then(lookup).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn int_accepts_padded_integers() {
        assert_eq!(int_field(Some(" 72 ")), Some(72));
        assert_eq!(int_field(Some("+5")), Some(5));
        assert_eq!(int_field(Some("-3")), Some(-3));
    }

    #[test]
    fn int_rejects_decimals_and_garbage() {
        assert_eq!(int_field(Some("72.5")), None);
        assert_eq!(int_field(Some("seventy")), None);
        assert_eq!(int_field(Some("")), None);
        assert_eq!(int_field(None), None);
    }

    #[test]
    fn arabic_indic_digits_are_numbers() {
        assert_eq!(int_field(Some("٨٥")), Some(85));
        assert_eq!(int_field(Some("۱۲۰")), Some(120));
        assert_eq!(float_field(Some("٣٨.٥")), Some(38.5));
    }

    #[test]
    fn underscores_between_digits_are_separators() {
        assert_eq!(int_field(Some("1_0")), Some(10));
        assert_eq!(float_field(Some("1_000.5")), Some(1000.5));
        assert_eq!(int_field(Some("1__0")), None);
        assert_eq!(int_field(Some("_10")), None);
        assert_eq!(int_field(Some("10_")), None);
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(int_field(Some("99999999999999999999")), Some(i64::MAX));
        assert_eq!(int_field(Some("-99999999999999999999")), Some(i64::MIN));
    }

    #[test]
    fn float_accepts_integers_and_decimals() {
        assert_eq!(float_field(Some("38")), Some(38.0));
        assert_eq!(float_field(Some("0.05")), Some(0.05));
        assert_eq!(float_field(Some("  39.5\n")), Some(39.5));
    }

    #[test]
    fn float_rejects_garbage() {
        assert_eq!(float_field(Some("38,5")), None);
        assert_eq!(float_field(Some("hot")), None);
        assert_eq!(float_field(None), None);
    }

    #[test]
    fn flag_is_exact_literal() {
        assert!(flag_field(Some("yes"), "yes"));
        assert!(!flag_field(Some("Yes"), "yes"));
        assert!(!flag_field(Some("YES"), "yes"));
        assert!(!flag_field(Some("true"), "yes"));
        assert!(!flag_field(None, "yes"));
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        assert_eq!(tag_field(Some("Severe"), Severity::from_tag), Severity::None);
        assert_eq!(tag_field(Some("severe"), Severity::from_tag), Severity::Severe);
        assert_eq!(tag_field(None, Severity::from_tag), Severity::None);
    }
}
