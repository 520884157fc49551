//! VND amount formatting and parsing.
//!
//! Marketplace amounts are whole-unit Vietnamese dong with no fractional
//! digits. Display notation groups digits in threes with `.` separators and
//! appends the `" ₫"` suffix, e.g. `1000000` renders as `"1.000.000 ₫"`.
//! Formatting is a display helper, not a validator: missing or malformed
//! amount fields coerce to zero so one bad record cannot fail an entire
//! profile render.

use serde::{Deserialize, Serialize};

/// Currency suffix appended to formatted amounts.
const CURRENCY_SUFFIX: &str = " ₫";

/// Digits per group in Vietnamese notation.
const GROUP_SIZE: usize = 3;

/// An amount field as it arrives from upstream records.
///
/// The marketplace API is not strict about amount types: most records carry
/// JSON numbers, some older ones carry pre-formatted strings with group
/// separators. Nulls and absent fields are represented by wrapping in
/// `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Coerce a raw amount field to a whole-unit VND value.
///
/// String inputs are stripped of `.` and `,` group separators before
/// numeric parsing. Anything that still fails to parse coerces to `0`.
pub fn coerce(raw: Option<&AmountValue>) -> i64 {
    match raw {
        None => 0,
        Some(AmountValue::Int(n)) => *n,
        Some(AmountValue::Float(f)) if f.is_finite() => *f as i64,
        Some(AmountValue::Float(_)) => 0,
        Some(AmountValue::Text(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| *c != '.' && *c != ',')
                .collect::<String>()
                .trim()
                .to_string();
            cleaned
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    cleaned
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f as i64)
                })
                .unwrap_or(0)
        }
    }
}

/// Format a whole-unit VND amount with dot-grouped digits.
///
/// Amounts are non-negative by contract; the magnitude is formatted and no
/// sign is emitted.
pub fn format(amount: i64, include_symbol: bool) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % GROUP_SIZE == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }
    if include_symbol {
        formatted.push_str(CURRENCY_SUFFIX);
    }
    formatted
}

/// Format a raw amount field directly, coercing malformed input to zero.
pub fn format_lenient(raw: Option<&AmountValue>, include_symbol: bool) -> String {
    format(coerce(raw), include_symbol)
}

/// Parse a formatted VND string back to its numeric value.
///
/// Everything except digits is discarded (group separators and the currency
/// suffix included); an empty or unparseable remainder yields `0`. For any
/// non-negative `n`, `parse(&format(n, s)) == n` for both symbol flags.
pub fn parse(formatted: &str) -> i64 {
    let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format(1_000_000, true), "1.000.000 ₫");
        assert_eq!(format(1_000_000, false), "1.000.000");
        assert_eq!(format(1_500_000_000, false), "1.500.000.000");
        assert_eq!(format(999, false), "999");
        assert_eq!(format(1000, false), "1.000");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format(0, false), "0");
        assert_eq!(format(0, true), "0 ₫");
    }

    #[test]
    fn test_format_lenient_defaults_to_zero() {
        assert_eq!(format_lenient(None, true), "0 ₫");
        assert_eq!(
            format_lenient(Some(&AmountValue::Text("not a number".into())), true),
            "0 ₫"
        );
        assert_eq!(
            format_lenient(Some(&AmountValue::Text(String::new())), false),
            "0"
        );
    }

    #[test]
    fn test_coerce_string_with_separators() {
        assert_eq!(coerce(Some(&AmountValue::Text("1.000.000".into()))), 1_000_000);
        assert_eq!(coerce(Some(&AmountValue::Text("2,500,000".into()))), 2_500_000);
        assert_eq!(coerce(Some(&AmountValue::Text("750000".into()))), 750_000);
    }

    #[test]
    fn test_coerce_float_truncates() {
        assert_eq!(coerce(Some(&AmountValue::Float(1_250_000.0))), 1_250_000);
        assert_eq!(coerce(Some(&AmountValue::Float(f64::NAN))), 0);
    }

    #[test]
    fn test_parse_discards_non_digits() {
        assert_eq!(parse("1.000.000 ₫"), 1_000_000);
        assert_eq!(parse("1.000.000"), 1_000_000);
        assert_eq!(parse(""), 0);
        assert_eq!(parse("₫"), 0);
        assert_eq!(parse("abc"), 0);
    }

    #[test]
    fn test_round_trip() {
        for n in [0i64, 1, 999, 1_000, 25_500_000, 1_500_000_000] {
            assert_eq!(parse(&format(n, true)), n);
            assert_eq!(parse(&format(n, false)), n);
        }
    }

    #[test]
    fn test_amount_value_deserializes_from_mixed_json() {
        let int: AmountValue = serde_json::from_str("1250000").unwrap();
        assert_eq!(coerce(Some(&int)), 1_250_000);

        let float: AmountValue = serde_json::from_str("1.25e6").unwrap();
        assert_eq!(coerce(Some(&float)), 1_250_000);

        let text: AmountValue = serde_json::from_str("\"1.250.000\"").unwrap();
        assert_eq!(coerce(Some(&text)), 1_250_000);
    }
}
