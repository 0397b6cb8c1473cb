//! Number formatting for table cells and summary cards

use contracts::shared::FieldValue;

/// Currency symbol prefixed to money values
pub const CURRENCY_SYMBOL: &str = "$";

/// Fraction digits kept by the default locale format
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

/// Inserts `separator` every three digits of an unsigned integer string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Formats a number with `,` thousands grouping and at most
/// `max_fraction_digits` fraction digits, trailing zeros removed.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_grouped;
/// assert_eq!(format_grouped(1234.5, 3), "1,234.5");
/// assert_eq!(format_grouped(1234567.0, 3), "1,234,567");
/// ```
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = format!("{:.*}", max_fraction_digits, value.abs());
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    // no "-0" after rounding
    let negative = value < 0.0 && (integer_part != "0" || !fraction_part.is_empty());

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&group_thousands(integer_part, ','));
    if !fraction_part.is_empty() {
        result.push('.');
        result.push_str(fraction_part);
    }
    result
}

/// Money value with a single prefixed currency sign, e.g. `$1,234.5`.
/// Negative amounts put the minus before the sign.
pub fn format_currency(value: f64) -> String {
    let body = format_grouped(value, DEFAULT_MAX_FRACTION_DIGITS);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, body),
    }
}

/// Integer with thousands grouping
pub fn format_number_int(value: f64) -> String {
    format_grouped(value.round(), 0)
}

/// Reads a field as an amount. Missing, null and unparsable values are zero.
pub fn parse_amount(value: Option<&FieldValue>) -> f64 {
    value
        .and_then(FieldValue::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
