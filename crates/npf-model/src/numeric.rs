//! Numeric field values and lenient text parsing.
//!
//! Form inputs arrive as raw text. Parsing never fails: text that does not
//! start with a number yields a not-a-number value which is stored and
//! displayed as-is. Trailing garbage after a numeric prefix is ignored, so
//! `"85mm"` reads as 85 and `"2.8x"` as 2.8.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An integer-valued field that may hold the not-a-number sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeric<T> {
    /// A parsed number.
    Number(T),
    /// The input text did not start with a number.
    NotANumber,
}

impl<T: Copy> Numeric<T> {
    /// Returns the number, or `None` for the not-a-number sentinel.
    pub fn value(&self) -> Option<T> {
        match self {
            Numeric::Number(value) => Some(*value),
            Numeric::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Numeric::NotANumber)
    }
}

impl<T: fmt::Display> fmt::Display for Numeric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(value) => write!(f, "{value}"),
            Numeric::NotANumber => f.write_str(NAN_TEXT),
        }
    }
}

// Not-a-number serializes as null, the same way serde_json writes a NaN float.
impl<T: Serialize> Serialize for Numeric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Number(value) => value.serialize(serializer),
            Numeric::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Numeric<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Numeric::NotANumber, Numeric::Number))
    }
}

/// Display text for the not-a-number sentinel.
pub const NAN_TEXT: &str = "NaN";

/// Parse a base-10 integer from the start of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Text without leading digits yields
/// [`Numeric::NotANumber`]; digits beyond the `i64` range saturate to
/// `i64::MAX` or `i64::MIN`.
pub fn parse_int(raw: &str) -> Numeric<i64> {
    let text = raw.trim_start();
    let (negative, rest) = split_sign(text);
    let digits_len = count_digits(rest.as_bytes());
    if digits_len == 0 {
        return Numeric::NotANumber;
    }
    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    // The digits are validated above, so the only failure left is overflow.
    Numeric::Number(parsed.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Parse a floating-point number from the start of `raw`.
///
/// Accepts an optional sign followed by `Infinity` or by digits with an
/// optional fraction and exponent. Returns `f64::NAN` when no number is found.
pub fn parse_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let (negative, rest) = split_sign(text);
    if rest.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let bytes = rest.as_bytes();
    let int_digits = count_digits(bytes);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    match rest[..end].parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Format a float the way the form displays it (`NaN`, `Infinity`, `2.8`).
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with an
/// explicit exponent sign (`1e+21`, `1.5e-7`). Negative zero prints as `0`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
