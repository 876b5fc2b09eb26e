//! Arithmetic on display strings
//!
//! Operands travel through the engine as display strings and are only
//! turned into `f64` here. Parsing is prefix-based: the longest leading
//! part of the text that forms a decimal literal is used, so malformed
//! entry such as `1.2.3` still yields a deterministic value.

use crate::core::Operator;

/// Parses the longest numeric prefix of `text`
///
/// Accepts an optional sign followed by `Infinity` or a decimal literal
/// with an optional exponent. Returns NaN when no prefix is numeric.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone point only counts when digits sit on at least one side
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

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Evaluates `lhs op rhs` on two display strings
///
/// Division by zero follows IEEE-754: `Infinity`, `-Infinity` or NaN.
#[must_use]
pub fn evaluate(lhs: &str, rhs: &str, op: Operator) -> f64 {
    let a = parse_number(lhs);
    let b = parse_number(rhs);
    let result = op.apply(a, b);
    tracing::debug!(lhs, rhs, op = op.symbol(), result, "evaluated");
    result
}
