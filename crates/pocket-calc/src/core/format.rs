//! Display formatting for results
//!
//! Numbers are shown with the shortest digit string that round-trips,
//! switching to scientific notation for very large or very small
//! magnitudes, the same way a browser renders a JavaScript number.

/// Decimal exponent at which output switches to `1e+21` form
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Decimal exponent at or below which output switches to `1e-7` form
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a number for the calculator display
///
/// - integers print without a fractional part (`5`, not `5.0`)
/// - negative zero prints as `0`
/// - `Infinity`, `-Infinity` and `NaN` for the special values
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::format_number;
///
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{sign}{}", place_point(&digits, exponent))
}

/// Significant digits that hold any `f64` exactly
const EXACT_DIGITS: usize = 780;

/// Splits a positive finite number into its shortest round-trip digits and
/// the position of the decimal point relative to the first digit
fn shortest_digits(value: f64) -> (String, i32) {
    let (digits, point) = scientific_digits(&format!("{value:e}"));
    let digits = round_tie_to_even(value, digits, point);
    (digits, point)
}

/// Splits `{:e}` output such as "1.2345e3" into "12345" and 4
fn scientific_digits(sci: &str) -> (String, i32) {
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exponent: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent + 1)
}

/// When the value sits exactly halfway between two shortest candidates,
/// `{:e}` rounds up; pick the candidate with the even last digit instead
fn round_tie_to_even(value: f64, digits: String, point: i32) -> String {
    let Some(last) = digits.bytes().last().map(|b| b - b'0') else {
        return digits;
    };
    if last % 2 == 0 {
        return digits;
    }

    let (exact, exact_point) = scientific_digits(&format!("{value:.prec$e}", prec = EXACT_DIGITS));
    let mut lower = digits.clone();
    lower.pop();
    lower.push(char::from(b'0' + last - 1));

    let Some(rest) = exact.strip_prefix(lower.as_str()) else {
        return digits;
    };
    let is_tie = exact_point == point
        && rest.starts_with('5')
        && rest[1..].bytes().all(|b| b == b'0');
    if is_tie && format!("0.{lower}e{point}").parse::<f64>() == Ok(value) {
        lower
    } else {
        digits
    }
}

fn place_point(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        let zeros = "0".repeat((point - len) as usize);
        return format!("{digits}{zeros}");
    }
    if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        return format!("{int_part}.{frac_part}");
    }
    if MIN_PLAIN_EXPONENT < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        return format!("0.{zeros}{digits}");
    }

    let exp = point - 1;
    let exp_sign = if exp < 0 { '-' } else { '+' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{first}e{exp_sign}{}", exp.abs())
    } else {
        format!("{first}.{rest}e{exp_sign}{}", exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(20.0), "20");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-1.25), "-1.25");
        assert_eq!(format_number(123.456), "123.456");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_small_magnitudes() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.5e-10), "1.5e-10");
    }

    #[test]
    fn test_format_large_magnitudes() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn test_format_halfway_rounds_to_even_digit() {
        assert_eq!(format_number(12_177_839_647_464.0625), "12177839647464.062");
        assert_eq!(format_number(2_151_113_558_209_494.25), "2151113558209494.2");
        assert_eq!(format_number(-12_177_839_647_464.0625), "-12177839647464.062");
    }

    #[test]
    fn test_format_halfway_already_even() {
        // 0.5 past the last kept digit, but the upward neighbour is even
        assert_eq!(format_number(2_151_113_558_209_495.75), "2151113558209495.8");
    }

    #[test]
    fn test_format_odd_last_digit_without_tie() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.7), "0.7");
        assert_eq!(format_number(5e-324), "5e-324");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        use crate::core::parse_number;
        for v in [0.5, -3.75, 1e-7, 1e21, 123_456.789, 2.0_f64.sqrt()] {
            assert_eq!(parse_number(&format_number(v)), v);
        }
    }
}
