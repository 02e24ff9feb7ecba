//! # Amount Formatting
//!
//! Renders monetary amounts with the fixed `en-GB` convention: comma
//! thousands separators, a dot before the fraction, and an exact number of
//! fraction digits. The convention does not vary by jurisdiction, so Irish
//! euro amounts are grouped the same way as sterling.
//!
//! ## Lenient input
//!
//! Text amounts are read with [`parse_leading_number`], which takes the
//! longest numeric prefix (`"12.5kg"` reads as `12.5`). Anything that does
//! not start with a number, and any non-finite value, formats as zero. No
//! error is ever returned.

/// Upper bound on fraction digits. Larger requests are clamped.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Read the longest leading decimal number from `input`.
///
/// Leading whitespace is skipped. An optional sign, integer digits, a
/// fraction and an exponent are accepted in that order. Returns `None` when
/// no digits are found.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        end
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            digit_count += frac_end - (end + 1);
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Format `value` with `en-GB` digit grouping and exactly `decimals`
/// fraction digits.
///
/// Rounding works on the shortest decimal form of `value` and sends ties
/// away from zero, so `2.5` renders `3` and `0.125` at two places renders
/// `0.13`. A negative value keeps its sign even when it rounds to zero
/// (`-0.001` renders `-0.00`); negative zero itself is unsigned.
///
/// Non-finite values format as zero.
pub fn format_en_gb(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_FRACTION_DIGITS);
    let value = if value.is_finite() { value } else { 0.0 };

    let scaled = round_half_away(value.abs(), decimals);
    let split = scaled.len() - decimals;
    let (int_part, frac_part) = scaled.split_at(split);

    let mut out = String::with_capacity(scaled.len() + scaled.len() / 3 + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if decimals > 0 {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Digits of `magnitude * 10^decimals`, rounded half away from zero, with
/// at least `decimals + 1` digits and no redundant leading zeros.
fn round_half_away(magnitude: f64, decimals: usize) -> String {
    // `{:e}` yields the shortest round-trip mantissa: "1.2345e3", "5e-1".
    let sci = format!("{magnitude:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    // Count of mantissa digits that land left of the rounding position.
    let keep = exponent + 1 + decimals as i64;
    let mut kept: Vec<u8> = Vec::new();
    if keep >= 0 {
        let keep = keep as usize;
        kept.extend(digits.iter().take(keep));
        kept.resize(keep, b'0');
        if digits.get(keep).is_some_and(|d| *d >= b'5') {
            increment(&mut kept);
        }
    }

    let mut rendered: String = kept.into_iter().map(char::from).collect();
    let trimmed = rendered.trim_start_matches('0').len();
    rendered.drain(..rendered.len() - trimmed);
    if rendered.len() <= decimals {
        let pad = decimals + 1 - rendered.len();
        rendered.insert_str(0, &"0".repeat(pad));
    }
    rendered
}

/// Add one to a big-endian ASCII digit string.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Prefix the `en-GB` rendering of `value` with a currency symbol.
///
/// The symbol is prepended verbatim, so negative amounts read `£-5`.
pub fn format_currency(symbol: &str, value: f64, decimals: usize) -> String {
    format!("{symbol}{}", format_en_gb(value, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_en_gb(0.0, 0), "0");
        assert_eq!(format_en_gb(999.0, 0), "999");
        assert_eq!(format_en_gb(1000.0, 0), "1,000");
        assert_eq!(format_en_gb(1234.5, 2), "1,234.50");
        assert_eq!(format_en_gb(1_000_000.0, 0), "1,000,000");
        assert_eq!(format_en_gb(123_456_789.0, 1), "123,456,789.0");
    }

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(format_en_gb(1234.5678, 2), "1,234.57");
        assert_eq!(format_en_gb(2.75, 0), "3");
        assert_eq!(format_en_gb(0.125, 3), "0.125");
        assert_eq!(format_en_gb(0.004, 2), "0.00");
        assert_eq!(format_en_gb(0.0001, 0), "0");
        assert_eq!(format_en_gb(999.5, 0), "1,000");
        assert_eq!(format_en_gb(99_999.996, 2), "100,000.00");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_currency("£", 2.5, 0), "£3");
        assert_eq!(format_currency("£", 1234.5, 0), "£1,235");
        assert_eq!(format_currency("£", 0.125, 2), "£0.13");
        assert_eq!(format_currency("£", 0.5, 0), "£1");
        assert_eq!(format_currency("€", 1.005, 2), "€1.01");
        assert_eq!(format_en_gb(-2.5, 0), "-3");
    }

    #[test]
    fn large_and_tiny_magnitudes() {
        assert_eq!(format_en_gb(1e21, 0), "1,000,000,000,000,000,000,000");
        assert_eq!(format_en_gb(1.5e-7, 2), "0.00");
        assert_eq!(format_en_gb(123.0, 4), "123.0000");
    }

    #[test]
    fn negative_values_carry_sign_before_digits() {
        assert_eq!(format_en_gb(-1234.5, 2), "-1,234.50");
        assert_eq!(format_currency("£", -5.0, 0), "£-5");
    }

    #[test]
    fn negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(format_en_gb(-0.0, 2), "0.00");
        assert_eq!(format_en_gb(-0.001, 2), "-0.00");
        assert_eq!(format_currency("£", -0.001, 2), "£-0.00");
    }

    #[test]
    fn non_finite_formats_as_zero() {
        assert_eq!(format_en_gb(f64::NAN, 2), "0.00");
        assert_eq!(format_en_gb(f64::INFINITY, 0), "0");
        assert_eq!(format_en_gb(f64::NEG_INFINITY, 1), "0.0");
    }

    #[test]
    fn decimals_are_clamped() {
        let rendered = format_en_gb(1.0, 500);
        assert_eq!(rendered.split_once('.').unwrap().1.len(), MAX_FRACTION_DIGITS);
    }

    #[test]
    fn currency_prefixes_symbol() {
        assert_eq!(format_currency("£", 1234.5, 2), "£1,234.50");
        assert_eq!(format_currency("€", 1234.5, 2), "€1,234.50");
    }

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_leading_number("1234.5"), Some(1234.5));
        assert_eq!(parse_leading_number("  -42"), Some(-42.0));
        assert_eq!(parse_leading_number("+7"), Some(7.0));
        assert_eq!(parse_leading_number("12.5kg"), Some(12.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("1e3"), Some(1000.0));
        assert_eq!(parse_leading_number("1e"), Some(1.0));
        assert_eq!(parse_leading_number("2E-2x"), Some(0.02));
    }

    #[test]
    fn rejects_non_numeric_prefix() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("£100"), None);
        assert_eq!(parse_leading_number("1,000"), Some(1.0));
    }

    proptest! {
        #[test]
        fn formatting_never_panics_and_keeps_symbol(value in any::<f64>(), decimals in 0usize..40) {
            let rendered = format_currency("€", value, decimals);
            prop_assert!(rendered.starts_with('€'));
        }

        #[test]
        fn grouping_removes_cleanly(value in 0u64..1_000_000_000_000) {
            let rendered = format_en_gb(value as f64, 0);
            prop_assert_eq!(rendered.replace(',', ""), value.to_string());
        }

        #[test]
        fn agrees_with_std_away_from_ties(cents in 0u64..10_000_000_000, decimals in 2usize..5) {
            // Whole cents are never a tie at two or more places.
            let value = cents as f64 / 100.0;
            let ours = format_en_gb(value, decimals).replace(',', "");
            prop_assert_eq!(ours, format!("{:.*}", decimals, value));
        }
    }
}
