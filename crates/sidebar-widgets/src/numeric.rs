//! Lenient float parsing and number display for configuration fields.
//!
//! Editable numeric fields hand whatever the user typed to [`parse_float`].
//! It never fails: text that does not start with a number becomes `NaN`, and
//! callers pass that through unchanged.

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parse the longest leading decimal literal of `input`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, and an exponent only when it carries digits; also
/// accepts `Infinity`. Anything after the literal is ignored. Returns `NaN`
/// when no literal is present.
///
/// ```
/// use sidebar_widgets::numeric::parse_float;
///
/// assert_eq!(parse_float("3.5"), 3.5);
/// assert_eq!(parse_float("  12px"), 12.0);
/// assert!(parse_float("not-a-number").is_nan());
/// ```
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let frac_len = count_digits(&bytes[frac_start..]);
        frac_digits = &s[frac_start..frac_start + frac_len];
        if !int_digits.is_empty() || frac_len > 0 {
            pos = frac_start + frac_len;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_len = count_digits(&bytes[exp_pos..]);
        if exp_len > 0 {
            exponent = &s[pos + 1..exp_pos + exp_len];
        }
    }

    let literal = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        if exponent.is_empty() { "0" } else { exponent },
    );
    literal.parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a number the way the host UI prints it in an input box.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`, and very
/// large or very small magnitudes switch to exponent notation (`1e+21`).
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

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("3.5"), 3.5);
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("-7.25"), -7.25);
        assert_eq!(parse_float("+1"), 1.0);
    }

    #[test]
    fn test_parse_float_partial_literals() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1."), 1.0);
        assert_eq!(parse_float("-.5e-2"), -0.005);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1E+2"), 100.0);
    }

    #[test]
    fn test_parse_float_ignores_trailing_text() {
        assert_eq!(parse_float("12px"), 12.0);
        assert_eq!(parse_float("3.5abc"), 3.5);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("2.5.1"), 2.5);
        assert_eq!(parse_float("0x10"), 0.0);
    }

    #[test]
    fn test_parse_float_whitespace() {
        assert_eq!(parse_float("  12"), 12.0);
        assert_eq!(parse_float("\n\t0.75 "), 0.75);
        assert_eq!(parse_float("\u{feff}8"), 8.0);
        assert_eq!(parse_float("\u{a0}\u{2028}\u{3000}5"), 5.0);
        assert!(parse_float("\u{85}5").is_nan());
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityxyz"), f64::NEG_INFINITY);
        assert_eq!(parse_float("1e400"), f64::INFINITY);
        assert!(parse_float("infinity").is_nan());
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_float_nan_cases() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("not-a-number").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("e5").is_nan());
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn test_parse_float_negative_zero() {
        let z = parse_float("-0");
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
        assert_eq!(format_number(123_456.0), "123456");
    }

    proptest! {
        #[test]
        fn prop_parse_float_never_panics(s in ".*") {
            let _ = parse_float(&s);
        }

        #[test]
        fn prop_parse_float_reads_formatted_numbers(v in -1e15f64..1e15) {
            prop_assert_eq!(parse_float(&format_number(v)), v);
        }

        #[test]
        fn prop_parse_float_ignores_suffix(n in 0u32..100_000, suffix in "[a-zA-Z ]{0,8}") {
            prop_assert_eq!(parse_float(&format!("{n}{suffix}")), f64::from(n));
        }
    }
}
