//! Lenient numeric parsing for text-field input.

/// Parses the longest leading floating-point prefix of `text`, returning
/// `0.0` when no prefix exists.
///
/// This mirrors C's `atof`/`wtof` family: leading whitespace is skipped, an
/// optional sign, digits, a decimal point, and an exponent are consumed, and
/// anything after the numeric prefix is ignored. Malformed or empty input is
/// not an error; it degrades to `0.0`.
///
/// # Examples
///
/// ```
/// use closenough_core::parse_lenient;
///
/// assert_eq!(parse_lenient("1.01"), 1.01);
/// assert_eq!(parse_lenient(".001"), 0.001);
/// assert_eq!(parse_lenient("  -2.5e2 "), -250.0);
/// assert_eq!(parse_lenient("1.5xyz"), 1.5);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// assert_eq!(parse_lenient(""), 0.0);
/// ```
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let prefix = numeric_prefix(trimmed);
    prefix.parse().unwrap_or(0.0)
}

/// Returns the longest prefix of `text` that parses as an `f64`.
///
/// The mantissa must contain at least one digit for the prefix to be
/// non-empty. The exponent marker is consumed only when followed by at least
/// one digit (after an optional sign), so `"1e"` yields `"1"`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        pos += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    &text[..pos]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
