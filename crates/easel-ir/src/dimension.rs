//! Lenient numeric parsing for CSS-flavored dimension values.

/// Default used when a size value is missing or unusable.
pub const DEFAULT_DIMENSION: f64 = 100.0;

/// Parses a dimension string such as `"24px"`, `"1.5rem"` or `"50%"`.
///
/// The unit suffix is stripped and the leading number parsed. Parse
/// failures and values `<= 0` both yield `default`; zero and negative
/// sizes are always rejected in favor of the default.
pub fn parse_dimension(value: &str, default: f64) -> f64 {
    match parse_number(value) {
        Some(parsed) if parsed > 0.0 => parsed,
        _ => default,
    }
}

/// Like [`parse_dimension`] but without a default: `None` unless the
/// value parses to something strictly positive.
pub fn parse_positive(value: &str) -> Option<f64> {
    parse_number(value).filter(|v| *v > 0.0)
}

/// Strips a trailing CSS unit and parses the leading number. Negative
/// values pass through; used where sign matters (letter spacing,
/// offsets, opacity).
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let stripped = ["px", "pt", "rem", "em", "%"]
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .unwrap_or(trimmed);
    parse_float_prefix(stripped.trim_end())
}

// Leading-number parse in the style of JS parseFloat: consume an
// optional sign, digits and a single dot, ignore whatever follows.
// "1px solid red" parses to 1; "calc(50%)" parses to nothing.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    value[..end].parse().ok()
}
