//! Numeric classification of raw tokens

/// Parse a token as a finite floating-point number
///
/// Surrounding whitespace is ignored. Empty strings, non-numeric text,
/// malformed exponents, `nan` and infinities all yield `None`.
pub fn parse_numeric(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Check whether a token parses as a number
pub fn is_numeric(token: &str) -> bool {
    parse_numeric(token).is_some()
}
