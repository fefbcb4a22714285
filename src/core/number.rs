// src/core/number.rs
use crate::error::{Result, ScrapeError};

/// Parse a site counter such as `"250"` or `"1.2K"`.
///
/// A `K` anywhere in the token means thousands: every `K` is dropped and the
/// rest is scaled by 1000. Only `K` is understood; `"3M"` is a parse error.
pub fn normalize_number(token: &str) -> Result<f64> {
    let t = token.trim();
    if t.contains('K') {
        let digits = t.replace('K', "");
        parse_decimal(digits.trim(), token).map(|v| v * 1000.0)
    } else {
        parse_decimal(t, token)
    }
}

fn parse_decimal(s: &str, original: &str) -> Result<f64> {
    s.parse::<f64>().map_err(|_| ScrapeError::parse(original))
}
