// src/core/sanitize.rs

use crate::config::consts::COUNTER_MARKER;

/// Cut a counter text at the page's trailing icon marker.
pub fn strip_counter_marker(s: &str) -> &str {
    s.split(COUNTER_MARKER).next().unwrap_or(s)
}

/// Escape text for an HTML body or attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_cut() {
        assert_eq!(strip_counter_marker("1.2Kauto\"/>"), "1.2K");
        assert_eq!(strip_counter_marker("250"), "250");
    }

    #[test]
    fn html_escapes() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
