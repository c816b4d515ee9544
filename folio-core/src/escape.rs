//! Minimal HTML escaping for user-supplied text.
//!
//! Submission fields are interpolated into an HTML mail body; every
//! field passes through [`escape_html`] first so markup in `name` or
//! `message` arrives as literal text, not as rendered content.

/// Escapes the five HTML-significant characters: `& < > " '`.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
