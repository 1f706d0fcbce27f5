//! HTML escaping.

use std::borrow::Cow;

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape text and turn line breaks into `<br>`.
///
/// Mail clients ignore `white-space: pre-wrap` inconsistently, so free text
/// carries explicit breaks in every mode.
pub fn escape_multiline(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .split('\n')
        .map(|line| escape(line).into_owned())
        .collect::<Vec<_>>()
        .join("<br>")
}
