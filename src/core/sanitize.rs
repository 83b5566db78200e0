// src/core/sanitize.rs

/// Resolve the body of an HTML entity (between `&` and `;`).
/// Covers the named entities the registration page uses plus numeric forms.
pub fn decode_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match body {
        "nbsp" => Some('\u{a0}'),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// Drop the offset-0 formatting artifact of a data cell, then trim.
///
/// "\u{a0}12345 " → "12345"
pub fn strip_marker(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    s!(chars.as_str().trim())
}
