// src/core/html.rs
// Low-level HTML string helpers. Naive on purpose, tailored to the registration
// page: tag and attribute names are matched ASCII case-insensitively, closing
// tags are expected to be present.

use super::vischars::TextChars;

/// ASCII-only lowercasing. Byte offsets stay valid in the original string.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Position of the next `<tag` opener at or after `from` in an already
/// lowercased string. `<tr` does not match `<track`.
fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = format!("<{tag}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let after = at + pat.len();
        match lc.as_bytes().get(after) {
            Some(b'>' | b'/') => return Some(at),
            Some(c) if c.is_ascii_whitespace() => return Some(at),
            None => return None,
            _ => pos = after,
        }
    }
}

/// Find the complete element `<tag ...> ... </tag>` starting at or after `from`.
/// Nested elements of the same tag are skipped over, so a table inside a cell
/// does not end the outer table.
///
/// Returns `(start, end)` with `end` just past the closing `>`.
pub fn element_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let tag = to_lower(tag);
    let close = format!("</{tag}");

    let start = find_open_tag(&lc, &tag, from)?;
    let mut depth = 0usize;
    let mut pos = start;
    loop {
        let next_open = find_open_tag(&lc, &tag, pos);
        let next_close = lc.get(pos..)?.find(&close).map(|r| r + pos);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = o + 1;
            }
            (_, Some(c)) => {
                depth = depth.saturating_sub(1);
                let end = lc[c..].find('>')? + c + 1;
                if depth == 0 {
                    return Some((start, end));
                }
                pos = end;
            }
            (_, None) => return None,
        }
    }
}

/// All sibling elements of `tag` in `s`, in document order.
pub fn element_blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = element_block_ci(s, tag, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

/// Index of the first `<tag` opener in `s`, case-insensitive.
pub fn first_open_tag_ci(s: &str, tag: &str) -> Option<usize> {
    find_open_tag(&to_lower(s), &to_lower(tag), 0)
}

/// The opening tag of a block, `<td bgcolor="#D2EED3" ...>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(oe) => &block[..=oe],
        None => block,
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Read an attribute value from an opening tag, quoted or not.
pub fn attr_value_ci(open: &str, name: &str) -> Option<String> {
    let lc = to_lower(open);
    let name = to_lower(name);
    let bytes = lc.as_bytes();
    let mut pos = 0usize;

    while let Some(rel) = lc.get(pos..)?.find(&name) {
        let at = pos + rel;
        pos = at + name.len();

        // must be a whole attribute name: preceded by whitespace, followed by '='
        let before_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let rest = lc[pos..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let val_off = lc.len() - rest.len() + 1;
        let val = open[val_off..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[start_off..].find(q).map(|e| start_off + e),
            None => val.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/'),
        }
        .unwrap_or(val.len());
        return Some(s!(&val[start_off..end]));
    }
    None
}

/// DOM-style text content: tags removed, entities decoded, whitespace untouched.
pub fn text_content(inner: &str) -> String {
    TextChars::new(inner).collect()
}
