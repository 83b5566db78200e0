// src/core/vischars.rs
// Text-content iterator for an HTML fragment, DOM `textContent` style:
// skips tags (<...>, quote-aware), decodes entities, keeps whitespace as-is.

use super::sanitize::decode_entity;

pub struct TextChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

// Longest entity body we try to resolve (`&thetasym;`, `&#x10FFFF;`).
const MAX_ENTITY: usize = 10;

impl<'a> TextChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    #[inline]
    fn skip_tag(&mut self) {
        // called when current byte is '<'
        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
    }

    #[inline]
    fn entity(&mut self) -> char {
        // called when current byte is '&'; a bare or unknown '&' is literal text
        let body_start = self.i + 1;
        let limit = (body_start + MAX_ENTITY + 1).min(self.n);
        let semi = self.b[body_start..limit].iter().position(|&c| c == b';');
        if let Some(off) = semi {
            if let Some(ch) = decode_entity(&self.s[body_start..body_start + off]) {
                self.i = body_start + off + 1;
                return ch;
            }
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for TextChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => { self.skip_tag(); continue; }
                b'&' => return Some(self.entity()),
                _ => return self.next_char(),
            }
        }
        None
    }
}
