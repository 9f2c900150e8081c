use crate::parsing::span::Span;

use super::{cursor::Cursor, kinds::Ruby, types::RubyToken};

/// Scans `text` for ruby notation, left to right, without overlap.
///
/// Malformed notation (unterminated, empty base or reading) is skipped and
/// stays part of the surrounding plain text. Each call builds a fresh cursor,
/// so concurrent calls share no state.
pub fn scan(text: &str) -> Vec<RubyToken<'_>> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(token) = try_parse_ruby(&mut cur) {
            out.push(token);
            continue;
        }
        cur.bump_char();
    }

    out
}

/// Returns `text` with every ruby notation replaced by its base text.
///
/// This is the display text a composed node sequence must reproduce.
pub fn strip_notation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for token in scan(text) {
        out.push_str(&text[last..token.span.start]);
        out.push_str(token.base);
        last = token.span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Attempts to parse `{base|reading}` starting at the current position.
///
/// The base runs to the first `|` and the reading to the first `}` after it.
/// On failure, cursor position is restored.
fn try_parse_ruby<'a>(cur: &mut Cursor<'a>) -> Option<RubyToken<'a>> {
    if cur.peek() != Some(Ruby::OPEN) {
        return None;
    }

    let s = cur.s;
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // {
    let base_start = cur.pos();

    if !cur.bump_until(Ruby::SEPARATOR) || cur.pos() == base_start {
        *cur = saved;
        return None;
    }
    let base_end = cur.pos();
    cur.bump(); // |
    let reading_start = cur.pos();

    if !cur.bump_until(Ruby::CLOSE) || cur.pos() == reading_start {
        *cur = saved;
        return None;
    }
    let reading_end = cur.pos();
    cur.bump(); // }

    Some(RubyToken {
        base: &s[base_start..base_end],
        reading: &s[reading_start..reading_end],
        span: Span::new(start, cur.pos()),
    })
}
