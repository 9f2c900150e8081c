//! Katakana to hiragana folding.
//!
//! Folding is one-directional and applied only when comparing text against
//! glossary terms; nodes always carry the original text. Every folded char
//! has the same UTF-8 width as its source, so a folded string has the same
//! byte offsets as the text it came from.

const KATAKANA_START: char = '\u{30A1}'; // ァ
const KATAKANA_END: char = '\u{30F6}'; // ヶ
const ITERATION_START: char = '\u{30FD}'; // ヽ
const ITERATION_END: char = '\u{30FE}'; // ヾ
const KANA_OFFSET: u32 = 0x60;

/// Maps a katakana char to its hiragana counterpart; other chars pass through.
pub fn fold_char(c: char) -> char {
    match c {
        KATAKANA_START..=KATAKANA_END | ITERATION_START..=ITERATION_END => {
            char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// If the folded form of `raw` starts with `folded_prefix`, returns the byte
/// length of the matching prefix of `raw`.
pub fn folded_prefix_len(raw: &str, folded_prefix: &str) -> Option<usize> {
    let mut len = 0;
    let mut raw_chars = raw.chars();
    for want in folded_prefix.chars() {
        let c = raw_chars.next()?;
        if fold_char(c) != want {
            return None;
        }
        len += c.len_utf8();
    }
    Some(len)
}
