/// Glyphs that open the author's own commentary at the start of a line.
///
/// Two-character openers (`謹按`, `爾者`) are covered by their first glyph.
pub struct CommentaryOpening;

impl CommentaryOpening {
    pub const GLYPHS: [char; 5] = ['謹', '按', '爾', '夫', '然'];

    /// Full-width ideographic space, used for indentation in the sources.
    pub const INDENT: char = '\u{3000}';

    pub fn matches(trimmed: &str) -> bool {
        trimmed
            .trim_start_matches(Self::INDENT)
            .chars()
            .next()
            .is_some_and(|c| Self::GLYPHS.contains(&c))
    }
}
