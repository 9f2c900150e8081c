use super::kinds::{CitationHeader, CommentaryOpening, Termination};

/// What a single line signals to the block builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker<'a> {
    /// `<name>言`: starts a citation from `source`.
    CitationHeader { source: &'a str },
    /// `又言`: another citation from the current source.
    Continuation,
    /// Contains `已上`: closes the current citation, this line included.
    Termination,
    /// Starts with a commentary glyph: closes any open citation before this line.
    CommentaryOpening,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The line as buffered into blocks (trailing `\r` removed, otherwise untouched).
    pub raw: &'a str,
    /// The line with surrounding whitespace (including U+3000) removed.
    pub trimmed: &'a str,
    pub marker: Option<LineMarker<'a>>,
}

/// Classifies individual lines of a scripture chapter body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptureLineClassifier;

impl ScriptureLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Markers are tried in a fixed order (header, continuation, termination,
    /// commentary opening); the first match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.trim_end_matches('\r');
        let trimmed = raw.trim();

        let marker = if let Some(source) = CitationHeader::source(trimmed) {
            Some(LineMarker::CitationHeader { source })
        } else if CitationHeader::is_continuation(trimmed) {
            Some(LineMarker::Continuation)
        } else if Termination::matches(trimmed) {
            Some(LineMarker::Termination)
        } else if CommentaryOpening::matches(trimmed) {
            Some(LineMarker::CommentaryOpening)
        } else {
            None
        };

        LineClass {
            raw,
            trimmed,
            marker,
        }
    }
}
