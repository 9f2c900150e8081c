use std::sync::LazyLock;

use regex::Regex;

/// Source name followed by a speech verb on a line of its own: `善導言`.
///
/// The name run is katakana (with the long-vowel mark), CJK ideographs or
/// ASCII letters.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ァ-ヶー一-龥a-zA-Z]+)(言|云|曰)$").unwrap());

/// Citation header line: introduces a quoted passage and names its source.
pub struct CitationHeader;

impl CitationHeader {
    /// Verbs that close a header line ("says").
    pub const SPEECH_VERBS: [char; 3] = ['言', '云', '曰'];

    /// Marker of a continued citation from the same source: `又言`.
    pub const CONTINUATION: char = '又';

    /// Source label used for a continuation header when no source is known.
    pub const CONTINUATION_SOURCE: &'static str = "続";

    /// Returns the source name if `trimmed` is a named citation header.
    ///
    /// A bare continuation (`又言`) also fits the name pattern, since `又` is an
    /// ideograph; it is not reported here so [`CitationHeader::is_continuation`]
    /// can claim it.
    pub fn source(trimmed: &str) -> Option<&str> {
        let caps = HEADER_RE.captures(trimmed)?;
        let name = caps.get(1)?.as_str();
        if Self::is_continuation(trimmed) {
            return None;
        }
        Some(name)
    }

    /// Returns true if `trimmed` is exactly `又` followed by a speech verb.
    pub fn is_continuation(trimmed: &str) -> bool {
        let mut chars = trimmed.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(Self::CONTINUATION), Some(verb), None) if Self::SPEECH_VERBS.contains(&verb)
        )
    }
}
