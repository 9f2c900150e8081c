use serde::Serialize;

/// The kind of a segmented block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// A standalone header line naming the source of the citation that follows.
    CitationHeader,
    /// Text quoted from a scripture or treatise.
    Citation,
    /// The author's own explanatory text.
    Commentary,
}

/// A segmented block of a chapter body, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub kind: BlockKind,
    /// Source label for headers and citations (e.g. `善導`). Always `None` for commentary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Trimmed text of the block's lines joined with `\n`.
    pub content: String,
}

impl TextBlock {
    pub fn new(kind: BlockKind, source: Option<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            source,
            content: content.into(),
        }
    }

    /// Content split at line breaks; each line is composed separately when rendering.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
