use std::sync::LazyLock;

use regex::Regex;

use super::{
    classify::{LineClass, LineMarker},
    kinds::CitationHeader,
    types::{BlockKind, TextBlock},
};

/// Three or more consecutive newlines inside a block.
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Phase 2 of segmentation: a line-driven state machine that buffers raw
/// lines and emits [`TextBlock`]s when a marker line forces a flush.
///
/// Blank lines are buffered like any other line; they are paragraph spacing
/// inside a block, never a block boundary.
#[derive(Debug)]
pub struct BlockBuilder<'a> {
    buffer: Vec<&'a str>,
    in_citation: bool,
    current_source: Option<String>,
    out: Vec<TextBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            buffer: vec![],
            in_citation: false,
            current_source: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        match c.marker {
            Some(LineMarker::CitationHeader { source }) => {
                self.flush(self.open_kind());
                self.out.push(TextBlock::new(
                    BlockKind::CitationHeader,
                    Some(source.to_string()),
                    c.trimmed,
                ));
                self.in_citation = true;
                self.current_source = Some(source.to_string());
            }
            Some(LineMarker::Continuation) => {
                self.flush(self.open_kind());
                let source = self
                    .current_source
                    .clone()
                    .unwrap_or_else(|| CitationHeader::CONTINUATION_SOURCE.to_string());
                self.out.push(TextBlock::new(
                    BlockKind::CitationHeader,
                    Some(source),
                    c.trimmed,
                ));
                self.in_citation = true;
            }
            Some(LineMarker::Termination) => {
                self.buffer.push(c.raw);
                self.flush(BlockKind::Citation);
                self.close_citation();
            }
            Some(LineMarker::CommentaryOpening) => {
                self.flush(self.open_kind());
                self.close_citation();
                self.buffer.push(c.raw);
            }
            None => self.buffer.push(c.raw),
        }
    }

    pub fn finish(mut self) -> Vec<TextBlock> {
        // EOF flush
        self.flush(self.open_kind());
        self.out
    }

    /// Kind of the block currently being accumulated.
    fn open_kind(&self) -> BlockKind {
        if self.in_citation {
            BlockKind::Citation
        } else {
            BlockKind::Commentary
        }
    }

    fn close_citation(&mut self) {
        self.in_citation = false;
        self.current_source = None;
    }

    fn flush(&mut self, kind: BlockKind) {
        if self.buffer.is_empty() {
            return;
        }
        let joined = self.buffer.join("\n");
        self.buffer.clear();

        let text = BLANK_RUN_RE.replace_all(joined.trim(), "\n\n");
        if text.is_empty() {
            return;
        }

        let source = match kind {
            BlockKind::Citation => self.current_source.clone(),
            BlockKind::CitationHeader | BlockKind::Commentary => None,
        };
        self.out.push(TextBlock::new(kind, source, text));
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
