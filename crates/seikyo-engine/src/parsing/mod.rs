pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

use serde::Serialize;

use crate::models::GlossaryEntry;

use blocks::{BlockBuilder, ScriptureLineClassifier, TextBlock};
use inline::{GlossaryIndex, InlineNode, compose};

/// A block with its content composed line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    pub block: TextBlock,
    /// One node sequence per line of `block.content`.
    pub lines: Vec<Vec<InlineNode>>,
}

/// Segments a chapter body into citation headers, citations and commentary.
pub fn segment(content: &str) -> Vec<TextBlock> {
    let classifier = ScriptureLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in content.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

/// Convenience: composes every line of a block against a prepared index.
pub fn compose_block(block: &TextBlock, index: &GlossaryIndex<'_>) -> Vec<Vec<InlineNode>> {
    block.lines().map(|line| compose(line, index)).collect()
}

/// Segments `content` and composes each block against the chapter glossary.
///
/// The glossary index is built once per call. Lines are composed separately,
/// so neither ruby notation nor glossary terms match across a line break.
pub fn render_chapter(content: &str, glossary: &[GlossaryEntry]) -> Vec<RenderedBlock> {
    let index = GlossaryIndex::build(glossary);
    let rendered: Vec<RenderedBlock> = segment(content)
        .into_iter()
        .map(|block| {
            let lines = compose_block(&block, &index);
            RenderedBlock { block, lines }
        })
        .collect();

    log::debug!(
        "Rendered chapter: {} blocks, {} nodes, {} glossary terms",
        rendered.len(),
        rendered
            .iter()
            .flat_map(|b| &b.lines)
            .map(Vec::len)
            .sum::<usize>(),
        index.len()
    );
    rendered
}
