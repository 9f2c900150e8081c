use crate::parsing::{
    RenderedBlock,
    inline::{InlineNode, display_text, strip_notation},
};

/// Validates rendered chapter invariants.
///
/// Asserts that:
/// - No block has empty content
/// - Each block has one composed line per content line
/// - Every composed line displays exactly its source with notation stripped
/// - No text node is empty, and no two text nodes are adjacent
/// - No annotation is empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rendered: &[RenderedBlock]) {
    for (b, r) in rendered.iter().enumerate() {
        assert!(!r.block.content.is_empty(), "block {b} has empty content");

        let lines: Vec<&str> = r.block.lines().collect();
        assert_eq!(
            lines.len(),
            r.lines.len(),
            "block {b}: {} content lines but {} composed lines",
            lines.len(),
            r.lines.len()
        );

        for (l, (source, nodes)) in lines.iter().zip(&r.lines).enumerate() {
            assert_eq!(
                display_text(nodes),
                strip_notation(source),
                "block {b} line {l} does not tile its source {source:?}"
            );
            check_nodes(nodes, b, l);
        }
    }
}

fn check_nodes(nodes: &[InlineNode], b: usize, l: usize) {
    for (n, pair) in nodes.windows(2).enumerate() {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "block {b} line {l}: adjacent text nodes at {n}"
        );
    }
    for node in nodes {
        match node {
            InlineNode::Text(text) => {
                assert!(!text.is_empty(), "block {b} line {l}: empty text node");
            }
            InlineNode::Ruby { base, reading } => {
                assert!(
                    !base.is_empty() && !reading.is_empty(),
                    "block {b} line {l}: empty ruby"
                );
            }
            InlineNode::Annotation { children, .. } => {
                assert!(!children.is_empty(), "block {b} line {l}: empty annotation");
            }
        }
    }
}
