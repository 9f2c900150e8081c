use std::fmt;

use serde::Serialize;

use crate::parsing::{
    RenderedBlock,
    blocks::BlockKind,
    inline::{AnnotationChild, InlineNode},
};

/// Snapshot of a rendered chapter for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All blocks in document order.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind label (e.g. "citation-header").
    pub kind: String,
    pub source: Option<String>,
    /// One entry per composed line, each a list of node labels.
    pub lines: Vec<Vec<String>>,
}

/// Converts rendered blocks into a snapshot.
///
/// Node labels:
/// - `text:<text>`
/// - `ruby:<base>/<reading>`
/// - `gloss:<reading>(<meaning>)[<child> + <child>]`
pub fn normalize(rendered: &[RenderedBlock]) -> Snap {
    let blocks = rendered
        .iter()
        .map(|r| BlockSnap {
            kind: kind_label(r.block.kind).to_string(),
            source: r.block.source.clone(),
            lines: r
                .lines
                .iter()
                .map(|nodes| nodes.iter().map(node_label).collect())
                .collect(),
        })
        .collect();

    Snap { blocks }
}

fn kind_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::CitationHeader => "citation-header",
        BlockKind::Citation => "citation",
        BlockKind::Commentary => "commentary",
    }
}

fn node_label(node: &InlineNode) -> String {
    match node {
        InlineNode::Text(text) => format!("text:{text}"),
        InlineNode::Ruby { base, reading } => format!("ruby:{base}/{reading}"),
        InlineNode::Annotation {
            reading,
            meaning,
            children,
        } => {
            let children = children
                .iter()
                .map(|c| match c {
                    AnnotationChild::Text(text) => format!("text:{text}"),
                    AnnotationChild::Ruby { base, reading } => format!("ruby:{base}/{reading}"),
                })
                .collect::<Vec<_>>()
                .join(" + ");
            format!("gloss:{reading}({meaning})[{children}]")
        }
    }
}

/// One header line per block, then one indented line per composed line with
/// node labels separated by ` | `.
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match &block.source {
                Some(source) => writeln!(f, "{} <{source}>", block.kind)?,
                None => writeln!(f, "{}", block.kind)?,
            }
            for (i, line) in block.lines.iter().enumerate() {
                writeln!(f, "  {}: {}", i + 1, line.join(" | "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::GlossaryEntry, parsing::render_chapter};
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_blocks_and_labels() {
        let glossary = vec![GlossaryEntry::new("信心", "しんじん", "faith")];
        let rendered = render_chapter("大経言\n{信|しん}{心|じん}歓喜\n\n乃至", &glossary);
        let snap = normalize(&rendered);
        assert_eq!(
            snap.to_string(),
            "citation-header <大経>\n\
             \x20 1: text:大経言\n\
             citation <大経>\n\
             \x20 1: gloss:しんじん(faith)[ruby:信/しん + ruby:心/じん] | text:歓喜\n\
             \x20 2: \n\
             \x20 3: text:乃至\n"
        );
    }
}
