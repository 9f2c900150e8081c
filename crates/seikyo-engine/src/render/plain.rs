//! Terminal-friendly text rendering.
//!
//! Ruby runs print as `base(reading)`, glossary terms as `[term]`, citation
//! headers get a `■ ` prefix and citation lines a `> ` prefix.

use crate::parsing::RenderedBlock;
use crate::parsing::blocks::BlockKind;
use crate::parsing::inline::{AnnotationChild, InlineNode};

use super::RenderOptions;

pub const HEADER_PREFIX: &str = "■ ";
pub const CITATION_PREFIX: &str = "> ";

pub fn render_line(nodes: &[InlineNode], opts: RenderOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Ruby { base, reading } => push_ruby(&mut out, base, reading, opts),
            InlineNode::Annotation { children, .. } => {
                if opts.show_glossary {
                    out.push('[');
                }
                for child in children {
                    match child {
                        AnnotationChild::Text(text) => out.push_str(text),
                        AnnotationChild::Ruby { base, reading } => {
                            push_ruby(&mut out, base, reading, opts)
                        }
                    }
                }
                if opts.show_glossary {
                    out.push(']');
                }
            }
        }
    }
    out
}

fn push_ruby(out: &mut String, base: &str, reading: &str, opts: RenderOptions) {
    out.push_str(base);
    if opts.show_readings {
        out.push('(');
        out.push_str(reading);
        out.push(')');
    }
}

/// Renders blocks separated by an empty line.
pub fn render_blocks(blocks: &[RenderedBlock], opts: RenderOptions) -> String {
    let mut out = String::new();
    for (i, rendered) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in &rendered.lines {
            match rendered.block.kind {
                BlockKind::CitationHeader => out.push_str(HEADER_PREFIX),
                BlockKind::Citation => out.push_str(CITATION_PREFIX),
                BlockKind::Commentary => {}
            }
            out.push_str(render_line(line, opts).trim_end());
            out.push('\n');
        }
    }
    out
}
