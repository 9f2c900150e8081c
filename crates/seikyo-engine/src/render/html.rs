//! HTML rendering with `<ruby>` markup and glossary spans.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::models::GlossaryEntry;
use crate::parsing::RenderedBlock;
use crate::parsing::blocks::BlockKind;
use crate::parsing::inline::{AnnotationChild, InlineNode};

use super::RenderOptions;

pub const GLOSSARY_CLASS: &str = "glossary";

pub fn render_line(out: &mut String, nodes: &[InlineNode], opts: RenderOptions) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => {
                encode_text_to_string(text, out);
            }
            InlineNode::Ruby { base, reading } => push_ruby(out, base, reading, opts),
            InlineNode::Annotation {
                reading,
                meaning,
                children,
            } => {
                if opts.show_glossary {
                    out.push_str("<span class=\"");
                    out.push_str(GLOSSARY_CLASS);
                    out.push_str("\" data-reading=\"");
                    encode_double_quoted_attribute_to_string(reading, out);
                    out.push_str("\" data-meaning=\"");
                    encode_double_quoted_attribute_to_string(meaning, out);
                    out.push_str("\">");
                }
                for child in children {
                    match child {
                        AnnotationChild::Text(text) => {
                            encode_text_to_string(text, out);
                        }
                        AnnotationChild::Ruby { base, reading } => {
                            push_ruby(out, base, reading, opts)
                        }
                    }
                }
                if opts.show_glossary {
                    out.push_str("</span>");
                }
            }
        }
    }
}

fn push_ruby(out: &mut String, base: &str, reading: &str, opts: RenderOptions) {
    if !opts.show_readings {
        encode_text_to_string(base, out);
        return;
    }
    out.push_str("<ruby>");
    encode_text_to_string(base, out);
    out.push_str("<rp>(</rp><rt>");
    encode_text_to_string(reading, out);
    out.push_str("</rt><rp>)</rp></ruby>");
}

fn push_lines(out: &mut String, lines: &[Vec<InlineNode>], opts: RenderOptions) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        render_line(out, line, opts);
    }
}

/// Renders blocks as a sequence of HTML elements, one per line of output.
pub fn render_blocks(blocks: &[RenderedBlock], opts: RenderOptions) -> String {
    let mut out = String::new();
    for rendered in blocks {
        match rendered.block.kind {
            BlockKind::CitationHeader => {
                out.push_str("<h3>");
                push_lines(&mut out, &rendered.lines, opts);
                out.push_str("</h3>");
            }
            BlockKind::Citation => {
                out.push_str("<blockquote><p>");
                push_lines(&mut out, &rendered.lines, opts);
                out.push_str("</p></blockquote>");
            }
            BlockKind::Commentary => {
                out.push_str("<p>");
                push_lines(&mut out, &rendered.lines, opts);
                out.push_str("</p>");
            }
        }
        out.push('\n');
    }
    out
}

/// A definition list of a chapter's glossary, in entry order.
pub fn glossary_list(entries: &[GlossaryEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::from("<dl>\n");
    for entry in entries {
        out.push_str("<dt>");
        push_ruby(&mut out, &entry.term, &entry.reading, RenderOptions::default());
        out.push_str("</dt><dd>");
        encode_text_to_string(&entry.meaning, &mut out);
        out.push_str("</dd>\n");
    }
    out.push_str("</dl>\n");
    out
}
