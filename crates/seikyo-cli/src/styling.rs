//! Rendered chapters as styled ratatui lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use seikyo_engine::parsing::inline::{AnnotationChild, InlineNode};
use seikyo_engine::{BlockKind, RenderOptions, RenderedBlock};

const CITATION_BAR: &str = "│ ";

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn citation_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn reading_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn glossary_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

/// One styled terminal line per composed line, blocks separated by a blank line.
pub fn block_lines(blocks: &[RenderedBlock], opts: RenderOptions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, rendered) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let base = match rendered.block.kind {
            BlockKind::CitationHeader => header_style(),
            BlockKind::Citation => citation_style(),
            BlockKind::Commentary => Style::default(),
        };
        for nodes in &rendered.lines {
            let mut spans = Vec::new();
            if rendered.block.kind == BlockKind::Citation {
                spans.push(Span::styled(CITATION_BAR, reading_style()));
            }
            for node in nodes {
                push_node(&mut spans, node, base, opts);
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn push_node(spans: &mut Vec<Span<'static>>, node: &InlineNode, base: Style, opts: RenderOptions) {
    match node {
        InlineNode::Text(text) => spans.push(Span::styled(text.clone(), base)),
        InlineNode::Ruby { base: text, reading } => push_ruby(spans, text, reading, base, opts),
        InlineNode::Annotation { children, .. } => {
            let style = if opts.show_glossary {
                base.patch(glossary_style())
            } else {
                base
            };
            for child in children {
                match child {
                    AnnotationChild::Text(text) => spans.push(Span::styled(text.clone(), style)),
                    AnnotationChild::Ruby { base: text, reading } => {
                        push_ruby(spans, text, reading, style, opts)
                    }
                }
            }
        }
    }
}

fn push_ruby(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    reading: &str,
    style: Style,
    opts: RenderOptions,
) {
    spans.push(Span::styled(text.to_string(), style));
    if opts.show_readings {
        spans.push(Span::styled(format!("({reading})"), reading_style()));
    }
}
