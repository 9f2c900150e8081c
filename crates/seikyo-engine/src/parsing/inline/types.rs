use serde::Serialize;

use crate::parsing::span::Span;

/// One `{base|reading}` notation found in a content string.
///
/// `span` covers the whole notation including its braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubyToken<'a> {
    pub base: &'a str,
    pub reading: &'a str,
    pub span: Span,
}

/// A run inside a glossary annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationChild {
    Text(String),
    Ruby { base: String, reading: String },
}

impl AnnotationChild {
    pub fn text(&self) -> &str {
        match self {
            AnnotationChild::Text(text) => text,
            AnnotationChild::Ruby { base, .. } => base,
        }
    }
}

/// A composed inline node, ready for display.
///
/// Nodes tile their source: concatenating [`InlineNode::push_display_text`]
/// over a composed sequence reproduces the content with every ruby notation
/// replaced by its base text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineNode {
    /// Plain text, unannotated.
    Text(String),
    /// A base run with its phonetic reading.
    Ruby { base: String, reading: String },
    /// A glossary term spanning one or more runs.
    Annotation {
        reading: String,
        meaning: String,
        children: Vec<AnnotationChild>,
    },
}

impl InlineNode {
    pub fn ruby(base: impl Into<String>, reading: impl Into<String>) -> Self {
        InlineNode::Ruby {
            base: base.into(),
            reading: reading.into(),
        }
    }

    /// Appends the text this node displays (base text for ruby runs).
    pub fn push_display_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Ruby { base, .. } => out.push_str(base),
            InlineNode::Annotation { children, .. } => {
                for child in children {
                    out.push_str(child.text());
                }
            }
        }
    }

    pub fn display_text(&self) -> String {
        let mut out = String::new();
        self.push_display_text(&mut out);
        out
    }
}

impl From<RubyToken<'_>> for AnnotationChild {
    fn from(token: RubyToken<'_>) -> Self {
        AnnotationChild::Ruby {
            base: token.base.to_string(),
            reading: token.reading.to_string(),
        }
    }
}

impl From<RubyToken<'_>> for InlineNode {
    fn from(token: RubyToken<'_>) -> Self {
        InlineNode::ruby(token.base, token.reading)
    }
}

/// Concatenated display text of a node sequence.
pub fn display_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_display_text(&mut out);
    }
    out
}
