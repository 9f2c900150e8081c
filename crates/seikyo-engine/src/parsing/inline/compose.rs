use crate::parsing::span::Span;

use super::{
    fold::{fold, folded_prefix_len},
    glossary::{GlossaryIndex, IndexedTerm},
    scanner::scan,
    types::{AnnotationChild, InlineNode, RubyToken},
};

/// Composes a content string into display-ready [`InlineNode`]s.
///
/// Ruby notation becomes [`InlineNode::Ruby`]; glossary terms become
/// [`InlineNode::Annotation`], preferring the longest term. A term may span
/// several strictly adjacent ruby tokens plus plain text directly after the
/// last one (e.g. `{覚|さと}り` for `さとり`). Plain runs between tokens are
/// matched against the glossary with [`walk`].
///
/// # Returns
/// Nodes covering the whole input with no gaps or overlaps: their display
/// text is `content` with every notation replaced by its base text. The
/// output is a pure function of `content` and `index`.
pub fn compose(content: &str, index: &GlossaryIndex<'_>) -> Vec<InlineNode> {
    let tokens = scan(content);
    let mut sink = NodeSink::default();

    if tokens.is_empty() {
        walk_into(content, index, &mut sink);
        return sink.finish();
    }

    let mut last = 0;
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        walk_into(&content[last..token.span.start], index, &mut sink);

        match longest_extension(content, &tokens[i..], index) {
            Some(ext) => {
                sink.push(ext.into_node(content, &tokens[i..]));
                i += ext.tokens;
                last = ext.end;
            }
            None => {
                sink.push(token.into());
                i += 1;
                last = token.span.end;
            }
        }
    }

    walk_into(&content[last..], index, &mut sink);
    sink.finish()
}

/// Glossary-only pass over text without ruby notation.
///
/// At each position the longest folded term match wins and becomes an
/// annotation over the raw matched text; everything else is coalesced into
/// plain text nodes.
pub fn walk(text: &str, index: &GlossaryIndex<'_>) -> Vec<InlineNode> {
    let mut sink = NodeSink::default();
    walk_into(text, index, &mut sink);
    sink.finish()
}

fn walk_into(text: &str, index: &GlossaryIndex<'_>, sink: &mut NodeSink) {
    if index.is_empty() {
        sink.push_text(text);
        return;
    }

    let mut pos = 0;
    let mut pending = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if let Some((term, len)) = index.longest_match_at(rest) {
            sink.push_text(&text[pending..pos]);
            sink.push(annotation(
                term,
                vec![AnnotationChild::Text(rest[..len].to_string())],
            ));
            pos += len;
            pending = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    sink.push_text(&text[pending..]);
}

/// Which text of a ruby token is compared against glossary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Base,
    Reading,
}

impl Surface {
    fn of<'a>(self, token: &RubyToken<'a>) -> &'a str {
        match self {
            Surface::Base => token.base,
            Surface::Reading => token.reading,
        }
    }
}

/// A successful multi-token glossary match starting at a ruby token.
#[derive(Debug, Clone, Copy)]
struct Extension<'s> {
    term: IndexedTerm<'s>,
    /// Number of ruby tokens consumed.
    tokens: usize,
    /// Plain text consumed after the last token.
    trailing: Option<Span>,
    /// Byte offset just past the match.
    end: usize,
}

impl Extension<'_> {
    fn into_node(self, content: &str, tokens: &[RubyToken<'_>]) -> InlineNode {
        let mut children: Vec<AnnotationChild> =
            tokens[..self.tokens].iter().copied().map(Into::into).collect();
        if let Some(span) = self.trailing {
            children.push(AnnotationChild::Text(span.slice(content).to_string()));
        }
        annotation(self.term, children)
    }
}

/// Finds the longest glossary term that starts at `tokens[0]`.
///
/// Candidates are tried longest first; for each, the base text is tried
/// before the reading, so the first success is the answer.
fn longest_extension<'s>(
    content: &str,
    tokens: &[RubyToken<'_>],
    index: &'s GlossaryIndex<'_>,
) -> Option<Extension<'s>> {
    let first = tokens.first()?;
    let base = fold(first.base);
    let reading = fold(first.reading);

    index.terms().find_map(|term| {
        [(Surface::Base, &base), (Surface::Reading, &reading)]
            .into_iter()
            .filter(|(_, prefix)| term.folded.starts_with(prefix.as_str()))
            .find_map(|(surface, _)| extend(content, tokens, term.folded, surface))
            .map(|(count, trailing, end)| Extension {
                term,
                tokens: count,
                trailing,
                end,
            })
    })
}

/// Tries to spell `term` (folded) from `tokens` and the plain text after them.
///
/// Accumulates strictly adjacent tokens while the folded text is still a
/// prefix of `term`. If a remainder is left, it must be matched by the plain
/// text directly after the last consumed token, which never reaches into the
/// next token's notation.
///
/// Returns `(tokens consumed, trailing plain span, end offset)`.
fn extend(
    content: &str,
    tokens: &[RubyToken<'_>],
    term: &str,
    surface: Surface,
) -> Option<(usize, Option<Span>, usize)> {
    let first = tokens.first()?;
    let mut matched = 0; // bytes of `term` spelled so far
    let mut count = 0;
    let mut end = first.span.start;

    for token in tokens {
        if count > 0 && token.span.start != end {
            break;
        }
        let folded = fold(surface.of(token));
        if !term[matched..].starts_with(folded.as_str()) {
            break;
        }
        matched += folded.len();
        end = token.span.end;
        count += 1;
        if matched == term.len() {
            break;
        }
    }

    if count == 0 {
        return None;
    }
    if matched == term.len() {
        return Some((count, None, end));
    }

    let limit = tokens.get(count).map_or(content.len(), |t| t.span.start);
    let len = folded_prefix_len(&content[end..limit], &term[matched..])?;
    let trailing = Span::new(end, end + len);
    Some((count, Some(trailing), trailing.end))
}

fn annotation(term: IndexedTerm<'_>, children: Vec<AnnotationChild>) -> InlineNode {
    InlineNode::Annotation {
        reading: term.entry.reading.clone(),
        meaning: term.entry.meaning.clone(),
        children,
    }
}

/// Output buffer that merges adjacent plain text.
#[derive(Debug, Default)]
struct NodeSink {
    out: Vec<InlineNode>,
}

impl NodeSink {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(InlineNode::Text(prev)) = self.out.last_mut() {
            prev.push_str(text);
        } else {
            self.out.push(InlineNode::Text(text.to_string()));
        }
    }

    fn push(&mut self, node: InlineNode) {
        match node {
            InlineNode::Text(text) => self.push_text(&text),
            other => self.out.push(other),
        }
    }

    fn finish(self) -> Vec<InlineNode> {
        self.out
    }
}
