//! Exact substring search over chapter bodies.

use std::path::Path;

use serde::Serialize;

use crate::io::{self, StoreError};
use crate::models::Scripture;

pub const MAX_HITS: usize = 50;
/// Characters of context kept before the first occurrence.
pub const CONTEXT_BEFORE: usize = 30;
/// Characters of context kept after the end of the first occurrence.
pub const CONTEXT_AFTER: usize = 50;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub category: String,
    pub scripture_id: String,
    pub scripture_title: String,
    pub chapter_id: String,
    pub chapter_title: String,
    pub snippet: String,
}

/// Searches every chapter of the given works, in iteration order.
///
/// The query is trimmed first; a blank query matches nothing. At most
/// [`MAX_HITS`] hits are returned, one per matching chapter.
pub fn search_scriptures<'a, I>(scriptures: I, query: &str) -> Vec<SearchHit>
where
    I: IntoIterator<Item = (&'a str, &'a Scripture)>,
{
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    let mut hits = Vec::new();
    for (category, scripture) in scriptures {
        for chapter in &scripture.chapters {
            let Some(at) = chapter.content.find(query) else {
                continue;
            };
            hits.push(SearchHit {
                category: category.to_string(),
                scripture_id: scripture.id.clone(),
                scripture_title: scripture.title.clone(),
                chapter_id: chapter.id.clone(),
                chapter_title: chapter.title.clone(),
                snippet: snippet(&chapter.content, at, query.len()),
            });
            if hits.len() == MAX_HITS {
                return hits;
            }
        }
    }
    hits
}

/// Searches the whole data directory, category by category.
pub fn search(data_root: &Path, query: &str) -> Result<Vec<SearchHit>, StoreError> {
    if query.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut loaded = Vec::new();
    for category in io::categories(data_root)? {
        let works = io::load_category(data_root, &category)?;
        loaded.push((category, works));
    }

    let hits = search_scriptures(
        loaded
            .iter()
            .flat_map(|(category, works)| works.iter().map(move |w| (category.as_str(), w))),
        query,
    );
    log::debug!("Search {:?}: {} hits", query.trim(), hits.len());
    Ok(hits)
}

/// Context around a match at byte offset `at` spanning `len` bytes.
fn snippet(content: &str, at: usize, len: usize) -> String {
    let before: Vec<(usize, char)> = content[..at].char_indices().collect();
    let start = before
        .len()
        .checked_sub(CONTEXT_BEFORE)
        .map_or(0, |i| before[i].0);

    let match_end = at + len;
    let end = content[match_end..]
        .char_indices()
        .nth(CONTEXT_AFTER)
        .map_or(content.len(), |(i, _)| match_end + i);

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&content[start..end].replace('\n', " "));
    if end < content.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chapter;
    use crate::tests::{create_test_data_dir, create_test_file, sample_scripture};
    use pretty_assertions::assert_eq;

    fn work(id: &str, chapters: Vec<Chapter>) -> Scripture {
        Scripture {
            id: id.into(),
            title: format!("{id} title"),
            source: "test".into(),
            chapters,
        }
    }

    #[test]
    fn short_content_has_no_ellipsis() {
        let w = work("a", vec![Chapter::new("1", "第1条", "本願を信じ\n念仏申さば")]);
        let hits = search_scriptures([("cat", &w)], "念仏");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].snippet, "本願を信じ 念仏申さば");
        assert_eq!(hits[0].chapter_title, "第1条");
    }

    #[test]
    fn long_content_is_truncated_on_both_sides() {
        let content = format!("{}念仏{}", "あ".repeat(40), "い".repeat(60));
        let w = work("a", vec![Chapter::new("1", "1", content)]);
        let hits = search_scriptures([("cat", &w)], "念仏");
        let expected = format!("...{}念仏{}...", "あ".repeat(30), "い".repeat(50));
        assert_eq!(hits[0].snippet, expected);
    }

    #[test]
    fn exact_context_width_is_not_truncated() {
        let content = format!("{}念仏{}", "あ".repeat(30), "い".repeat(50));
        let w = work("a", vec![Chapter::new("1", "1", content.clone())]);
        let hits = search_scriptures([("cat", &w)], "念仏");
        assert_eq!(hits[0].snippet, content);
    }

    #[test]
    fn query_is_trimmed_and_blank_matches_nothing() {
        let w = work("a", vec![Chapter::new("1", "1", "念仏")]);
        assert_eq!(search_scriptures([("cat", &w)], "  念仏 ").len(), 1);
        assert!(search_scriptures([("cat", &w)], "   ").is_empty());
        assert!(search_scriptures([("cat", &w)], "").is_empty());
    }

    #[test]
    fn hits_are_capped() {
        let chapters = (0..60)
            .map(|i| Chapter::new(i.to_string(), i.to_string(), "念仏"))
            .collect();
        let w = work("a", chapters);
        let hits = search_scriptures([("cat", &w)], "念仏");
        assert_eq!(hits.len(), MAX_HITS);
        assert_eq!(hits.last().map(|h| h.chapter_id.as_str()), Some("49"));
    }

    #[test]
    fn search_reads_data_directory_in_order() {
        let data_dir = create_test_data_dir();
        io::write_scripture(data_dir.path(), "b", &sample_scripture("second")).unwrap();
        io::write_scripture(data_dir.path(), "a", &sample_scripture("first")).unwrap();
        create_test_file(&data_dir, "a/broken.json", "{");

        let hits = search(data_dir.path(), "十余箇国").unwrap();
        let found: Vec<_> = hits
            .iter()
            .map(|h| (h.category.as_str(), h.scripture_id.as_str(), h.chapter_id.as_str()))
            .collect();
        assert_eq!(found, vec![("a", "first", "2"), ("b", "second", "2")]);
    }

    #[test]
    fn search_matches_raw_notation() {
        let data_dir = create_test_data_dir();
        io::write_scripture(data_dir.path(), "a", &sample_scripture("first")).unwrap();
        assert_eq!(search(data_dir.path(), "{誓願|せいがん}").unwrap().len(), 1);
    }
}
