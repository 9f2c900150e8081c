//! Conversion of plain-text scripture sources into [`Scripture`] records.
//!
//! Source format, one directive per line:
//! - `#1 <title>` sets the work title
//! - `#2 <title>` starts a chapter
//! - `P--...` page markers and blank lines are dropped
//!
//! Everything else is chapter body, kept verbatim.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Chapter, Scripture};

pub const PAGE_MARKER: &str = "P--";
pub const TITLE_MARKER: &str = "#1";
pub const CHAPTER_MARKER: &str = "#2";
pub const SOURCE_ATTRIBUTION: &str =
    "浄土真宗本願寺派総合研究所「浄土真宗聖典」聖教データベース";

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parses a plain-text source into a record with the given id.
///
/// Body lines before the first chapter directive are discarded.
pub fn parse_source(text: &str, id: &str) -> Scripture {
    let mut title = String::new();
    let mut chapters = Vec::new();
    let mut current: Option<Chapter> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(PAGE_MARKER) {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(TITLE_MARKER) {
            title = rest.trim().to_string();
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(CHAPTER_MARKER) {
            if let Some(mut chapter) = current.take() {
                chapter.content = chapter_body(&body);
                chapters.push(chapter);
            }
            let raw = rest.trim();
            current = Some(Chapter::new(raw, chapter_title(raw), ""));
            body.clear();
            continue;
        }

        body.push(line);
    }

    if let Some(mut chapter) = current {
        chapter.content = chapter_body(&body);
        chapters.push(chapter);
    }

    Scripture {
        id: id.to_string(),
        title,
        source: SOURCE_ATTRIBUTION.to_string(),
        chapters,
    }
}

/// Display title for a raw chapter heading: bare numbers become `第N条`.
pub fn chapter_title(raw: &str) -> String {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("第{raw}条")
    } else {
        raw.to_string()
    }
}

fn chapter_body(lines: &[&str]) -> String {
    let joined = lines.join("\n");
    BLANK_RUN_RE.replace_all(joined.trim(), "\n\n").into_owned()
}

/// Converts `input` and writes the record as pretty JSON to `output`.
///
/// The record id is the input file stem.
pub fn convert_file(input: &Path, output: &Path) -> Result<Scripture, ConvertError> {
    let text = fs::read_to_string(input)?;
    let id = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let scripture = parse_source(&text, &id);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, serde_json::to_string_pretty(&scripture)?)?;

    log::info!(
        "Converted {} ({} chapters) to {}",
        scripture.title,
        scripture.chapters.len(),
        output.display()
    );
    Ok(scripture)
}

/// Output path next to the input, with a `.json` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(crate::io::RECORD_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_data_dir, create_test_file};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SOURCE: &str = "\
#1 歎異抄
P--831
前書きは捨てる
#2 序
竊かに愚案を回らして
P--832

ほぼ古今を勘ふるに
#2 1
弥陀の誓願不思議に
  (1) 段落番号は残る
";

    #[test]
    fn parses_title_and_chapters() {
        let s = parse_source(SOURCE, "tannisho");
        assert_eq!(s.id, "tannisho");
        assert_eq!(s.title, "歎異抄");
        assert_eq!(s.source, SOURCE_ATTRIBUTION);

        let ids: Vec<_> = s.chapters.iter().map(|c| (c.id.as_str(), c.title.as_str())).collect();
        assert_eq!(ids, vec![("序", "序"), ("1", "第1条")]);
        assert_eq!(s.chapters[0].content, "竊かに愚案を回らして\nほぼ古今を勘ふるに");
        assert_eq!(s.chapters[1].content, "弥陀の誓願不思議に\n  (1) 段落番号は残る");
    }

    #[test]
    fn no_chapter_directive_yields_no_chapters() {
        let s = parse_source("#1 題\n本文だけ", "x");
        assert_eq!(s.title, "題");
        assert!(s.chapters.is_empty());
    }

    #[test]
    fn empty_chapter_has_empty_content() {
        let s = parse_source("#2 1\n#2 2\n本文", "x");
        assert_eq!(s.chapters[0].content, "");
        assert_eq!(s.chapters[1].content, "本文");
    }

    #[rstest]
    #[case("1", "第1条")]
    #[case("18", "第18条")]
    #[case("後序", "後序")]
    #[case("1a", "1a")]
    #[case("", "")]
    fn formats_chapter_titles(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(chapter_title(raw), expected);
    }

    #[test]
    fn convert_file_writes_record() {
        let dir = create_test_data_dir();
        let input = create_test_file(&dir, "src/tannisho.txt", SOURCE);
        let output = dir.path().join("out/tannisho/tannisho.json");

        let converted = convert_file(&input, &output).unwrap();
        assert_eq!(converted.id, "tannisho");

        let written: Scripture =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, converted);
    }

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("data/tannisho/tannisho.txt")),
            PathBuf::from("data/tannisho/tannisho.json")
        );
    }
}
