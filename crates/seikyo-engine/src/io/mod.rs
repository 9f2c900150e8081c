//! JSON record store: `<data root>/<category>/<id>.json`, one [`Scripture`] per file.

use crate::models::{Chapter, Scripture, ScriptureInfo};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

pub const RECORD_EXTENSION: &str = "json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid record {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid data directory: {0}")]
    InvalidDataDir(String),
    #[error("Chapter {chapter} not found in {scripture}")]
    ChapterNotFound { scripture: String, chapter: String },
}

/// Relative path of a record inside the data directory.
pub fn record_path(category: &str, id: &str) -> RelativePathBuf {
    RelativePath::new(category).join(format!("{id}.{RECORD_EXTENSION}"))
}

pub fn validate_data_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidDataDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Categories are the sub-directories of the data root, sorted by name.
pub fn categories(data_root: &Path) -> Result<Vec<String>, StoreError> {
    validate_data_dir(data_root)?;

    let mut out = Vec::new();
    for entry in fs::read_dir(data_root)? {
        let path = entry?.path();
        if path.is_dir()
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            out.push(name.to_string());
        }
    }
    out.sort();
    Ok(out)
}

/// Summaries of every record in `category`, sorted by file name.
///
/// Records that fail to parse are logged and skipped.
pub fn scriptures_by_category(
    data_root: &Path,
    category: &str,
) -> Result<Vec<ScriptureInfo>, StoreError> {
    Ok(load_category(data_root, category)?
        .iter()
        .map(|s| s.info(category))
        .collect())
}

pub fn all_scriptures(data_root: &Path) -> Result<Vec<ScriptureInfo>, StoreError> {
    let mut out = Vec::new();
    for category in categories(data_root)? {
        out.extend(scriptures_by_category(data_root, &category)?);
    }
    Ok(out)
}

/// Loads every readable record in `category`, sorted by file name.
pub fn load_category(data_root: &Path, category: &str) -> Result<Vec<Scripture>, StoreError> {
    let dir = RelativePath::new(category).to_path(data_root);
    if !dir.is_dir() {
        return Err(StoreError::NotFound(dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == RECORD_EXTENSION
        {
            files.push(path);
        }
    }
    files.sort();

    let mut out = Vec::with_capacity(files.len());
    for path in files {
        match read_record(&path) {
            Ok(scripture) => out.push(scripture),
            Err(e) => log::warn!("Skipping unreadable record: {e}"),
        }
    }
    Ok(out)
}

pub fn load_scripture(data_root: &Path, category: &str, id: &str) -> Result<Scripture, StoreError> {
    let path = record_path(category, id).to_path(data_root);
    if !path.exists() {
        return Err(StoreError::NotFound(path));
    }
    log::debug!("Loading record {}", path.display());
    read_record(&path)
}

/// Loads a work and clones out one of its chapters.
pub fn load_chapter(
    data_root: &Path,
    category: &str,
    id: &str,
    chapter_id: &str,
) -> Result<(Scripture, Chapter), StoreError> {
    let scripture = load_scripture(data_root, category, id)?;
    let chapter = scripture
        .chapter(chapter_id)
        .cloned()
        .ok_or_else(|| StoreError::ChapterNotFound {
            scripture: scripture.id.clone(),
            chapter: chapter_id.to_string(),
        })?;
    Ok((scripture, chapter))
}

/// Writes a record as pretty JSON, creating the category directory if needed.
pub fn write_scripture(
    data_root: &Path,
    category: &str,
    scripture: &Scripture,
) -> Result<PathBuf, StoreError> {
    let path = record_path(category, &scripture.id).to_path(data_root);

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(scripture).map_err(|source| StoreError::Parse {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json)?;
    Ok(path)
}

fn read_record(path: &Path) -> Result<Scripture, StoreError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_data_dir, create_test_file, sample_scripture};

    #[test]
    fn test_write_and_load_scripture() {
        let data_dir = create_test_data_dir();
        let scripture = sample_scripture("tannisho");

        let path = write_scripture(data_dir.path(), "tannisho", &scripture).unwrap();
        assert!(path.ends_with("tannisho/tannisho.json"));

        let loaded = load_scripture(data_dir.path(), "tannisho", "tannisho").unwrap();
        assert_eq!(loaded, scripture);
    }

    #[test]
    fn test_load_missing_scripture() {
        let data_dir = create_test_data_dir();
        let result = load_scripture(data_dir.path(), "tannisho", "nothing");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_categories_are_sorted_directories() {
        let data_dir = create_test_data_dir();
        write_scripture(data_dir.path(), "tannisho", &sample_scripture("tannisho")).unwrap();
        write_scripture(data_dir.path(), "kyogyoshinsho", &sample_scripture("kyogyoshinsho"))
            .unwrap();
        create_test_file(&data_dir, "README.txt", "not a category");

        let found = categories(data_dir.path()).unwrap();
        assert_eq!(found, vec!["kyogyoshinsho", "tannisho"]);
    }

    #[test]
    fn test_listing_skips_broken_and_foreign_files() {
        let data_dir = create_test_data_dir();
        write_scripture(data_dir.path(), "tannisho", &sample_scripture("tannisho")).unwrap();
        create_test_file(&data_dir, "tannisho/broken.json", "{ not json");
        create_test_file(&data_dir, "tannisho/notes.txt", "plain");

        let infos = scriptures_by_category(data_dir.path(), "tannisho").unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].id, "tannisho");
        assert_eq!(infos[0].chapter_count, 2);
    }

    #[test]
    fn test_load_broken_record_reports_parse_error() {
        let data_dir = create_test_data_dir();
        create_test_file(&data_dir, "tannisho/broken.json", "{ not json");
        let result = load_scripture(data_dir.path(), "tannisho", "broken");
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_load_chapter() {
        let data_dir = create_test_data_dir();
        write_scripture(data_dir.path(), "tannisho", &sample_scripture("tannisho")).unwrap();

        let (scripture, chapter) = load_chapter(data_dir.path(), "tannisho", "tannisho", "1").unwrap();
        assert_eq!(scripture.id, "tannisho");
        assert_eq!(chapter.title, "第1条");

        let missing = load_chapter(data_dir.path(), "tannisho", "tannisho", "99");
        assert!(matches!(missing, Err(StoreError::ChapterNotFound { .. })));
    }

    #[test]
    fn test_all_scriptures_across_categories() {
        let data_dir = create_test_data_dir();
        write_scripture(data_dir.path(), "b", &sample_scripture("second")).unwrap();
        write_scripture(data_dir.path(), "a", &sample_scripture("first")).unwrap();

        let all = all_scriptures(data_dir.path()).unwrap();
        let ids: Vec<_> = all.iter().map(|i| (i.category.as_str(), i.id.as_str())).collect();
        assert_eq!(ids, vec![("a", "first"), ("b", "second")]);
    }

    #[test]
    fn test_validate_data_dir_not_exists() {
        let result = validate_data_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(StoreError::InvalidDataDir(_))));
    }
}
