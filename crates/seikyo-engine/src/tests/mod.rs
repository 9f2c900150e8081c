use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{Chapter, GlossaryEntry, Scripture};

/// Create a temporary data directory
pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content, creating parent directories as needed
pub fn create_test_file(data_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = data_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A two-chapter work with ruby notation and a small glossary
pub fn sample_scripture(id: &str) -> Scripture {
    let mut first = Chapter::new(
        "1",
        "第1条",
        "弥陀の{誓願|せいがん}不思議にたすけられまゐらせて、往生をばとぐるなりと{信|しん}じて",
    );
    first.glossary = vec![
        GlossaryEntry::new("誓願", "せいがん", "阿弥陀仏の本願"),
        GlossaryEntry::new("往生", "おうじょう", "浄土に生まれること"),
    ];
    let second = Chapter::new("2", "第2条", "おのおの十余箇国のさかひをこえて");

    Scripture {
        id: id.to_string(),
        title: format!("{id} title"),
        source: "test edition".to_string(),
        chapters: vec![first, second],
    }
}
