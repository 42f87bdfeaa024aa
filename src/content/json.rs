//! JSON import/export of content packs.
//! A content pack replaces the built-in tables with a whole unit read from disk.

use crate::error::ContentError;
use crate::models::{ContentStore, QuizItem, SentenceEntry, VocabEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Serialize, Deserialize)]
pub struct ContentPack {
    pub title: String,
    #[serde(default)]
    pub vocabulary: Vec<VocabEntry>,
    #[serde(default)]
    pub sentences: Vec<SentenceEntry>,
    pub quiz_pool: Vec<QuizItem>,
}

impl From<&ContentStore> for ContentPack {
    fn from(store: &ContentStore) -> Self {
        Self {
            title: store.title().to_string(),
            vocabulary: store.list_vocabulary().to_vec(),
            sentences: store.list_sentences().to_vec(),
            quiz_pool: store.list_quiz_pool().to_vec(),
        }
    }
}

/// Suggested file name for a pack, with characters that some file systems reject replaced.
pub fn pack_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim().trim_end_matches('.');
    if stem.is_empty() {
        "content.json".to_string()
    } else {
        format!("{}.json", stem)
    }
}

/// Writes the store's tables as pretty-printed JSON.
pub fn export_content_pack(store: &ContentStore, path: &Path) -> Result<(), ContentError> {
    let json_string = serde_json::to_string_pretty(&ContentPack::from(store))?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("Content pack '{}' exported to {}", store.title(), path.display());
    Ok(())
}

/// Reads a content pack and validates it exactly like the built-in tables.
pub fn import_content_pack(path: &Path) -> Result<ContentStore, ContentError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let pack: ContentPack = serde_json::from_str(&contents)?;
    let store = ContentStore::new(&pack.title, pack.vocabulary, pack.sentences, pack.quiz_pool)?;

    log::info!(
        "Content pack '{}' imported from {} ({} words, {} sentences, {} questions)",
        store.title(),
        path.display(),
        store.list_vocabulary().len(),
        store.list_sentences().len(),
        store.list_quiz_pool().len()
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin::Dataset;
    use std::fs;

    #[test]
    fn test_pack_file_name_is_portable() {
        assert_eq!(pack_file_name("Unit 23: O Hekal"), "Unit 23_ O Hekal.json");
        assert_eq!(pack_file_name("a/b\\c?"), "a_b_c_.json");
        assert_eq!(pack_file_name("  ..."), "content.json");
        assert_eq!(pack_file_name("O Hekal"), "O Hekal.json");
    }

    #[test]
    fn test_export_then_import_keeps_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit23.json");
        let store = ContentStore::builtin(Dataset::Moedict).unwrap();

        export_content_pack(&store, &path).unwrap();
        let imported = import_content_pack(&path).unwrap();

        assert_eq!(imported.title(), store.title());
        assert_eq!(imported.list_vocabulary(), store.list_vocabulary());
        assert_eq!(imported.list_sentences(), store.list_sentences());
        assert_eq!(imported.list_quiz_pool(), store.list_quiz_pool());
    }

    #[test]
    fn test_import_minimal_pack() {
        let json_content = r#"{
  "title": "Mini",
  "quiz_pool": [
    { "prompt": "Riyar", "options": ["海", "山"], "correct_answer": "海", "hint": "water" },
    { "prompt": "Cidal", "options": ["太陽", "月亮"], "correct_answer": "太陽", "hint": "day" },
    { "prompt": "Folad", "options": ["太陽", "月亮"], "correct_answer": "月亮", "hint": "night" }
  ]
}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.json");
        fs::write(&path, json_content).unwrap();

        let store = import_content_pack(&path).unwrap();
        assert_eq!(store.title(), "Mini");
        assert!(store.list_vocabulary().is_empty());
        assert_eq!(store.list_quiz_pool().len(), 3);
        assert!(!store.list_quiz_pool()[0].has_audio());
    }

    #[test]
    fn test_import_rejects_bad_answer() {
        let json_content = r#"{
  "title": "Broken",
  "quiz_pool": [
    { "prompt": "Riyar", "options": ["海", "山"], "correct_answer": "河", "hint": "" },
    { "prompt": "Cidal", "options": ["太陽", "月亮"], "correct_answer": "太陽", "hint": "" },
    { "prompt": "Folad", "options": ["太陽", "月亮"], "correct_answer": "月亮", "hint": "" }
  ]
}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, json_content).unwrap();

        let result = import_content_pack(&path);
        assert!(matches!(
            result,
            Err(ContentError::AnswerNotInOptions { .. })
        ));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_content_pack(Path::new("nonexistent_pack_xyz123.json"));
        assert!(matches!(result, Err(ContentError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = import_content_pack(&path);
        assert!(matches!(result, Err(ContentError::Json(_))));
    }
}
