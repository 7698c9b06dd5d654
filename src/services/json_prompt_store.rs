//! Filesystem-backed prompt store.
//!
//! The whole store is one JSON blob. Reads are forgiving: a missing file,
//! unparseable content, or an unknown schema version all load as the empty
//! store. Writes replace the blob atomically enough for a single-process
//! CLI (full rewrite per mutation).

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{AppError, FavoriteEntry, HistoryEntry, PromptStoreShape, STORE_VERSION};
use crate::ports::PromptStore;

#[derive(Debug, Clone)]
pub struct FilesystemPromptStore {
    path: PathBuf,
}

impl FilesystemPromptStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured location.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store_path.clone())
    }

    fn load(&self) -> Result<PromptStoreShape, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PromptStoreShape::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<PromptStoreShape>(&raw) {
            Ok(store) if store.version == STORE_VERSION => Ok(store),
            // Unknown version or corrupt blob: start over.
            _ => Ok(PromptStoreShape::default()),
        }
    }

    fn save(&self, store: &PromptStoreShape) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }

    fn mutate(&self, update: impl FnOnce(&mut PromptStoreShape)) -> Result<(), AppError> {
        let mut store = self.load()?;
        update(&mut store);
        self.save(&store)
    }
}

impl PromptStore for FilesystemPromptStore {
    fn get_all(&self) -> Result<PromptStoreShape, AppError> {
        self.load()
    }

    fn set_history(&self, history: &[HistoryEntry]) -> Result<(), AppError> {
        self.mutate(|store| store.history = history.to_vec())
    }

    fn set_favorites(&self, favorites: &[FavoriteEntry]) -> Result<(), AppError> {
        self.mutate(|store| store.favorites = favorites.to_vec())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.save(&PromptStoreShape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PromptBuilderInput, PromptResult, entry_id, push_history};
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_entry(role_prompt: &str) -> HistoryEntry {
        HistoryEntry {
            id: entry_id(role_prompt),
            created_at: Utc::now(),
            result: PromptResult {
                input: PromptBuilderInput::default(),
                role_prompt: role_prompt.to_string(),
                summary: "x / 業界: 業界未指定".to_string(),
                follow_up_questions: vec!["q".to_string()],
            },
        }
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempdir().expect("tempdir");
        let store = FilesystemPromptStore::new(dir.path().join("prompt_store.json"));

        let loaded = store.get_all().expect("load");
        assert_eq!(loaded.version, STORE_VERSION);
        assert!(loaded.history.is_empty());
        assert!(loaded.favorites.is_empty());
    }

    #[test]
    fn history_round_trips_through_the_blob() {
        let dir = tempdir().expect("tempdir");
        let store = FilesystemPromptStore::new(dir.path().join("nested").join("store.json"));

        let mut history = Vec::new();
        push_history(&mut history, sample_entry("プロンプト"));
        store.set_history(&history).expect("persist");

        let loaded = store.get_all().expect("load");
        assert_eq!(loaded.history.len(), 1);
        assert_eq!(loaded.history[0].result.role_prompt, "プロンプト");
    }

    #[test]
    fn set_favorites_preserves_history() {
        let dir = tempdir().expect("tempdir");
        let store = FilesystemPromptStore::new(dir.path().join("store.json"));

        store.set_history(&[sample_entry("h")]).expect("history");
        store.set_favorites(&[]).expect("favorites");

        assert_eq!(store.get_all().expect("load").history.len(), 1);
    }

    #[test]
    fn unknown_version_resets_to_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"version":99,"history":[],"favorites":[]}"#).expect("seed");

        let store = FilesystemPromptStore::new(path);
        assert!(store.get_all().expect("load").history.is_empty());
    }

    #[test]
    fn corrupt_blob_resets_to_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").expect("seed");

        let store = FilesystemPromptStore::new(path);
        let loaded = store.get_all().expect("load");
        assert_eq!(loaded.version, STORE_VERSION);
        assert!(loaded.history.is_empty());
    }

    #[test]
    fn clear_empties_the_store() {
        let dir = tempdir().expect("tempdir");
        let store = FilesystemPromptStore::new(dir.path().join("store.json"));
        store.set_history(&[sample_entry("h")]).expect("history");

        store.clear().expect("clear");
        assert!(store.get_all().expect("load").history.is_empty());
    }
}
