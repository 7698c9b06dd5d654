//! History and favorites collections.
//!
//! Both live in one versioned store blob. History is bounded and
//! deduplicated by `role_prompt` equality, newest first; favorites are
//! user-named and replaced by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::prompt::PromptResult;

/// Maximum retained history entries.
pub const MAX_HISTORY: usize = 5;
/// Store blob schema version; anything else resets to empty.
pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub result: PromptResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: String,
    pub name: String,
    pub added_at: DateTime<Utc>,
    pub result: PromptResult,
}

/// The single persisted blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptStoreShape {
    pub version: u32,
    pub history: Vec<HistoryEntry>,
    pub favorites: Vec<FavoriteEntry>,
}

impl Default for PromptStoreShape {
    fn default() -> Self {
        Self { version: STORE_VERSION, history: Vec::new(), favorites: Vec::new() }
    }
}

/// Stable entry id: hex SHA-256 of the seed text.
pub fn entry_id(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Prepend a history entry, dropping any older entry with the same
/// `role_prompt` and trimming to [`MAX_HISTORY`].
pub fn push_history(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.retain(|existing| existing.result.role_prompt != entry.result.role_prompt);
    history.insert(0, entry);
    history.truncate(MAX_HISTORY);
}

/// Prepend a favorite, replacing any existing entry with the same name.
pub fn upsert_favorite(favorites: &mut Vec<FavoriteEntry>, entry: FavoriteEntry) {
    favorites.retain(|existing| existing.name != entry.name);
    favorites.insert(0, entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::{PromptBuilderInput, PromptResult};

    fn result(role_prompt: &str) -> PromptResult {
        PromptResult {
            input: PromptBuilderInput::default(),
            role_prompt: role_prompt.to_string(),
            summary: "テスト / 業界: 業界未指定".to_string(),
            follow_up_questions: Vec::new(),
        }
    }

    fn history_entry(role_prompt: &str, seconds: i64) -> HistoryEntry {
        HistoryEntry {
            id: entry_id(role_prompt),
            created_at: DateTime::from_timestamp(seconds, 0).unwrap_or_default(),
            result: result(role_prompt),
        }
    }

    #[test]
    fn identical_prompts_keep_only_the_newest_entry() {
        let mut history = Vec::new();
        push_history(&mut history, history_entry("same", 100));
        push_history(&mut history, history_entry("same", 200));

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].created_at.timestamp(), 200);
    }

    #[test]
    fn history_is_bounded_and_newest_first() {
        let mut history = Vec::new();
        for i in 0..7 {
            push_history(&mut history, history_entry(&format!("prompt-{i}"), i));
        }

        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history[0].result.role_prompt, "prompt-6");
        assert_eq!(history[MAX_HISTORY - 1].result.role_prompt, "prompt-2");
    }

    #[test]
    fn favorites_replace_by_name() {
        let mut favorites = Vec::new();
        let first = FavoriteEntry {
            id: entry_id("a"),
            name: "定番".to_string(),
            added_at: DateTime::from_timestamp(1, 0).unwrap_or_default(),
            result: result("a"),
        };
        let second = FavoriteEntry {
            id: entry_id("b"),
            name: "定番".to_string(),
            added_at: DateTime::from_timestamp(2, 0).unwrap_or_default(),
            result: result("b"),
        };
        upsert_favorite(&mut favorites, first);
        upsert_favorite(&mut favorites, second);

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].result.role_prompt, "b");
    }

    #[test]
    fn entry_ids_are_stable_hex_digests() {
        assert_eq!(entry_id("x"), entry_id("x"));
        assert_ne!(entry_id("x"), entry_id("y"));
        assert_eq!(entry_id("x").len(), 64);
    }
}
