use crate::domain::{AppError, FavoriteEntry, HistoryEntry, PromptStoreShape};

/// Port for the persisted history/favorites collections.
///
/// Implementations hold one versioned blob; partial writes replace the
/// relevant collection and leave the rest untouched.
pub trait PromptStore {
    /// Load the full store. Missing, corrupt, or version-mismatched blobs
    /// load as the empty store.
    fn get_all(&self) -> Result<PromptStoreShape, AppError>;

    /// Replace the history collection.
    fn set_history(&self, history: &[HistoryEntry]) -> Result<(), AppError>;

    /// Replace the favorites collection.
    fn set_favorites(&self, favorites: &[FavoriteEntry]) -> Result<(), AppError>;

    /// Reset the store to its empty state.
    fn clear(&self) -> Result<(), AppError>;
}
