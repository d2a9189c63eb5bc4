//! Local user preferences: favorites, theme and recent searches.
//!
//! Each concern is its own trait so a session only depends on what it uses.

pub mod memory;

pub use memory::MemoryPreferences;

use crate::error::StoreError;
use crate::types::{AnimeData, RecentSearch};

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Recently submitted chat queries, newest first.
pub trait RecentSearchStore {
    /// All stored searches, newest first.
    fn recent_searches(&self) -> StoreResult<Vec<RecentSearch>>;

    /// Inserts `query` at the front, keeping at most `limit` entries.
    fn record_search(&mut self, query: &str, limit: usize) -> StoreResult<()>;

    /// Removes the entry at `index` (0 = newest).
    fn remove_search(&mut self, index: usize) -> StoreResult<RecentSearch>;

    fn clear_searches(&mut self) -> StoreResult<()>;
}

/// Anime the user has marked as favorites, in insertion order.
pub trait FavoritesStore {
    fn favorites(&self) -> StoreResult<Vec<AnimeData>>;

    /// Adds `anime` unless an entry with the same `mal_id` exists.
    fn add_favorite(&mut self, anime: &AnimeData) -> StoreResult<()>;

    fn remove_favorite(&mut self, mal_id: u64) -> StoreResult<()>;

    fn is_favorite(&self, mal_id: u64) -> StoreResult<bool>;

    fn clear_favorites(&mut self) -> StoreResult<()>;

    /// Adds or removes `anime`; returns `true` when it is now a favorite.
    fn toggle_favorite(&mut self, anime: &AnimeData) -> StoreResult<bool> {
        if self.is_favorite(anime.mal_id)? {
            self.remove_favorite(anime.mal_id)?;
            Ok(false)
        } else {
            self.add_favorite(anime)?;
            Ok(true)
        }
    }
}

/// Light/dark theme flag. Defaults to light.
pub trait ThemeStore {
    fn is_dark_mode(&self) -> StoreResult<bool>;

    fn set_dark_mode(&mut self, dark: bool) -> StoreResult<()>;

    /// Flips the flag; returns the new value.
    fn toggle_theme(&mut self) -> StoreResult<bool> {
        let dark = !self.is_dark_mode()?;
        self.set_dark_mode(dark)?;
        Ok(dark)
    }
}
