use crate::error::StoreError;
use crate::types::{AnimeData, RecentSearch};

use super::{FavoritesStore, RecentSearchStore, StoreResult, ThemeStore};

/// Non-persistent preferences held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    searches: Vec<RecentSearch>,
    favorites: Vec<AnimeData>,
    dark_mode: bool,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecentSearchStore for MemoryPreferences {
    fn recent_searches(&self) -> StoreResult<Vec<RecentSearch>> {
        Ok(self.searches.clone())
    }

    fn record_search(&mut self, query: &str, limit: usize) -> StoreResult<()> {
        self.searches.insert(0, RecentSearch::new(query));
        self.searches.truncate(limit);
        Ok(())
    }

    fn remove_search(&mut self, index: usize) -> StoreResult<RecentSearch> {
        if index >= self.searches.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.searches.len(),
            });
        }
        Ok(self.searches.remove(index))
    }

    fn clear_searches(&mut self) -> StoreResult<()> {
        self.searches.clear();
        Ok(())
    }
}

impl FavoritesStore for MemoryPreferences {
    fn favorites(&self) -> StoreResult<Vec<AnimeData>> {
        Ok(self.favorites.clone())
    }

    fn add_favorite(&mut self, anime: &AnimeData) -> StoreResult<()> {
        if !self.favorites.iter().any(|f| f.same_anime(anime)) {
            self.favorites.push(anime.clone());
        }
        Ok(())
    }

    fn remove_favorite(&mut self, mal_id: u64) -> StoreResult<()> {
        self.favorites.retain(|f| f.mal_id != mal_id);
        Ok(())
    }

    fn is_favorite(&self, mal_id: u64) -> StoreResult<bool> {
        Ok(self.favorites.iter().any(|f| f.mal_id == mal_id))
    }

    fn clear_favorites(&mut self) -> StoreResult<()> {
        self.favorites.clear();
        Ok(())
    }
}

impl ThemeStore for MemoryPreferences {
    fn is_dark_mode(&self) -> StoreResult<bool> {
        Ok(self.dark_mode)
    }

    fn set_dark_mode(&mut self, dark: bool) -> StoreResult<()> {
        self.dark_mode = dark;
        Ok(())
    }
}
