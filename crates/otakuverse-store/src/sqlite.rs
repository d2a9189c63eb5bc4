use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use otakuverse_core::store::{FavoritesStore, RecentSearchStore, StoreResult, ThemeStore};
use otakuverse_core::{AnimeData, RecentSearch, StoreError};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

/// File name of the preferences database inside the data directory.
pub const DATABASE_FILE: &str = "preferences.sqlite3";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS recent_searches (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    query       TEXT    NOT NULL,
    searched_at TEXT    NOT NULL
);
CREATE TABLE IF NOT EXISTS favorites (
    mal_id   INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,
    record   TEXT    NOT NULL
);
CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

const DARK_MODE_KEY: &str = "is_dark_mode";

/// Default data directory (`$XDG_DATA_HOME/otakuverse` or platform equivalent).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("otakuverse")
}

fn backend(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Favorites, theme and recent searches persisted in one SQLite database.
pub struct SqlitePreferences {
    conn: Connection,
}

impl SqlitePreferences {
    /// Opens (or creates) the database at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created and
    /// `StoreError::Backend` if SQLite fails to open or migrate.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        info!(path = %path.display(), "opening preferences database");
        let conn = Connection::open(path).map_err(backend)?;
        Self::initialize(conn)
    }

    /// Opens `preferences.sqlite3` inside `data_dir`.
    pub fn open_in_dir(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open(data_dir.as_ref().join(DATABASE_FILE))
    }

    /// Opens the database in [`default_data_dir`].
    pub fn open_default() -> StoreResult<Self> {
        Self::open_in_dir(default_data_dir())
    }

    /// Opens a private in-memory database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA).map_err(backend)?;
        debug!("preferences schema ready");
        Ok(Self { conn })
    }

    fn search_count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recent_searches", [], |row| row.get(0))
            .map_err(backend)?;
        Ok(count as usize)
    }
}

fn parse_timestamp(raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Backend(format!("bad timestamp {raw:?}: {e}")))
}

impl RecentSearchStore for SqlitePreferences {
    fn recent_searches(&self) -> StoreResult<Vec<RecentSearch>> {
        let mut stmt = self
            .conn
            .prepare("SELECT query, searched_at FROM recent_searches ORDER BY id DESC")
            .map_err(backend)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(backend)?;

        let mut searches = Vec::new();
        for row in rows {
            let (query, searched_at) = row.map_err(backend)?;
            searches.push(RecentSearch {
                query,
                timestamp: parse_timestamp(&searched_at)?,
            });
        }
        Ok(searches)
    }

    fn record_search(&mut self, query: &str, limit: usize) -> StoreResult<()> {
        let search = RecentSearch::new(query);
        let tx = self.conn.transaction().map_err(backend)?;
        tx.execute(
            "INSERT INTO recent_searches (query, searched_at) VALUES (?1, ?2)",
            params![search.query, search.timestamp.to_rfc3339()],
        )
        .map_err(backend)?;
        tx.execute(
            "DELETE FROM recent_searches WHERE id NOT IN (
                SELECT id FROM recent_searches ORDER BY id DESC LIMIT ?1
            )",
            params![limit as i64],
        )
        .map_err(backend)?;
        tx.commit().map_err(backend)
    }

    fn remove_search(&mut self, index: usize) -> StoreResult<RecentSearch> {
        let row = self
            .conn
            .query_row(
                "SELECT id, query, searched_at FROM recent_searches
                 ORDER BY id DESC LIMIT 1 OFFSET ?1",
                params![index as i64],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(backend)?;

        let Some((id, query, searched_at)) = row else {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.search_count()?,
            });
        };

        self.conn
            .execute("DELETE FROM recent_searches WHERE id = ?1", params![id])
            .map_err(backend)?;
        Ok(RecentSearch {
            query,
            timestamp: parse_timestamp(&searched_at)?,
        })
    }

    fn clear_searches(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM recent_searches", [])
            .map_err(backend)?;
        Ok(())
    }
}

impl FavoritesStore for SqlitePreferences {
    fn favorites(&self) -> StoreResult<Vec<AnimeData>> {
        let mut stmt = self
            .conn
            .prepare("SELECT record FROM favorites ORDER BY position ASC")
            .map_err(backend)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(backend)?;

        let mut favorites = Vec::new();
        for row in rows {
            let record = row.map_err(backend)?;
            favorites.push(serde_json::from_str(&record)?);
        }
        Ok(favorites)
    }

    fn add_favorite(&mut self, anime: &AnimeData) -> StoreResult<()> {
        let record = serde_json::to_string(anime)?;
        self.conn
            .execute(
                "INSERT OR IGNORE INTO favorites (mal_id, position, record)
                 VALUES (?1, (SELECT COALESCE(MAX(position), 0) + 1 FROM favorites), ?2)",
                params![anime.mal_id as i64, record],
            )
            .map_err(backend)?;
        Ok(())
    }

    fn remove_favorite(&mut self, mal_id: u64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM favorites WHERE mal_id = ?1", params![mal_id as i64])
            .map_err(backend)?;
        Ok(())
    }

    fn is_favorite(&self, mal_id: u64) -> StoreResult<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM favorites WHERE mal_id = ?1)",
                params![mal_id as i64],
                |row| row.get(0),
            )
            .map_err(backend)
    }

    fn clear_favorites(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM favorites", [])
            .map_err(backend)?;
        Ok(())
    }
}

impl ThemeStore for SqlitePreferences {
    fn is_dark_mode(&self) -> StoreResult<bool> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![DARK_MODE_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(backend)?;
        Ok(value.as_deref() == Some("true"))
    }

    fn set_dark_mode(&mut self, dark: bool) -> StoreResult<()> {
        self.conn
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![DARK_MODE_KEY, dark.to_string()],
            )
            .map_err(backend)?;
        Ok(())
    }
}
