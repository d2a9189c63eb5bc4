//! # OtakuVerse Store
//!
//! SQLite-backed implementation of the OtakuVerse preference stores:
//! favorites, the theme flag and the recent-search list all live in a single
//! `preferences.sqlite3` file under the user's data directory.
pub mod sqlite;

pub use sqlite::{DATABASE_FILE, SqlitePreferences, default_data_dir};
