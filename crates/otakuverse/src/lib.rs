//! # OtakuVerse
//!
//! Chat-style assistant over the Jikan anime metadata API.
//!
//! This facade re-exports the workspace crates:
//! - [`core`]: intent classification, chat session, preference store traits
//! - [`jikan`]: HTTP catalog client
//! - [`store`]: SQLite-backed preferences

pub use otakuverse_core as core;
pub use otakuverse_jikan as jikan;
pub use otakuverse_store as store;

pub use otakuverse_core::{ChatSession, Genre, Intent, IntentClassifier};
pub use otakuverse_jikan::JikanClient;
pub use otakuverse_store::SqlitePreferences;
