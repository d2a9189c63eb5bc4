//! # OtakuVerse Core
//!
//! The decision point of the OtakuVerse anime assistant. Classifies free-form
//! chat text into search intents, orchestrates a chat turn against an
//! injected anime catalog, and defines the local preference stores.
//!
//! ## Quick Start
//!
//! ```rust
//! use otakuverse_core::{Genre, Intent, IntentClassifier};
//!
//! let classifier = IntentClassifier::new().unwrap();
//!
//! assert_eq!(classifier.classify("random anime please"), Intent::RandomAnime);
//! assert_eq!(
//!     classifier.classify("what is Cowboy Bebop"),
//!     Intent::General("Cowboy Bebop".into())
//! );
//! assert_eq!(
//!     classifier.classify("show me action anime"),
//!     Intent::GenreSearch(Genre::Action)
//! );
//! ```
pub mod chat;
pub mod error;
pub mod intent;
pub mod store;
pub mod types;

// Re-export primary API
pub use chat::{AnimeCatalog, ChatConfig, ChatSession, MessageSink, SearchResults};
pub use error::{CatalogError, OtakuError, Result, StoreError};
pub use intent::{IntentClassifier, IntentRule, PhraseStripper};
pub use store::{FavoritesStore, MemoryPreferences, RecentSearchStore, ThemeStore};
pub use types::{
    AnimeData, CharacterData, ChatMessage, Genre, Intent, IntentKind, RecentSearch, Sender,
};
