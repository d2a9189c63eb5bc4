//! # OtakuVerse Jikan
//!
//! Async client for the [Jikan](https://jikan.moe) v4 REST API, the
//! unofficial MyAnimeList API. Implements
//! [`AnimeCatalog`](otakuverse_core::AnimeCatalog) so it can back a
//! [`ChatSession`](otakuverse_core::ChatSession).
//!
//! Status 429 maps to `CatalogError::RateLimited`; any other non-200 status
//! maps to `CatalogError::Http`.
pub mod client;
pub mod config;

pub use client::{JikanClient, check_status};
pub use config::{DEFAULT_BASE_URL, JikanConfig};
