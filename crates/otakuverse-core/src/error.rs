use thiserror::Error;

/// Errors raised by an anime catalog backend.
///
/// The `Display` strings are shown to the user verbatim inside the
/// assistant's error message, so they are phrased for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request URL could not be built.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The request never produced an HTTP response.
    #[error("Invalid response: {0}")]
    Transport(String),

    /// The catalog answered with a non-success status.
    #[error("HTTP Error: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The catalog answered with status 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The response body did not match the expected envelope.
    #[error("Failed to decode response")]
    Decode(String),

    /// The catalog returned an envelope without data.
    #[error("No data found")]
    NoData,
}

/// Errors raised by the preference stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database reported an error.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored record could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while opening the store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A positional removal referenced a missing entry.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of stored entries.
        len: usize,
    },
}

/// Errors that can occur during OtakuVerse core operations.
#[derive(Debug, Error)]
pub enum OtakuError {
    /// A phrase pattern failed to compile (should not happen with static phrases).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Preference store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unknown genre keyword.
    #[error("unknown genre: {0:?}")]
    UnknownGenre(String),
}

/// Result type alias for OtakuVerse operations.
pub type Result<T> = std::result::Result<T, OtakuError>;
