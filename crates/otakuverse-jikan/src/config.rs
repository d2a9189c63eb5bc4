use std::time::Duration;

/// Public Jikan v4 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Configuration for the Jikan HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JikanConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `limit` sent with anime list requests.
    pub anime_limit: u32,
    /// `limit` sent with character searches.
    pub character_limit: u32,
}

impl Default for JikanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            anime_limit: 10,
            character_limit: 5,
        }
    }
}

impl JikanConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another Jikan instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the anime list size (Jikan caps it at 25).
    pub fn with_anime_limit(mut self, limit: u32) -> Self {
        self.anime_limit = limit.clamp(1, 25);
        self
    }

    /// Set the character list size (Jikan caps it at 25).
    pub fn with_character_limit(mut self, limit: u32) -> Self {
        self.character_limit = limit.clamp(1, 25);
        self
    }
}
