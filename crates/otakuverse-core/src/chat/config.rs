/// Configuration for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Maximum number of recent searches kept.
    pub recent_search_limit: usize,
    /// Number of anime cards shown for a multi-result answer.
    pub preview_results: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            recent_search_limit: 20,
            preview_results: 3,
        }
    }
}

impl ChatConfig {
    /// Create a new chat configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many recent searches are kept.
    pub fn with_recent_search_limit(mut self, limit: usize) -> Self {
        self.recent_search_limit = limit;
        self
    }

    /// Set how many anime cards are shown per answer (at least one).
    pub fn with_preview_results(mut self, count: usize) -> Self {
        self.preview_results = count.max(1);
        self
    }
}
