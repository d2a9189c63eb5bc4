use tracing::{info, warn};

use crate::error::Result;
use crate::intent::IntentClassifier;
use crate::store::RecentSearchStore;
use crate::types::{ChatMessage, Intent};

use super::catalog::{AnimeCatalog, dispatch};
use super::config::ChatConfig;
use super::render;
use super::sink::MessageSink;

/// One conversation: classifies each user turn, queries the catalog and
/// pushes the resulting messages to the sink.
///
/// Collaborators are injected; the session owns no global state.
pub struct ChatSession<C, R, S> {
    classifier: IntentClassifier,
    catalog: C,
    store: R,
    sink: S,
    config: ChatConfig,
}

impl<C, R, S> ChatSession<C, R, S>
where
    C: AnimeCatalog,
    R: RecentSearchStore,
    S: MessageSink,
{
    /// Create a session over the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns `OtakuError::RegexError` if the classifier fails to build.
    pub fn new(catalog: C, store: R, sink: S, config: ChatConfig) -> Result<Self> {
        Ok(Self {
            classifier: IntentClassifier::new()?,
            catalog,
            store,
            sink,
            config,
        })
    }

    /// Pushes the greeting message.
    pub fn welcome(&mut self) {
        self.sink.push(render::welcome());
    }

    /// Handles one user turn and returns the intent it was classified as.
    ///
    /// Catalog failures become an assistant message; they are not returned.
    pub async fn process_user_message(&mut self, text: &str) -> Intent {
        self.sink.push(ChatMessage::user(text));

        if let Err(e) = self
            .store
            .record_search(text, self.config.recent_search_limit)
        {
            warn!(error = %e, "failed to record recent search");
        }

        let intent = self.classifier.classify(text);
        info!(%intent, "dispatching chat turn");

        match dispatch(&self.catalog, &intent).await {
            Ok(results) => {
                for message in render::render(results, self.config.preview_results) {
                    self.sink.push(message);
                }
            }
            Err(e) => {
                warn!(error = %e, %intent, "catalog lookup failed");
                self.sink.push(render::render_error(&e));
            }
        }

        intent
    }

    /// Runs a past query again as a new turn.
    pub async fn repeat_search(&mut self, query: &str) -> Intent {
        self.process_user_message(query).await
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The preference store recent searches are recorded in.
    ///
    /// Callers may use any further store traits `R` implements, such as
    /// favorites or theme.
    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut R {
        &mut self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Consumes the session, returning the preference store and the sink.
    pub fn into_parts(self) -> (R, S) {
        (self.store, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::chat::catalog::CatalogResult;
    use crate::error::CatalogError;
    use crate::store::MemoryPreferences;
    use crate::types::{AnimeData, CharacterData, Genre, Sender};

    #[derive(Default)]
    struct FakeCatalog {
        anime: Vec<AnimeData>,
        characters: Vec<CharacterData>,
        failure: Option<CatalogError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeCatalog {
        fn with_anime(n: u64) -> Self {
            Self {
                anime: (1..=n).map(|id| AnimeData::new(id, format!("Anime {id}"))).collect(),
                ..Self::default()
            }
        }

        fn failing(error: CatalogError) -> Self {
            Self {
                failure: Some(error),
                ..Self::default()
            }
        }

        fn record(&self, call: String) -> CatalogResult<()> {
            self.calls.lock().unwrap().push(call);
            match &self.failure {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AnimeCatalog for FakeCatalog {
        async fn search_anime(&self, query: &str) -> CatalogResult<Vec<AnimeData>> {
            self.record(format!("anime:{query}"))?;
            Ok(self.anime.clone())
        }

        async fn search_characters(&self, query: &str) -> CatalogResult<Vec<CharacterData>> {
            self.record(format!("characters:{query}"))?;
            Ok(self.characters.clone())
        }

        async fn search_by_genre(&self, genre: Genre) -> CatalogResult<Vec<AnimeData>> {
            self.record(format!("genre:{}", genre.mal_id()))?;
            Ok(self.anime.clone())
        }

        async fn top_anime(&self) -> CatalogResult<Vec<AnimeData>> {
            self.record("top".into())?;
            Ok(self.anime.clone())
        }

        async fn random_anime(&self) -> CatalogResult<Option<AnimeData>> {
            self.record("random".into())?;
            Ok(self.anime.first().cloned())
        }
    }

    type TestSession = ChatSession<FakeCatalog, MemoryPreferences, Vec<ChatMessage>>;

    fn session(catalog: FakeCatalog) -> TestSession {
        ChatSession::new(
            catalog,
            MemoryPreferences::new(),
            Vec::new(),
            ChatConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn welcome_is_first_message() {
        let mut s = session(FakeCatalog::default());
        s.welcome();
        assert_eq!(s.sink().len(), 1);
        assert_eq!(s.sink()[0].text, render::WELCOME_TEXT);
    }

    #[tokio::test]
    async fn anime_turn_records_user_message_and_results() {
        let mut s = session(FakeCatalog::with_anime(1));
        let intent = s.process_user_message("show me Naruto").await;

        assert_eq!(intent, Intent::AnimeSearch("Naruto".into()));
        assert_eq!(s.catalog().calls(), ["anime:Naruto"]);

        let transcript = s.sink();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].sender, Sender::User);
        assert_eq!(transcript[0].text, "show me Naruto");
        assert_eq!(transcript[1].text, "Here's what I found for 'Naruto':");
    }

    #[tokio::test]
    async fn genre_turn_uses_genre_label_and_id() {
        let mut s = session(FakeCatalog::with_anime(5));
        s.process_user_message("show me action anime").await;

        assert_eq!(s.catalog().calls(), ["genre:1"]);
        let transcript = s.sink();
        assert_eq!(
            transcript[1].text,
            "I found 5 anime matching 'anime in action genre'. Here's the top result:"
        );
        assert_eq!(
            transcript.last().unwrap().text,
            "And 2 more results! Try being more specific if you're looking for something particular."
        );
    }

    #[tokio::test]
    async fn top_and_random_turns() {
        let mut s = session(FakeCatalog::with_anime(2));
        s.process_user_message("best of all time").await;
        s.process_user_message("surprise me").await;

        assert_eq!(s.catalog().calls(), ["top", "random"]);
        let texts: Vec<_> = s.sink().iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"I found 2 anime matching 'top anime'. Here's the top result:"));
        assert_eq!(texts.last(), Some(&"Here's a random anime for you!"));
    }

    #[tokio::test]
    async fn character_turn() {
        let mut s = session(FakeCatalog::default());
        s.process_user_message("who is Levi").await;

        assert_eq!(s.catalog().calls(), ["characters:Levi"]);
        assert_eq!(
            s.sink()[1].text,
            "Sorry, I couldn't find any characters matching 'Levi'. Try a different search term!"
        );
    }

    #[tokio::test]
    async fn general_turn_searches_anime() {
        let mut s = session(FakeCatalog::default());
        let intent = s.process_user_message("tell me about Naruto").await;

        assert_eq!(intent, Intent::General("Naruto".into()));
        assert_eq!(s.catalog().calls(), ["anime:Naruto"]);
    }

    #[tokio::test]
    async fn catalog_error_becomes_message() {
        let mut s = session(FakeCatalog::failing(CatalogError::Http { status: 503 }));
        s.process_user_message("what is Cowboy Bebop").await;

        let transcript = s.sink();
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript[1].text,
            "Sorry, I encountered an error: HTTP Error: 503. Please try again."
        );
    }

    #[tokio::test]
    async fn turns_are_recorded_as_recent_searches() {
        let mut s = session(FakeCatalog::default());
        s.process_user_message("first").await;
        s.repeat_search("second").await;

        let queries: Vec<_> = s
            .store()
            .recent_searches()
            .unwrap()
            .into_iter()
            .map(|r| r.query)
            .collect();
        assert_eq!(queries, ["second", "first"]);
    }

    #[tokio::test]
    async fn store_exposes_other_preference_traits() {
        use crate::store::FavoritesStore;

        let mut s = session(FakeCatalog::default());
        let anime = AnimeData::new(1, "Cowboy Bebop");
        assert!(s.store_mut().toggle_favorite(&anime).unwrap());
        assert!(s.store().is_favorite(1).unwrap());
    }

    #[tokio::test]
    async fn recent_search_limit_comes_from_config() {
        let mut s = ChatSession::new(
            FakeCatalog::default(),
            MemoryPreferences::new(),
            Vec::new(),
            ChatConfig::new().with_recent_search_limit(2),
        )
        .unwrap();
        for query in ["a", "b", "c"] {
            s.process_user_message(query).await;
        }
        let (store, transcript) = s.into_parts();
        assert_eq!(store.recent_searches().unwrap().len(), 2);
        assert_eq!(transcript.len(), 6);
    }
}
