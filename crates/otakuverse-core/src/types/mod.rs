pub mod anime;
pub mod genre;
pub mod intent;
pub mod message;

pub use anime::{
    AiredDates, AnimeData, AnimeImages, CharacterData, CharacterImageUrls, CharacterImages,
    DateInfo, DateProp, ImageUrls, ListEnvelope, NamedResource, Pagination, PaginationItems,
    SingleEnvelope,
};
pub use genre::Genre;
pub use intent::{Intent, IntentKind};
pub use message::{ChatMessage, RecentSearch, Sender};
