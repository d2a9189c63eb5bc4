pub mod catalog;
pub mod config;
pub mod render;
pub mod session;
pub mod sink;

pub use catalog::{AnimeCatalog, CatalogResult, SearchResults, dispatch};
pub use config::ChatConfig;
pub use session::ChatSession;
pub use sink::MessageSink;
