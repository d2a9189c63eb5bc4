pub mod classifier;
pub mod extract;
pub mod rules;

pub use classifier::IntentClassifier;
pub use extract::PhraseStripper;
pub use rules::{FALLBACK, IntentRule, RULES};
