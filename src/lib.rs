pub mod api;
pub mod config;
pub mod error;
pub mod languages;
pub mod pattern;
pub mod prompt;
pub mod pull;
pub mod push;
pub mod sources;

pub use error::{QordobaError, Result};
pub use languages::{Language, LanguageRegistry};
pub use pattern::{resolve_destination_path, PullPattern, PushPattern};
pub use sources::{discover_files, ContentTypeTable, TranslationFile};
