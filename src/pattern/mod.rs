//! Templated file path patterns.
//!
//! A push pattern such as `i18n/<language_code>/translations.json` finds the files to
//! upload and recovers their language from the path. A pull pattern turns a language
//! and a source file name into the destination of a downloaded translation.

pub mod pull;
pub mod push;
pub mod variable;

pub use pull::{resolve_destination_path, PullPattern, DEFAULT_PULL_PATTERN};
pub use push::{PatternMatch, PushPattern};
pub use variable::{PatternVariable, Segment};
