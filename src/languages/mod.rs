pub mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use registry::{normalize_key, LanguageRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// A project language as reported by the project API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Language {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
}

impl Language {
    pub fn new(id: u64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            direction: Direction::Ltr,
        }
    }

    /// Short language code: `fr` for `fr-fr`.
    pub fn lang(&self) -> &str {
        self.code.split('-').next().unwrap_or(&self.code)
    }

    /// `French - France` becomes `French - france`.
    pub fn name_capitalized(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    pub fn name_uppercased(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
