#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum QordobaError {
    #[error("Pattern not valid: '{pattern}'")]
    #[diagnostic(help("The pattern should contain one of: {expected}"))]
    PatternInvalid { pattern: String, expected: String },

    #[error("Failed to compile pattern '{pattern}'")]
    PatternRegex {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Language '{language}' not found in the project")]
    #[diagnostic(help("Check the [[languages]] list in .qordoba.toml"))]
    LanguageNotFound { language: String },

    #[error("Languages not configured in project as destination languages: {}", languages.join(","))]
    LanguageNotConfigured { languages: Vec<String> },

    #[error("File format `{extension}` not in allowed list of file formats")]
    #[diagnostic(help("Allowed extensions: {allowed}"))]
    UnsupportedExtension { extension: String, allowed: String },

    #[error("Files not found by pattern `{pattern}`")]
    #[diagnostic(help("Check [push] pattern in .qordoba.toml"))]
    FilesNotFound { pattern: String },

    #[error("Project config not found at {path}")]
    #[diagnostic(help("Create a .qordoba.toml file or pass --config"))]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse {path}")]
    #[diagnostic(help("Check the TOML syntax in your config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {reason}")]
    ConfigInvalid { reason: String },

    #[error("Failed to parse project languages")]
    LanguagesParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Project API request failed: {message}")]
    Api { message: String },

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, QordobaError>;
