//! Error types for dumping, configuration and marker templates

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, walking or reading input paths.
///
/// None of these are fatal to a run: the walker reports them and moves on
/// to the next entry or input.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("cannot access '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access entry in '{}': {source}", .dir.display())]
    Entry {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot expand '{pattern}': {source}")]
    GlobEntry {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    #[error("no files matched the pattern '{pattern}'")]
    NoMatches { pattern: String },
}

impl DumpError {
    /// Whether this should be shown as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, DumpError::NoMatches { .. })
    }
}

/// Errors raised while loading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid template for '{field}': {source}")]
    Template {
        field: &'static str,
        #[source]
        source: TemplateError,
    },
}

/// Errors raised while compiling a marker template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed '{{{{' at byte {position}")]
    Unclosed { position: usize },

    #[error("unknown field '{0}' (expected FilePath, FileExt or FileName)")]
    UnknownField(String),
}
