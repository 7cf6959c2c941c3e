// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LcomError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Parser produced no syntax tree")]
    Parse,

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Unknown rule id '{0}'")]
    UnknownRule(String),
}

pub type Result<T> = std::result::Result<T, LcomError>;

impl LcomError {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for LcomError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("<unknown>"));
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        LcomError::Io { source, path }
    }
}
