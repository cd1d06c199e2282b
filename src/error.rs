use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("resource or function {0:?} not found")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} at {at}: {message}", path.display())]
    Parse {
        path: PathBuf,
        at: String,
        message: String,
    },

    #[error("unsupported package document {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
