use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptDocError {
    #[error("Could not decode {path} as UTF-8, UTF-8 with BOM or GBK")]
    Encoding { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptDocError>;
