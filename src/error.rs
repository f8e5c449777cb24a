// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot render an empty word set")]
    EmptyWordSet,

    #[error("drawing {target} failed: {message}")]
    Drawing { target: String, message: String },

    #[error("font {path} is unusable: {message}")]
    Font { path: PathBuf, message: String },
}

impl RenderError {
    pub fn drawing(target: &str, err: impl std::fmt::Display) -> Self {
        Self::Drawing {
            target: target.to_string(),
            message: err.to_string(),
        }
    }

    pub fn font(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Font {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
