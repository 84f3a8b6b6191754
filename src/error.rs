//! Error types for level conversion

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown block type code {code} on line {line} (expected 0, 1 or 2)")]
    UnknownBlockType { line: usize, code: i64 },

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LevelError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        LevelError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Line number the error refers to, for input errors
    pub fn line(&self) -> Option<usize> {
        match self {
            LevelError::Parse { line, .. } | LevelError::UnknownBlockType { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LevelError>;
