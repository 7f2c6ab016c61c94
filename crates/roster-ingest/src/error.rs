//! Ingestion error types.
//!
//! Load failures carry a user-friendly message alongside the technical
//! cause, so callers can show something readable and log the rest.

use std::path::PathBuf;

use thiserror::Error;

/// The roster source could not be read or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("Failed to read roster file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source text is not a valid CSV table.
    #[error("Failed to parse roster table")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl LoadError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => {
                format!("Could not read the roster file at {}", path.display())
            }
            Self::Csv { source } => match source.position() {
                Some(position) => format!(
                    "The roster file is not a valid table (problem near line {}).",
                    position.line()
                ),
                None => "The roster file is not a valid table.".to_string(),
            },
        }
    }
}

/// The roster could not be exported.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write roster table")]
    Csv(#[from] csv::Error),

    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Exported roster table is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
