use std::path::PathBuf;

use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed CSV: {message}")]
    Parse { message: String },

    #[error("failed to build table: {0}")]
    Frame(#[from] PolarsError),
}

impl IngestError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// True for failures caused by the CSV content rather than the environment.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, IngestError::Csv(_) | IngestError::Parse { .. })
    }
}
