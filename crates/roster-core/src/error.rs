use polars::prelude::PolarsError;
use roster_ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A column needed by the requested operation is absent.
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("invalid lookup query: {0}")]
    InvalidQuery(String),

    #[error("table operation failed: {0}")]
    Frame(#[from] PolarsError),
}

impl RosterError {
    pub(crate) fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
