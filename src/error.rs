use std::path::PathBuf;
use thiserror::Error;

/// The only failure the pipeline recognizes: the dataset could not be obtained.
///
/// Covers a missing or unreadable file, a header without one of the required
/// columns, and rows that carry non-numeric text in a numeric column.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data unavailable: cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("data unavailable: {origin} has no `{column}` column")]
    MissingColumn { origin: String, column: &'static str },
    #[error("data unavailable: malformed row in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: csv::Error,
    },
}
