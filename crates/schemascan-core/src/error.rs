use thiserror::Error;

/// Core error type shared across schemascan crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The metadata source could not enumerate tables, columns or indexes.
    #[error("metadata fetch error: {0}")]
    MetadataFetch(String),
    /// A metadata record is missing a required field or carries an unknown value.
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),
}

/// Convenience alias for results returned by schemascan crates.
pub type Result<T> = std::result::Result<T, Error>;
