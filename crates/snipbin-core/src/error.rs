use thiserror::Error;

/// Errors related to the core snippet domain types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid snippet id: {0}")]
    InvalidSnippetId(String),
}

/// Errors surfaced by snippet store implementations.
///
/// "Not found" is not an error: store lookups return `Ok(None)` both for
/// absent records and for records that are no longer live, so callers
/// cannot tell the two apart.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("corrupt snippet record '{id}': {reason}")]
    Corrupt { id: String, reason: String },
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("storage read failed: {0}")]
    Read(String),
}

#[derive(Debug, Clone, Error)]
pub enum PastebinError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
