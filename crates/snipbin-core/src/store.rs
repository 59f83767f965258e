use crate::error::StorageError;
use crate::snippet::{Snippet, SnippetKind, FIELD_DEFAULT};
use crate::snippet_id::SnippetId;
use async_trait::async_trait;
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, StorageError>;

/// A snippet to be persisted.
///
/// Carries no identifier or creation timestamp: both are assigned by
/// the store at write time, so a caller-supplied identity is
/// unrepresentable.
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewSnippet {
    #[builder(setter(into))]
    pub content: String,
    #[builder(setter(into), default = String::from(FIELD_DEFAULT))]
    pub name: String,
    #[builder(default = SnippetKind::Basic)]
    pub kind: SnippetKind,
}

/// The snippet persistence engine.
///
/// Implementations hold no state between calls beyond the backing
/// store itself; every operation re-reads persistent state, making the
/// store the single source of truth across process restarts.
#[async_trait]
pub trait SnippetStore: Send + Sync + 'static {
    /// Persists a new snippet under a freshly assigned identifier and
    /// creation timestamp, and returns the record as stored.
    ///
    /// Write failures surface as [`StorageError::Write`]; a silently
    /// lost snippet is a correctness violation.
    async fn create(&self, new: NewSnippet) -> Result<Snippet>;

    /// Retrieves a snippet by identifier.
    ///
    /// Returns `Ok(None)` when the record is absent, expired, or
    /// view-exhausted; callers cannot tell these apart. This is a
    /// command, not a pure query: a successful read of a live expiring
    /// snippet consumes one unit of its view budget and persists the
    /// decremented record before returning it, including the view that
    /// makes it dead.
    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>>;

    /// Returns at most `n` live snippets, most recently created first.
    ///
    /// Ties in creation timestamp break by ascending identifier so
    /// repeated calls within the same instant agree. The scan is
    /// read-only: dead records are excluded but view budgets are never
    /// consumed, and corrupt files are skipped rather than aborting
    /// the query.
    async fn list_latest(&self, n: usize) -> Result<Vec<Snippet>>;

    /// Removes a snippet. Returns `true` if a record existed; deleting
    /// an absent identifier is a no-op, not an error.
    async fn delete(&self, id: &SnippetId) -> Result<bool>;
}
