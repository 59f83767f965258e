use crate::error::PastebinError;
use crate::snippet::Snippet;
use crate::snippet_id::SnippetId;
use async_trait::async_trait;
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, PastebinError>;

/// Parameters for creating a snippet through the service interface.
///
/// The service picks the variant: if either `view_limit` or
/// `expire_minutes` is positive the snippet is created as expiring
/// (with the other limit defaulted), otherwise as basic.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateParams {
    #[builder(setter(into))]
    pub content: String,
    /// Display label; defaults to the `"N/A"` sentinel when absent.
    #[builder(default, setter(strip_option, into))]
    pub name: Option<String>,
    /// Remaining-views budget for an expiring snippet (default 10).
    #[builder(default, setter(strip_option))]
    pub view_limit: Option<u32>,
    /// Minutes until expiration for an expiring snippet (default 60).
    #[builder(default, setter(strip_option))]
    pub expire_minutes: Option<i64>,
}

/// The snippet service surface consumed by the web/API adapters.
#[async_trait]
pub trait Pastebin: Send + Sync + 'static {
    /// Validates the request, selects the variant, and persists a new
    /// snippet. Returns the stored record, identifier included.
    async fn create(&self, params: CreateParams) -> Result<Snippet>;

    /// Retrieves a snippet, consuming one unit of an expiring
    /// snippet's view budget. `None` means absent or no longer live.
    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>>;

    /// The most recently created live snippets, newest first.
    async fn list_latest(&self) -> Result<Vec<Snippet>>;

    /// Removes a snippet; idempotent. Returns `true` if it existed.
    async fn delete(&self, id: &SnippetId) -> Result<bool>;
}
