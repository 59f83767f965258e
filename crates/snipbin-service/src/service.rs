use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use snipbin_core::{
    CreateParams, NewSnippet, Pastebin, PastebinError, Snippet, SnippetId, SnippetKind,
    SnippetStore, FIELD_DEFAULT,
};
use std::sync::Arc;

/// Default number of snippets returned by `list_latest`.
const DEFAULT_LATEST_LIMIT: usize = 10;
/// Default expiration window for an expiring snippet, in minutes.
const DEFAULT_EXPIRE_MINUTES: i64 = 60;
/// Default view budget for an expiring snippet.
const DEFAULT_VIEW_LIMIT: u32 = 10;

/// A concrete implementation of the [`Pastebin`] trait.
///
/// This service wraps a [`SnippetStore`] and handles:
/// - Input validation (rejected before any storage interaction)
/// - Variant selection and limit defaulting
/// - The fixed latest-N listing window
#[derive(Debug, Clone)]
pub struct PastebinService<S> {
    store: Arc<S>,
    latest_limit: usize,
}

impl<S: SnippetStore> PastebinService<S> {
    /// Creates a service with the default latest-10 listing window.
    pub fn new(store: S) -> Self {
        Self::with_latest_limit(store, DEFAULT_LATEST_LIMIT)
    }

    pub fn with_latest_limit(store: S, latest_limit: usize) -> Self {
        Self {
            store: Arc::new(store),
            latest_limit,
        }
    }

    fn validate(params: &CreateParams) -> Result<(), PastebinError> {
        if params.content.trim().is_empty() {
            return Err(PastebinError::InvalidInput(
                "snippet content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Either limit being positive makes the snippet expiring, with
    /// the other limit defaulted (60 minutes / 10 views).
    fn select_kind(params: &CreateParams) -> SnippetKind {
        let wants_expiry = params.view_limit.is_some_and(|v| v > 0)
            || params.expire_minutes.is_some_and(|m| m > 0);

        if !wants_expiry {
            return SnippetKind::Basic;
        }

        let minutes = params.expire_minutes.unwrap_or(DEFAULT_EXPIRE_MINUTES);
        let views = params.view_limit.unwrap_or(DEFAULT_VIEW_LIMIT);

        SnippetKind::Expiring {
            expires_at: Timestamp::now() + SignedDuration::from_mins(minutes),
            views_left: i64::from(views),
        }
    }
}

#[async_trait]
impl<S: SnippetStore> Pastebin for PastebinService<S> {
    async fn create(&self, params: CreateParams) -> Result<Snippet, PastebinError> {
        Self::validate(&params)?;

        let kind = Self::select_kind(&params);
        let name = params
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FIELD_DEFAULT.to_string());

        let new = NewSnippet::builder()
            .content(params.content)
            .name(name)
            .kind(kind)
            .build();

        let snippet = self.store.create(new).await?;
        tracing::debug!(id = %snippet.id, "snippet created");
        Ok(snippet)
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>, PastebinError> {
        Ok(self.store.get(id).await?)
    }

    async fn list_latest(&self) -> Result<Vec<Snippet>, PastebinError> {
        Ok(self.store.list_latest(self.latest_limit).await?)
    }

    async fn delete(&self, id: &SnippetId) -> Result<bool, PastebinError> {
        Ok(self.store.delete(id).await?)
    }
}
