//! Expiration policy evaluation.

use crate::snippet::{Snippet, SnippetKind};
use jiff::Timestamp;

/// Decides whether a snippet may still be served at `now`.
///
/// Pure function of the record and the clock: basic snippets are always
/// live; expiring snippets are live iff the expiration time is still in
/// the future and the view budget is positive. Both conditions are
/// re-evaluated on every call, never cached. Consuming a unit of the
/// view budget is the storage engine's job and happens only on the
/// `get` path, never here.
pub fn is_live(snippet: &Snippet, now: Timestamp) -> bool {
    match snippet.kind {
        SnippetKind::Basic => true,
        SnippetKind::Expiring {
            expires_at,
            views_left,
        } => now < expires_at && views_left > 0,
    }
}
