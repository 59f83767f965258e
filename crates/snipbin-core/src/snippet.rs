use crate::snippet_id::SnippetId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel used when a snippet's content or name is absent.
pub const FIELD_DEFAULT: &str = "N/A";

/// A persisted unit of shared text content.
///
/// The on-disk shape is a single JSON object with a `Type`
/// discriminator (`"Basic"` / `"Expiring"`) and PascalCase field names
/// (`ID`, `Content`, `Name`, `CreationTimestamp`, plus `ExpirationTime`
/// and `ViewCounter` for the expiring variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "RawRecord")]
pub struct Snippet {
    /// Unique identifier, assigned by the store at creation.
    pub id: SnippetId,
    /// The shared text body.
    pub content: String,
    /// Display label.
    pub name: String,
    /// UTC instant assigned by the store at creation.
    pub created_at: Timestamp,
    /// Which variant this record is, with any expiration state.
    pub kind: SnippetKind,
}

/// The two snippet variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnippetKind {
    /// Never expires, never deleted automatically.
    Basic,
    /// Dead once `expires_at` has passed or `views_left` hits zero.
    Expiring {
        expires_at: Timestamp,
        /// Remaining view budget; each successful `get` consumes one.
        views_left: i64,
    },
}

impl Snippet {
    /// Whether this snippet may still be served at `now`.
    ///
    /// See [`crate::policy::is_live`].
    pub fn is_live_at(&self, now: Timestamp) -> bool {
        crate::policy::is_live(self, now)
    }
}

/// Raised when a record carries a `Type` value that matches no variant.
#[derive(Debug, Clone, Error)]
#[error("unknown snippet type '{0}'")]
pub struct UnknownSnippetType(pub String);

const TYPE_BASIC: &str = "Basic";
const TYPE_EXPIRING: &str = "Expiring";

/// Wire shape shared by both variants.
///
/// Decoding tolerates records written without an explicit `Type`:
/// the presence of `ExpirationTime` or `ViewCounter` implies the
/// expiring variant. When an explicit discriminator and the structural
/// hint disagree, the discriminator wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRecord {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Content", default = "default_field")]
    content: String,
    #[serde(rename = "Name", default = "default_field")]
    name: String,
    #[serde(rename = "CreationTimestamp")]
    created_at: Timestamp,
    #[serde(
        rename = "ExpirationTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    expires_at: Option<Timestamp>,
    #[serde(
        rename = "ViewCounter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    views_left: Option<i64>,
}

fn default_field() -> String {
    FIELD_DEFAULT.to_string()
}

impl TryFrom<RawRecord> for Snippet {
    type Error = UnknownSnippetType;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_deref() {
            Some(TYPE_BASIC) => SnippetKind::Basic,
            Some(TYPE_EXPIRING) => expiring(&raw),
            Some(other) => return Err(UnknownSnippetType(other.to_string())),
            // No discriminator: infer the variant structurally.
            None if raw.expires_at.is_some() || raw.views_left.is_some() => expiring(&raw),
            None => SnippetKind::Basic,
        };

        Ok(Snippet {
            id: SnippetId::new_unchecked(raw.id),
            content: raw.content,
            name: raw.name,
            created_at: raw.created_at,
            kind,
        })
    }
}

/// A tagged-expiring record missing its fields decodes as already dead,
/// matching how the original records defaulted absent values.
fn expiring(raw: &RawRecord) -> SnippetKind {
    SnippetKind::Expiring {
        expires_at: raw.expires_at.unwrap_or(Timestamp::UNIX_EPOCH),
        views_left: raw.views_left.unwrap_or(0),
    }
}

impl From<Snippet> for RawRecord {
    fn from(snippet: Snippet) -> Self {
        let (tag, expires_at, views_left) = match snippet.kind {
            SnippetKind::Basic => (TYPE_BASIC, None, None),
            SnippetKind::Expiring {
                expires_at,
                views_left,
            } => (TYPE_EXPIRING, Some(expires_at), Some(views_left)),
        };

        RawRecord {
            kind: Some(tag.to_string()),
            id: snippet.id.as_str().to_string(),
            content: snippet.content,
            name: snippet.name,
            created_at: snippet.created_at,
            expires_at,
            views_left,
        }
    }
}
