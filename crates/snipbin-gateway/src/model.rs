use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use snipbin_core::{Snippet, SnippetKind};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateSnippetRequest {
    pub content: String,
    pub name: Option<String>,
    pub view_limit: Option<u32>,
    pub expire_minutes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateSnippetResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SnippetResponse {
    pub id: String,
    pub content: String,
    pub name: String,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_left: Option<i64>,
}

impl From<Snippet> for SnippetResponse {
    fn from(snippet: Snippet) -> Self {
        let (expires_at, views_left) = match snippet.kind {
            SnippetKind::Basic => (None, None),
            SnippetKind::Expiring {
                expires_at,
                views_left,
            } => (Some(expires_at), Some(views_left)),
        };

        Self {
            id: snippet.id.to_string(),
            content: snippet.content,
            name: snippet.name,
            created_at: snippet.created_at,
            expires_at,
            views_left,
        }
    }
}
