use crate::error::{AppError, Result};
use crate::model::{CreateSnippetRequest, CreateSnippetResponse, SnippetResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use snipbin_core::{CreateParams, Pastebin, SnippetId};

pub async fn create_snippet_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateSnippetRequest>,
) -> Result<(StatusCode, Json<CreateSnippetResponse>)> {
    let params = CreateParams {
        content: request.content,
        name: request.name,
        view_limit: request.view_limit,
        expire_minutes: request.expire_minutes,
    };

    let snippet = state.service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSnippetResponse {
            id: snippet.id.to_string(),
        }),
    ))
}

pub async fn get_snippet_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SnippetResponse>> {
    // A syntactically invalid identifier cannot name a stored snippet.
    let id = SnippetId::new(id).map_err(|_| AppError::NotFound)?;

    let snippet = state.service.get(&id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(snippet.into()))
}

pub async fn latest_snippets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SnippetResponse>>> {
    let snippets = state.service.list_latest().await?;
    Ok(Json(snippets.into_iter().map(Into::into).collect()))
}

pub async fn delete_snippet_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    // Deleting what cannot exist is the same no-op as deleting what
    // does not exist.
    if let Ok(id) = SnippetId::new(id) {
        state.service.delete(&id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
