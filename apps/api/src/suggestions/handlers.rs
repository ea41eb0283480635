//! Axum route handlers for the Suggestions API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;
use crate::suggestions::apply::SuggestionTarget;
use crate::suggestions::Suggestion;

#[derive(Deserialize)]
pub struct GenerateSuggestionsRequest {
    /// Only checked for presence; never stored or logged.
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ApplySuggestionRequest {
    #[serde(flatten)]
    pub target: SuggestionTarget,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ApplySuggestionResponse {
    pub applied: bool,
    pub document: ResumeDocument,
}

/// POST /api/v1/sessions/:id/suggestions
pub async fn handle_generate_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GenerateSuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    if req.api_key.trim().is_empty() {
        return Err(AppError::Validation(
            "API key required to generate suggestions".to_string(),
        ));
    }

    // Snapshot so the lock is not held across the provider's delay.
    let document = state.sessions.get(id).await?.document;
    let suggestions = state.suggestions.suggest(&document).await?;
    info!("Generated {} suggestions for session {id}", suggestions.len());

    Ok(Json(SuggestionsResponse { suggestions }))
}

/// POST /api/v1/sessions/:id/suggestions/apply
pub async fn handle_apply_suggestion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplySuggestionRequest>,
) -> Result<Json<ApplySuggestionResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |s| ApplySuggestionResponse {
            applied: s.document.apply_suggestion(req.target, &req.text),
            document: s.document.clone(),
        })
        .await?;
    if !response.applied {
        debug!("Suggestion on session {id} was advisory only");
    }
    Ok(Json(response))
}
