//! Axum route handlers for editing sessions.

use std::collections::HashSet;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::completeness::{compute_completeness_report, CompletenessReport};
use crate::document::preview::{render_plain_text, render_preview, Preview};
use crate::document::progress::StepView;
use crate::document::session::Session;
use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, EntryChange, EntryDraft, EntrySection, ExperienceEntry, ResumeDocument,
    SectionPayload, SkillKind,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document: ResumeDocument,
    pub step: StepView,
    pub completeness: CompletenessReport,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        SessionView {
            session_id: session.id,
            created_at: session.created_at,
            document: session.document.clone(),
            step: session.step.view(),
            completeness: compute_completeness_report(&session.document),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub changed: bool,
    pub document: ResumeDocument,
}

/// Body of `POST .../entries`. The entry may be omitted to append a blank one.
#[derive(Debug, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum AddEntryRequest {
    Experience { entry: Option<ExperienceEntry> },
    Education { entry: Option<EducationEntry> },
}

impl From<AddEntryRequest> for EntryDraft {
    fn from(req: AddEntryRequest) -> Self {
        match req {
            AddEntryRequest::Experience { entry } => entry
                .map(EntryDraft::Experience)
                .unwrap_or_else(|| EntryDraft::blank(EntrySection::Experience)),
            AddEntryRequest::Education { entry } => entry
                .map(EntryDraft::Education)
                .unwrap_or_else(|| EntryDraft::blank(EntrySection::Education)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub id: String,
    pub document: ResumeDocument,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub text: String,
}

/// Rejects replacement values that would break the document's list invariants:
/// skills must be non-empty trimmed strings, entry ids unique within their list.
pub fn validate_section_payload(payload: &SectionPayload) -> Result<(), AppError> {
    match payload {
        SectionPayload::PersonalInfo(_) => Ok(()),
        SectionPayload::Experience(entries) => {
            unique_ids("experience", entries.iter().map(|e| e.id.as_str()))
        }
        SectionPayload::Education(entries) => {
            unique_ids("education", entries.iter().map(|e| e.id.as_str()))
        }
        SectionPayload::Skills(skills) => {
            for (kind, list) in [("technical", &skills.technical), ("soft", &skills.soft)] {
                if let Some(bad) = list.iter().find(|s| s.is_empty() || s.trim() != s.as_str()) {
                    return Err(AppError::Validation(format!(
                        "{kind} skill {bad:?} must be non-empty and trimmed"
                    )));
                }
            }
            Ok(())
        }
    }
}

fn unique_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "{section} entry id {id:?} appears more than once"
            )));
        }
    }
    Ok(())
}

fn log_noop(changed: bool, session_id: Uuid, operation: &str) {
    if !changed {
        debug!("{operation} on session {session_id} left the document unchanged");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    info!("Created editing session {}", session.id);
    (StatusCode::CREATED, Json(SessionView::from(&session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::from(&session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Discarded editing session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/sections
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SectionPayload>,
) -> Result<Json<ResumeDocument>, AppError> {
    validate_section_payload(&payload)?;
    debug!("Replacing section {} on session {id}", payload.section_name());
    let document = state
        .sessions
        .update(id, |s| {
            s.document.update_section(payload);
            s.document.clone()
        })
        .await?;
    Ok(Json(document))
}

/// POST /api/v1/sessions/:id/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddEntryRequest>,
) -> Result<(StatusCode, Json<AddEntryResponse>), AppError> {
    let draft = EntryDraft::from(req);
    let response = state
        .sessions
        .update(id, |s| {
            let entry_id = s.document.add_entry(draft);
            AddEntryResponse {
                id: entry_id,
                document: s.document.clone(),
            }
        })
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/v1/sessions/:id/entries/:entry_id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, String)>,
    Json(change): Json<EntryChange>,
) -> Result<Json<MutationResponse>, AppError> {
    let section = change.section();
    let response = state
        .sessions
        .update(id, |s| MutationResponse {
            changed: s.document.update_entry(&entry_id, change),
            document: s.document.clone(),
        })
        .await?;
    log_noop(response.changed, id, &format!("update {} entry {entry_id}", section.as_str()));
    Ok(Json(response))
}

/// DELETE /api/v1/sessions/:id/entries/:section/:entry_id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, EntrySection, String)>, PathRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Path((id, section, entry_id)) = path?;
    let response = state
        .sessions
        .update(id, |s| MutationResponse {
            changed: s.document.remove_entry(section, &entry_id),
            document: s.document.clone(),
        })
        .await?;
    log_noop(response.changed, id, &format!("remove {} entry {entry_id}", section.as_str()));
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/skills/:kind
pub async fn handle_add_skill(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, SkillKind)>, PathRejection>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let Path((id, kind)) = path?;
    let response = state
        .sessions
        .update(id, |s| MutationResponse {
            changed: s.document.add_skill(kind, &req.text),
            document: s.document.clone(),
        })
        .await?;
    log_noop(response.changed, id, "add skill");
    Ok(Json(response))
}

/// DELETE /api/v1/sessions/:id/skills/:kind/:index
///
/// An index that is not a position in the list (negative, non-numeric) is a no-op.
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, SkillKind, String)>, PathRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Path((id, kind, index)) = path?;
    let response = state
        .sessions
        .update(id, |s| MutationResponse {
            changed: index
                .parse::<usize>()
                .map(|i| s.document.remove_skill(kind, i))
                .unwrap_or(false),
            document: s.document.clone(),
        })
        .await?;
    log_noop(response.changed, id, &format!("remove skill {index}"));
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/steps/next
pub async fn handle_next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepView>, AppError> {
    let view = state
        .sessions
        .update(id, |s| {
            s.step.next();
            s.step.view()
        })
        .await?;
    debug!("Session {id} is on step {}", view.index);
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/steps/previous
pub async fn handle_previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepView>, AppError> {
    let view = state
        .sessions
        .update(id, |s| {
            s.step.previous();
            s.step.view()
        })
        .await?;
    debug!("Session {id} is on step {}", view.index);
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Preview>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(render_preview(&session.document)))
}

/// GET /api/v1/sessions/:id/export
///
/// Printable plain-text resume.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(render_plain_text(&render_preview(&session.document)))
}
