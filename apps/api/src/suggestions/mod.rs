//! Suggestion Source — pluggable, trait-based provider of resume advice.
//!
//! Default: `StaticSuggestionSource` (fixed table from `catalog`, returned after
//! an artificial delay). `AppState` holds an `Arc<dyn SuggestionSource>`.

pub mod apply;
pub mod catalog;
pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSection {
    #[serde(rename = "Professional Summary")]
    ProfessionalSummary,
    Experience,
    Skills,
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Improvement,
    Enhancement,
    Addition,
    Formatting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: SuggestionSection,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub suggestion: String,
    pub priority: Priority,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the advice backend without touching handlers.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, document: &ResumeDocument) -> Result<Vec<Suggestion>, AppError>;
}

/// Returns the fixed catalog regardless of the document, after `delay`.
pub struct StaticSuggestionSource {
    delay: Duration,
}

impl StaticSuggestionSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SuggestionSource for StaticSuggestionSource {
    async fn suggest(&self, _document: &ResumeDocument) -> Result<Vec<Suggestion>, AppError> {
        debug!("Simulating suggestion analysis for {}ms", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        Ok(catalog::static_suggestions())
    }
}
