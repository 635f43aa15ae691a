//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::document::ChunkMetadata;
use crate::profile::sections::{parse_profile, ProfileSection, MAX_LIST_ITEMS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub chunks: Vec<String>,
    #[serde(default)]
    pub metadata: Option<Vec<ChunkMetadata>>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Model output exactly as returned.
    pub profile: String,
    /// Present only when `profile` parsed as a valid section array.
    pub sections: Option<Vec<ProfileSection>>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub chunks: Vec<String>,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles
///
/// Generates a leadership profile. The raw model text is always returned;
/// `sections` is a best-effort parse and a parse failure never fails the request.
pub async fn handle_generate_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if let Some(metadata) = &request.metadata {
        if metadata.len() != request.chunks.len() {
            return Err(AppError::Validation(format!(
                "metadata has {} entries but chunks has {}",
                metadata.len(),
                request.chunks.len()
            )));
        }
    }

    let profile = state
        .generator
        .generate_profile(&request.chunks, request.metadata.as_deref())
        .await?;

    let sections = match parse_profile(&profile) {
        Ok(sections) => {
            for section in sections.iter().filter(|s| s.exceeds_item_cap()) {
                warn!(
                    "Section '{}' lists {} items (cap {})",
                    section.section,
                    section.items().len(),
                    MAX_LIST_ITEMS
                );
            }
            Some(sections)
        }
        Err(e) => {
            warn!("Generated profile did not parse: {e}");
            None
        }
    };

    Ok(Json(ProfileResponse { profile, sections }))
}

/// POST /api/v1/questions
///
/// Answers a free-form question against the supplied document chunks.
pub async fn handle_answer_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = state
        .generator
        .answer_question(&request.chunks, &request.question)
        .await?;

    Ok(Json(QuestionResponse { answer }))
}
