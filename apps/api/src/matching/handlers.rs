//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::engine::RankedMatch;
use crate::matching::validation::{validate_batch, validate_pair, validate_weights};
use crate::models::match_result::MatchResult;
use crate::models::profile::{CandidateProfile, RoleDescription};
use crate::scoring::ats::ScoreResult;
use crate::scoring::weights::ScoreWeights;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    pub role: RoleDescription,
    /// Overrides the deployment weights for this call only.
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate: CandidateProfile,
    pub role: RoleDescription,
}

#[derive(Debug, Deserialize)]
pub struct BatchMatchRequest {
    pub candidate: CandidateProfile,
    pub roles: Vec<RoleDescription>,
    #[serde(default)]
    pub include_summary: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchMatchResponse {
    pub matches: Vec<RankedMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score
///
/// Deterministic ATS score only. No LLM call.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    validate_pair(&request.candidate, &request.role)?;

    let result = match &request.weights {
        Some(weights) => {
            validate_weights(weights)?;
            state
                .scorer
                .compute_with(&request.candidate, &request.role, weights)
        }
        None => state.scorer.compute(&request.candidate, &request.role),
    };

    info!(
        "Scored {} vs {}: {:.2}",
        request.candidate.name, request.role.title, result.overall_score
    );

    Ok(Json(result))
}

/// POST /api/v1/match
///
/// Score plus LLM narrative. Narrative failures are reported in the body,
/// not as an error status, since the score is still valid.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    validate_pair(&request.candidate, &request.role)?;

    let result = state
        .engine
        .generate_complete_match(&request.candidate, &request.role)
        .await;

    Ok(Json(result))
}

/// POST /api/v1/batch-match
///
/// Ranks many roles for one candidate, highest score first; ties keep input order.
pub async fn handle_batch_match(
    State(state): State<AppState>,
    Json(request): Json<BatchMatchRequest>,
) -> Result<Json<BatchMatchResponse>, AppError> {
    validate_batch(&request.candidate, &request.roles)?;

    let matches = state
        .engine
        .rank_matches(&request.candidate, &request.roles, request.include_summary)
        .await;

    Ok(Json(BatchMatchResponse { matches }))
}
