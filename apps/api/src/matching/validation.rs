//! Request validation — rejects malformed records before they reach scoring.
//!
//! Serde already rejects missing or mistyped fields; this layer catches
//! blank required strings and empty batches. All problems are reported at once.

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, RoleDescription};
use crate::scoring::weights::ScoreWeights;

/// Upper bound on roles per batch request.
pub const MAX_BATCH_ROLES: usize = 100;

pub fn candidate_errors(candidate: &CandidateProfile) -> Vec<String> {
    let mut errors = Vec::new();
    require(&mut errors, "candidate.name", &candidate.name);
    require(&mut errors, "candidate.education", &candidate.education);
    errors
}

pub fn role_errors(role: &RoleDescription, prefix: &str) -> Vec<String> {
    let mut errors = Vec::new();
    require(&mut errors, &format!("{prefix}.title"), &role.title);
    require(&mut errors, &format!("{prefix}.company"), &role.company);
    require(&mut errors, &format!("{prefix}.description"), &role.description);
    errors
}

pub fn validate_pair(candidate: &CandidateProfile, role: &RoleDescription) -> Result<(), AppError> {
    let mut errors = candidate_errors(candidate);
    errors.extend(role_errors(role, "role"));
    into_result(errors)
}

pub fn validate_batch(candidate: &CandidateProfile, roles: &[RoleDescription]) -> Result<(), AppError> {
    let mut errors = candidate_errors(candidate);

    if roles.is_empty() {
        errors.push("roles: at least one role is required".to_string());
    } else if roles.len() > MAX_BATCH_ROLES {
        errors.push(format!(
            "roles: at most {MAX_BATCH_ROLES} roles per request, got {}",
            roles.len()
        ));
    }

    for (i, role) in roles.iter().enumerate() {
        errors.extend(role_errors(role, &format!("roles[{i}]")));
    }

    into_result(errors)
}

pub fn validate_weights(weights: &ScoreWeights) -> Result<(), AppError> {
    weights
        .validate()
        .map_err(|errors| AppError::Validation(errors.join("; ")))
}

fn require(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: cannot be empty"));
    }
}

fn into_result(errors: Vec<String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join("; ")))
    }
}
