//! Batch ranking — one candidate against many roles.

use serde::Serialize;

use crate::models::profile::{CandidateProfile, RoleDescription};
use crate::scoring::ats::{AtsScorer, ScoreResult};

/// One role's position in a batch ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRole {
    /// 1-based position after sorting.
    pub rank: usize,
    /// Position of the role in the caller's input.
    pub index: usize,
    pub title: String,
    pub company: String,
    pub score: ScoreResult,
}

/// Scores every role independently and orders them by overall score,
/// highest first. Equal scores keep input order.
pub fn rank_roles(
    scorer: &AtsScorer,
    candidate: &CandidateProfile,
    roles: &[RoleDescription],
) -> Vec<RankedRole> {
    let mut ranked: Vec<RankedRole> = roles
        .iter()
        .enumerate()
        .map(|(index, role)| RankedRole {
            rank: 0,
            index,
            title: role.title.clone(),
            company: role.company.clone(),
            score: scorer.compute(candidate, role),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.overall_score.total_cmp(&a.score.overall_score));

    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.rank = position + 1;
    }

    ranked
}
