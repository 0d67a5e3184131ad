use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::ats::ScoreResult;

/// A missing or weak skill with suggested learning resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    /// "High" | "Medium" | "Low"
    pub importance: String,
    pub learning_resources: Vec<String>,
}

/// LLM-generated artifacts for one candidate/role pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchNarrative {
    pub match_summary: String,
    pub skill_gaps: Vec<SkillGap>,
    pub strengths: Vec<String>,
    pub recommendations: String,
    pub tailored_resume: String,
}

/// Combined result: the deterministic score plus the narrative, if it could be generated.
///
/// The score never depends on the narrative. When generation fails the score is
/// still returned, with `narrative = None` and the failure in `narrative_error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub match_score: f64,
    pub ats_confidence_score: f64,
    pub keyword_analysis: ScoreResult,
    pub narrative: Option<MatchNarrative>,
    pub narrative_error: Option<String>,
}

impl MatchResult {
    pub fn new(score: ScoreResult, narrative: Result<MatchNarrative, String>) -> Self {
        let (narrative, narrative_error) = match narrative {
            Ok(n) => (Some(n), None),
            Err(e) => (None, Some(e)),
        };

        Self {
            match_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            match_score: score.overall_score,
            ats_confidence_score: score.overall_score,
            keyword_analysis: score,
            narrative,
            narrative_error,
        }
    }
}
