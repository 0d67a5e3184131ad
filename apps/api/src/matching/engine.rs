//! Match Engine — narrative generation around the deterministic score.
//!
//! Flow: score (pure, first) → summary | strengths | resume | (skill gaps → recommendations)
//! run concurrently → MatchResult.
//!
//! The two failure domains are independent: a failed LLM call drops the
//! narrative but never the score.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::prompts::{join_or, JSON_ARRAY_ONLY};
use crate::llm_client::{parse_json_array, LlmError, TextGenerator};
use crate::matching::prompts::*;
use crate::models::match_result::{MatchNarrative, MatchResult, SkillGap};
use crate::models::profile::{CandidateProfile, RoleDescription};
use crate::scoring::ats::AtsScorer;
use crate::scoring::ranking::{rank_roles, RankedRole};

/// Strengths used when the model's answer cannot be parsed.
pub const FALLBACK_STRENGTHS: &[&str] = &["Relevant technical skills", "Strong educational background"];

/// Requirements / responsibilities quoted in the resume prompt.
const RESUME_MAX_REQUIREMENTS: usize = 5;
const RESUME_MAX_RESPONSIBILITIES: usize = 3;

/// Batch summaries in flight at once.
const MAX_CONCURRENT_SUMMARIES: usize = 8;

/// One entry of a batch response: the ranking plus an optional LLM summary.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub ranked: RankedRole,
    pub match_score: f64,
    pub summary: Option<String>,
}

#[derive(Clone)]
pub struct MatchEngine {
    generator: Arc<dyn TextGenerator>,
    scorer: Arc<AtsScorer>,
}

impl MatchEngine {
    pub fn new(generator: Arc<dyn TextGenerator>, scorer: Arc<AtsScorer>) -> Self {
        Self { generator, scorer }
    }

    /// 3-4 sentence assessment of the fit.
    pub async fn analyze_match(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> Result<String, LlmError> {
        let prompt = fill_template(
            SUMMARY_PROMPT_TEMPLATE,
            &[
                ("name", &candidate.name),
                ("education", &candidate.education),
                ("skills", &candidate.skills.join(", ")),
                ("interests", &candidate.interests.join(", ")),
                (
                    "experience",
                    candidate.experience_text().unwrap_or("No prior experience"),
                ),
                ("projects", &join_or(candidate.projects(), "None listed")),
                ("title", &role.title),
                ("company", &role.company),
                ("location", role.location.as_deref().unwrap_or("Not specified")),
                ("duration", role.duration.as_deref().unwrap_or("Not specified")),
                ("description", &role.description),
                ("requirements", &role.requirements.join(", ")),
                ("responsibilities", &role.responsibilities.join(", ")),
            ],
        );
        self.generator.generate(SUMMARY_SYSTEM, &prompt).await
    }

    /// Missing or weak skills. An unparseable answer yields an empty list.
    pub async fn identify_skill_gaps(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> Result<Vec<SkillGap>, LlmError> {
        let prompt = fill_template(
            SKILL_GAPS_PROMPT_TEMPLATE,
            &[
                ("skills", &candidate.skills.join(", ")),
                ("requirements", &role.requirements.join(", ")),
                ("preferred", &role.preferred_qualifications().join(", ")),
            ],
        );
        let system = format!("{SKILL_GAPS_SYSTEM} {JSON_ARRAY_ONLY}");
        let response = self.generator.generate(&system, &prompt).await?;

        Ok(parse_json_array(&response).unwrap_or_else(|| {
            warn!("Skill gap response was not a JSON array; returning no gaps");
            Vec::new()
        }))
    }

    /// Key strengths. An unparseable answer yields `FALLBACK_STRENGTHS`.
    pub async fn identify_strengths(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = fill_template(
            STRENGTHS_PROMPT_TEMPLATE,
            &[
                ("skills", &candidate.skills.join(", ")),
                ("projects", &candidate.projects().join(", ")),
                ("experience", candidate.experience_text().unwrap_or("None")),
                ("requirements", &role.requirements.join(", ")),
                ("responsibilities", &role.responsibilities.join(", ")),
            ],
        );
        let system = format!("{STRENGTHS_SYSTEM} {JSON_ARRAY_ONLY}");
        let response = self.generator.generate(&system, &prompt).await?;

        Ok(parse_json_array(&response).unwrap_or_else(|| {
            warn!("Strengths response was not a JSON array; using fallback strengths");
            FALLBACK_STRENGTHS.iter().map(|s| s.to_string()).collect()
        }))
    }

    pub async fn generate_recommendations(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
        skill_gaps: &[SkillGap],
    ) -> Result<String, LlmError> {
        let gaps = skill_gaps
            .iter()
            .map(|gap| format!("- {} ({} priority)", gap.skill, gap.importance))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = fill_template(
            RECOMMENDATIONS_PROMPT_TEMPLATE,
            &[
                ("name", &candidate.name),
                ("title", &role.title),
                ("company", &role.company),
                ("gaps", &gaps),
                ("skills", &candidate.skills.join(", ")),
                ("projects", &join_or(candidate.projects(), "None")),
            ],
        );
        self.generator.generate(RECOMMENDATIONS_SYSTEM, &prompt).await
    }

    /// Plain-text ATS-friendly resume aimed at `role`.
    pub async fn generate_tailored_resume(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> Result<String, LlmError> {
        let requirements: Vec<&str> = role
            .requirements
            .iter()
            .take(RESUME_MAX_REQUIREMENTS)
            .map(String::as_str)
            .collect();
        let responsibilities: Vec<&str> = role
            .responsibilities
            .iter()
            .take(RESUME_MAX_RESPONSIBILITIES)
            .map(String::as_str)
            .collect();

        let prompt = fill_template(
            RESUME_PROMPT_TEMPLATE,
            &[
                ("name", &candidate.name),
                (
                    "email",
                    candidate.email.as_deref().unwrap_or("candidate@email.com"),
                ),
                ("education", &candidate.education),
                ("skills", &candidate.skills.join(", ")),
                (
                    "experience",
                    candidate
                        .experience_text()
                        .unwrap_or("Seeking first internship opportunity"),
                ),
                ("projects", &candidate.projects().join(", ")),
                ("certifications", &candidate.certifications().join(", ")),
                ("title", &role.title),
                ("company", &role.company),
                ("requirements", &requirements.join(", ")),
                ("responsibilities", &responsibilities.join(", ")),
            ],
        );
        self.generator.generate(RESUME_SYSTEM, &prompt).await
    }

    /// All narrative artifacts. Fails on the first transport error.
    pub async fn generate_narrative(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> Result<MatchNarrative, LlmError> {
        let gaps_and_recommendations = async {
            let gaps = self.identify_skill_gaps(candidate, role).await?;
            let recommendations = self.generate_recommendations(candidate, role, &gaps).await?;
            Ok::<_, LlmError>((gaps, recommendations))
        };

        let (match_summary, strengths, tailored_resume, (skill_gaps, recommendations)) = tokio::try_join!(
            self.analyze_match(candidate, role),
            self.identify_strengths(candidate, role),
            self.generate_tailored_resume(candidate, role),
            gaps_and_recommendations,
        )?;

        Ok(MatchNarrative {
            match_summary,
            skill_gaps,
            strengths,
            recommendations,
            tailored_resume,
        })
    }

    /// Deterministic score first, then the narrative. Always returns the score.
    pub async fn generate_complete_match(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
    ) -> MatchResult {
        let score = self.scorer.compute(candidate, role);
        info!(
            "ATS score {:.2} for {} vs {} at {}",
            score.overall_score, candidate.name, role.title, role.company
        );

        let narrative = self
            .generate_narrative(candidate, role)
            .await
            .map_err(|e| {
                warn!("Narrative generation failed, returning score only: {e}");
                format!("Narrative generation failed: {e}")
            });

        MatchResult::new(score, narrative)
    }

    /// Ranks `roles` for one candidate. With `include_summary`, each ranked role
    /// also gets an LLM summary; a failed summary is left empty.
    ///
    /// Summaries are requested concurrently (at most `MAX_CONCURRENT_SUMMARIES`
    /// in flight); results come back in rank order.
    pub async fn rank_matches(
        &self,
        candidate: &CandidateProfile,
        roles: &[RoleDescription],
        include_summary: bool,
    ) -> Vec<RankedMatch> {
        let ranked = rank_roles(&self.scorer, candidate, roles);
        info!("Ranked {} roles for {}", ranked.len(), candidate.name);

        stream::iter(ranked)
            .map(|entry| async move {
                let summary = if include_summary {
                    self.summary_or_none(candidate, &roles[entry.index], entry.index)
                        .await
                } else {
                    None
                };

                RankedMatch {
                    match_score: entry.score.overall_score,
                    ranked: entry,
                    summary,
                }
            })
            .buffered(MAX_CONCURRENT_SUMMARIES)
            .collect::<Vec<_>>()
            .await
    }

    async fn summary_or_none(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
        index: usize,
    ) -> Option<String> {
        match self.analyze_match(candidate, role).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Summary for role #{index} failed: {e}");
                None
            }
        }
    }
}
