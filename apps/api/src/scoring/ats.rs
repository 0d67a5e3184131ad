//! ATS scoring — deterministic, keyword-based fit between a candidate and a role.
//!
//! Four sub-scores, each bounded to [0, 100], combined by `ScoreWeights`:
//! 1. skill match       — requirement coverage by the candidate's skills
//! 2. experience match  — experience keywords vs description + responsibilities
//! 3. education match   — categorical: degree mention and/or field overlap
//! 4. keyword density   — all candidate text vs all role text
//!
//! Every ratio is guarded by an empty-set check, so scoring cannot fail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::profile::{CandidateProfile, RoleDescription};
use crate::scoring::keywords::KeywordExtractor;
use crate::scoring::weights::ScoreWeights;

/// Score when the role lists no requirements.
pub const NO_REQUIREMENTS_SCORE: f64 = 100.0;
/// Experience floor: used when the candidate has no experience, and as the clamp minimum.
pub const EXPERIENCE_FLOOR: f64 = 30.0;
/// Score when the role text has no keywords to match against.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub const EDUCATION_FULL_MATCH: f64 = 100.0;
pub const EDUCATION_PARTIAL_MATCH: f64 = 70.0;
pub const EDUCATION_NO_MATCH: f64 = 50.0;

/// Substrings that indicate a degree level in education text.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "undergraduate",
    "graduate",
    "degree",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-component scores, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub keyword_density: f64,
}

/// Result of one scoring invocation. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    /// Lowercase skills present in both the candidate's skills and the requirements.
    pub matched_skills: BTreeSet<String>,
    /// Lowercase requirements the candidate does not list.
    pub missing_skills: BTreeSet<String>,
}

/// Skill coverage plus the sets that explain it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Pure keyword scorer. Holds only immutable configuration, so it is
/// shareable across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct AtsScorer {
    extractor: KeywordExtractor,
    weights: ScoreWeights,
}

impl AtsScorer {
    pub fn new(extractor: KeywordExtractor, weights: ScoreWeights) -> Self {
        Self { extractor, weights }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Scores with the configured weights.
    pub fn compute(&self, candidate: &CandidateProfile, role: &RoleDescription) -> ScoreResult {
        self.compute_with(candidate, role, &self.weights)
    }

    /// Scores with caller-supplied weights. Weights are expected to be validated.
    pub fn compute_with(
        &self,
        candidate: &CandidateProfile,
        role: &RoleDescription,
        weights: &ScoreWeights,
    ) -> ScoreResult {
        let skills = skill_match(candidate, role);
        let experience = self.experience_match(candidate, role);
        let education = self.education_match(candidate, role);
        let density = self.keyword_density(candidate, role);

        let overall = skills.score * weights.skill_match
            + experience * weights.experience_match
            + education * weights.education_match
            + density * weights.keyword_density;

        ScoreResult {
            overall_score: round2(overall.clamp(0.0, 100.0)),
            breakdown: ScoreBreakdown {
                skill_match: round2(skills.score),
                experience_match: round2(experience),
                education_match: round2(education),
                keyword_density: round2(density),
            },
            matched_skills: skills.matched,
            missing_skills: skills.missing,
        }
    }

    /// Experience keywords against description + responsibilities, clamped to
    /// [EXPERIENCE_FLOOR, 100]. A candidate with some experience never scores
    /// below one with none.
    pub fn experience_match(&self, candidate: &CandidateProfile, role: &RoleDescription) -> f64 {
        let Some(experience) = candidate.experience_text() else {
            return EXPERIENCE_FLOOR;
        };

        let exp_keywords = self.extractor.extract(experience);
        let job_keywords = self.extractor.extract(&join_text(&[
            role.description.as_str(),
            role.responsibilities.join(" ").as_str(),
        ]));

        if job_keywords.is_empty() {
            return NEUTRAL_SCORE;
        }

        overlap_percent(&exp_keywords, &job_keywords).clamp(EXPERIENCE_FLOOR, 100.0)
    }

    /// Three-tier categorical score: degree mention and field overlap.
    pub fn education_match(&self, candidate: &CandidateProfile, role: &RoleDescription) -> f64 {
        let education = candidate.education.to_lowercase();

        let has_degree_mention = DEGREE_KEYWORDS.iter().any(|kw| education.contains(kw));

        let edu_keywords = self.extractor.extract(&education);
        let job_keywords = self.extractor.extract(&join_text(&[
            role.description.as_str(),
            role.requirements.join(" ").as_str(),
        ]));
        let field_match = !edu_keywords.is_disjoint(&job_keywords);

        match (has_degree_mention, field_match) {
            (true, true) => EDUCATION_FULL_MATCH,
            (true, false) | (false, true) => EDUCATION_PARTIAL_MATCH,
            (false, false) => EDUCATION_NO_MATCH,
        }
    }

    /// Share of all role keywords found anywhere in the candidate's record.
    pub fn keyword_density(&self, candidate: &CandidateProfile, role: &RoleDescription) -> f64 {
        let candidate_text = join_text(&[
            candidate.skills.join(" ").as_str(),
            candidate.education.as_str(),
            candidate.experience.as_deref().unwrap_or(""),
            candidate.projects().join(" ").as_str(),
            candidate.certifications().join(" ").as_str(),
        ]);
        let role_text = join_text(&[
            role.description.as_str(),
            role.requirements.join(" ").as_str(),
            role.responsibilities.join(" ").as_str(),
            role.preferred_qualifications().join(" ").as_str(),
        ]);

        let candidate_keywords = self.extractor.extract(&candidate_text);
        let role_keywords = self.extractor.extract(&role_text);

        if role_keywords.is_empty() {
            return NEUTRAL_SCORE;
        }

        overlap_percent(&candidate_keywords, &role_keywords).min(100.0)
    }
}

/// Case-insensitive set overlap of skills and requirements.
pub fn skill_match(candidate: &CandidateProfile, role: &RoleDescription) -> SkillMatch {
    let candidate_skills = lowercase_set(&candidate.skills);
    let required = lowercase_set(&role.requirements);

    if required.is_empty() {
        return SkillMatch {
            score: NO_REQUIREMENTS_SCORE,
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
        };
    }

    let matched: BTreeSet<String> = candidate_skills.intersection(&required).cloned().collect();
    let missing: BTreeSet<String> = required.difference(&candidate_skills).cloned().collect();
    let score = matched.len() as f64 / required.len() as f64 * 100.0;

    SkillMatch {
        score,
        matched,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Percentage of `target` found in `source`. Caller guarantees `target` is non-empty.
fn overlap_percent(source: &BTreeSet<String>, target: &BTreeSet<String>) -> f64 {
    let matched = source.intersection(target).count();
    matched as f64 / target.len() as f64 * 100.0
}

fn lowercase_set(items: &[String]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn join_text(parts: &[&str]) -> String {
    parts.join(" ")
}

/// Rounds to two decimal places for reporting.
///
/// Halves round away from zero (`f64::round`), not to even: 0.125 reports as
/// 0.13 here where a ties-to-even rounding of the binary value gives 0.12.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_candidate(skills: &[&str], education: &str, experience: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            name: "Ada Lovelace".to_string(),
            email: None,
            skills: strings(skills),
            interests: strings(&["data"]),
            education: education.to_string(),
            experience: experience.map(str::to_string),
            projects: None,
            certifications: None,
        }
    }

    fn make_role(description: &str, requirements: &[&str], responsibilities: &[&str]) -> RoleDescription {
        RoleDescription {
            title: "Data Engineering Intern".to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
            requirements: strings(requirements),
            responsibilities: strings(responsibilities),
            preferred_qualifications: None,
            duration: None,
            location: None,
        }
    }

    #[test]
    fn test_skill_match_partial_coverage() {
        let candidate = make_candidate(&["Python", "SQL"], "BS Biology", None);
        let role = make_role("Pipelines", &["python", "sql", "docker"], &[]);

        let result = AtsScorer::default().compute(&candidate, &role);
        assert_eq!(result.breakdown.skill_match, 66.67);
        assert_eq!(result.matched_skills, set(&["python", "sql"]));
        assert_eq!(result.missing_skills, set(&["docker"]));
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let lower = make_candidate(&["python", "sql"], "BS", None);
        let upper = make_candidate(&["PYTHON", "SQL"], "BS", None);
        let role_lower = make_role("x", &["python", "docker"], &[]);
        let role_upper = make_role("x", &["PYTHON", "DOCKER"], &[]);

        let a = skill_match(&lower, &role_lower);
        let b = skill_match(&upper, &role_upper);
        assert_eq!(a.score, b.score);
        assert_eq!(a.matched, b.matched);
        assert_eq!(a.missing, b.missing);
    }

    #[test]
    fn test_duplicate_requirements_collapse() {
        let candidate = make_candidate(&["Python"], "BS", None);
        let role = make_role("x", &["Python", "python", "PYTHON", "Go"], &[]);
        let result = skill_match(&candidate, &role);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_empty_requirements_is_full_skill_score() {
        let candidate = make_candidate(&["Python"], "BS", None);
        let role = make_role("x", &[], &[]);

        let result = AtsScorer::default().compute(&candidate, &role);
        assert_eq!(result.breakdown.skill_match, 100.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_no_experience_scores_floor() {
        let candidate = make_candidate(&[], "BS", None);
        let role = make_role("Build data pipelines", &[], &["Maintain dashboards"]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.experience_match(&candidate, &role), 30.0);
    }

    #[test]
    fn test_low_overlap_experience_clamped_to_floor() {
        let candidate = make_candidate(&[], "BS", Some("Retail cashier handling customers"));
        let role = make_role(
            "Build scalable data pipelines using distributed systems",
            &[],
            &["Maintain dashboards", "Monitor services"],
        );
        let scorer = AtsScorer::default();
        assert_eq!(scorer.experience_match(&candidate, &role), 30.0);
    }

    #[test]
    fn test_experience_overlap_above_floor() {
        // job keywords: build, data, pipelines → 2 of 3 matched
        let candidate = make_candidate(&[], "BS", Some("Built data pipelines at a startup"));
        let role = make_role("Build data pipelines", &[], &[]);
        let scorer = AtsScorer::default();
        let score = scorer.experience_match(&candidate, &role);
        assert!((score - 200.0 / 3.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_experience_neutral_when_role_has_no_keywords() {
        let candidate = make_candidate(&[], "BS", Some("Built data pipelines"));
        let role = make_role("the and", &[], &["for you"]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.experience_match(&candidate, &role), 50.0);
    }

    #[test]
    fn test_education_both_signals() {
        let candidate = make_candidate(&[], "Bachelor of Science in Statistics", None);
        let role = make_role("Applied statistics team", &["Statistics coursework"], &[]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.education_match(&candidate, &role), 100.0);
    }

    #[test]
    fn test_education_degree_only() {
        let candidate = make_candidate(&[], "Master of Arts", None);
        let role = make_role("Backend services", &["Rust"], &[]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.education_match(&candidate, &role), 70.0);
    }

    #[test]
    fn test_education_field_only() {
        let candidate = make_candidate(&[], "Studying computer science", None);
        let role = make_role("Computer vision", &[], &[]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.education_match(&candidate, &role), 70.0);
    }

    #[test]
    fn test_education_neither_signal() {
        let candidate = make_candidate(&[], "Self taught", None);
        let role = make_role("Backend services", &["Rust"], &[]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.education_match(&candidate, &role), 50.0);
    }

    #[test]
    fn test_education_is_always_one_of_three_tiers() {
        let scorer = AtsScorer::default();
        let educations = ["", "PhD Physics", "bsc", "Graduate student, economics", "12345"];
        let role = make_role("Economics research with physics models", &["Python"], &[]);
        for education in educations {
            let candidate = make_candidate(&[], education, None);
            let score = scorer.education_match(&candidate, &role);
            assert!(
                [50.0, 70.0, 100.0].contains(&score),
                "unexpected education score {score} for {education:?}"
            );
        }
    }

    #[test]
    fn test_keyword_density_counts_all_candidate_text() {
        let mut candidate = make_candidate(&["Docker"], "BS", None);
        candidate.projects = Some(strings(&["Kafka streaming"]));
        candidate.certifications = Some(strings(&["Kubernetes administrator"]));
        let mut role = make_role("Docker", &["Kafka"], &["Kubernetes"]);
        role.preferred_qualifications = Some(strings(&["Terraform"]));

        let scorer = AtsScorer::default();
        // role keywords: docker, kafka, kubernetes, terraform → 3 of 4
        assert_eq!(scorer.keyword_density(&candidate, &role), 75.0);
    }

    #[test]
    fn test_keyword_density_neutral_for_empty_role_text() {
        let candidate = make_candidate(&["Docker"], "BS", None);
        let role = make_role("", &[], &[]);
        let scorer = AtsScorer::default();
        assert_eq!(scorer.keyword_density(&candidate, &role), 50.0);
    }

    #[test]
    fn test_overall_with_no_experience_and_no_requirements() {
        let candidate = make_candidate(&["Python"], "Self taught", None);
        let role = make_role("Python scripting", &[], &[]);
        let scorer = AtsScorer::default();

        let education = scorer.education_match(&candidate, &role);
        let density = scorer.keyword_density(&candidate, &role);
        let expected = 100.0 * 0.40 + 30.0 * 0.25 + education * 0.15 + density * 0.20;

        let result = scorer.compute(&candidate, &role);
        assert_eq!(result.breakdown.experience_match, 30.0);
        assert_eq!(result.overall_score, round2(expected));
        assert_eq!(result, scorer.compute(&candidate, &role));
    }

    #[test]
    fn test_custom_weights_change_overall() {
        let candidate = make_candidate(&["Python"], "Self taught", None);
        let role = make_role("Python scripting", &["python"], &[]);
        let weights = ScoreWeights {
            skill_match: 1.0,
            experience_match: 0.0,
            education_match: 0.0,
            keyword_density: 0.0,
        };
        let result = AtsScorer::default().compute_with(&candidate, &role, &weights);
        assert_eq!(result.overall_score, 100.0);
    }

    #[test]
    fn test_all_scores_bounded() {
        let scorer = AtsScorer::default();
        let cases = [
            (make_candidate(&[], "", None), make_role("", &[], &[])),
            (
                make_candidate(&["a", "b"], "PhD", Some("x")),
                make_role("the the", &["c"], &["d"]),
            ),
            (
                make_candidate(&["Rust"], "Rust degree", Some("Rust Rust Rust systems")),
                make_role("Rust systems", &["Rust"], &["Rust systems"]),
            ),
        ];
        for (candidate, role) in cases {
            let r = scorer.compute(&candidate, &role);
            for score in [
                r.overall_score,
                r.breakdown.skill_match,
                r.breakdown.experience_match,
                r.breakdown.education_match,
                r.breakdown.keyword_density,
            ] {
                assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
            }
        }
    }

    #[test]
    fn test_breakdown_serializes_four_named_keys() {
        let candidate = make_candidate(&["SQL"], "BS", None);
        let role = make_role("Analytics", &["sql"], &[]);
        let value = serde_json::to_value(AtsScorer::default().compute(&candidate, &role)).unwrap();

        let breakdown = value["breakdown"].as_object().unwrap();
        let mut keys: Vec<&str> = breakdown.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["education_match", "experience_match", "keyword_density", "skill_match"]
        );
        assert_eq!(value["matched_skills"], serde_json::json!(["sql"]));
        assert_eq!(value["missing_skills"], serde_json::json!([]));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(30.0), 30.0);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
