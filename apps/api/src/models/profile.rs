use serde::{Deserialize, Serialize};

/// A candidate's profile as submitted by the caller. Read-only to scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Education level and major, free text (e.g. "BS Computer Science, Junior").
    pub education: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
}

/// A role (internship / job) the candidate is matched against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDescription {
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub preferred_qualifications: Option<Vec<String>>,
    // Prompt-only fields; never scored.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CandidateProfile {
    pub fn projects(&self) -> &[String] {
        self.projects.as_deref().unwrap_or_default()
    }

    pub fn certifications(&self) -> &[String] {
        self.certifications.as_deref().unwrap_or_default()
    }

    /// Experience narrative, treating a blank string the same as absent.
    pub fn experience_text(&self) -> Option<&str> {
        self.experience.as_deref().filter(|e| !e.is_empty())
    }
}

impl RoleDescription {
    pub fn preferred_qualifications(&self) -> &[String] {
        self.preferred_qualifications
            .as_deref()
            .unwrap_or_default()
    }
}
