// Deterministic scoring engine: keyword extraction, weighted ATS score, batch ranking.
// Pure and synchronous; no LLM calls here.

pub mod ats;
pub mod keywords;
pub mod ranking;
pub mod weights;
