use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Allowed deviation of the weight sum from 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Component weights for the overall score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreWeights {
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub keyword_density: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.40,
            experience_match: 0.25,
            education_match: 0.15,
            keyword_density: 0.20,
        }
    }
}

impl ScoreWeights {
    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("skill_match", self.skill_match),
            ("experience_match", self.experience_match),
            ("education_match", self.education_match),
            ("keyword_density", self.keyword_density),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }

    /// Validates the weights. Returns all violations at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, weight) in self.named() {
            if !weight.is_finite() {
                errors.push(format!("weights.{name}: must be a finite number"));
            } else if !(0.0..=1.0).contains(&weight) {
                errors.push(format!("weights.{name}: {weight} is outside [0, 1]"));
            }
        }

        let sum = self.sum();
        if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("weights: must sum to 1.0, got {sum}"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Parses `skill_match=0.4,experience_match=0.25,...`. Omitted keys keep their defaults.
impl FromStr for ScoreWeights {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut weights = ScoreWeights::default();

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected key=value, got '{pair}'"))?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight '{}' for {}", value.trim(), key.trim()))?;

            match key.trim() {
                "skill_match" => weights.skill_match = value,
                "experience_match" => weights.experience_match = value,
                "education_match" => weights.education_match = value,
                "keyword_density" => weights.keyword_density = value,
                other => return Err(format!("unknown weight '{other}'")),
            }
        }

        Ok(weights)
    }
}
