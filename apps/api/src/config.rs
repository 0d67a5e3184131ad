use anyhow::{anyhow, bail, Context, Result};

use crate::scoring::keywords::{KeywordExtractor, DEFAULT_STOP_WORDS};
use crate::scoring::weights::ScoreWeights;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub llm: LlmSettings,
    pub scoring: ScoringSettings,
}

/// Connection settings for the OpenAI-compatible text-generation server.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2525/v1".to_string(),
            api_key: "token-abc123".to_string(),
            model: "Qwen/Qwen2.5-7B-Instruct-AWQ".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Per-deployment scoring tables: component weights and stop words.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub weights: ScoreWeights,
    pub stop_words: Vec<String>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ScoringSettings {
    pub fn extractor(&self) -> KeywordExtractor {
        KeywordExtractor::new(&self.stop_words)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let llm_defaults = LlmSettings::default();

        let llm = LlmSettings {
            base_url: lookup("LLM_BASE_URL").unwrap_or(llm_defaults.base_url),
            api_key: lookup("LLM_API_KEY").unwrap_or(llm_defaults.api_key),
            model: lookup("LLM_MODEL").unwrap_or(llm_defaults.model),
            max_tokens: parse_or(&lookup, "LLM_MAX_TOKENS", llm_defaults.max_tokens)?,
            temperature: parse_or(&lookup, "LLM_TEMPERATURE", llm_defaults.temperature)?,
            top_p: parse_or(&lookup, "LLM_TOP_P", llm_defaults.top_p)?,
        };

        let weights = match lookup("SCORE_WEIGHTS") {
            Some(raw) => raw
                .parse::<ScoreWeights>()
                .map_err(|e| anyhow!("SCORE_WEIGHTS is invalid: {e}"))?,
            None => ScoreWeights::default(),
        };
        weights
            .validate()
            .map_err(|errors| anyhow!("SCORE_WEIGHTS is invalid: {}", errors.join("; ")))?;

        let stop_words = match lookup("STOP_WORDS") {
            Some(raw) => {
                let words: Vec<String> = raw
                    .split(',')
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                if words.is_empty() {
                    bail!("STOP_WORDS is set but lists no words; unset it to use the defaults");
                }
                words
            }
            None => ScoringSettings::default().stop_words,
        };

        Ok(Config {
            host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            llm,
            scoring: ScoringSettings {
                weights,
                stop_words,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
