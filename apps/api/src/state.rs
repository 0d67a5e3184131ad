use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::matching::engine::MatchEngine;
use crate::scoring::ats::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Deterministic scorer built from the deployment's weights and stop words.
    pub scorer: Arc<AtsScorer>,
    pub engine: MatchEngine,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let scorer = Arc::new(AtsScorer::new(
            config.scoring.extractor(),
            config.scoring.weights,
        ));
        let engine = MatchEngine::new(generator, scorer.clone());

        Self {
            config,
            scorer,
            engine,
        }
    }
}
