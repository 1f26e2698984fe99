use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use mindcheck_core::models::suggestion::SuggestionAnswers;
use mindcheck_instruments::catalog::Catalog;

use crate::error::BedrockError;
use crate::fallback;
use crate::generator::{GenerationRequest, TextGenerator};
use crate::prompt;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub test_id: String,
    pub source: SuggestionSource,
}

/// Recommends the next test to take from the four suggestion answers.
///
/// Asks the text generator first. Any failure, a timeout, or a reply that
/// is not exactly a catalog ID falls back to keyword scoring, so
/// [`suggest`](Self::suggest) always yields a catalog ID.
#[derive(Clone)]
pub struct SuggestionMatcher {
    catalog: Arc<Catalog>,
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl SuggestionMatcher {
    pub fn new(catalog: Arc<Catalog>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            catalog,
            generator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn suggest(&self, answers: &SuggestionAnswers) -> Suggestion {
        match self.ask_model(answers).await {
            Ok(test_id) => {
                info!(test_id = %test_id, source = "ai", "test suggested");
                Suggestion {
                    test_id,
                    source: SuggestionSource::Model,
                }
            }
            Err(e) => {
                if !matches!(e, BedrockError::Disabled) {
                    warn!(error = %e, "model suggestion unavailable, using keyword fallback");
                }
                let test_id = fallback::suggest(&self.catalog, answers).to_string();
                info!(test_id = %test_id, source = "fallback", "test suggested");
                Suggestion {
                    test_id,
                    source: SuggestionSource::Fallback,
                }
            }
        }
    }

    async fn ask_model(&self, answers: &SuggestionAnswers) -> Result<String, BedrockError> {
        let generator = self.generator.as_ref().ok_or(BedrockError::Disabled)?;
        let prompt = prompt::suggestion_prompt(answers, &self.catalog);

        let reply = tokio::time::timeout(
            self.timeout,
            generator.generate(GenerationRequest::new(&prompt)),
        )
        .await
        .map_err(|_| BedrockError::Timeout(self.timeout))??;

        let test_id = reply.trim().to_lowercase();
        if self.catalog.contains(&test_id) {
            Ok(test_id)
        } else {
            Err(BedrockError::UnknownTest(test_id))
        }
    }
}
