use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use mindcheck_core::models::result::TestResult;

use crate::error::BedrockError;
use crate::generator::{GenerationRequest, TextGenerator};
use crate::prompt;

pub const NO_RESULTS: &str = "No test results found. Please complete a test first.";

pub const ANALYSIS_UNAVAILABLE: &str =
    "An error occurred while generating the analysis. Please try again later.";

pub const EMPTY_ANALYSIS: &str = "Unable to generate analysis. Please try again later.";

const MAX_TOKENS: i32 = 1500;
const TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Writes a narrative analysis of a session's completed results.
#[derive(Clone)]
pub struct ResultsAnalyst {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl ResultsAnalyst {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze the results. Never fails: problems with the model produce a
    /// fixed message instead.
    pub async fn analyze(&self, results: &[TestResult]) -> String {
        if results.is_empty() {
            return NO_RESULTS.to_string();
        }

        match self.ask_model(results).await {
            Ok(text) if text.trim().is_empty() => EMPTY_ANALYSIS.to_string(),
            Ok(text) => {
                info!(results = results.len(), "analysis generated");
                text
            }
            Err(e) => {
                warn!(error = %e, "analysis unavailable");
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn ask_model(&self, results: &[TestResult]) -> Result<String, BedrockError> {
        let generator = self.generator.as_ref().ok_or(BedrockError::Disabled)?;
        let prompt = prompt::analysis_prompt(results);
        let request = GenerationRequest::new(&prompt)
            .with_system_prompt(prompt::ANALYSIS_SYSTEM_PROMPT)
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE);

        tokio::time::timeout(self.timeout, generator.generate(request))
            .await
            .map_err(|_| BedrockError::Timeout(self.timeout))?
    }
}
