use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mindcheck_bedrock::error::BedrockError;
use mindcheck_bedrock::generator::{GenerationRequest, TextGenerator};
use mindcheck_core::models::suggestion::SuggestionAnswers;

/// What a [`ScriptedGenerator`] does when called.
pub enum Script {
    Reply(&'static str),
    Fail,
    Hang,
}

/// A text generator with a fixed behavior that records what it was asked.
pub struct ScriptedGenerator {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_system_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_system_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_system_prompt(&self) -> Option<String> {
        self.last_system_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, BedrockError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.to_string());
        *self.last_system_prompt.lock().unwrap() = request.system_prompt.map(str::to_string);

        match self.script {
            Script::Reply(text) => Ok(text.to_string()),
            Script::Fail => Err(BedrockError::Invocation("service unavailable".to_string())),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok("depression-phq9".to_string())
            }
        }
    }
}

pub fn answers(feeling: &str, concerns: &str, duration: &str, symptoms: &str) -> SuggestionAnswers {
    SuggestionAnswers {
        feeling: feeling.to_string(),
        concerns: concerns.to_string(),
        duration: duration.to_string(),
        symptoms: symptoms.to_string(),
    }
}

pub fn depressed_answers() -> SuggestionAnswers {
    answers(
        "Sad, down, or depressed",
        "Changes in mood or emotional state",
        "More than 6 months",
        "Changes in sleep or appetite",
    )
}
