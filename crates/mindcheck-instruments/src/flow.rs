//! Question flow for a single run of a test.
//!
//! A run moves through `Answering(0) .. Answering(n - 1)` and ends in
//! `Completed`. Reaching `Completed` scores the answers and appends exactly
//! one [`TestResult`] to the session's [`ResultStore`]. A completed run
//! cannot be restarted; start a new one from the catalog instead.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::result::TestResult;
use mindcheck_storage::results::ResultStore;
use mindcheck_storage::session::SessionStore;

use crate::catalog::{Catalog, Question, Test};
use crate::error::InstrumentError;
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState {
    Answering { index: usize },
    Completed,
}

/// How many questions of a run have an answer recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

/// Drives one user through one test's questions.
pub struct QuestionFlow<S> {
    run_id: Uuid,
    test: Arc<Test>,
    answers: Vec<Answer>,
    state: FlowState,
    results: ResultStore<S>,
    result: Option<TestResult>,
}

impl<S: SessionStore> QuestionFlow<S> {
    /// Start a run of `test_id`. Every answer begins unanswered.
    pub fn start(
        catalog: &Catalog,
        test_id: &str,
        results: ResultStore<S>,
    ) -> Result<Self, InstrumentError> {
        let test = catalog
            .find_test(test_id)
            .ok_or_else(|| InstrumentError::UnknownTest(test_id.to_string()))?;
        Self::for_test(Arc::clone(test), results)
    }

    /// Start a run of a test that is already in hand.
    pub fn for_test(test: Arc<Test>, results: ResultStore<S>) -> Result<Self, InstrumentError> {
        if test.questions.is_empty() {
            return Err(InstrumentError::InvalidCatalog(format!(
                "test '{}' has no questions",
                test.id
            )));
        }

        let answers = test
            .questions
            .iter()
            .map(|q| Answer::unanswered(&q.id, &q.text))
            .collect();
        let run_id = Uuid::new_v4();

        info!(run_id = %run_id, test_id = %test.id, "run started");

        Ok(Self {
            run_id,
            test,
            answers,
            state: FlowState::Answering { index: 0 },
            results,
            result: None,
        })
    }

    /// Record the chosen option for the current question.
    ///
    /// Answering the last question completes the run: the answers are
    /// scored and the result is appended to the result store. If the append
    /// fails the run stays on the last question so the answer can be
    /// submitted again.
    pub fn answer(&mut self, index: usize, option: usize) -> Result<FlowState, InstrumentError> {
        let current = match self.state {
            FlowState::Answering { index } => index,
            FlowState::Completed => return Err(InstrumentError::RunCompleted(self.run_id)),
        };
        if index != current {
            return Err(InstrumentError::OutOfSequence { index, current });
        }

        let question = &self.test.questions[index];
        let chosen = question
            .options
            .get(option)
            .ok_or_else(|| InstrumentError::InvalidOption {
                question_id: question.id.clone(),
                option,
            })?;

        let answer = &mut self.answers[index];
        answer.answer = chosen.text.clone();
        answer.value = chosen.value;
        debug!(run_id = %self.run_id, index, value = chosen.value, "answer recorded");

        if index + 1 < self.question_count() {
            self.state = FlowState::Answering { index: index + 1 };
        } else {
            self.complete()?;
        }
        Ok(self.state)
    }

    /// Move past the current question without recording an answer.
    ///
    /// Only valid before the last question; otherwise nothing changes.
    pub fn skip(&mut self, index: usize) -> FlowState {
        if let FlowState::Answering { index: current } = self.state
            && index == current
            && index + 1 < self.question_count()
        {
            debug!(run_id = %self.run_id, index, "question skipped");
            self.state = FlowState::Answering { index: index + 1 };
        }
        self.state
    }

    /// Return to the previous question. Recorded answers are kept.
    ///
    /// Only valid after the first question; otherwise nothing changes.
    pub fn back(&mut self, index: usize) -> FlowState {
        if let FlowState::Answering { index: current } = self.state
            && index == current
            && index > 0
        {
            self.state = FlowState::Answering { index: index - 1 };
        }
        self.state
    }

    fn complete(&mut self) -> Result<(), InstrumentError> {
        let outcome = scoring::score(&self.test, &self.answers);
        let result = TestResult {
            run_id: self.run_id,
            test_id: self.test.id.clone(),
            test_name: self.test.name.clone(),
            score: outcome.total,
            severity: outcome.severity().map(str::to_string),
            description: outcome.description().map(str::to_string),
            answers: self.answers.clone(),
            completed_at: jiff::Timestamp::now(),
        };

        self.results.append(&result)?;

        info!(
            run_id = %self.run_id,
            test_id = %self.test.id,
            total = result.score,
            severity = result.severity.as_deref().unwrap_or("none"),
            "run completed"
        );

        self.result = Some(result);
        self.state = FlowState::Completed;
        Ok(())
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn test(&self) -> &Test {
        &self.test
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == FlowState::Completed
    }

    /// The question awaiting an answer, `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            FlowState::Answering { index } => self.test.questions.get(index),
            FlowState::Completed => None,
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answers.iter().filter(|a| a.is_answered()).count(),
            total: self.question_count(),
        }
    }

    /// The recorded result, available once completed.
    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }

    fn question_count(&self) -> usize {
        self.test.questions.len()
    }
}
