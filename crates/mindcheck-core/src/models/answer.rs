use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Value recorded for a question the user has not answered.
///
/// Unanswered items are summed like any other answer, so each one lowers
/// the total by one.
pub const UNANSWERED_VALUE: i32 = -1;

/// The answer recorded for one question of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub question_text: String,
    /// Display text of the chosen option. Empty while unanswered.
    pub answer: String,
    pub value: i32,
}

impl Answer {
    /// A placeholder for a question that has not been answered yet.
    pub fn unanswered(question_id: impl Into<String>, question_text: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            question_text: question_text.into(),
            answer: String::new(),
            value: UNANSWERED_VALUE,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.value != UNANSWERED_VALUE || !self.answer.is_empty()
    }
}
