use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;

/// The outcome of one completed run of a test.
///
/// Created once when the run completes and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResult {
    pub run_id: Uuid,
    pub test_id: String,
    pub test_name: String,
    pub score: i32,
    /// Severity label of the matched scoring range, `None` when the score
    /// falls outside every declared range.
    pub severity: Option<String>,
    pub description: Option<String>,
    pub answers: Vec<Answer>,
    pub completed_at: jiff::Timestamp,
}
