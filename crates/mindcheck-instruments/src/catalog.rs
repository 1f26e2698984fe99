use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::Scoring;

/// Category used for tests that do not declare one.
pub const UNCATEGORIZED: &str = "other";

const BUILTIN_CATALOG: &str = include_str!("../data/tests.json");

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// A screening questionnaire. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Test {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub description: String,
    pub instructions: String,
    pub questions: Vec<Question>,
    pub scoring: Scoring,
}

impl Test {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Lowest and highest totals reachable by answering every question,
    /// saturating at the `i32` bounds.
    pub fn score_bounds(&self) -> (i32, i32) {
        self.questions.iter().fold((0, 0), |(low, high), q| {
            let min = q.options.iter().map(|o| o.value).min().unwrap_or(0);
            let max = q.options.iter().map(|o| o.value).max().unwrap_or(0);
            (low.saturating_add(min), high.saturating_add(max))
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { tests: Vec<Test> },
    List(Vec<Test>),
}

/// The fixed set of tests available for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    tests: Vec<Arc<Test>>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, InstrumentError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON.
    ///
    /// Accepts either `{"tests": [...]}` or a bare list of tests.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let tests = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::Wrapped { tests } | CatalogDocument::List(tests) => tests,
        };
        Self::from_tests(tests)
    }

    pub fn from_tests(tests: Vec<Test>) -> Result<Self, InstrumentError> {
        if tests.is_empty() {
            return Err(InstrumentError::InvalidCatalog(
                "catalog contains no tests".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for test in &tests {
            validate_test(test)?;
            if !seen.insert(test.id.as_str()) {
                return Err(InstrumentError::InvalidCatalog(format!(
                    "duplicate test id '{}'",
                    test.id
                )));
            }
            report_scoring_issues(test);
        }

        info!(count = tests.len(), "catalog loaded");

        Ok(Self {
            tests: tests.into_iter().map(Arc::new).collect(),
        })
    }

    /// Look up a test by exact identifier.
    pub fn find_test(&self, id: &str) -> Option<&Arc<Test>> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_test(id).is_some()
    }

    /// All tests in catalog order.
    pub fn tests(&self) -> &[Arc<Test>] {
        &self.tests
    }

    /// All test identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|t| t.id.as_str())
    }

    /// Tests grouped by category. Groups appear in the order their category
    /// is first seen, and tests keep catalog order within a group.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&Test>)> {
        let mut groups: Vec<(&str, Vec<&Test>)> = Vec::new();
        for test in &self.tests {
            let category = test.category();
            match groups.iter().position(|(c, _)| *c == category) {
                Some(i) => groups[i].1.push(test.as_ref()),
                None => groups.push((category, vec![test.as_ref()])),
            }
        }
        groups
    }
}

fn validate_test(test: &Test) -> Result<(), InstrumentError> {
    if test.id.trim().is_empty() {
        return Err(InstrumentError::InvalidCatalog(
            "test with an empty id".to_string(),
        ));
    }
    if test.questions.is_empty() {
        return Err(InstrumentError::InvalidCatalog(format!(
            "test '{}' has no questions",
            test.id
        )));
    }
    if let Some(q) = test.questions.iter().find(|q| q.options.is_empty()) {
        return Err(InstrumentError::InvalidCatalog(format!(
            "question '{}' of test '{}' has no options",
            q.id, test.id
        )));
    }
    if let Some(r) = test.scoring.ranges.iter().find(|r| r.min > r.max) {
        return Err(InstrumentError::InvalidCatalog(format!(
            "range '{}' of test '{}' has min {} above max {}",
            r.severity, test.id, r.min, r.max
        )));
    }
    Ok(())
}

/// Gaps and overlaps are allowed but almost always a data mistake.
fn report_scoring_issues(test: &Test) {
    let (low, high) = test.score_bounds();
    let gaps = test.scoring.uncovered(low, high);
    if !gaps.is_empty() {
        warn!(test_id = %test.id, ?gaps, "scoring ranges leave reachable totals uncovered");
    }
    let overlaps = test.scoring.overlapping();
    if !overlaps.is_empty() {
        warn!(test_id = %test.id, ?overlaps, "scoring ranges overlap, earlier range wins");
    }
}
