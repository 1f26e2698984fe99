use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::answer::Answer;

use crate::catalog::Test;

/// An inclusive score interval with its severity band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRange {
    pub min: i32,
    pub max: i32,
    pub severity: String,
    pub description: String,
}

impl ScoringRange {
    pub fn contains(&self, total: i32) -> bool {
        self.min <= total && total <= self.max
    }
}

/// The ordered severity bands of a test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scoring {
    pub ranges: Vec<ScoringRange>,
}

impl Scoring {
    /// The first range, in declaration order, that contains `total`.
    pub fn match_range(&self, total: i32) -> Option<&ScoringRange> {
        self.ranges.iter().find(|r| r.contains(total))
    }

    /// Inclusive intervals of `[low, high]` that no range covers.
    ///
    /// Walks the range endpoints in ascending order, so the cost depends on
    /// the number of ranges and not on the width of the score span.
    pub fn uncovered(&self, low: i32, high: i32) -> Vec<(i32, i32)> {
        let mut sorted: Vec<&ScoringRange> = self.ranges.iter().collect();
        sorted.sort_by_key(|r| r.min);

        let mut gaps = Vec::new();
        let mut next = Some(low);
        for range in sorted {
            let Some(cursor) = next.filter(|c| *c <= high) else {
                break;
            };
            if range.max < cursor {
                continue;
            }
            if range.min > cursor {
                gaps.push((cursor, high.min(range.min - 1)));
            }
            next = range.max.checked_add(1);
        }
        if let Some(cursor) = next.filter(|c| *c <= high) {
            gaps.push((cursor, high));
        }
        gaps
    }

    /// Index pairs of ranges whose intervals overlap. The earlier range of
    /// each pair is the one that wins.
    pub fn overlapping(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.min <= b.max && b.min <= a.max {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Total score and matched band for a set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome<'a> {
    pub total: i32,
    /// `None` when the total lies outside every declared range.
    pub range: Option<&'a ScoringRange>,
}

impl ScoreOutcome<'_> {
    pub fn severity(&self) -> Option<&str> {
        self.range.map(|r| r.severity.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.range.map(|r| r.description.as_str())
    }
}

/// Score a set of answers against a test.
///
/// The total is the sum of every answer value, saturating at the `i32`
/// bounds. Unanswered items keep their sentinel value and are summed along
/// with the rest.
pub fn score<'a>(test: &'a Test, answers: &[Answer]) -> ScoreOutcome<'a> {
    let total = answers
        .iter()
        .fold(0i32, |total, a| total.saturating_add(a.value));
    ScoreOutcome {
        total,
        range: test.scoring.match_range(total),
    }
}
