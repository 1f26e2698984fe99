//! Plain-text results report.
//!
//! Renders completed results plus an analysis into the downloadable text
//! document offered at the end of a session.

use crate::models::result::TestResult;

pub const REPORT_TITLE: &str = "MENTAL HEALTH SCREENING RESULTS";

pub const DISCLAIMER: &str = "DISCLAIMER: This report is generated based on screening tools and is \
not a clinical diagnosis. Please consult with a healthcare professional for proper evaluation \
and treatment.";

/// Suggested download filename for the report.
pub const REPORT_FILENAME: &str = "mental-health-results.txt";

/// Render results and analysis as a plain-text report.
///
/// A missing severity or description renders as `N/A`.
pub fn render_text_report(results: &[TestResult], analysis: &str) -> String {
    let mut content = format!("{REPORT_TITLE}\n\n");

    for result in results {
        content.push_str(&format!("TEST: {}\n", result.test_name));
        content.push_str(&format!("SCORE: {}\n", result.score));
        content.push_str(&format!(
            "SEVERITY: {}\n",
            result.severity.as_deref().unwrap_or("N/A")
        ));
        content.push_str(&format!(
            "INTERPRETATION: {}\n\n",
            result.description.as_deref().unwrap_or("N/A")
        ));

        content.push_str("DETAILED RESPONSES:\n");
        for answer in &result.answers {
            content.push_str(&format!(
                "- {}: {} ({} points)\n",
                answer.question_text, answer.answer, answer.value
            ));
        }
        content.push('\n');
    }

    content.push_str("AI ANALYSIS:\n\n");
    content.push_str(analysis);
    content.push_str("\n\n");
    content.push_str(DISCLAIMER);
    content
}
