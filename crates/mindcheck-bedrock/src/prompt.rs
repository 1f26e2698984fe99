//! Prompt builders for suggestion and analysis requests.

use mindcheck_core::models::result::TestResult;
use mindcheck_core::models::suggestion::SuggestionAnswers;
use mindcheck_instruments::catalog::Catalog;

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a mental health assistant providing analysis \
of screening test results. You are not a licensed therapist or doctor. Always include \
disclaimers about seeking professional help and that these are screening tools, not \
diagnostic instruments.";

/// Build the prompt asking the model to pick one test for the user.
///
/// Embeds the four answers, the catalog grouped by category, and the full
/// list of valid test IDs.
pub fn suggestion_prompt(answers: &SuggestionAnswers, catalog: &Catalog) -> String {
    let mut prompt = String::from(
        "Based on the following user responses, suggest the most appropriate mental health \
         screening test from our available options. Consider the symptoms, duration, and \
         overall pattern.\n\n",
    );

    prompt.push_str("User's responses:\n");
    prompt.push_str(&format!("1. Current feelings: {}\n", answers.feeling));
    prompt.push_str(&format!("2. Main concerns: {}\n", answers.concerns));
    prompt.push_str(&format!("3. Duration of symptoms: {}\n", answers.duration));
    prompt.push_str(&format!("4. Primary symptoms: {}\n\n", answers.symptoms));

    prompt.push_str("Available tests by category:\n");
    let groups: Vec<String> = catalog
        .grouped_by_category()
        .into_iter()
        .map(|(category, tests)| {
            let lines: Vec<String> = tests
                .iter()
                .map(|t| format!("- {} ({}): {}", t.name, t.id, t.description))
                .collect();
            format!("{}:\n{}", category.to_uppercase(), lines.join("\n"))
        })
        .collect();
    prompt.push_str(&groups.join("\n\n"));

    let ids: Vec<&str> = catalog.ids().collect();
    prompt.push_str(&format!(
        "\n\nPlease analyze the responses and suggest the most appropriate test ID from: {}. \
         Consider:\n",
        ids.join(", ")
    ));
    prompt.push_str("1. Symptom patterns and their alignment with specific disorders\n");
    prompt.push_str("2. Duration and severity of symptoms\n");
    prompt.push_str("3. Primary areas of concern\n");
    prompt.push_str("4. Potential comorbidities\n\n");
    prompt.push_str("Respond only with the most appropriate test ID.");
    prompt
}

/// Build the prompt asking for an analysis of completed results.
pub fn analysis_prompt(results: &[TestResult]) -> String {
    let mut prompt = String::from(
        "Based on the following mental health assessment results, provide a comprehensive \
         analysis and recommendations:\n\n",
    );

    for result in results {
        prompt.push_str(&format!("Test: {}\n", result.test_name));
        prompt.push_str(&format!("Score: {}\n", result.score));
        prompt.push_str(&format!(
            "Severity: {}\n",
            result.severity.as_deref().unwrap_or("not determined")
        ));
        prompt.push_str(&format!(
            "Description: {}\n\n",
            result.description.as_deref().unwrap_or("not available")
        ));

        prompt.push_str("Detailed Responses:\n");
        for answer in &result.answers {
            prompt.push_str(&format!(
                "- {}: {} ({} points)\n",
                answer.question_text, answer.answer, answer.value
            ));
        }
        prompt.push('\n');
    }

    prompt.push_str("Please provide:\n");
    prompt.push_str("1. A summary of the overall mental health status\n");
    prompt.push_str("2. Potential connections between different symptoms or conditions\n");
    prompt.push_str("3. Personalized recommendations for next steps\n");
    prompt.push_str("4. Self-care strategies that might be helpful\n");
    prompt.push_str("5. Important disclaimer that this is not a clinical diagnosis\n");
    prompt
}
