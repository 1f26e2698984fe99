mod common;

use mindcheck_bedrock::fallback::{self, score_all};
use mindcheck_instruments::catalog::Catalog;

use common::{answers, depressed_answers};

fn score_of(scores: &[(String, i32)], id: &str) -> i32 {
    scores.iter().find(|(t, _)| t == id).map(|(_, s)| *s).unwrap()
}

#[test]
fn depressed_answers_pick_depression() {
    let catalog = Catalog::builtin().unwrap();
    let scores = score_all(&catalog, &depressed_answers());

    // sad + down + depressed in feeling (3 x 2), sleep + appetite in
    // symptoms (2 x 1), and the duration bonus.
    assert_eq!(score_of(&scores, "depression-phq9"), 9);
    // sleep keyword in symptoms plus the sleep bonus.
    assert_eq!(score_of(&scores, "insomnia-isi"), 3);
    // "emotional" in concerns plus the duration bonus.
    assert_eq!(score_of(&scores, "borderline-msi"), 3);
    assert_eq!(score_of(&scores, "anxiety-gad7"), 1);

    assert_eq!(fallback::suggest(&catalog, &depressed_answers()), "depression-phq9");
}

#[test]
fn keyword_matching_ignores_case() {
    let catalog = Catalog::builtin().unwrap();
    let scores = score_all(&catalog, &answers("ANXIOUS and Worried", "", "", ""));
    assert_eq!(score_of(&scores, "anxiety-gad7"), 4);
}

#[test]
fn drinking_concerns_pick_alcohol() {
    let catalog = Catalog::builtin().unwrap();
    let chosen = fallback::suggest(
        &catalog,
        &answers(
            "Generally okay but concerned about specific issues",
            "I worry about my drinking",
            "2-4 weeks",
            "Problems with alcohol or substances",
        ),
    );
    assert_eq!(chosen, "alcohol-audit");

    let scores = score_all(
        &catalog,
        &answers("", "I worry about my drinking", "", "Problems with alcohol or substances"),
    );
    // drinking keyword (2) + alcohol in symptoms (1) + substance bonus (3).
    assert_eq!(score_of(&scores, "alcohol-audit"), 6);
}

#[test]
fn night_symptoms_pick_insomnia() {
    let catalog = Catalog::builtin().unwrap();
    let chosen = fallback::suggest(
        &catalog,
        &answers(
            "Having trouble with sleep or concentration",
            "Sleep problems or fatigue",
            "1-3 months",
            "Lying awake at night",
        ),
    );
    assert_eq!(chosen, "insomnia-isi");
}

#[test]
fn intrusive_thoughts_pick_ocd() {
    let catalog = Catalog::builtin().unwrap();
    let chosen = fallback::suggest(
        &catalog,
        &answers(
            "Experiencing intrusive thoughts or compulsions",
            "Persistent worry or anxiety",
            "Less than 2 weeks",
            "Repetitive thoughts or behaviors",
        ),
    );
    assert_eq!(chosen, "ocd-ybocs");
}

#[test]
fn duration_bonus_needs_plural_months_or_years() {
    let catalog = Catalog::builtin().unwrap();
    let year = score_all(&catalog, &answers("", "", "More than a year", ""));
    let years = score_all(&catalog, &answers("", "", "Several years", ""));
    let months = score_all(&catalog, &answers("", "", "3-6 months", ""));

    assert_eq!(score_of(&year, "depression-phq9"), 0);
    assert_eq!(score_of(&years, "depression-phq9"), 1);
    assert_eq!(score_of(&months, "anxiety-gad7"), 1);
    assert_eq!(score_of(&months, "borderline-msi"), 1);
    assert_eq!(score_of(&months, "bipolar-mdq"), 0);
}

#[test]
fn ties_go_to_the_earliest_catalog_test() {
    let catalog = Catalog::builtin().unwrap();
    // Nothing matches, every test scores zero.
    assert_eq!(
        fallback::suggest(&catalog, &answers("", "", "", "")),
        catalog.tests()[0].id
    );
    // "mood swings" scores bipolar and borderline equally; bipolar is listed first.
    let chosen = fallback::suggest(&catalog, &answers("mood swings", "", "", ""));
    assert_eq!(chosen, "bipolar-mdq");
}

#[test]
fn keywords_for_tests_outside_the_catalog_are_ignored() {
    let json = r#"[{"id": "insomnia-isi", "name": "ISI", "description": "", "instructions": "",
        "questions": [{"id": "q", "text": "Q", "options": [{"value": 0, "text": "None"}]}],
        "scoring": {"ranges": [{"min": 0, "max": 0, "severity": "none", "description": ""}]}}]"#;
    let catalog = Catalog::from_json(json).unwrap();

    let scores = score_all(&catalog, &depressed_answers());
    assert_eq!(scores.len(), 1);
    assert_eq!(fallback::suggest(&catalog, &depressed_answers()), "insomnia-isi");
}

#[test]
fn fallback_is_repeatable() {
    let catalog = Catalog::builtin().unwrap();
    let first = fallback::suggest(&catalog, &depressed_answers()).to_string();
    for _ in 0..5 {
        assert_eq!(fallback::suggest(&catalog, &depressed_answers()), first);
    }
}
