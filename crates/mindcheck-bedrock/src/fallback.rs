//! Deterministic keyword scoring used when the model cannot pick a test.
//!
//! Every catalog test starts at zero. Each keyword found in `feeling` or
//! `concerns` is worth 2 points for its test, and 1 point in `symptoms`.
//! Fixed bonuses then apply for long durations, sleep symptoms, and
//! drinking concerns. The highest score wins; ties go to the test that
//! comes first in the catalog.

use mindcheck_core::models::suggestion::SuggestionAnswers;
use mindcheck_instruments::catalog::Catalog;

pub const DEPRESSION: &str = "depression-phq9";
pub const BIPOLAR: &str = "bipolar-mdq";
pub const ANXIETY: &str = "anxiety-gad7";
pub const OCD: &str = "ocd-ybocs";
pub const ALCOHOL: &str = "alcohol-audit";
pub const INSOMNIA: &str = "insomnia-isi";
pub const BORDERLINE: &str = "borderline-msi";

type KeywordTable = &'static [(&'static str, &'static [(&'static str, &'static [&'static str])])];

/// Keywords per test, grouped by category.
pub const KEYWORDS: KeywordTable = &[
    (
        "mood",
        &[
            (
                DEPRESSION,
                &[
                    "sad",
                    "down",
                    "depressed",
                    "tired",
                    "sleep",
                    "appetite",
                    "concentration",
                    "worthless",
                ],
            ),
            (
                BIPOLAR,
                &["mood swings", "high energy", "racing thoughts", "impulsive", "manic"],
            ),
        ],
    ),
    (
        "anxiety",
        &[
            (
                ANXIETY,
                &["anxious", "worried", "nervous", "restless", "fear", "panic"],
            ),
            (
                OCD,
                &[
                    "obsessive",
                    "compulsive",
                    "repetitive",
                    "intrusive",
                    "thoughts",
                    "rituals",
                ],
            ),
        ],
    ),
    (
        "substance",
        &[(ALCOHOL, &["alcohol", "drinking", "drunk", "hangover", "blackout"])],
    ),
    (
        "sleep",
        &[(
            INSOMNIA,
            &["sleep", "insomnia", "tired", "fatigue", "nighttime", "restless"],
        )],
    ),
    (
        "personality",
        &[(
            BORDERLINE,
            &[
                "emotional",
                "relationships",
                "identity",
                "impulsive",
                "abandonment",
                "mood swings",
            ],
        )],
    ),
];

/// Tests that gain a point when symptoms have lasted months or years.
pub const CHRONIC: [&str; 3] = [DEPRESSION, ANXIETY, BORDERLINE];

const FEELING_WEIGHT: i32 = 2;
const CONCERNS_WEIGHT: i32 = 2;
const SYMPTOMS_WEIGHT: i32 = 1;
const DURATION_BONUS: i32 = 1;
const SLEEP_BONUS: i32 = 2;
const SUBSTANCE_BONUS: i32 = 3;

/// Score every catalog test, in catalog order.
///
/// Keywords for tests that are not in the catalog are ignored.
pub fn score_all(catalog: &Catalog, answers: &SuggestionAnswers) -> Vec<(String, i32)> {
    let mut scores: Vec<(String, i32)> = catalog.ids().map(|id| (id.to_string(), 0)).collect();

    let feeling = answers.feeling.to_lowercase();
    let concerns = answers.concerns.to_lowercase();
    let symptoms = answers.symptoms.to_lowercase();

    for (_, tests) in KEYWORDS {
        for (test_id, keywords) in *tests {
            for keyword in *keywords {
                let mut points = 0;
                if feeling.contains(keyword) {
                    points += FEELING_WEIGHT;
                }
                if concerns.contains(keyword) {
                    points += CONCERNS_WEIGHT;
                }
                if symptoms.contains(keyword) {
                    points += SYMPTOMS_WEIGHT;
                }
                add(&mut scores, test_id, points);
            }
        }
    }

    // Matched as written, so "More than a year" does not count.
    if answers.duration.contains("months") || answers.duration.contains("years") {
        for test_id in CHRONIC {
            add(&mut scores, test_id, DURATION_BONUS);
        }
    }

    if symptoms.contains("night") || symptoms.contains("sleep") {
        add(&mut scores, INSOMNIA, SLEEP_BONUS);
    }

    if concerns.contains("drink") || concerns.contains("alcohol") {
        add(&mut scores, ALCOHOL, SUBSTANCE_BONUS);
    }

    scores
}

/// Pick a test by keyword scoring. Always returns a catalog ID.
pub fn suggest<'a>(catalog: &'a Catalog, answers: &SuggestionAnswers) -> &'a str {
    let scores = score_all(catalog, answers);

    let mut best: Option<(usize, i32)> = None;
    for (i, (_, score)) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if *score <= top => {}
            _ => best = Some((i, *score)),
        }
    }

    // A catalog is never empty, so there is always a first test.
    let index = best.map(|(i, _)| i).unwrap_or(0);
    catalog.tests()[index].id.as_str()
}

fn add(scores: &mut [(String, i32)], test_id: &str, points: i32) {
    if points == 0 {
        return;
    }
    if let Some((_, score)) = scores.iter_mut().find(|(id, _)| id == test_id) {
        *score += points;
    }
}
