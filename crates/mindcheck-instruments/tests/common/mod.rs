use mindcheck_instruments::catalog::Catalog;

/// A nine-question test scored 0-3 per item with three bands, plus a
/// two-question test whose ranges overlap.
pub const FIXTURE_CATALOG: &str = r#"[
  {
    "id": "depression-phq9",
    "name": "PHQ-9",
    "category": "mood",
    "description": "Depression screening",
    "instructions": "Over the last 2 weeks...",
    "questions": [
      {"id": "q1", "text": "Q1", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q2", "text": "Q2", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q3", "text": "Q3", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q4", "text": "Q4", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q5", "text": "Q5", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q6", "text": "Q6", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q7", "text": "Q7", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q8", "text": "Q8", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]},
      {"id": "q9", "text": "Q9", "options": [{"value": 0, "text": "Not at all"}, {"value": 1, "text": "Several days"}, {"value": 2, "text": "More than half the days"}, {"value": 3, "text": "Nearly every day"}]}
    ],
    "scoring": {"ranges": [
      {"min": 0, "max": 4, "severity": "minimal", "description": "Minimal"},
      {"min": 5, "max": 9, "severity": "mild", "description": "Mild"},
      {"min": 10, "max": 14, "severity": "moderate", "description": "Moderate"}
    ]}
  },
  {
    "id": "overlap-test",
    "name": "Overlap",
    "description": "Ranges overlap on purpose",
    "instructions": "Answer both",
    "questions": [
      {"id": "a", "text": "A", "options": [{"value": 0, "text": "No"}, {"value": 2, "text": "Yes"}]},
      {"id": "b", "text": "B", "options": [{"value": 0, "text": "No"}, {"value": 2, "text": "Yes"}]}
    ],
    "scoring": {"ranges": [
      {"min": 0, "max": 2, "severity": "low", "description": "Low"},
      {"min": 2, "max": 4, "severity": "high", "description": "High"}
    ]}
  }
]"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(FIXTURE_CATALOG).unwrap()
}
