use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The four answers collected before suggesting a test. Each field holds the
/// raw text of the option the user picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionAnswers {
    pub feeling: String,
    pub concerns: String,
    pub duration: String,
    pub symptoms: String,
}

impl SuggestionAnswers {
    /// Record the answer for one field, replacing any earlier answer.
    pub fn record(&mut self, field: SuggestionField, text: impl Into<String>) {
        let text = text.into();
        match field {
            SuggestionField::Feeling => self.feeling = text,
            SuggestionField::Concerns => self.concerns = text,
            SuggestionField::Duration => self.duration = text,
            SuggestionField::Symptoms => self.symptoms = text,
        }
    }

    pub fn get(&self, field: SuggestionField) -> &str {
        match field {
            SuggestionField::Feeling => &self.feeling,
            SuggestionField::Concerns => &self.concerns,
            SuggestionField::Duration => &self.duration,
            SuggestionField::Symptoms => &self.symptoms,
        }
    }

    /// True once every field has a non-empty answer.
    pub fn is_complete(&self) -> bool {
        self.first_unanswered().is_none()
    }

    /// The first field, in asking order, still without an answer.
    pub fn first_unanswered(&self) -> Option<SuggestionField> {
        SuggestionField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SuggestionField {
    Feeling,
    Concerns,
    Duration,
    Symptoms,
}

impl SuggestionField {
    /// Fields in the order they are asked.
    pub const ALL: [SuggestionField; 4] = [
        SuggestionField::Feeling,
        SuggestionField::Concerns,
        SuggestionField::Duration,
        SuggestionField::Symptoms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionField::Feeling => "feeling",
            SuggestionField::Concerns => "concerns",
            SuggestionField::Duration => "duration",
            SuggestionField::Symptoms => "symptoms",
        }
    }
}

impl FromStr for SuggestionField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuggestionField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSuggestionField(s.to_string()))
    }
}

/// One multiple-choice prompt of the suggestion questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionQuestion {
    pub field: SuggestionField,
    pub question: &'static str,
    pub subtext: &'static str,
    pub options: &'static [&'static str],
}

/// The fixed suggestion questionnaire, in the order it is asked.
pub const SUGGESTION_QUESTIONS: [SuggestionQuestion; 4] = [
    SuggestionQuestion {
        field: SuggestionField::Feeling,
        question: "How have you been feeling lately?",
        subtext: "Choose the option that best describes your predominant emotional state.",
        options: &[
            "Generally okay but concerned about specific issues",
            "Sad, down, or depressed",
            "Anxious, worried, or on edge",
            "Overwhelmed or stressed",
            "Having mood swings or extreme changes in energy",
            "Having trouble with sleep or concentration",
            "Experiencing intrusive thoughts or compulsions",
            "Having concerns about eating or body image",
            "Having relationship or personality concerns",
        ],
    },
    SuggestionQuestion {
        field: SuggestionField::Concerns,
        question: "What specific concerns brought you here today?",
        subtext: "Select the option that best matches your primary concern.",
        options: &[
            "Changes in mood or emotional state",
            "Persistent worry or anxiety",
            "Difficulty with daily tasks or concentration",
            "Sleep problems or fatigue",
            "Relationship or interpersonal difficulties",
            "Substance use concerns",
            "Eating or body image issues",
            "Traumatic experiences or memories",
            "Identity or personality concerns",
        ],
    },
    SuggestionQuestion {
        field: SuggestionField::Duration,
        question: "How long have you been experiencing these feelings or concerns?",
        subtext: "This helps us understand if your symptoms are acute or chronic.",
        options: &[
            "Less than 2 weeks",
            "2-4 weeks",
            "1-3 months",
            "3-6 months",
            "More than 6 months",
            "More than a year",
        ],
    },
    SuggestionQuestion {
        field: SuggestionField::Symptoms,
        question: "Which symptoms do you experience most frequently?",
        subtext: "Choose the option that best describes your most troubling symptoms.",
        options: &[
            "Changes in sleep or appetite",
            "Difficulty concentrating or making decisions",
            "Excessive worry or racing thoughts",
            "Physical symptoms (heart racing, sweating, trembling)",
            "Repetitive thoughts or behaviors",
            "Mood swings or emotional instability",
            "Problems with alcohol or substances",
            "Social withdrawal or relationship problems",
            "Traumatic memories or flashbacks",
        ],
    },
];
