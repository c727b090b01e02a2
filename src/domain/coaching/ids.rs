use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Ids of the built-in coaching templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    HabitReview,
    CheckinSentiment,
    JournalInsight,
    BiohackSuggester,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::HabitReview,
        TemplateId::CheckinSentiment,
        TemplateId::JournalInsight,
        TemplateId::BiohackSuggester,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::HabitReview => "habit_review",
            TemplateId::CheckinSentiment => "checkin_sentiment",
            TemplateId::JournalInsight => "journal_insight",
            TemplateId::BiohackSuggester => "biohack_suggester",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::TemplateNotFound(s.to_string()))
    }
}

/// Chat models the coach is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GptModel {
    #[default]
    #[serde(rename = "gpt-4-1106-preview")]
    Gpt4Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo-1106")]
    Gpt35Turbo,
}

impl GptModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GptModel::Gpt4Turbo => "gpt-4-1106-preview",
            GptModel::Gpt4 => "gpt-4",
            GptModel::Gpt35Turbo => "gpt-3.5-turbo-1106",
        }
    }
}

impl fmt::Display for GptModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
