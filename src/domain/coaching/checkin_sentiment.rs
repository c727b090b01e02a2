//! Check-in sentiment analysis and coping strategies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Level, Sentiment, SentimentAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInContext {
    pub time_of_day: TimeOfDay,
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_events: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInHistory {
    pub date: NaiveDate,
    pub sentiment: SentimentAnalysis,
    pub mood_rating: u8,
}

/// Ratings are on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSentimentInput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CheckInContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_check_ins: Option<Vec<CheckInHistory>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSentimentResponse {
    pub sentiment: SentimentAnalysis,
    pub emotional_state: EmotionalState,
    pub coping_strategies: Vec<CopingStrategy>,
    pub recommendations: Vec<Recommendation>,
    pub follow_up: Vec<FollowUpSuggestion>,
}

impl CheckInSentimentResponse {
    pub fn overall(&self) -> Sentiment {
        self.sentiment.overall
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stability {
    Stable,
    Fluctuating,
    Declining,
    Improving,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    pub primary: String,
    pub secondary: Vec<String>,
    pub stability: Stability,
    #[serde(default)]
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyCategory {
    Immediate,
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopingStrategy {
    pub strategy: String,
    pub description: String,
    pub time_required: String,
    pub effectiveness: Level,
    pub category: StrategyCategory,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    Activity,
    Mindset,
    Environment,
    Social,
    Professional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationPriority {
    Urgent,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub priority: RecommendationPriority,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpSuggestion {
    pub timing: String,
    pub question: String,
    pub purpose: String,
}
