//! Typed inputs and responses for the built-in coaching templates.

pub mod biohack;
pub mod checkin_sentiment;
pub mod habit_review;
pub mod ids;
pub mod journal_insight;

pub use biohack::{BiohackSuggesterInput, BiohackSuggesterResponse};
pub use checkin_sentiment::{CheckInSentimentInput, CheckInSentimentResponse};
pub use habit_review::{HabitReviewInput, HabitReviewResponse};
pub use ids::{GptModel, TemplateId};
pub use journal_insight::{JournalInsightInput, JournalInsightResponse};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Three-step scale used for priorities and effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: String,
    /// 0-1
    pub intensity: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub overall: Sentiment,
    /// 0-1
    pub confidence: f64,
    pub emotions: Vec<EmotionScore>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
}

/// Binds a typed input to its template, sampling settings and response type.
pub trait CoachingTask: Serialize {
    type Response: DeserializeOwned;

    const TEMPLATE: TemplateId;
    const MODEL: GptModel = GptModel::Gpt4Turbo;
    const TEMPERATURE: f64;
}

impl CoachingTask for HabitReviewInput {
    type Response = HabitReviewResponse;
    const TEMPLATE: TemplateId = TemplateId::HabitReview;
    const TEMPERATURE: f64 = 0.3;
}

impl CoachingTask for CheckInSentimentInput {
    type Response = CheckInSentimentResponse;
    const TEMPLATE: TemplateId = TemplateId::CheckinSentiment;
    const TEMPERATURE: f64 = 0.2;
}

impl CoachingTask for JournalInsightInput {
    type Response = JournalInsightResponse;
    const TEMPLATE: TemplateId = TemplateId::JournalInsight;
    const TEMPERATURE: f64 = 0.3;
}

impl CoachingTask for BiohackSuggesterInput {
    type Response = BiohackSuggesterResponse;
    const TEMPLATE: TemplateId = TemplateId::BiohackSuggester;
    const TEMPERATURE: f64 = 0.4;
}
