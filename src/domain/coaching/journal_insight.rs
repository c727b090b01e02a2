//! Journal entry insights and cognitive reframes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Level, Sentiment, SentimentAnalysis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalInsightInput {
    pub entry: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_entries: Option<Vec<JournalEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_challenges: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalInsightResponse {
    pub themes: Vec<JournalTheme>,
    pub sentiment: SentimentAnalysis,
    pub insights: Vec<JournalInsight>,
    pub reframes: Vec<ThoughtReframe>,
    pub patterns: Vec<JournalPattern>,
    pub action_items: Vec<ActionItem>,
    pub reflection: Vec<ReflectionPrompt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    Growth,
    Challenge,
    Relationship,
    Work,
    Health,
    Personal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTheme {
    pub theme: String,
    /// 0-1
    pub relevance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    pub category: ThemeCategory,
    pub key_phrases: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Strength,
    Pattern,
    Opportunity,
    Concern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalInsight {
    pub insight: String,
    pub category: InsightCategory,
    pub confidence: f64,
    pub supporting_evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtReframe {
    pub original_thought: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive_distortion: Option<String>,
    pub reframed_thought: String,
    pub technique: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternFrequency {
    Daily,
    Weekly,
    Occasional,
    Rare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalPattern {
    pub pattern: String,
    pub description: String,
    pub frequency: PatternFrequency,
    pub impact: Sentiment,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionCategory {
    Immediate,
    ThisWeek,
    ThisMonth,
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub action: String,
    pub priority: Level,
    pub timeframe: String,
    pub category: ActionCategory,
    #[serde(default)]
    pub related_themes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReflectionCategory {
    Gratitude,
    Growth,
    Challenge,
    Future,
    Values,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionPrompt {
    pub prompt: String,
    pub purpose: String,
    pub category: ReflectionCategory,
}
