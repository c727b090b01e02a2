//! Daily habit review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFrequency {
    Daily,
    Weekly,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HabitDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPerformance {
    pub habit_id: String,
    pub habit_name: String,
    pub target_frequency: TargetFrequency,
    pub completed_today: bool,
    pub current_streak: u32,
    pub completion_rate7_days: f64,
    pub completion_rate30_days: f64,
    pub difficulty: HabitDifficulty,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitReviewInput {
    pub habits: Vec<HabitPerformance>,
    pub date: NaiveDate,
    pub user_goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_week_data: Option<Vec<HabitPerformance>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitReviewResponse {
    pub summary: HabitSummary,
    pub insights: HabitInsights,
    pub tips: HabitTips,
    pub motivation: Motivation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    pub overall_score: f64,
    pub total_habits: f64,
    pub completed_today: f64,
    pub average_streak: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_performing_habit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_attention_habit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitInsights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitTips {
    pub specific: Vec<HabitTip>,
    pub general: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipCategory {
    Timing,
    Technique,
    Motivation,
    Environment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitTip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit_id: Option<String>,
    pub habit_name: String,
    pub tip: String,
    pub priority: Level,
    pub category: TipCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motivation {
    pub encouragement: String,
    pub next_steps: Vec<String>,
}
