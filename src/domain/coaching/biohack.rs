//! Biohack routine suggestions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    Energy,
    Focus,
    Sleep,
    Fitness,
    Stress,
    Longevity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoal {
    pub goal: String,
    pub category: GoalCategory,
    pub priority: Level,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackRoutine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub frequency: String,
    pub duration: String,
    pub currently_active: bool,
    pub start_date: NaiveDate,
}

/// Scores are on a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackRating {
    pub routine_id: String,
    pub routine_name: String,
    pub rating: u8,
    pub effectiveness: u8,
    pub enjoyment: u8,
    pub sustainability: u8,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeAvailable {
    Minimal,
    Moderate,
    Flexible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub fitness_level: FitnessLevel,
    pub time_available: TimeAvailable,
    pub preferences: Vec<String>,
    pub restrictions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackSuggesterInput {
    pub user_goals: Vec<UserGoal>,
    pub current_routines: Vec<BiohackRoutine>,
    pub past_ratings: Vec<BiohackRating>,
    pub user_profile: UserProfile,
    pub target_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackSuggesterResponse {
    pub recommendations: Vec<BiohackRecommendation>,
    pub optimizations: Vec<BiohackOptimization>,
    pub sequences: Vec<BiohackSequence>,
    pub warnings: Vec<BiohackWarning>,
    pub progress_tracking: Vec<ProgressMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackRecommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: FitnessLevel,
    pub time_required: String,
    pub frequency: String,
    pub expected_benefits: Vec<String>,
    pub target_goals: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub scientific_basis: String,
    #[serde(default)]
    pub compatible_with: Vec<String>,
    #[serde(default)]
    pub incompatible_with: Vec<String>,
    /// 1-10
    pub priority: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackOptimization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<String>,
    pub current_routine: String,
    pub optimization: String,
    pub reasoning: String,
    pub expected_improvement: String,
    pub implementation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackSequence {
    pub name: String,
    pub description: String,
    pub routines: Vec<String>,
    pub timing: String,
    pub total_duration: String,
    pub synergies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningType {
    Safety,
    Interaction,
    Contraindication,
    Timing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiohackWarning {
    #[serde(rename = "type")]
    pub kind: WarningType,
    pub message: String,
    pub severity: WarningSeverity,
    pub affected_routines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetric {
    pub metric: String,
    pub description: String,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
    pub tracking_method: String,
}
