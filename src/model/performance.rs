use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// A KPI row. `percentage` is stored with the record and is NOT recomputed
/// from `current`/`target`; the two can disagree and are served as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "name": "Task Completion Rate",
        "current": 85.0,
        "target": 90.0,
        "unit": "%",
        "trend": "up",
        "percentage": 85.0
    })
)]
pub struct PerformanceMetric {
    #[schema(example = "Task Completion Rate")]
    pub name: String,
    #[schema(example = 85.0)]
    pub current: f64,
    #[schema(example = 90.0)]
    pub target: f64,
    #[schema(example = "%")]
    pub unit: String,
    pub trend: Trend,
    #[schema(example = 85.0)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GoalStatus {
    OnTrack,
    Behind,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Goal {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Complete Advanced Certification")]
    pub title: String,
    pub description: String,
    #[schema(example = "Certification achieved")]
    pub target: String,
    #[schema(example = "In progress - 70% complete")]
    pub current: String,
    #[schema(example = 70)]
    pub progress: u8,
    #[schema(example = "2024-03-31", value_type = String, format = "date")]
    pub due_date: NaiveDate,
    pub status: GoalStatus,
    #[schema(example = "Professional Development")]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerformanceReview {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "2023-Q4")]
    pub period: String,
    #[schema(example = 4.2)]
    pub rating: f64,
    #[schema(example = "Sarah Johnson (Manager)")]
    pub reviewer: String,
    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub comments: String,
    pub strengths: Vec<String>,
    pub areas: Vec<String>,
}
