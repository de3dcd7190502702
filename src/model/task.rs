use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "title": "Complete quarterly report",
        "description": "Prepare and submit Q4 performance report",
        "status": "completed",
        "due_date": "2024-01-15",
        "priority": "high",
        "assigned_by": "Manager",
        "estimated_hours": 8.0,
        "actual_hours": 7.5,
        "progress": 100,
        "tags": ["report", "quarterly", "analysis"]
    })
)]
pub struct Task {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Complete quarterly report")]
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    #[schema(example = "Manager")]
    pub assigned_by: String,
    #[schema(example = 8.0)]
    pub estimated_hours: f64,
    #[schema(example = 7.5)]
    pub actual_hours: f64,
    /// Completion percentage, 0..=100.
    #[schema(example = 100)]
    pub progress: u8,
    pub tags: Vec<String>,
}
