use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::AttendanceStatus;

/// One row of the six-month trend chart. Percentages are stored per month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({ "month": "Jan", "attendance": 95.0, "tasks": 85.0, "performance": 88.0, "leaves": 2 })
)]
pub struct MonthlyReport {
    #[schema(example = "Jan")]
    pub month: String,
    #[schema(example = 95.0)]
    pub attendance: f64,
    #[schema(example = 85.0)]
    pub tasks: f64,
    #[schema(example = 88.0)]
    pub performance: f64,
    #[schema(example = 2)]
    pub leaves: u32,
}

/// One bar of the weekly attendance chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "day": "Mon", "hours": 8.5, "status": "present" }))]
pub struct WeeklyAttendance {
    #[schema(example = "Mon")]
    pub day: String,
    #[schema(example = 8.5)]
    pub hours: f64,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({ "category": "Development", "completed": 15, "total": 20, "percentage": 75.0 })
)]
pub struct TaskCategory {
    #[schema(example = "Development")]
    pub category: String,
    #[schema(example = 15)]
    pub completed: u32,
    #[schema(example = 20)]
    pub total: u32,
    #[schema(example = 75.0)]
    pub percentage: f64,
}
