use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "leave_type": "Sick Leave",
        "start_date": "2024-01-10",
        "end_date": "2024-01-12",
        "status": "approved",
        "reason": "Medical appointment and recovery",
        "days": 3,
        "applied_date": "2024-01-08",
        "approved_by": "Manager",
        "approved_date": "2024-01-09",
        "comments": "Approved with medical certificate"
    })
)]
pub struct LeaveRecord {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Sick Leave")]
    pub leave_type: String,
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-12", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    #[schema(example = "Medical appointment and recovery")]
    pub reason: String,
    /// Day count is supplied with the request, not derived from the date span.
    #[schema(example = 3)]
    pub days: u32,
    #[schema(example = "2024-01-08", value_type = String, format = "date")]
    pub applied_date: NaiveDate,
    #[schema(example = "Manager", nullable = true)]
    pub approved_by: Option<String>,
    #[schema(example = "2024-01-09", value_type = String, format = "date", nullable = true)]
    pub approved_date: Option<NaiveDate>,
    #[schema(example = "Approved with medical certificate", nullable = true)]
    pub comments: Option<String>,
}

/// Per-type entitlement counters. `remaining` is stored alongside `total` and
/// `used`; the seed audit checks the three stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveBalance {
    #[schema(example = "Annual Leave")]
    pub leave_type: String,
    #[schema(example = 21)]
    pub total: u32,
    #[schema(example = 8)]
    pub used: u32,
    #[schema(example = 13)]
    pub remaining: u32,
}
