use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Daily attendance status tag. Stored on the record, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    /// Only appears in the weekly chart rows, never on a daily record.
    Weekend,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-01-15",
        "check_in": "09:00:00",
        "check_out": "17:30:00",
        "total_hours": 8.5,
        "status": "present",
        "overtime_hours": 0.5,
        "break_hours": 1.0
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "09:00:00", value_type = String, nullable = true)]
    pub check_in: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = String, nullable = true)]
    pub check_out: Option<NaiveTime>,
    #[schema(example = 8.5)]
    pub total_hours: f64,
    pub status: AttendanceStatus,
    #[schema(example = 0.5)]
    pub overtime_hours: f64,
    #[schema(example = 1.0)]
    pub break_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tags_use_kebab_case() {
        assert_eq!(AttendanceStatus::HalfDay.to_string(), "half-day");
        assert_eq!(
            serde_json::to_value(AttendanceStatus::HalfDay).unwrap(),
            serde_json::json!("half-day")
        );
        assert_eq!(
            "late".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Late
        );
    }
}
