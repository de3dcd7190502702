use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::metrics;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::store::DataStore;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceFilter {
    /// Restrict to one month, formatted YYYY-MM
    #[schema(example = "2024-01")]
    pub month: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceRecord>,
    #[schema(example = 8)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "total_hours": 62.25,
    "average_hours": 7.78125,
    "attendance_rate": 62.5,
    "overtime_hours": 2.0
}))]
pub struct AttendanceSummary {
    pub total_hours: f64,
    pub average_hours: f64,
    /// present days / all days, as a percentage
    pub attendance_rate: f64,
    pub overtime_hours: f64,
}

/// Attendance history, optionally narrowed to one month
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Attendance records, newest first", body = AttendanceListResponse)
    ),
    tag = "Attendance"
)]
pub async fn list(
    store: web::Data<DataStore>,
    query: web::Query<AttendanceFilter>,
) -> actix_web::Result<impl Responder> {
    let records = store.attendance();
    let data = match query.month.as_deref() {
        Some(month) => {
            metrics::filter_where(&records, |r| r.date.format("%Y-%m").to_string() == month)
        }
        None => records,
    };
    let total = data.len();
    Ok(HttpResponse::Ok().json(AttendanceListResponse { data, total }))
}

/// Summary cards for the attendance page
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    responses(
        (status = 200, description = "Derived attendance figures", body = AttendanceSummary)
    ),
    tag = "Attendance"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let records = store.attendance();

    let present = metrics::count_where(&records, |r| r.status == AttendanceStatus::Present);
    let summary = AttendanceSummary {
        total_hours: metrics::sum(&records, |r| r.total_hours),
        average_hours: metrics::mean(&records, |r| r.total_hours),
        attendance_rate: metrics::ratio_as_percent(present, records.len()),
        overtime_hours: metrics::sum(&records, |r| r.overtime_hours),
    };
    Ok(HttpResponse::Ok().json(summary))
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully"
        })),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_in(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let now = Local::now();

    match store.record_check_in(now.date_naive(), now.time()) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Checked in successfully"
        }))),
        Err(e) => {
            tracing::debug!(date = %now.date_naive(), "Check-in rejected");
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.message()
            })))
        }
    }
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "No active check-in found for today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_out(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let now = Local::now();

    match store.record_check_out(now.date_naive(), now.time()) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Checked out successfully"
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": e.message()
        }))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_filter_keeps_only_that_month_in_order() {
        let store = DataStore::seeded();
        let records = store.attendance();
        let january = metrics::filter_where(&records, |r| {
            r.date.format("%Y-%m").to_string() == "2024-01"
        });
        assert_eq!(january.len(), 8);
        // Newest-first order is preserved by the filter.
        assert!(january.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn summary_matches_the_seeded_dataset() {
        let store = DataStore::seeded();
        let records = store.attendance();
        assert!((metrics::sum(&records, |r| r.total_hours) - 62.25).abs() < 1e-9);
        assert!((metrics::mean(&records, |r| r.total_hours) - 7.78125).abs() < 1e-9);
        let present = metrics::count_where(&records, |r| r.status == AttendanceStatus::Present);
        assert_eq!(present, 5);
        assert!((metrics::ratio_as_percent(present, records.len()) - 62.5).abs() < 1e-9);
    }
}
