use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::metrics;
use crate::model::leave::{LeaveRecord, LeaveStatus};
use crate::store::DataStore;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by leave status
    #[schema(example = "pending")]
    pub status: Option<LeaveStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRecord>,
    #[schema(example = 4)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "total_applied_days": 96,
    "approved_days": 4,
    "pending_days": 92,
    "active_requests": 2
}))]
pub struct LeaveSummary {
    pub total_applied_days: u32,
    pub approved_days: u32,
    pub pending_days: u32,
    /// Requests still awaiting a decision
    pub active_requests: usize,
}

/// One entitlement row plus the used-of-total bar value.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "leave_type": "Annual Leave",
    "total": 21,
    "used": 8,
    "remaining": 13,
    "used_percent": 38.095238095238095
}))]
pub struct LeaveBalanceEntry {
    pub leave_type: String,
    pub total: u32,
    pub used: u32,
    pub remaining: u32,
    pub used_percent: f64,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveBalanceResponse {
    pub data: Vec<LeaveBalanceEntry>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "Annual Leave")]
    pub leave_type: String,
    #[schema(example = "2024-02-12", format = "date", value_type = String)]
    pub start_date: chrono::NaiveDate,
    #[schema(example = "2024-02-14", format = "date", value_type = String)]
    pub end_date: chrono::NaiveDate,
    #[schema(example = "Personal vacation")]
    pub reason: String,
    /// Day count is taken as given, not derived from the date span
    #[schema(example = 3)]
    pub days: u32,
}

#[derive(Deserialize, ToSchema)]
pub struct DecideLeave {
    #[schema(example = "Approved with medical certificate", nullable = true)]
    pub comments: Option<String>,
}

/* =========================
Leave history
========================= */
/// Leave requests, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Leave requests in application order", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn list(
    store: web::Data<DataStore>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    let records = store.leaves();
    let data = match query.status {
        Some(status) => metrics::filter_where(&records, |l| l.status == status),
        None => records,
    };
    let total = data.len();
    Ok(HttpResponse::Ok().json(LeaveListResponse { data, total }))
}

/// Summary cards for the leave page
#[utoipa::path(
    get,
    path = "/api/leave/summary",
    responses((status = 200, description = "Derived leave figures", body = LeaveSummary)),
    tag = "Leave"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let records = store.leaves();

    let day_sum = |status: LeaveStatus| {
        metrics::sum(
            &metrics::filter_where(&records, |l| l.status == status),
            |l| f64::from(l.days),
        ) as u32
    };
    let summary = LeaveSummary {
        total_applied_days: metrics::sum(&records, |l| f64::from(l.days)) as u32,
        approved_days: day_sum(LeaveStatus::Approved),
        pending_days: day_sum(LeaveStatus::Pending),
        active_requests: metrics::count_where(&records, |l| l.status == LeaveStatus::Pending),
    };
    Ok(HttpResponse::Ok().json(summary))
}

/// Entitlement balances
#[utoipa::path(
    get,
    path = "/api/leave/balance",
    responses((status = 200, description = "Per-type balances", body = LeaveBalanceResponse)),
    tag = "Leave"
)]
pub async fn balance(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let data = store
        .balances()
        .iter()
        .map(|b| LeaveBalanceEntry {
            leave_type: b.leave_type.clone(),
            total: b.total,
            used: b.used,
            remaining: b.remaining,
            used_percent: metrics::share_percent(f64::from(b.used), f64::from(b.total)),
        })
        .collect();
    Ok(HttpResponse::Ok().json(LeaveBalanceResponse { data }))
}

/* =========================
Create leave request
========================= */
/// Submit a leave request
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted", body = LeaveRecord)
    ),
    tag = "Leave"
)]
pub async fn create(
    store: web::Data<DataStore>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    // Inputs are trusted as-is; the demo has no validation layer.
    let record = store.add_leave(
        payload.leave_type,
        payload.start_date,
        payload.end_date,
        payload.reason,
        payload.days,
        Local::now().date_naive(),
    );

    tracing::info!(leave_id = record.id, "Leave request submitted");
    Ok(HttpResponse::Ok().json(record))
}

/* =========================
Approve / reject / cancel
========================= */
/// Approve a pending leave request
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/approve",
    params(("leave_id" = u64, Path, description = "ID of the leave request to approve")),
    request_body(content = DecideLeave, content_type = "application/json"),
    responses(
        (status = 200, description = "Leave approved", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave request not found or already processed")
    ),
    tag = "Leave"
)]
pub async fn approve(
    store: web::Data<DataStore>,
    path: web::Path<u64>,
    payload: Option<web::Json<DecideLeave>>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();
    let comments = payload.and_then(|p| p.into_inner().comments);

    match store.approve_leave(leave_id, "HR", Local::now().date_naive(), comments) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Leave approved"
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": e.message()
        }))),
    }
}

/// Reject a pending leave request
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/reject",
    params(("leave_id" = u64, Path, description = "ID of the leave request to reject")),
    request_body(content = DecideLeave, content_type = "application/json"),
    responses(
        (status = 200, description = "Leave rejected", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave request not found or already processed")
    ),
    tag = "Leave"
)]
pub async fn reject(
    store: web::Data<DataStore>,
    path: web::Path<u64>,
    payload: Option<web::Json<DecideLeave>>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();
    let comments = payload.and_then(|p| p.into_inner().comments);

    match store.reject_leave(leave_id, "HR", Local::now().date_naive(), comments) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Leave rejected"
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": e.message()
        }))),
    }
}

/// Withdraw a pending leave request
#[utoipa::path(
    delete,
    path = "/api/leave/{leave_id}",
    params(("leave_id" = u64, Path, description = "ID of the leave request to cancel")),
    responses(
        (status = 200, description = "Leave request cancelled", body = Object, example = json!({
            "message": "Leave request cancelled"
        })),
        (status = 400, description = "Leave request not found or already processed")
    ),
    tag = "Leave"
)]
pub async fn cancel(
    store: web::Data<DataStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();

    match store.cancel_leave(leave_id) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Leave request cancelled"
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
    fn day_sums_follow_the_seeded_records() {
        let store = DataStore::seeded();
        let records = store.leaves();
        assert_eq!(metrics::sum(&records, |l| f64::from(l.days)) as u32, 96);

        let approved = metrics::filter_where(&records, |l| l.status == LeaveStatus::Approved);
        assert_eq!(metrics::sum(&approved, |l| f64::from(l.days)) as u32, 4);

        let pending = metrics::filter_where(&records, |l| l.status == LeaveStatus::Pending);
        assert_eq!(metrics::sum(&pending, |l| f64::from(l.days)) as u32, 92);
        assert_eq!(
            pending.len(),
            metrics::count_where(&records, |l| l.status == LeaveStatus::Pending)
        );
    }

    #[test]
    fn status_filter_preserves_application_order() {
        let store = DataStore::seeded();
        let records = store.leaves();
        let approved = metrics::filter_where(&records, |l| l.status == LeaveStatus::Approved);
        assert_eq!(approved.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
