use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::EmployeeProfile;
use crate::model::task::{Task, TaskStatus};
use crate::store::DataStore;

/// One bar of the weekly chart, with the bar length already computed against
/// a standard 8-hour day.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({ "day": "Mon", "hours": 8.5, "status": "present", "bar_percent": 106.25 }))]
pub struct WeeklyBar {
    pub day: String,
    pub hours: f64,
    pub status: AttendanceStatus,
    pub bar_percent: f64,
}

/// Everything the landing dashboard renders in one payload.
#[derive(Serialize, ToSchema)]
pub struct DashboardSummary {
    pub employee: EmployeeProfile,
    #[schema(example = 1)]
    pub completed_tasks: usize,
    #[schema(example = 2)]
    pub pending_tasks: usize,
    #[schema(example = 2)]
    pub in_progress_tasks: usize,
    #[schema(example = 7.78125)]
    pub average_work_hours: f64,
    /// Remaining annual leave entitlement
    #[schema(example = 13)]
    pub leave_balance_days: u32,
    #[schema(example = 20.0)]
    pub task_completion_percent: f64,
    #[schema(example = 62.5)]
    pub attendance_rate_percent: f64,
    pub weekly: Vec<WeeklyBar>,
    pub recent_tasks: Vec<Task>,
    pub recent_attendance: Vec<AttendanceRecord>,
}

const STANDARD_DAY_HOURS: f64 = 8.0;
const RECENT_TASKS: usize = 3;
const RECENT_ATTENDANCE: usize = 5;

/// The employee dashboard in one request
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Stat cards, charts and recent activity", body = DashboardSummary)
    ),
    tag = "Dashboard"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let tasks = store.tasks();
    let attendance = store.attendance();

    let completed = metrics::count_where(tasks, |t| t.status == TaskStatus::Completed);
    let present = metrics::count_where(&attendance, |r| r.status == AttendanceStatus::Present);

    let weekly = store
        .weekly_attendance()
        .iter()
        .map(|w| WeeklyBar {
            day: w.day.clone(),
            hours: w.hours,
            status: w.status,
            bar_percent: metrics::share_percent(w.hours, STANDARD_DAY_HOURS),
        })
        .collect();

    let summary = DashboardSummary {
        employee: store.profile().clone(),
        completed_tasks: completed,
        pending_tasks: metrics::count_where(tasks, |t| t.status == TaskStatus::Pending),
        in_progress_tasks: metrics::count_where(tasks, |t| t.status == TaskStatus::InProgress),
        average_work_hours: metrics::mean(&attendance, |r| r.total_hours),
        leave_balance_days: store
            .balances()
            .iter()
            .find(|b| b.leave_type == "Annual Leave")
            .map(|b| b.remaining)
            .unwrap_or(0),
        task_completion_percent: metrics::ratio_as_percent(completed, tasks.len()),
        attendance_rate_percent: metrics::ratio_as_percent(present, attendance.len()),
        weekly,
        recent_tasks: tasks.iter().take(RECENT_TASKS).cloned().collect(),
        recent_attendance: attendance.into_iter().take(RECENT_ATTENDANCE).collect(),
    };
    Ok(HttpResponse::Ok().json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_bars_scale_against_an_eight_hour_day() {
        let store = DataStore::seeded();
        let monday = &store.weekly_attendance()[0];
        let percent = metrics::share_percent(monday.hours, STANDARD_DAY_HOURS);
        assert!((percent - 106.25).abs() < 1e-9);

        let weekend = store.weekly_attendance().last().unwrap();
        assert_eq!(
            metrics::share_percent(weekend.hours, STANDARD_DAY_HOURS),
            0.0
        );
    }

    #[test]
    fn task_completion_ratio_uses_all_tasks() {
        let store = DataStore::seeded();
        let tasks = store.tasks();
        let completed = metrics::count_where(tasks, |t| t.status == TaskStatus::Completed);
        assert!((metrics::ratio_as_percent(completed, tasks.len()) - 20.0).abs() < 1e-9);
    }
}
