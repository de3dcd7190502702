use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;
use crate::model::report::{MonthlyReport, TaskCategory, WeeklyAttendance};
use crate::store::DataStore;

#[derive(Serialize, ToSchema)]
pub struct MonthlyReportResponse {
    pub data: Vec<MonthlyReport>,
}

#[derive(Serialize, ToSchema)]
pub struct WeeklyAttendanceResponse {
    pub data: Vec<WeeklyAttendance>,
}

#[derive(Serialize, ToSchema)]
pub struct TaskCategoryResponse {
    pub data: Vec<TaskCategory>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "average_attendance": 94.66666666666667,
    "average_tasks": 89.33333333333333,
    "average_performance": 89.16666666666667,
    "total_leave_days": 9
}))]
pub struct ReportSummary {
    pub average_attendance: f64,
    pub average_tasks: f64,
    pub average_performance: f64,
    pub total_leave_days: u32,
}

/// Six-month trend rows
#[utoipa::path(
    get,
    path = "/api/report/monthly",
    responses((status = 200, description = "Monthly report rows", body = MonthlyReportResponse)),
    tag = "Report"
)]
pub async fn monthly(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(MonthlyReportResponse {
        data: store.monthly_reports().to_vec(),
    }))
}

/// This week's attendance bars
#[utoipa::path(
    get,
    path = "/api/report/weekly",
    responses((status = 200, description = "Weekly attendance rows", body = WeeklyAttendanceResponse)),
    tag = "Report"
)]
pub async fn weekly(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(WeeklyAttendanceResponse {
        data: store.weekly_attendance().to_vec(),
    }))
}

/// Completion breakdown by task category
#[utoipa::path(
    get,
    path = "/api/report/categories",
    responses((status = 200, description = "Task category rows", body = TaskCategoryResponse)),
    tag = "Report"
)]
pub async fn categories(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(TaskCategoryResponse {
        data: store.task_categories().to_vec(),
    }))
}

/// Summary cards for the reports page, averaged over the monthly rows
#[utoipa::path(
    get,
    path = "/api/report/summary",
    responses((status = 200, description = "Derived report figures", body = ReportSummary)),
    tag = "Report"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let months = store.monthly_reports();

    let summary = ReportSummary {
        average_attendance: metrics::mean(months, |m| m.attendance),
        average_tasks: metrics::mean(months, |m| m.tasks),
        average_performance: metrics::mean(months, |m| m.performance),
        total_leave_days: metrics::sum(months, |m| f64::from(m.leaves)) as u32,
    };
    Ok(HttpResponse::Ok().json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_month_averages_match_the_seed() {
        let store = DataStore::seeded();
        let months = store.monthly_reports();
        assert!((metrics::mean(months, |m| m.attendance) - 94.7).abs() < 0.05);
        assert!((metrics::mean(months, |m| m.tasks) - 89.3).abs() < 0.05);
        assert_eq!(metrics::sum(months, |m| f64::from(m.leaves)) as u32, 9);
    }

    #[test]
    fn summary_of_no_months_is_all_zero() {
        let months: Vec<MonthlyReport> = Vec::new();
        assert_eq!(metrics::mean(&months, |m| m.attendance), 0.0);
        assert_eq!(metrics::sum(&months, |m| f64::from(m.leaves)), 0.0);
    }
}
