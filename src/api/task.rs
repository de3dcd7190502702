use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::metrics;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::store::DataStore;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct TaskFilter {
    /// Filter by task status
    #[schema(example = "in-progress")]
    pub status: Option<TaskStatus>,
    /// Filter by priority
    #[schema(example = "high")]
    pub priority: Option<TaskPriority>,
}

#[derive(Serialize, ToSchema)]
pub struct TaskListResponse {
    pub data: Vec<Task>,
    #[schema(example = 5)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "completed": 1,
    "in_progress": 2,
    "pending": 2,
    "estimated_hours": 35.0,
    "actual_hours": 18.5
}))]
pub struct TaskSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub estimated_hours: f64,
    pub actual_hours: f64,
}

/// Assigned tasks, filterable by status and priority
#[utoipa::path(
    get,
    path = "/api/task",
    params(TaskFilter),
    responses(
        (status = 200, description = "Tasks in assignment order", body = TaskListResponse)
    ),
    tag = "Task"
)]
pub async fn list(
    store: web::Data<DataStore>,
    query: web::Query<TaskFilter>,
) -> actix_web::Result<impl Responder> {
    let data = metrics::filter_where(store.tasks(), |t| {
        let status_match = query.status.is_none_or(|s| t.status == s);
        let priority_match = query.priority.is_none_or(|p| t.priority == p);
        status_match && priority_match
    });
    let total = data.len();
    Ok(HttpResponse::Ok().json(TaskListResponse { data, total }))
}

/// Summary cards for the tasks page
#[utoipa::path(
    get,
    path = "/api/task/summary",
    responses((status = 200, description = "Derived task figures", body = TaskSummary)),
    tag = "Task"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let tasks = store.tasks();

    let summary = TaskSummary {
        completed: metrics::count_where(tasks, |t| t.status == TaskStatus::Completed),
        in_progress: metrics::count_where(tasks, |t| t.status == TaskStatus::InProgress),
        pending: metrics::count_where(tasks, |t| t.status == TaskStatus::Pending),
        estimated_hours: metrics::sum(tasks, |t| t.estimated_hours),
        actual_hours: metrics::sum(tasks, |t| t.actual_hours),
    };
    Ok(HttpResponse::Ok().json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_filters_are_an_and() {
        let store = DataStore::seeded();
        let high_in_progress = metrics::filter_where(store.tasks(), |t| {
            t.status == TaskStatus::InProgress && t.priority == TaskPriority::High
        });
        assert_eq!(high_in_progress.len(), 1);
        assert_eq!(high_in_progress[0].title, "Database optimization");
    }

    #[test]
    fn status_counts_partition_the_seeded_tasks() {
        let store = DataStore::seeded();
        let tasks = store.tasks();
        let completed = metrics::count_where(tasks, |t| t.status == TaskStatus::Completed);
        let in_progress = metrics::count_where(tasks, |t| t.status == TaskStatus::InProgress);
        let pending = metrics::count_where(tasks, |t| t.status == TaskStatus::Pending);
        assert_eq!(completed, 1);
        assert_eq!(in_progress, 2);
        assert_eq!(pending, 2);
        assert_eq!(completed + in_progress + pending, tasks.len());
    }

    #[test]
    fn hour_totals_match_the_seed() {
        let store = DataStore::seeded();
        let tasks = store.tasks();
        assert!((metrics::sum(tasks, |t| t.estimated_hours) - 35.0).abs() < 1e-9);
        assert!((metrics::sum(tasks, |t| t.actual_hours) - 18.5).abs() < 1e-9);
    }
}
