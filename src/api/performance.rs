use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;
use crate::model::performance::{Goal, GoalStatus, PerformanceMetric, PerformanceReview};
use crate::store::DataStore;

#[derive(Serialize, ToSchema)]
pub struct MetricListResponse {
    pub data: Vec<PerformanceMetric>,
}

#[derive(Serialize, ToSchema)]
pub struct GoalListResponse {
    pub data: Vec<Goal>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub data: Vec<PerformanceReview>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "overall_rating": 4.1,
    "goals_on_track": 3,
    "goals_completed": 0,
    "goals_total": 4,
    "average_of_target": 81.16666666666667
}))]
pub struct PerformanceSummary {
    /// Mean of all review ratings
    pub overall_rating: f64,
    pub goals_on_track: usize,
    pub goals_completed: usize,
    pub goals_total: usize,
    /// Mean of the stored percentage-of-target figures
    pub average_of_target: f64,
}

/// KPI rows for the performance page
#[utoipa::path(
    get,
    path = "/api/performance/metrics",
    responses((status = 200, description = "Performance metrics", body = MetricListResponse)),
    tag = "Performance"
)]
pub async fn list_metrics(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(MetricListResponse {
        data: store.metrics().to_vec(),
    }))
}

/// Goal cards for the performance page
#[utoipa::path(
    get,
    path = "/api/performance/goals",
    responses((status = 200, description = "Performance goals", body = GoalListResponse)),
    tag = "Performance"
)]
pub async fn list_goals(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(GoalListResponse {
        data: store.goals().to_vec(),
    }))
}

/// Past review records
#[utoipa::path(
    get,
    path = "/api/performance/reviews",
    responses((status = 200, description = "Performance reviews", body = ReviewListResponse)),
    tag = "Performance"
)]
pub async fn list_reviews(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(ReviewListResponse {
        data: store.reviews().to_vec(),
    }))
}

/// Summary cards for the performance page
#[utoipa::path(
    get,
    path = "/api/performance/summary",
    responses((status = 200, description = "Derived performance figures", body = PerformanceSummary)),
    tag = "Performance"
)]
pub async fn summary(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let reviews = store.reviews();
    let goals = store.goals();

    let summary = PerformanceSummary {
        overall_rating: metrics::mean(reviews, |r| r.rating),
        goals_on_track: metrics::count_where(goals, |g| g.status == GoalStatus::OnTrack),
        goals_completed: metrics::count_where(goals, |g| g.status == GoalStatus::Completed),
        goals_total: goals.len(),
        average_of_target: metrics::mean(store.metrics(), |m| m.percentage),
    };
    Ok(HttpResponse::Ok().json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_rating_is_the_review_mean() {
        let store = DataStore::seeded();
        let rating = metrics::mean(store.reviews(), |r| r.rating);
        assert!((rating - 4.1).abs() < 1e-9);
    }

    #[test]
    fn goal_counts_follow_the_seed() {
        let store = DataStore::seeded();
        let goals = store.goals();
        assert_eq!(
            metrics::count_where(goals, |g| g.status == GoalStatus::OnTrack),
            3
        );
        assert_eq!(
            metrics::count_where(goals, |g| g.status == GoalStatus::Completed),
            0
        );
    }

    #[test]
    fn stored_percentages_are_served_as_is() {
        // "Client Satisfaction" stores 84% although 4.2 of 4.5 is ~93%; the
        // stored figure wins and is never recomputed.
        let store = DataStore::seeded();
        let satisfaction = store
            .metrics()
            .iter()
            .find(|m| m.name == "Client Satisfaction")
            .unwrap();
        assert_eq!(satisfaction.percentage, 84.0);
        assert!((satisfaction.current / satisfaction.target * 100.0 - 84.0).abs() > 1.0);
    }
}
