use std::time::Duration;

use moka::future::Cache;
use once_cell::sync::Lazy;

use crate::model::assistant::AnalysisReport;

/// The simulated analysis is the one expensive (artificially slow) call in
/// the portal, so finished reports are held for a while and re-served
/// without the delay.
const CACHE_CAPACITY: u64 = 1_000;
const REPORT_TTL_SECS: u64 = 600; // 10 min, then a run is "fresh" again

static ANALYSIS_CACHE: Lazy<Cache<u64, AnalysisReport>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(CACHE_CAPACITY)
        .time_to_live(Duration::from_secs(REPORT_TTL_SECS))
        .build()
});

/// Fetch a still-fresh report for this employee, if any.
pub async fn get(employee_id: u64) -> Option<AnalysisReport> {
    ANALYSIS_CACHE.get(&employee_id).await
}

/// Remember a finished report.
pub async fn put(employee_id: u64, report: AnalysisReport) {
    ANALYSIS_CACHE.insert(employee_id, report).await;
    log::debug!("analysis report cached for employee {}", employee_id);
}
