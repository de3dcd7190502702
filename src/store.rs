//! In-memory datasets behind the portal. Seeded once at startup, reset on
//! restart; collections the UI mutates sit behind an `RwLock`.

use std::sync::RwLock;

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::assistant;
use crate::model::assistant::{AnalysisFeature, AssistantCapability};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::chat::{ChatMessage, Sender};
use crate::model::employee::EmployeeProfile;
use crate::model::leave::{LeaveBalance, LeaveRecord, LeaveStatus};
use crate::model::performance::{Goal, PerformanceMetric, PerformanceReview};
use crate::model::report::{MonthlyReport, TaskCategory, WeeklyAttendance};
use crate::model::task::Task;
use crate::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    AlreadyCheckedIn,
    NotCheckedIn,
    LeaveNotFound,
    LeaveAlreadyProcessed,
}

impl StoreError {
    pub fn message(&self) -> &'static str {
        match self {
            StoreError::AlreadyCheckedIn => "Already checked in today",
            StoreError::NotCheckedIn => "No active check-in found for today",
            StoreError::LeaveNotFound => "Leave request not found",
            StoreError::LeaveAlreadyProcessed => "Leave request not found or already processed",
        }
    }
}

pub struct DataStore {
    profile: EmployeeProfile,
    attendance: RwLock<Vec<AttendanceRecord>>,
    leaves: RwLock<Vec<LeaveRecord>>,
    chat: RwLock<Vec<ChatMessage>>,
    balances: Vec<LeaveBalance>,
    tasks: Vec<Task>,
    metrics: Vec<PerformanceMetric>,
    goals: Vec<Goal>,
    reviews: Vec<PerformanceReview>,
    weekly: Vec<WeeklyAttendance>,
    monthly: Vec<MonthlyReport>,
    task_categories: Vec<TaskCategory>,
    capabilities: Vec<AssistantCapability>,
    analysis_features: Vec<AnalysisFeature>,
}

impl DataStore {
    /// Build the store with the demo datasets. The chat transcript starts
    /// with the assistant's greeting.
    pub fn seeded() -> Self {
        let greeting = ChatMessage {
            id: Uuid::new_v4().to_string(),
            text: assistant::GREETING.to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            suggestions: Some(
                assistant::GREETING_SUGGESTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        };
        DataStore {
            profile: seed::profile(),
            attendance: RwLock::new(seed::attendance()),
            leaves: RwLock::new(seed::leaves()),
            chat: RwLock::new(vec![greeting]),
            balances: seed::leave_balances(),
            tasks: seed::tasks(),
            metrics: seed::performance_metrics(),
            goals: seed::goals(),
            reviews: seed::reviews(),
            weekly: seed::weekly_attendance(),
            monthly: seed::monthly_reports(),
            task_categories: seed::task_categories(),
            capabilities: seed::capabilities(),
            analysis_features: seed::analysis_features(),
        }
    }

    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .read()
            .expect("attendance store poisoned")
            .clone()
    }

    pub fn leaves(&self) -> Vec<LeaveRecord> {
        self.leaves.read().expect("leave store poisoned").clone()
    }

    pub fn chat(&self) -> Vec<ChatMessage> {
        self.chat.read().expect("chat store poisoned").clone()
    }

    pub fn balances(&self) -> &[LeaveBalance] {
        &self.balances
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn metrics(&self) -> &[PerformanceMetric] {
        &self.metrics
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn reviews(&self) -> &[PerformanceReview] {
        &self.reviews
    }

    pub fn weekly_attendance(&self) -> &[WeeklyAttendance] {
        &self.weekly
    }

    pub fn monthly_reports(&self) -> &[MonthlyReport] {
        &self.monthly
    }

    pub fn task_categories(&self) -> &[TaskCategory] {
        &self.task_categories
    }

    pub fn capabilities(&self) -> &[AssistantCapability] {
        &self.capabilities
    }

    pub fn analysis_features(&self) -> &[AnalysisFeature] {
        &self.analysis_features
    }

    /// Open today's attendance record. A second check-in on the same day is
    /// a conflict, matching the portal's check-in button state machine.
    pub fn record_check_in(&self, today: NaiveDate, at: NaiveTime) -> Result<(), StoreError> {
        let mut records = self.attendance.write().expect("attendance store poisoned");
        if records.iter().any(|r| r.date == today) {
            return Err(StoreError::AlreadyCheckedIn);
        }
        // Records are kept newest-first.
        records.insert(
            0,
            AttendanceRecord {
                date: today,
                check_in: Some(at),
                check_out: None,
                total_hours: 0.0,
                status: AttendanceStatus::Present,
                overtime_hours: 0.0,
                break_hours: 0.0,
            },
        );
        Ok(())
    }

    /// Close today's open record and stamp its worked hours.
    pub fn record_check_out(&self, today: NaiveDate, at: NaiveTime) -> Result<(), StoreError> {
        let mut records = self.attendance.write().expect("attendance store poisoned");
        let open = records
            .iter_mut()
            .find(|r| r.date == today && r.check_out.is_none());
        match open {
            Some(record) => {
                let worked = match record.check_in {
                    Some(check_in) => (at - check_in).num_minutes() as f64 / 60.0,
                    None => 0.0,
                };
                record.check_out = Some(at);
                record.total_hours = worked;
                Ok(())
            }
            None => Err(StoreError::NotCheckedIn),
        }
    }

    /// Append a new leave request in `pending` state and return it. The day
    /// count comes from the caller as-is.
    pub fn add_leave(
        &self,
        leave_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
        days: u32,
        applied_date: NaiveDate,
    ) -> LeaveRecord {
        let mut leaves = self.leaves.write().expect("leave store poisoned");
        let id = leaves.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let record = LeaveRecord {
            id,
            leave_type,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            reason,
            days,
            applied_date,
            approved_by: None,
            approved_date: None,
            comments: None,
        };
        leaves.push(record.clone());
        record
    }

    /// Move a pending request to `approved` and stamp the approver.
    pub fn approve_leave(
        &self,
        id: u64,
        approver: &str,
        on: NaiveDate,
        comments: Option<String>,
    ) -> Result<(), StoreError> {
        self.transition_leave(id, LeaveStatus::Approved, approver, on, comments)
    }

    /// Move a pending request to `rejected` and stamp the approver.
    pub fn reject_leave(
        &self,
        id: u64,
        approver: &str,
        on: NaiveDate,
        comments: Option<String>,
    ) -> Result<(), StoreError> {
        self.transition_leave(id, LeaveStatus::Rejected, approver, on, comments)
    }

    fn transition_leave(
        &self,
        id: u64,
        to: LeaveStatus,
        approver: &str,
        on: NaiveDate,
        comments: Option<String>,
    ) -> Result<(), StoreError> {
        let mut leaves = self.leaves.write().expect("leave store poisoned");
        let record = leaves
            .iter_mut()
            .find(|l| l.id == id && l.status == LeaveStatus::Pending);
        match record {
            Some(record) => {
                record.status = to;
                record.approved_by = Some(approver.to_string());
                record.approved_date = Some(on);
                record.comments = comments;
                Ok(())
            }
            None => Err(StoreError::LeaveAlreadyProcessed),
        }
    }

    /// Withdraw a request. Only pending requests can be cancelled.
    pub fn cancel_leave(&self, id: u64) -> Result<(), StoreError> {
        let mut leaves = self.leaves.write().expect("leave store poisoned");
        match leaves.iter().position(|l| l.id == id) {
            Some(idx) if leaves[idx].status == LeaveStatus::Pending => {
                leaves.remove(idx);
                Ok(())
            }
            Some(_) => Err(StoreError::LeaveAlreadyProcessed),
            None => Err(StoreError::LeaveNotFound),
        }
    }

    /// Append-only transcript write.
    pub fn append_chat(&self, message: ChatMessage) {
        self.chat
            .write()
            .expect("chat store poisoned")
            .push(message);
    }

    /// Startup audit for the seeded entitlement counters: used + remaining
    /// must equal the total for every leave type.
    pub fn verify_leave_balances(&self) -> Result<()> {
        for balance in &self.balances {
            if balance.used + balance.remaining != balance.total {
                return Err(anyhow!(
                    "leave balance for {} is inconsistent: {} used + {} remaining != {} total",
                    balance.leave_type,
                    balance.used,
                    balance.remaining,
                    balance.total
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn check_in_then_out_records_hours() {
        let store = DataStore::seeded();
        store.record_check_in(day(1), at(9, 0)).unwrap();
        store.record_check_out(day(1), at(17, 30)).unwrap();

        let records = store.attendance();
        let today = records.iter().find(|r| r.date == day(1)).unwrap();
        assert_eq!(today.check_out, Some(at(17, 30)));
        assert!((today.total_hours - 8.5).abs() < 1e-9);
    }

    #[test]
    fn double_check_in_is_a_conflict() {
        let store = DataStore::seeded();
        store.record_check_in(day(1), at(9, 0)).unwrap();
        assert_eq!(
            store.record_check_in(day(1), at(9, 5)),
            Err(StoreError::AlreadyCheckedIn)
        );
    }

    #[test]
    fn check_out_without_check_in_is_a_conflict() {
        let store = DataStore::seeded();
        assert_eq!(
            store.record_check_out(day(1), at(17, 0)),
            Err(StoreError::NotCheckedIn)
        );
    }

    #[test]
    fn new_leave_requests_start_pending() {
        let store = DataStore::seeded();
        let record = store.add_leave(
            "Annual Leave".into(),
            day(10),
            day(12),
            "Trip".into(),
            3,
            day(1),
        );
        assert_eq!(record.status, LeaveStatus::Pending);
        assert!(store.leaves().iter().any(|l| l.id == record.id));
    }

    #[test]
    fn approve_only_transitions_pending_requests() {
        let store = DataStore::seeded();
        // Seed id 2 is pending, seed id 1 is already approved.
        store.approve_leave(2, "HR", day(1), None).unwrap();
        assert_eq!(
            store.approve_leave(1, "HR", day(1), None),
            Err(StoreError::LeaveAlreadyProcessed)
        );

        let approved = store.leaves().into_iter().find(|l| l.id == 2).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("HR"));
    }

    #[test]
    fn cancel_removes_only_pending_requests() {
        let store = DataStore::seeded();
        store.cancel_leave(4).unwrap();
        assert!(store.leaves().iter().all(|l| l.id != 4));
        assert_eq!(
            store.cancel_leave(1),
            Err(StoreError::LeaveAlreadyProcessed)
        );
        assert_eq!(store.cancel_leave(99), Err(StoreError::LeaveNotFound));
    }

    #[test]
    fn seeded_balances_are_consistent() {
        let store = DataStore::seeded();
        store.verify_leave_balances().unwrap();
        let annual = store
            .balances()
            .iter()
            .find(|b| b.leave_type == "Annual Leave")
            .unwrap();
        assert_eq!(annual.total, 21);
        assert_eq!(annual.used, 8);
        assert_eq!(annual.remaining, 13);
    }

    #[test]
    fn inconsistent_balance_fails_the_audit() {
        let mut store = DataStore::seeded();
        store.balances[0].used += 1;
        assert!(store.verify_leave_balances().is_err());
    }

    #[test]
    fn transcript_is_append_only_and_starts_with_greeting() {
        let store = DataStore::seeded();
        let before = store.chat();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].sender, Sender::Bot);

        store.append_chat(ChatMessage {
            id: "m-1".into(),
            text: "hello".into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            suggestions: None,
        });
        let after = store.chat();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].id, before[0].id);
    }
}
