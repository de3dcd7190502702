use crate::api::assistant::{
    AnalysisResponse, CapabilityResponse, ChatRequest, ChatResponse, FeatureResponse,
    TranscriptResponse,
};
use crate::api::attendance::{AttendanceFilter, AttendanceListResponse, AttendanceSummary};
use crate::api::dashboard::{DashboardSummary, WeeklyBar};
use crate::api::leave::{
    CreateLeave, DecideLeave, LeaveBalanceEntry, LeaveBalanceResponse, LeaveFilter,
    LeaveListResponse, LeaveSummary,
};
use crate::api::performance::{
    GoalListResponse, MetricListResponse, PerformanceSummary, ReviewListResponse,
};
use crate::api::report::{
    MonthlyReportResponse, ReportSummary, TaskCategoryResponse, WeeklyAttendanceResponse,
};
use crate::api::task::{TaskFilter, TaskListResponse, TaskSummary};
use crate::model::assistant::{AnalysisFeature, AnalysisReport, AssistantCapability, FeatureStatus};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::chat::{ChatMessage, Sender};
use crate::model::employee::EmployeeProfile;
use crate::model::leave::{LeaveBalance, LeaveRecord, LeaveStatus};
use crate::model::performance::{Goal, GoalStatus, PerformanceMetric, PerformanceReview, Trend};
use crate::model::report::{MonthlyReport, TaskCategory, WeeklyAttendance};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Portal API",
        version = "1.0.0",
        description = r#"
## HR Self-Service Portal (Demo)

This API powers a **demo HR portal**: every dataset is seeded in memory at
startup and resets on restart. There is no database and no authentication.

### 🔹 Key Features
- **Dashboard**
  - One-call summary with task counts, work-hour averages and charts
- **Attendance**
  - Daily check-in / check-out plus history and derived figures
- **Leave Management**
  - Request, approve/reject, cancel, balances and summaries
- **Tasks & Performance**
  - Task lists with filters, KPI metrics, goals and reviews
- **Reports**
  - Monthly trends, weekly attendance and category breakdowns
- **AI Assistant (scripted)**
  - Keyword-matched chat replies and a simulated analysis run

### 📦 Response Format
- JSON-based RESTful responses
- Every derived number is a sum, count, mean or percentage ratio over the
  seeded records

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::dashboard::summary,

        crate::api::attendance::list,
        crate::api::attendance::summary,
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,

        crate::api::leave::list,
        crate::api::leave::summary,
        crate::api::leave::balance,
        crate::api::leave::create,
        crate::api::leave::approve,
        crate::api::leave::reject,
        crate::api::leave::cancel,

        crate::api::task::list,
        crate::api::task::summary,

        crate::api::performance::list_metrics,
        crate::api::performance::list_goals,
        crate::api::performance::list_reviews,
        crate::api::performance::summary,

        crate::api::report::monthly,
        crate::api::report::weekly,
        crate::api::report::categories,
        crate::api::report::summary,

        crate::api::assistant::transcript,
        crate::api::assistant::chat,
        crate::api::assistant::capabilities,
        crate::api::assistant::features,
        crate::api::assistant::run_analysis
    ),
    components(
        schemas(
            EmployeeProfile,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceFilter,
            AttendanceListResponse,
            AttendanceSummary,
            LeaveRecord,
            LeaveStatus,
            LeaveBalance,
            LeaveFilter,
            LeaveListResponse,
            LeaveSummary,
            LeaveBalanceEntry,
            LeaveBalanceResponse,
            CreateLeave,
            DecideLeave,
            Task,
            TaskStatus,
            TaskPriority,
            TaskFilter,
            TaskListResponse,
            TaskSummary,
            PerformanceMetric,
            Trend,
            Goal,
            GoalStatus,
            PerformanceReview,
            MetricListResponse,
            GoalListResponse,
            ReviewListResponse,
            PerformanceSummary,
            MonthlyReport,
            WeeklyAttendance,
            TaskCategory,
            MonthlyReportResponse,
            WeeklyAttendanceResponse,
            TaskCategoryResponse,
            ReportSummary,
            DashboardSummary,
            WeeklyBar,
            ChatMessage,
            Sender,
            ChatRequest,
            ChatResponse,
            TranscriptResponse,
            AssistantCapability,
            AnalysisFeature,
            FeatureStatus,
            AnalysisReport,
            CapabilityResponse,
            FeatureResponse,
            AnalysisResponse
        )
    ),
    tags(
        (name = "Dashboard", description = "Landing dashboard APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Task", description = "Task tracking APIs"),
        (name = "Performance", description = "Performance tracking APIs"),
        (name = "Report", description = "Reporting APIs"),
        (name = "Assistant", description = "Scripted assistant APIs"),
    )
)]
pub struct ApiDoc;
