//! Mock datasets loaded into the store at startup. The portal is a demo:
//! there is no database behind these, and the values reset on restart.

use chrono::{NaiveDate, NaiveTime};

use crate::model::assistant::{AnalysisFeature, AssistantCapability, FeatureStatus};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::EmployeeProfile;
use crate::model::leave::{LeaveBalance, LeaveRecord, LeaveStatus};
use crate::model::performance::{Goal, GoalStatus, PerformanceMetric, PerformanceReview, Trend};
use crate::model::report::{MonthlyReport, TaskCategory, WeeklyAttendance};
use crate::model::task::{Task, TaskPriority, TaskStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

pub fn profile() -> EmployeeProfile {
    EmployeeProfile {
        id: 1,
        name: "John Doe".into(),
        role: "Employee".into(),
    }
}

pub fn attendance() -> Vec<AttendanceRecord> {
    let row = |y, m, d, ci: (u32, u32), co: (u32, u32), hours, status, overtime, brk| {
        AttendanceRecord {
            date: date(y, m, d),
            check_in: Some(time(ci.0, ci.1)),
            check_out: Some(time(co.0, co.1)),
            total_hours: hours,
            status,
            overtime_hours: overtime,
            break_hours: brk,
        }
    };
    vec![
        row(2024, 1, 15, (9, 0), (17, 30), 8.5, AttendanceStatus::Present, 0.5, 1.0),
        row(2024, 1, 14, (8, 45), (17, 15), 8.5, AttendanceStatus::Present, 0.25, 1.0),
        row(2024, 1, 13, (9, 15), (17, 0), 7.75, AttendanceStatus::Late, 0.0, 1.0),
        row(2024, 1, 12, (9, 0), (13, 0), 4.0, AttendanceStatus::HalfDay, 0.0, 0.5),
        row(2024, 1, 11, (9, 0), (17, 30), 8.5, AttendanceStatus::Present, 0.5, 1.0),
        row(2024, 1, 10, (8, 30), (17, 0), 8.5, AttendanceStatus::Present, 0.25, 1.0),
        row(2024, 1, 9, (9, 0), (17, 30), 8.5, AttendanceStatus::Present, 0.5, 1.0),
        row(2024, 1, 8, (9, 15), (17, 15), 8.0, AttendanceStatus::Late, 0.0, 1.0),
    ]
}

pub fn leaves() -> Vec<LeaveRecord> {
    vec![
        LeaveRecord {
            id: 1,
            leave_type: "Sick Leave".into(),
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 12),
            status: LeaveStatus::Approved,
            reason: "Medical appointment and recovery".into(),
            days: 3,
            applied_date: date(2024, 1, 8),
            approved_by: Some("Manager".into()),
            approved_date: Some(date(2024, 1, 9)),
            comments: Some("Approved with medical certificate".into()),
        },
        LeaveRecord {
            id: 2,
            leave_type: "Annual Leave".into(),
            start_date: date(2024, 1, 25),
            end_date: date(2024, 1, 26),
            status: LeaveStatus::Pending,
            reason: "Personal vacation".into(),
            days: 2,
            applied_date: date(2024, 1, 15),
            approved_by: None,
            approved_date: None,
            comments: None,
        },
        LeaveRecord {
            id: 3,
            leave_type: "Personal Leave".into(),
            start_date: date(2024, 2, 5),
            end_date: date(2024, 2, 5),
            status: LeaveStatus::Approved,
            reason: "Family event".into(),
            days: 1,
            applied_date: date(2024, 1, 20),
            approved_by: Some("Team Lead".into()),
            approved_date: Some(date(2024, 1, 21)),
            comments: None,
        },
        LeaveRecord {
            id: 4,
            leave_type: "Maternity Leave".into(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 6, 1),
            status: LeaveStatus::Pending,
            reason: "Maternity leave as per company policy".into(),
            days: 90,
            applied_date: date(2024, 1, 25),
            approved_by: None,
            approved_date: None,
            comments: None,
        },
    ]
}

pub fn leave_balances() -> Vec<LeaveBalance> {
    let row = |leave_type: &str, total, used, remaining| LeaveBalance {
        leave_type: leave_type.into(),
        total,
        used,
        remaining,
    };
    vec![
        row("Annual Leave", 21, 8, 13),
        row("Sick Leave", 15, 3, 12),
        row("Personal Leave", 5, 1, 4),
        row("Maternity Leave", 90, 0, 90),
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Complete quarterly report".into(),
            description: "Prepare and submit Q4 performance report with detailed analysis and recommendations".into(),
            status: TaskStatus::Completed,
            due_date: date(2024, 1, 15),
            priority: TaskPriority::High,
            assigned_by: "Manager".into(),
            estimated_hours: 8.0,
            actual_hours: 7.5,
            progress: 100,
            tags: vec!["report".into(), "quarterly".into(), "analysis".into()],
        },
        Task {
            id: 2,
            title: "Client meeting preparation".into(),
            description: "Prepare presentation and materials for upcoming client meeting".into(),
            status: TaskStatus::InProgress,
            due_date: date(2024, 1, 20),
            priority: TaskPriority::Medium,
            assigned_by: "Team Lead".into(),
            estimated_hours: 6.0,
            actual_hours: 3.0,
            progress: 50,
            tags: vec!["presentation".into(), "client".into(), "meeting".into()],
        },
        Task {
            id: 3,
            title: "Code review".into(),
            description: "Review pull requests for team project and provide feedback".into(),
            status: TaskStatus::Pending,
            due_date: date(2024, 1, 18),
            priority: TaskPriority::Low,
            assigned_by: "Tech Lead".into(),
            estimated_hours: 4.0,
            actual_hours: 0.0,
            progress: 0,
            tags: vec!["code".into(), "review".into(), "development".into()],
        },
        Task {
            id: 4,
            title: "Database optimization".into(),
            description: "Optimize database queries and improve performance".into(),
            status: TaskStatus::InProgress,
            due_date: date(2024, 1, 25),
            priority: TaskPriority::High,
            assigned_by: "Manager".into(),
            estimated_hours: 12.0,
            actual_hours: 8.0,
            progress: 65,
            tags: vec!["database".into(), "optimization".into(), "performance".into()],
        },
        Task {
            id: 5,
            title: "Documentation update".into(),
            description: "Update project documentation and user guides".into(),
            status: TaskStatus::Pending,
            due_date: date(2024, 1, 22),
            priority: TaskPriority::Medium,
            assigned_by: "Team Lead".into(),
            estimated_hours: 5.0,
            actual_hours: 0.0,
            progress: 0,
            tags: vec!["documentation".into(), "guides".into()],
        },
    ]
}

pub fn performance_metrics() -> Vec<PerformanceMetric> {
    let row = |name: &str, current, target, unit: &str, trend, percentage| PerformanceMetric {
        name: name.into(),
        current,
        target,
        unit: unit.into(),
        trend,
        percentage,
    };
    vec![
        row("Task Completion Rate", 85.0, 90.0, "%", Trend::Up, 85.0),
        row("Project Delivery", 12.0, 15.0, "projects", Trend::Up, 80.0),
        row("Client Satisfaction", 4.2, 4.5, "/5", Trend::Stable, 84.0),
        row("Team Collaboration", 8.5, 9.0, "/10", Trend::Up, 85.0),
        row("Innovation Score", 7.8, 8.0, "/10", Trend::Up, 78.0),
        row("Learning Hours", 45.0, 60.0, "hours", Trend::Down, 75.0),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            title: "Complete Advanced Certification".into(),
            description: "Obtain AWS Solutions Architect certification".into(),
            target: "Certification achieved".into(),
            current: "In progress - 70% complete".into(),
            progress: 70,
            due_date: date(2024, 3, 31),
            status: GoalStatus::OnTrack,
            category: "Professional Development".into(),
        },
        Goal {
            id: 2,
            title: "Lead Team Project".into(),
            description: "Successfully lead a team of 5 developers on new product feature".into(),
            target: "Project completed on time".into(),
            current: "Project in progress - 60% complete".into(),
            progress: 60,
            due_date: date(2024, 2, 28),
            status: GoalStatus::OnTrack,
            category: "Leadership".into(),
        },
        Goal {
            id: 3,
            title: "Improve Code Quality".into(),
            description: "Reduce bug reports by 30% through better testing practices".into(),
            target: "30% reduction in bugs".into(),
            current: "15% reduction achieved".into(),
            progress: 50,
            due_date: date(2024, 4, 30),
            status: GoalStatus::Behind,
            category: "Technical Excellence".into(),
        },
        Goal {
            id: 4,
            title: "Mentor Junior Developers".into(),
            description: "Mentor 3 junior developers and help them grow their skills".into(),
            target: "3 developers mentored".into(),
            current: "2 developers being mentored".into(),
            progress: 67,
            due_date: date(2024, 6, 30),
            status: GoalStatus::OnTrack,
            category: "Leadership".into(),
        },
    ]
}

pub fn reviews() -> Vec<PerformanceReview> {
    vec![
        PerformanceReview {
            id: 1,
            period: "2023-Q4".into(),
            rating: 4.2,
            reviewer: "Sarah Johnson (Manager)".into(),
            date: date(2024, 1, 15),
            comments: "Excellent work on the Q4 project delivery. Strong technical skills and good team collaboration.".into(),
            strengths: vec![
                "Technical expertise".into(),
                "Problem solving".into(),
                "Team collaboration".into(),
            ],
            areas: vec!["Time management".into(), "Documentation".into()],
        },
        PerformanceReview {
            id: 2,
            period: "2023-Q3".into(),
            rating: 4.0,
            reviewer: "Mike Chen (Team Lead)".into(),
            date: date(2023, 10, 20),
            comments: "Good performance with room for improvement in project planning.".into(),
            strengths: vec!["Coding skills".into(), "Learning ability".into()],
            areas: vec!["Project planning".into(), "Communication".into()],
        },
    ]
}

pub fn weekly_attendance() -> Vec<WeeklyAttendance> {
    let row = |day: &str, hours, status| WeeklyAttendance {
        day: day.into(),
        hours,
        status,
    };
    vec![
        row("Mon", 8.5, AttendanceStatus::Present),
        row("Tue", 8.0, AttendanceStatus::Present),
        row("Wed", 7.5, AttendanceStatus::Late),
        row("Thu", 8.5, AttendanceStatus::Present),
        row("Fri", 6.0, AttendanceStatus::HalfDay),
        row("Sat", 0.0, AttendanceStatus::Weekend),
        row("Sun", 0.0, AttendanceStatus::Weekend),
    ]
}

pub fn monthly_reports() -> Vec<MonthlyReport> {
    let row = |month: &str, attendance, tasks, performance, leaves| MonthlyReport {
        month: month.into(),
        attendance,
        tasks,
        performance,
        leaves,
    };
    vec![
        row("Jan", 95.0, 85.0, 88.0, 2),
        row("Feb", 92.0, 90.0, 85.0, 1),
        row("Mar", 98.0, 88.0, 92.0, 0),
        row("Apr", 94.0, 92.0, 89.0, 3),
        row("May", 96.0, 87.0, 91.0, 1),
        row("Jun", 93.0, 94.0, 90.0, 2),
    ]
}

pub fn task_categories() -> Vec<TaskCategory> {
    let row = |category: &str, completed, total, percentage| TaskCategory {
        category: category.into(),
        completed,
        total,
        percentage,
    };
    vec![
        row("Development", 15, 20, 75.0),
        row("Design", 8, 10, 80.0),
        row("Testing", 12, 15, 80.0),
        row("Documentation", 5, 8, 62.5),
        row("Meetings", 20, 25, 80.0),
    ]
}

pub fn capabilities() -> Vec<AssistantCapability> {
    let row = |title: &str, description: &str, accuracy| AssistantCapability {
        title: title.into(),
        description: description.into(),
        accuracy,
    };
    vec![
        row(
            "Natural Language Processing",
            "Understands complex HR queries and provides contextual responses",
            95,
        ),
        row(
            "Policy Knowledge",
            "Access to company policies, procedures, and guidelines",
            98,
        ),
        row(
            "Process Automation",
            "Automates routine HR tasks and form submissions",
            92,
        ),
        row(
            "Sentiment Analysis",
            "Analyzes employee sentiment and provides insights",
            87,
        ),
    ]
}

pub fn analysis_features() -> Vec<AnalysisFeature> {
    let row = |title: &str, description: &str, status, accuracy| AnalysisFeature {
        title: title.into(),
        description: description.into(),
        status,
        accuracy,
    };
    vec![
        row(
            "Employee Performance Prediction",
            "AI predicts employee performance trends and identifies high-potential candidates",
            FeatureStatus::Active,
            94,
        ),
        row(
            "Attrition Risk Analysis",
            "Machine learning models predict employee turnover risk with 89% accuracy",
            FeatureStatus::Active,
            89,
        ),
        row(
            "Recruitment AI Assistant",
            "AI-powered candidate screening and interview scheduling",
            FeatureStatus::Active,
            92,
        ),
        row(
            "Sentiment Analysis",
            "Real-time analysis of employee satisfaction and workplace sentiment",
            FeatureStatus::Active,
            87,
        ),
        row(
            "Workload Optimization",
            "AI optimizes task distribution and resource allocation",
            FeatureStatus::Developing,
            78,
        ),
        row(
            "Predictive Analytics",
            "Forecast hiring needs, budget requirements, and growth patterns",
            FeatureStatus::Developing,
            85,
        ),
    ]
}
