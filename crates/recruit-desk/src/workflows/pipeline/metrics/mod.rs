//! Read-only statistics derived from desk snapshots on demand.

mod breakdown;
mod dashboard;
mod recruiters;
pub mod views;

pub use breakdown::{percentage, PipelineBreakdown, StatusShare};
pub use dashboard::{
    days_remaining, open_job_deadlines, remaining_label, DashboardSummary, JobDeadline,
    UrgencyBand, AVERAGE_TIME_TO_HIRE_DAYS,
};
pub use recruiters::{
    hire_rate, leaderboard, ActiveJob, PerformanceBand, RecruiterActivity, RecruiterStanding,
};
