use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{Job, JobId, JobStatus, Submission, SubmissionStatus};
use super::breakdown::PipelineBreakdown;

/// Placeholder average shown on the dashboard card; not derived from data.
pub const AVERAGE_TIME_TO_HIRE_DAYS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub open_jobs: usize,
    pub jobs_without_candidates: usize,
    pub candidates_submitted: usize,
    pub candidates_in_progress: usize,
    pub candidates_hired: usize,
    pub candidates_rejected: usize,
    pub pipeline_size: usize,
    pub average_time_to_hire_days: u32,
}

impl DashboardSummary {
    pub fn collect(jobs: &[Job], submissions: &[Submission]) -> Self {
        let open: Vec<&Job> = jobs
            .iter()
            .filter(|job| job.status == JobStatus::Open)
            .collect();
        let breakdown = PipelineBreakdown::from_submissions(submissions);

        Self {
            open_jobs: open.len(),
            jobs_without_candidates: open.iter().filter(|job| job.candidate_count == 0).count(),
            candidates_submitted: breakdown.count(SubmissionStatus::Submitted),
            candidates_in_progress: breakdown.count(SubmissionStatus::InProgress),
            candidates_hired: breakdown.count(SubmissionStatus::Hired),
            candidates_rejected: breakdown.count(SubmissionStatus::Rejected),
            pipeline_size: breakdown.active(),
            average_time_to_hire_days: AVERAGE_TIME_TO_HIRE_DAYS,
        }
    }
}

/// Whole days until `closing_date`. Dates carry no time of day, so the
/// ceiling of the difference is the plain day count.
pub fn days_remaining(closing_date: NaiveDate, today: NaiveDate) -> i64 {
    (closing_date - today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyBand {
    Red,
    Amber,
    Green,
}

impl UrgencyBand {
    pub const fn from_days(days: i64) -> Self {
        if days <= 7 {
            Self::Red
        } else if days <= 14 {
            Self::Amber
        } else {
            Self::Green
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
        }
    }
}

pub fn remaining_label(days: i64) -> String {
    match days {
        d if d <= 0 => "Closing today".to_string(),
        1 => "1 day".to_string(),
        d => format!("{d} days"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDeadline {
    pub job_id: JobId,
    pub title: String,
    pub department: String,
    pub closing_date: NaiveDate,
    pub candidate_count: u32,
    pub days_remaining: i64,
    pub remaining_label: String,
    pub urgency: UrgencyBand,
}

impl JobDeadline {
    pub fn for_job(job: &Job, today: NaiveDate) -> Self {
        let days = days_remaining(job.closing_date, today);
        Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            department: job.department.clone(),
            closing_date: job.closing_date,
            candidate_count: job.candidate_count,
            days_remaining: days,
            remaining_label: remaining_label(days),
            urgency: UrgencyBand::from_days(days),
        }
    }
}

/// Open jobs ordered by how soon they close.
pub fn open_job_deadlines(jobs: &[Job], today: NaiveDate) -> Vec<JobDeadline> {
    let mut deadlines: Vec<JobDeadline> = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Open)
        .map(|job| JobDeadline::for_job(job, today))
        .collect();
    deadlines.sort_by_key(|deadline| deadline.days_remaining);
    deadlines
}
