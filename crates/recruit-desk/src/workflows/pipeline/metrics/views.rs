use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{Job, Message, Recruiter, Submission};
use super::super::stages::StageTrack;
use super::breakdown::PipelineBreakdown;
use super::dashboard::{DashboardSummary, JobDeadline};
use super::recruiters::{RecruiterActivity, RecruiterStanding};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub today: NaiveDate,
    pub summary: DashboardSummary,
    pub pipeline: PipelineBreakdown,
    pub leaderboard: Vec<RecruiterStanding>,
    pub deadlines: Vec<JobDeadline>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    pub job: Job,
    pub deadline: JobDeadline,
    pub pipeline: PipelineBreakdown,
    /// Submissions on record for the job, to compare with `job.candidate_count`.
    pub derived_candidate_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDetailView {
    pub submission: Submission,
    pub track: StageTrack,
    /// `None` when the referenced job no longer exists.
    pub job: Option<Job>,
    pub recruiter: Option<Recruiter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruiterDetailView {
    pub recruiter: Recruiter,
    pub standing: RecruiterStanding,
    pub activity: RecruiterActivity,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageInbox {
    pub unread_count: usize,
    pub messages: Vec<Message>,
}
