use std::cmp::Ordering;

use serde::Serialize;

use super::super::domain::{Job, JobId, Recruiter, RecruiterId, Submission, SubmissionStatus};
use super::breakdown::percentage;

/// Hires over submissions as a rounded percentage, zero without submissions.
pub fn hire_rate(hire_count: u32, submission_count: u32) -> u32 {
    percentage(hire_count as usize, submission_count as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Strong,
    Steady,
    Weak,
}

impl PerformanceBand {
    pub const fn from_rate(rate: u32) -> Self {
        if rate >= 40 {
            Self::Strong
        } else if rate >= 20 {
            Self::Steady
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Steady => "Steady",
            Self::Weak => "Needs attention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecruiterStanding {
    pub recruiter_id: RecruiterId,
    pub name: String,
    pub company: String,
    pub submission_count: u32,
    pub hire_count: u32,
    pub hire_rate: u32,
    pub band: PerformanceBand,
    pub band_label: &'static str,
}

impl RecruiterStanding {
    pub fn from_recruiter(recruiter: &Recruiter) -> Self {
        let rate = hire_rate(recruiter.hire_count, recruiter.submission_count);
        let band = PerformanceBand::from_rate(rate);
        Self {
            recruiter_id: recruiter.id.clone(),
            name: recruiter.name.clone(),
            company: recruiter.company.clone(),
            submission_count: recruiter.submission_count,
            hire_count: recruiter.hire_count,
            hire_rate: rate,
            band,
            band_label: band.label(),
        }
    }
}

/// Recruiters ordered by descending hire ratio. Ties keep their input order.
///
/// Ordering compares the exact ratios rather than the rounded rates, so 33.4%
/// still ranks above 33.2%.
pub fn leaderboard(recruiters: &[Recruiter]) -> Vec<RecruiterStanding> {
    let mut ranked: Vec<&Recruiter> = recruiters.iter().collect();
    ranked.sort_by(|a, b| compare_ratio(b, a));
    ranked
        .into_iter()
        .map(RecruiterStanding::from_recruiter)
        .collect()
}

fn compare_ratio(a: &Recruiter, b: &Recruiter) -> Ordering {
    let (a_hires, a_total) = ratio(a);
    let (b_hires, b_total) = ratio(b);
    (a_hires * b_total).cmp(&(b_hires * a_total))
}

fn ratio(recruiter: &Recruiter) -> (u64, u64) {
    if recruiter.submission_count == 0 {
        (0, 1)
    } else {
        (
            u64::from(recruiter.hire_count),
            u64::from(recruiter.submission_count),
        )
    }
}

/// Counts recomputed from submission records, next to the stored counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecruiterActivity {
    pub derived_submission_count: u32,
    pub derived_hire_count: u32,
    pub derived_hire_rate: u32,
    /// Jobs where this recruiter has at least one candidate in progress.
    pub active_jobs: Vec<ActiveJob>,
}

/// Job the recruiter is actively filling, with how many candidates they sent to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveJob {
    pub job_id: JobId,
    pub title: String,
    pub submissions: u32,
}

impl RecruiterActivity {
    pub fn collect(recruiter_id: &RecruiterId, submissions: &[Submission], jobs: &[Job]) -> Self {
        let owned: Vec<&Submission> = submissions
            .iter()
            .filter(|submission| &submission.recruiter_id == recruiter_id)
            .collect();

        let derived_submission_count = owned.len() as u32;
        let derived_hire_count = owned
            .iter()
            .filter(|submission| submission.status == SubmissionStatus::Hired)
            .count() as u32;

        let active_jobs = jobs
            .iter()
            .filter(|job| {
                owned.iter().any(|submission| {
                    submission.job_id == job.id
                        && submission.status == SubmissionStatus::InProgress
                })
            })
            .map(|job| ActiveJob {
                job_id: job.id.clone(),
                title: job.title.clone(),
                submissions: owned
                    .iter()
                    .filter(|submission| submission.job_id == job.id)
                    .count() as u32,
            })
            .collect();

        Self {
            derived_submission_count,
            derived_hire_count,
            derived_hire_rate: hire_rate(derived_hire_count, derived_submission_count),
            active_jobs,
        }
    }
}
