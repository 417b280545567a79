use serde::Serialize;

use super::super::domain::{Submission, SubmissionStatus};

/// `round(count / total * 100)` with halves rounded up; zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let count = count as u64;
    let total = total as u64;
    ((count * 200 + total) / (total * 2)) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusShare {
    pub status: SubmissionStatus,
    pub label: &'static str,
    pub count: usize,
    pub percentage: u32,
}

/// Submission counts per status, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineBreakdown {
    pub total: usize,
    pub shares: Vec<StatusShare>,
}

impl PipelineBreakdown {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = SubmissionStatus>,
    {
        let mut counts = [0usize; 4];
        for status in statuses {
            counts[slot(status)] += 1;
        }
        let total = counts.iter().sum();

        let shares = SubmissionStatus::ordered()
            .into_iter()
            .map(|status| {
                let count = counts[slot(status)];
                StatusShare {
                    status,
                    label: status.label(),
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        Self { total, shares }
    }

    pub fn from_submissions<'a, I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        Self::from_statuses(submissions.into_iter().map(|submission| submission.status))
    }

    pub fn count(&self, status: SubmissionStatus) -> usize {
        self.shares
            .iter()
            .find(|share| share.status == status)
            .map_or(0, |share| share.count)
    }

    pub fn percentage(&self, status: SubmissionStatus) -> u32 {
        self.shares
            .iter()
            .find(|share| share.status == status)
            .map_or(0, |share| share.percentage)
    }

    /// Candidates still moving through the pipeline.
    pub fn active(&self) -> usize {
        self.count(SubmissionStatus::Submitted) + self.count(SubmissionStatus::InProgress)
    }
}

const fn slot(status: SubmissionStatus) -> usize {
    match status {
        SubmissionStatus::Submitted => 0,
        SubmissionStatus::InProgress => 1,
        SubmissionStatus::Hired => 2,
        SubmissionStatus::Rejected => 3,
    }
}
