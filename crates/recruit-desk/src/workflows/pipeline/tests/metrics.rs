use super::common::*;
use crate::workflows::pipeline::domain::{JobId, JobStatus, SubmissionStatus};
use crate::workflows::pipeline::fixtures;
use crate::workflows::pipeline::metrics::{
    days_remaining, hire_rate, leaderboard, open_job_deadlines, percentage, remaining_label,
    ActiveJob, DashboardSummary, PerformanceBand, PipelineBreakdown, RecruiterActivity, UrgencyBand,
};
use crate::workflows::pipeline::stages::PipelineStage;
use chrono::Duration;

#[test]
fn percentage_rounds_and_guards_zero_total() {
    assert_eq!(percentage(1, 4), 25);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(5, 0), 0);
}

#[test]
fn one_of_each_status_splits_evenly() {
    let submissions = vec![
        submission("1", SubmissionStatus::Submitted, PipelineStage::Submitted),
        submission("2", SubmissionStatus::InProgress, PipelineStage::Interview),
        submission("3", SubmissionStatus::Hired, PipelineStage::Accepted),
        submission("4", SubmissionStatus::Rejected, PipelineStage::Screening),
    ];
    let breakdown = PipelineBreakdown::from_submissions(&submissions);

    assert_eq!(breakdown.total, 4);
    for status in SubmissionStatus::ordered() {
        assert_eq!(breakdown.count(status), 1);
        assert_eq!(breakdown.percentage(status), 25);
    }
}

#[test]
fn empty_pipeline_reports_zero_shares() {
    let breakdown = PipelineBreakdown::from_statuses(std::iter::empty());
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.shares.len(), 4);
    assert!(breakdown.shares.iter().all(|share| share.percentage == 0));
}

#[test]
fn hire_rate_examples() {
    assert_eq!(hire_rate(2, 5), 40);
    assert_eq!(hire_rate(0, 0), 0);
    assert_eq!(hire_rate(1, 5), 20);
    assert_eq!(PerformanceBand::from_rate(40), PerformanceBand::Strong);
    assert_eq!(PerformanceBand::from_rate(20), PerformanceBand::Steady);
    assert_eq!(PerformanceBand::from_rate(19), PerformanceBand::Weak);
}

#[test]
fn leaderboard_is_stable_for_ties() {
    let recruiters = vec![
        recruiter("a", 4, 1),
        recruiter("b", 0, 0),
        recruiter("c", 8, 2),
        recruiter("d", 5, 3),
        recruiter("e", 10, 0),
    ];
    let ids: Vec<String> = leaderboard(&recruiters)
        .into_iter()
        .map(|standing| standing.recruiter_id.0)
        .collect();

    assert_eq!(ids, vec!["d", "a", "c", "b", "e"]);
}

#[test]
fn leaderboard_ranks_exact_ratios() {
    // 1/3 and 333/1000 both round to 33, but 1/3 is higher.
    let recruiters = vec![recruiter("low", 1000, 333), recruiter("high", 3, 1)];
    let ranked = leaderboard(&recruiters);
    assert_eq!(ranked[0].recruiter_id.0, "high");
    assert_eq!(ranked[0].hire_rate, ranked[1].hire_rate);
}

#[test]
fn dashboard_summary_over_fixtures() {
    let jobs = fixtures::jobs();
    let submissions = fixtures::submissions();
    let summary = DashboardSummary::collect(&jobs, &submissions);

    assert_eq!(summary.open_jobs, 6);
    assert_eq!(summary.jobs_without_candidates, 2);
    assert_eq!(summary.candidates_submitted, 4);
    assert_eq!(summary.candidates_in_progress, 5);
    assert_eq!(summary.candidates_hired, 3);
    assert_eq!(summary.candidates_rejected, 2);
    assert_eq!(summary.pipeline_size, 9);
    assert_eq!(summary.average_time_to_hire_days, 24);
}

#[test]
fn closed_jobs_are_not_counted_as_open() {
    let mut jobs = fixtures::jobs();
    jobs[2].status = JobStatus::Filled;
    let summary = DashboardSummary::collect(&jobs, &[]);

    assert_eq!(summary.open_jobs, 5);
    assert_eq!(summary.jobs_without_candidates, 1);
    assert_eq!(summary.pipeline_size, 0);
}

#[test]
fn ten_days_out_is_amber() {
    let closing = today() + Duration::days(10);
    let days = days_remaining(closing, today());

    assert_eq!(days, 10);
    assert_eq!(UrgencyBand::from_days(days), UrgencyBand::Amber);
    assert_eq!(remaining_label(days), "10 days");
}

#[test]
fn urgency_band_edges() {
    assert_eq!(UrgencyBand::from_days(7), UrgencyBand::Red);
    assert_eq!(UrgencyBand::from_days(8), UrgencyBand::Amber);
    assert_eq!(UrgencyBand::from_days(14), UrgencyBand::Amber);
    assert_eq!(UrgencyBand::from_days(15), UrgencyBand::Green);
    assert_eq!(remaining_label(0), "Closing today");
    assert_eq!(remaining_label(-3), "Closing today");
}

#[test]
fn deadlines_are_sorted_by_closing_date() {
    let deadlines = open_job_deadlines(&fixtures::jobs(), today());
    let titles: Vec<&str> = deadlines.iter().map(|d| d.title.as_str()).collect();

    assert_eq!(titles[0], "Senior Software Engineer");
    assert_eq!(deadlines[0].days_remaining, 10);
    assert_eq!(deadlines[0].urgency, UrgencyBand::Amber);
    assert_eq!(titles[titles.len() - 1], "Frontend Developer");
}

#[test]
fn recruiter_activity_derives_counts_from_submissions() {
    let activity = RecruiterActivity::collect(
        &crate::workflows::pipeline::domain::RecruiterId::new("1"),
        &fixtures::submissions(),
        &fixtures::jobs(),
    );

    assert_eq!(activity.derived_submission_count, 5);
    assert_eq!(activity.derived_hire_count, 2);
    assert_eq!(activity.derived_hire_rate, 40);
    assert_eq!(
        activity.active_jobs,
        vec![
            ActiveJob {
                job_id: JobId::new("1"),
                title: "Senior Software Engineer".to_string(),
                submissions: 2,
            },
            ActiveJob {
                job_id: JobId::new("5"),
                title: "Data Analyst".to_string(),
                submissions: 1,
            },
        ]
    );
}
