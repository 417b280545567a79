use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use recruit_desk::config::AppConfig;
use recruit_desk::error::AppError;
use recruit_desk::workflows::pipeline::{
    DashboardReport, RecruitingDesk, StageLayout, SubmissionId, TransitionOutcome,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Candidate moved one stage forward
    #[arg(long, default_value = "2")]
    pub(crate) advance: String,
    /// Candidate rejected at their current stage
    #[arg(long, default_value = "6")]
    pub(crate) reject: String,
    /// Feedback recorded with the rejection
    #[arg(long, default_value = "Portfolio did not cover platform work")]
    pub(crate) reason: String,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let desk = RecruitingDesk::seeded(config.desk, Utc::now());

    print!("{}", render_dashboard(&desk.dashboard(today)));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        advance,
        reject,
        reason,
    } = args;

    let config = AppConfig::load()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let desk = RecruitingDesk::seeded(config.desk, Utc::now());

    println!("Recruiting desk demo");

    let advance_id = SubmissionId::new(advance);
    let report = desk.advance_submission(&advance_id)?;
    println!(
        "- {}: {}",
        report.submission.name,
        describe_outcome(&report.outcome)
    );

    let reject_id = SubmissionId::new(reject);
    let report = desk.reject_submission(&reject_id, &reason, Utc::now())?;
    println!(
        "- {}: {}",
        report.submission.name,
        describe_outcome(&report.outcome)
    );

    let detail = desk.submission_detail(&reject_id, StageLayout::Detailed)?;
    println!(
        "  Stage track: {} ({}% through the pipeline)",
        detail
            .track
            .markers
            .iter()
            .map(|marker| marker.label)
            .collect::<Vec<_>>()
            .join(" > "),
        detail.track.progress_pct
    );

    println!();
    print!("{}", render_dashboard(&desk.dashboard(today)));
    Ok(())
}

fn describe_outcome(outcome: &TransitionOutcome) -> String {
    match outcome {
        TransitionOutcome::Advanced { from, to, status } => format!(
            "advanced from {} to {} ({})",
            from.label(),
            to.label(),
            status.label()
        ),
        TransitionOutcome::Rejected { at, .. } => format!("rejected at {}", at.label()),
        TransitionOutcome::Unchanged { status } => {
            format!("left unchanged, already {}", status.label())
        }
    }
}

pub(crate) fn render_dashboard(report: &DashboardReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!("Recruiting dashboard for {}\n", report.today));
    out.push_str(&format!(
        "- Open jobs: {} ({} without candidates)\n",
        summary.open_jobs, summary.jobs_without_candidates
    ));
    out.push_str(&format!(
        "- Candidates: {} submitted | {} in progress | {} hired | {} rejected\n",
        summary.candidates_submitted,
        summary.candidates_in_progress,
        summary.candidates_hired,
        summary.candidates_rejected
    ));
    out.push_str(&format!(
        "- Pipeline size: {} | Average time to hire: {} days\n",
        summary.pipeline_size, summary.average_time_to_hire_days
    ));

    out.push_str("Pipeline breakdown:\n");
    for share in &report.pipeline.shares {
        out.push_str(&format!(
            "  - {}: {} ({}%)\n",
            share.label, share.count, share.percentage
        ));
    }

    out.push_str("Recruiter leaderboard:\n");
    for (rank, standing) in report.leaderboard.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}: {}/{} hired ({}%, {})\n",
            rank + 1,
            standing.name,
            standing.hire_count,
            standing.submission_count,
            standing.hire_rate,
            standing.band_label
        ));
    }

    out.push_str("Closing dates:\n");
    if report.deadlines.is_empty() {
        out.push_str("  - No open jobs\n");
    }
    for deadline in &report.deadlines {
        out.push_str(&format!(
            "  - {} ({}): {} [{}]\n",
            deadline.title,
            deadline.department,
            deadline.remaining_label,
            deadline.urgency.label()
        ));
    }

    out
}
