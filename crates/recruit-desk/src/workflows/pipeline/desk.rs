use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use super::domain::{
    Employer, EmployerPatch, Job, JobDraft, JobId, JobPatch, MemberStatus, Message, MessageDraft,
    MessageId, NoteId, Recruiter, RecruiterDraft, RecruiterId, RecruiterPatch, Submission,
    SubmissionDraft, SubmissionId, SubmissionPatch, SubmissionStatus, TeamMember, TeamMemberId,
    TeamMemberPatch, TeamRole,
};
use super::fixtures;
use super::metrics::views::{
    DashboardReport, JobDetailView, MessageInbox, RecruiterDetailView, SubmissionDetailView,
};
use super::metrics::{
    leaderboard, open_job_deadlines, DashboardSummary, JobDeadline, PipelineBreakdown,
    RecruiterActivity, RecruiterStanding,
};
use super::stages::{StageLayout, StageTrack};
use super::store::{Entity, EntityKind, EntityStore, StoreError};
use super::transitions::{self, NoteStamp, TransitionError, TransitionOutcome};
use crate::config::DeskConfig;

/// Error raised by desk operations.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Optional narrowing for submission listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub job_id: Option<JobId>,
    pub recruiter_id: Option<RecruiterId>,
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        self.status
            .map_or(true, |status| submission.status == status)
            && self
                .job_id
                .as_ref()
                .map_or(true, |job_id| &submission.job_id == job_id)
            && self
                .recruiter_id
                .as_ref()
                .map_or(true, |recruiter_id| &submission.recruiter_id == recruiter_id)
    }
}

/// Transition result paired with the stored submission.
#[derive(Debug, Clone)]
pub struct TransitionReport {
    pub outcome: TransitionOutcome,
    pub submission: Submission,
}

/// Single source of truth for every collection the dashboard reads.
pub struct RecruitingDesk {
    jobs: EntityStore<Job>,
    submissions: EntityStore<Submission>,
    recruiters: EntityStore<Recruiter>,
    messages: EntityStore<Message>,
    team: EntityStore<TeamMember>,
    employers: EntityStore<Employer>,
    sequence: AtomicU64,
    config: DeskConfig,
}

impl RecruitingDesk {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            jobs: EntityStore::default(),
            submissions: EntityStore::default(),
            recruiters: EntityStore::default(),
            messages: EntityStore::default(),
            team: EntityStore::default(),
            employers: EntityStore::default(),
            sequence: AtomicU64::new(1),
            config,
        }
    }

    /// Desk loaded with the demo dataset. Message timestamps are relative to `now`.
    pub fn seeded(config: DeskConfig, now: DateTime<Utc>) -> Self {
        let desk = Self::new(config);
        desk.jobs.replace_all(fixtures::jobs());
        desk.submissions.replace_all(fixtures::submissions());
        desk.recruiters.replace_all(fixtures::recruiters());
        desk.messages.replace_all(fixtures::messages(now));
        desk.team.replace_all(fixtures::team_members());
        desk.employers.replace_all(vec![fixtures::employer()]);
        info!(
            jobs = desk.jobs.len(),
            submissions = desk.submissions.len(),
            recruiters = desk.recruiters.len(),
            "seeded recruiting desk"
        );
        desk
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn jobs(&self) -> &EntityStore<Job> {
        &self.jobs
    }

    pub fn submissions(&self) -> &EntityStore<Submission> {
        &self.submissions
    }

    pub fn recruiters(&self) -> &EntityStore<Recruiter> {
        &self.recruiters
    }

    pub fn messages(&self) -> &EntityStore<Message> {
        &self.messages
    }

    pub fn team(&self) -> &EntityStore<TeamMember> {
        &self.team
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id:06}")
    }

    pub fn create_job(&self, draft: JobDraft, today: NaiveDate) -> Result<Job, DeskError> {
        require("title", &draft.title)?;
        let job = draft.into_job(JobId(self.next_id("job")), today);
        info!(job_id = %job.id, title = %job.title, "job created");
        Ok(self.jobs.append(job))
    }

    pub fn update_job(&self, id: &JobId, patch: JobPatch) -> Result<Job, DeskError> {
        let job = self.jobs.update(id, |job| patch.apply(job))?;
        info!(job_id = %id, "job updated");
        Ok(job)
    }

    pub fn delete_job(&self, id: &JobId) -> Result<Job, DeskError> {
        let job = self.jobs.remove(id)?;
        info!(job_id = %id, "job deleted");
        Ok(job)
    }

    pub fn list_submissions(&self, filter: &SubmissionFilter) -> Vec<Submission> {
        self.submissions
            .snapshot()
            .iter()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect()
    }

    pub fn create_submission(
        &self,
        draft: SubmissionDraft,
        today: NaiveDate,
    ) -> Result<Submission, DeskError> {
        require("name", &draft.name)?;
        let submission = draft.into_submission(SubmissionId(self.next_id("sub")), today);
        info!(
            submission_id = %submission.id,
            job_id = %submission.job_id,
            recruiter_id = %submission.recruiter_id,
            "submission created"
        );
        Ok(self.submissions.append(submission))
    }

    pub fn update_submission(
        &self,
        id: &SubmissionId,
        patch: SubmissionPatch,
    ) -> Result<Submission, DeskError> {
        let submission = self
            .submissions
            .update(id, |submission| patch.apply(submission))?;
        info!(submission_id = %id, status = submission.status.key(), "submission updated");
        Ok(submission)
    }

    pub fn delete_submission(&self, id: &SubmissionId) -> Result<Submission, DeskError> {
        let submission = self.submissions.remove(id)?;
        info!(submission_id = %id, "submission deleted");
        Ok(submission)
    }

    /// Move a submission to the next pipeline stage. Hired and rejected
    /// submissions are reported as unchanged.
    pub fn advance_submission(&self, id: &SubmissionId) -> Result<TransitionReport, DeskError> {
        let mut outcome = None;
        let submission = self.submissions.update(id, |submission| {
            outcome = Some(transitions::advance(submission));
        })?;
        let outcome = outcome.unwrap_or(TransitionOutcome::Unchanged {
            status: submission.status,
        });

        if outcome.changed() {
            info!(
                submission_id = %id,
                stage = submission.current_stage.label(),
                "submission advanced"
            );
        } else {
            debug!(
                submission_id = %id,
                status = submission.status.key(),
                "advance ignored for closed submission"
            );
        }
        Ok(TransitionReport {
            outcome,
            submission,
        })
    }

    /// Reject a submission and record the reason as a feedback note.
    pub fn reject_submission(
        &self,
        id: &SubmissionId,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<TransitionReport, DeskError> {
        let stamp = || NoteStamp {
            id: NoteId(self.next_id("note")),
            created_at: now,
            author: self.config.rejection_author.clone(),
        };

        let mut outcome = None;
        let submission = self.submissions.try_update(id, |submission| {
            outcome = Some(transitions::reject(submission, reason, stamp)?);
            Ok::<(), DeskError>(())
        })?;
        let outcome = outcome.unwrap_or(TransitionOutcome::Unchanged {
            status: submission.status,
        });

        if outcome.changed() {
            info!(
                submission_id = %id,
                stage = submission.current_stage.label(),
                "submission rejected"
            );
        }
        Ok(TransitionReport {
            outcome,
            submission,
        })
    }

    pub fn create_recruiter(&self, draft: RecruiterDraft) -> Result<Recruiter, DeskError> {
        require("name", &draft.name)?;
        let recruiter = draft.into_recruiter(RecruiterId(self.next_id("rec")));
        info!(recruiter_id = %recruiter.id, "recruiter created");
        Ok(self.recruiters.append(recruiter))
    }

    pub fn update_recruiter(
        &self,
        id: &RecruiterId,
        patch: RecruiterPatch,
    ) -> Result<Recruiter, DeskError> {
        let recruiter = self
            .recruiters
            .update(id, |recruiter| patch.apply(recruiter))?;
        info!(recruiter_id = %id, "recruiter updated");
        Ok(recruiter)
    }

    pub fn delete_recruiter(&self, id: &RecruiterId) -> Result<Recruiter, DeskError> {
        let recruiter = self.recruiters.remove(id)?;
        info!(recruiter_id = %id, "recruiter deleted");
        Ok(recruiter)
    }

    /// Inbox listing, optionally narrowed to messages whose title or content
    /// contains `search` (case-insensitive). `unread_count` covers the
    /// returned messages only.
    pub fn inbox(&self, search: Option<&str>) -> MessageInbox {
        let term = search
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());
        let messages: Vec<Message> = self
            .messages
            .snapshot()
            .iter()
            .filter(|message| match &term {
                Some(term) => message.mentions(term),
                None => true,
            })
            .cloned()
            .collect();

        MessageInbox {
            unread_count: messages.iter().filter(|message| !message.read).count(),
            messages,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.messages
            .snapshot()
            .iter()
            .filter(|message| !message.read)
            .count()
    }

    /// New messages land at the top of the inbox, unread.
    pub fn add_message(&self, draft: MessageDraft, now: DateTime<Utc>) -> Message {
        let message = Message {
            id: MessageId(self.next_id("msg")),
            title: draft.title,
            content: draft.content,
            timestamp: now,
            read: false,
            kind: draft.kind,
        };
        debug!(message_id = %message.id, "message added");
        self.messages.prepend(message)
    }

    pub fn mark_message_read(&self, id: &MessageId) -> Result<Message, DeskError> {
        Ok(self.messages.update(id, |message| message.read = true)?)
    }

    pub fn mark_all_messages_read(&self) {
        self.messages.update_all(|message| message.read = true);
    }

    pub fn delete_message(&self, id: &MessageId) -> Result<Message, DeskError> {
        Ok(self.messages.remove(id)?)
    }

    /// Invite a teammate by e-mail; the display name defaults to the local part.
    pub fn invite_member(
        &self,
        email: &str,
        role: TeamRole,
        now: DateTime<Utc>,
    ) -> Result<TeamMember, DeskError> {
        let email = email.trim();
        require("email", email)?;
        let name = email.split('@').next().unwrap_or(email).to_string();
        let member = TeamMember {
            id: TeamMemberId(self.next_id("member")),
            email: email.to_string(),
            name,
            role,
            status: MemberStatus::Pending,
            joined_at: now,
        };
        info!(member_id = %member.id, "team member invited");
        Ok(self.team.append(member))
    }

    pub fn update_member(
        &self,
        id: &TeamMemberId,
        patch: TeamMemberPatch,
    ) -> Result<TeamMember, DeskError> {
        Ok(self.team.update(id, |member| patch.apply(member))?)
    }

    pub fn remove_member(&self, id: &TeamMemberId) -> Result<TeamMember, DeskError> {
        let member = self.team.remove(id)?;
        info!(member_id = %id, "team member removed");
        Ok(member)
    }

    pub fn employer(&self) -> Result<Employer, DeskError> {
        self.employers
            .snapshot()
            .first()
            .cloned()
            .ok_or_else(|| missing_employer().into())
    }

    pub fn update_employer(&self, patch: EmployerPatch) -> Result<Employer, DeskError> {
        let current = self.employer()?;
        Ok(self
            .employers
            .update(current.id(), |employer| patch.apply(employer))?)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardReport {
        let jobs = self.jobs.snapshot();
        let submissions = self.submissions.snapshot();
        let recruiters = self.recruiters.snapshot();

        DashboardReport {
            today,
            summary: DashboardSummary::collect(&jobs, &submissions),
            pipeline: PipelineBreakdown::from_submissions(submissions.iter()),
            leaderboard: leaderboard(&recruiters),
            deadlines: open_job_deadlines(&jobs, today),
        }
    }

    pub fn job_detail(&self, id: &JobId, today: NaiveDate) -> Result<JobDetailView, DeskError> {
        let job = self.jobs.fetch(id)?;
        let submissions = self.submissions.snapshot();
        let for_job: Vec<&Submission> = submissions
            .iter()
            .filter(|submission| &submission.job_id == id)
            .collect();

        Ok(JobDetailView {
            deadline: JobDeadline::for_job(&job, today),
            pipeline: PipelineBreakdown::from_submissions(for_job.iter().copied()),
            derived_candidate_count: for_job.len(),
            job,
        })
    }

    pub fn submission_detail(
        &self,
        id: &SubmissionId,
        layout: StageLayout,
    ) -> Result<SubmissionDetailView, DeskError> {
        let submission = self.submissions.fetch(id)?;
        Ok(SubmissionDetailView {
            track: StageTrack::for_submission(&submission, layout),
            job: self.jobs.get(&submission.job_id),
            recruiter: self.recruiters.get(&submission.recruiter_id),
            submission,
        })
    }

    pub fn recruiter_detail(&self, id: &RecruiterId) -> Result<RecruiterDetailView, DeskError> {
        let recruiter = self.recruiters.fetch(id)?;
        let submissions = self.submissions.snapshot();
        let jobs = self.jobs.snapshot();

        Ok(RecruiterDetailView {
            standing: RecruiterStanding::from_recruiter(&recruiter),
            activity: RecruiterActivity::collect(id, &submissions, &jobs),
            submissions: submissions
                .iter()
                .filter(|submission| &submission.recruiter_id == id)
                .cloned()
                .collect(),
            recruiter,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DeskError> {
    if value.trim().is_empty() {
        Err(DeskError::MissingField { field })
    } else {
        Ok(())
    }
}

fn missing_employer() -> StoreError {
    StoreError::NotFound {
        kind: EntityKind::Employer,
        id: "active".to_string(),
    }
}
