//! Candidate pipeline: the entity store, the stage model, status transitions,
//! and the metrics the dashboard renders from them.

pub mod desk;
pub mod domain;
mod fixtures;
pub mod metrics;
pub mod router;
pub mod stages;
pub mod store;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use desk::{DeskError, RecruitingDesk, SubmissionFilter, TransitionReport};
pub use domain::{
    Job, JobDraft, JobId, JobPatch, JobStatus, Message, MessageDraft, MessageId, MessageKind,
    Note, NoteKind, Recruiter, RecruiterId, Submission, SubmissionDraft, SubmissionId,
    SubmissionPatch, SubmissionStatus, TeamMember, TeamMemberId, TeamRole,
};
pub use metrics::views::{
    DashboardReport, JobDetailView, MessageInbox, RecruiterDetailView, SubmissionDetailView,
};
pub use router::pipeline_router;
pub use stages::{stage_index, PipelineStage, StageLayout, StageTrack};
pub use store::{EntityKind, EntityStore, StoreError};
pub use transitions::{TransitionError, TransitionOutcome};
