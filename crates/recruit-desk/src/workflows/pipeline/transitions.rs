use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Note, NoteId, NoteKind, Submission, SubmissionStatus};
use super::stages::{stage_index, status_for_index, PipelineStage, StageLayout};

/// Result of applying an advance or reject action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionOutcome {
    Advanced {
        from: PipelineStage,
        to: PipelineStage,
        status: SubmissionStatus,
    },
    Rejected {
        at: PipelineStage,
        note_id: NoteId,
    },
    /// The submission was already hired or rejected.
    Unchanged { status: SubmissionStatus },
}

impl TransitionOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("a rejection reason is required")]
    BlankReason,
}

/// Identity and time stamped onto the feedback note written by a rejection.
#[derive(Debug, Clone)]
pub struct NoteStamp {
    pub id: NoteId,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

/// Move an open submission one stage forward on the detailed track.
pub fn advance(submission: &mut Submission) -> TransitionOutcome {
    if submission.status.is_terminal() {
        return TransitionOutcome::Unchanged {
            status: submission.status,
        };
    }

    let layout = StageLayout::Detailed;
    let current = stage_index(submission.status, submission.current_stage, layout);
    let from = layout.stage_at(current);
    let next = current + 1;

    submission.status = status_for_index(next, layout);
    submission.current_stage = layout.stage_at(next);

    TransitionOutcome::Advanced {
        from,
        to: submission.current_stage,
        status: submission.status,
    }
}

/// Reject an open submission at its current stage and record the reason as
/// feedback. Blank reasons leave the submission untouched. `stamp` is only
/// called once a note is actually written.
pub fn reject<F>(
    submission: &mut Submission,
    reason: &str,
    stamp: F,
) -> Result<TransitionOutcome, TransitionError>
where
    F: FnOnce() -> NoteStamp,
{
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(TransitionError::BlankReason);
    }

    if submission.status.is_terminal() {
        return Ok(TransitionOutcome::Unchanged {
            status: submission.status,
        });
    }

    let layout = StageLayout::Detailed;
    let at = layout.stage_at(stage_index(
        submission.status,
        submission.current_stage,
        layout,
    ));

    let stamp = stamp();
    submission.status = SubmissionStatus::Rejected;
    submission.current_stage = at;
    submission.notes.push(Note {
        id: stamp.id.clone(),
        content: reason.to_string(),
        created_at: stamp.created_at,
        created_by: stamp.author,
        kind: NoteKind::Feedback,
    });

    Ok(TransitionOutcome::Rejected {
        at,
        note_id: stamp.id,
    })
}
