//! Mapping between a submission's coarse status and its position on the
//! interview pipeline.
//!
//! Two layouts exist: the detailed six-stage track shown on the candidate
//! page and a compact five-stage track used in list views, where the
//! technical round folds into the interview stage. Submissions record the
//! detailed stage they last reached, so `in-progress` and `rejected`
//! candidates resolve to a concrete stage instead of a guessed one.

use serde::{Deserialize, Serialize};

use super::domain::{Submission, SubmissionStatus};
use super::metrics::percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Submitted,
    Screening,
    Interview,
    Technical,
    Offer,
    Accepted,
}

impl PipelineStage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Submitted,
            Self::Screening,
            Self::Interview,
            Self::Technical,
            Self::Offer,
            Self::Accepted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Technical => "Technical",
            Self::Offer => "Offer",
            Self::Accepted => "Accepted",
        }
    }

    /// Reconcile a recorded stage with a status written from outside the
    /// transition handler, e.g. a direct edit.
    pub fn settle(status: SubmissionStatus, recorded: Self) -> Self {
        let layout = StageLayout::Detailed;
        layout.stage_at(stage_index(status, recorded, layout))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageLayout {
    #[default]
    Detailed,
    Compact,
}

const DETAILED: [PipelineStage; 6] = PipelineStage::ordered();
const COMPACT: [PipelineStage; 5] = [
    PipelineStage::Submitted,
    PipelineStage::Screening,
    PipelineStage::Interview,
    PipelineStage::Offer,
    PipelineStage::Accepted,
];

impl StageLayout {
    pub fn stages(self) -> &'static [PipelineStage] {
        match self {
            Self::Detailed => &DETAILED,
            Self::Compact => &COMPACT,
        }
    }

    pub fn last_index(self) -> usize {
        self.stages().len() - 1
    }

    /// Position of `stage` on this layout. Stages the layout omits collapse
    /// onto the closest earlier stage.
    pub fn position(self, stage: PipelineStage) -> usize {
        let stages = self.stages();
        stages
            .iter()
            .rposition(|candidate| *candidate <= stage)
            .unwrap_or(0)
    }

    /// Stage at `index`, saturating at the final stage.
    pub fn stage_at(self, index: usize) -> PipelineStage {
        let stages = self.stages();
        stages[index.min(stages.len() - 1)]
    }
}

/// Pipeline position for a status: `submitted` is the first stage, `hired`
/// the last, open submissions sit on their recorded stage clamped into the
/// middle of the track, and rejected ones stay where they were rejected.
pub fn stage_index(
    status: SubmissionStatus,
    recorded: PipelineStage,
    layout: StageLayout,
) -> usize {
    let last = layout.last_index();
    match status {
        SubmissionStatus::Submitted => 0,
        SubmissionStatus::Hired => last,
        SubmissionStatus::InProgress => layout.position(recorded).clamp(1, last - 1),
        SubmissionStatus::Rejected => layout.position(recorded).min(last - 1),
    }
}

/// Coarse status implied by reaching `index` on the layout.
pub fn status_for_index(index: usize, layout: StageLayout) -> SubmissionStatus {
    if index == 0 {
        SubmissionStatus::Submitted
    } else if index >= layout.last_index() {
        SubmissionStatus::Hired
    } else {
        SubmissionStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerState {
    Completed,
    Current,
    Rejected,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageMarker {
    pub stage: PipelineStage,
    pub label: &'static str,
    pub state: MarkerState,
}

/// Render-ready progress track for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct StageTrack {
    pub layout: StageLayout,
    pub status: SubmissionStatus,
    pub current_index: usize,
    pub current_label: &'static str,
    pub progress_pct: u32,
    /// Advance and reject are offered only while the submission is open.
    pub actionable: bool,
    pub markers: Vec<StageMarker>,
}

impl StageTrack {
    pub fn for_submission(submission: &Submission, layout: StageLayout) -> Self {
        let current_index = stage_index(submission.status, submission.current_stage, layout);
        let rejected = submission.status == SubmissionStatus::Rejected;

        let markers = layout
            .stages()
            .iter()
            .enumerate()
            .map(|(index, stage)| {
                let state = if rejected && index == current_index {
                    MarkerState::Rejected
                } else if index < current_index {
                    MarkerState::Completed
                } else if index == current_index {
                    MarkerState::Current
                } else {
                    MarkerState::Upcoming
                };
                StageMarker {
                    stage: *stage,
                    label: stage.label(),
                    state,
                }
            })
            .collect();

        Self {
            layout,
            status: submission.status,
            current_index,
            current_label: layout.stage_at(current_index).label(),
            progress_pct: percentage(current_index, layout.last_index()),
            actionable: !submission.status.is_terminal(),
            markers,
        }
    }
}
