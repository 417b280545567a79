use super::common::*;
use crate::workflows::pipeline::domain::SubmissionStatus;
use crate::workflows::pipeline::stages::{
    stage_index, MarkerState, PipelineStage, StageLayout, StageTrack,
};

#[test]
fn every_status_maps_inside_the_track() {
    for layout in [StageLayout::Detailed, StageLayout::Compact] {
        let last = layout.last_index();
        for status in SubmissionStatus::ordered() {
            for recorded in PipelineStage::ordered() {
                let index = stage_index(status, recorded, layout);
                assert!(index <= last, "{status:?}/{recorded:?} escaped {layout:?}");
            }
        }
    }
}

#[test]
fn submitted_and_hired_pin_to_track_ends() {
    for recorded in PipelineStage::ordered() {
        assert_eq!(
            stage_index(SubmissionStatus::Submitted, recorded, StageLayout::Detailed),
            0
        );
        assert_eq!(
            stage_index(SubmissionStatus::Hired, recorded, StageLayout::Detailed),
            5
        );
        assert_eq!(
            stage_index(SubmissionStatus::Hired, recorded, StageLayout::Compact),
            4
        );
    }
}

#[test]
fn open_submissions_use_recorded_stage() {
    assert_eq!(
        stage_index(
            SubmissionStatus::InProgress,
            PipelineStage::Technical,
            StageLayout::Detailed
        ),
        3
    );
    assert_eq!(
        stage_index(
            SubmissionStatus::InProgress,
            PipelineStage::Technical,
            StageLayout::Compact
        ),
        2
    );
    assert_eq!(
        stage_index(
            SubmissionStatus::InProgress,
            PipelineStage::Submitted,
            StageLayout::Detailed
        ),
        1,
        "open submissions never sit on the first stage"
    );
}

#[test]
fn rejected_submissions_stay_where_they_stopped() {
    assert_eq!(
        stage_index(
            SubmissionStatus::Rejected,
            PipelineStage::Interview,
            StageLayout::Detailed
        ),
        2
    );
    assert_eq!(
        stage_index(
            SubmissionStatus::Rejected,
            PipelineStage::Accepted,
            StageLayout::Detailed
        ),
        4
    );
}

#[test]
fn track_marks_rejected_stage() {
    let candidate = submission("r", SubmissionStatus::Rejected, PipelineStage::Interview);
    let track = StageTrack::for_submission(&candidate, StageLayout::Detailed);

    assert_eq!(track.current_index, 2);
    assert!(!track.actionable);
    let states: Vec<MarkerState> = track.markers.iter().map(|m| m.state).collect();
    assert_eq!(
        states,
        vec![
            MarkerState::Completed,
            MarkerState::Completed,
            MarkerState::Rejected,
            MarkerState::Upcoming,
            MarkerState::Upcoming,
            MarkerState::Upcoming,
        ]
    );
}

#[test]
fn track_reports_progress_percentage() {
    let hired = submission("h", SubmissionStatus::Hired, PipelineStage::Accepted);
    assert_eq!(
        StageTrack::for_submission(&hired, StageLayout::Detailed).progress_pct,
        100
    );

    let open = submission("o", SubmissionStatus::InProgress, PipelineStage::Interview);
    let track = StageTrack::for_submission(&open, StageLayout::Compact);
    assert_eq!(track.current_label, "Interview");
    assert_eq!(track.progress_pct, 50);
    assert!(track.actionable);
}
