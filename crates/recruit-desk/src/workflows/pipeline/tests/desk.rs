use super::common::*;
use crate::config::DeskConfig;
use crate::workflows::pipeline::desk::{DeskError, RecruitingDesk, SubmissionFilter};
use crate::workflows::pipeline::domain::{
    EmployerPatch, JobDraft, JobId, JobPatch, MemberStatus, MessageDraft, MessageId, MessageKind,
    NoteKind, RecruiterId, SubmissionDraft, SubmissionId, SubmissionPatch, SubmissionStatus,
    TeamRole,
};
use crate::workflows::pipeline::stages::{PipelineStage, StageLayout};
use crate::workflows::pipeline::store::{EntityKind, StoreError};
use crate::workflows::pipeline::transitions::{TransitionError, TransitionOutcome};

fn job_draft(title: &str) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        department: "Engineering".to_string(),
        location: "Remote".to_string(),
        closing_date: today() + chrono::Duration::days(30),
        status: Default::default(),
        candidate_count: 0,
        description: String::new(),
        responsibilities: Vec::new(),
        requirements: Vec::new(),
        skills: Vec::new(),
        salary: None,
        employment_type: Default::default(),
        workplace_type: Default::default(),
        posted_date: None,
        hiring_manager: String::new(),
    }
}

#[test]
fn seeded_desk_loads_demo_dataset() {
    let desk = seeded_desk();
    assert_eq!(desk.jobs().len(), 6);
    assert_eq!(desk.submissions().len(), 14);
    assert_eq!(desk.recruiters().len(), 3);
    assert_eq!(desk.team().len(), 3);
    assert_eq!(desk.unread_count(), 3);
    assert_eq!(
        desk.employer().expect("employer seeded").name,
        "Tech Corp Inc."
    );
}

#[test]
fn create_job_assigns_id_and_posted_date() {
    let desk = RecruitingDesk::new(DeskConfig::default());
    let job = desk
        .create_job(job_draft("Platform Engineer"), today())
        .expect("title present");

    assert!(job.id.as_str().starts_with("job-"));
    assert_eq!(job.posted_date, today());
    assert_eq!(desk.jobs().fetch(&job.id).expect("stored"), job);
}

#[test]
fn create_job_requires_title() {
    let desk = RecruitingDesk::new(DeskConfig::default());
    match desk.create_job(job_draft("  "), today()) {
        Err(DeskError::MissingField { field: "title" }) => {}
        other => panic!("expected missing title, got {other:?}"),
    }
    assert!(desk.jobs().is_empty());
}

#[test]
fn update_and_delete_job_by_id() {
    let desk = seeded_desk();
    let id = JobId::new("3");
    let updated = desk
        .update_job(
            &id,
            JobPatch {
                candidate_count: Some(2),
                ..JobPatch::default()
            },
        )
        .expect("job exists");
    assert_eq!(updated.candidate_count, 2);
    assert_eq!(updated.title, "UX Designer");

    desk.delete_job(&id).expect("job exists");
    match desk.delete_job(&id) {
        Err(DeskError::Store(StoreError::NotFound {
            kind: EntityKind::Job,
            ..
        })) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn new_submissions_start_at_first_stage() {
    let desk = seeded_desk();
    let submission = desk
        .create_submission(
            SubmissionDraft {
                name: "Ada Park".to_string(),
                job_id: JobId::new("3"),
                recruiter_id: RecruiterId::new("2"),
                submission_date: None,
                contact: Default::default(),
                education: Vec::new(),
                experience: Vec::new(),
                skills: Vec::new(),
            },
            today(),
        )
        .expect("name present");

    assert_eq!(submission.status, SubmissionStatus::Submitted);
    assert_eq!(submission.current_stage, PipelineStage::Submitted);
    assert_eq!(desk.submissions().len(), 15);
    assert_eq!(
        desk.jobs().fetch(&JobId::new("3")).unwrap().candidate_count,
        0,
        "stored candidate counts are not cascaded"
    );
}

#[test]
fn filter_narrows_submission_listing() {
    let desk = seeded_desk();
    let filter = SubmissionFilter {
        status: Some(SubmissionStatus::InProgress),
        job_id: Some(JobId::new("1")),
        recruiter_id: None,
    };
    let names: Vec<String> = desk
        .list_submissions(&filter)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["John Smith", "David Miller"]);
}

#[test]
fn advance_writes_back_to_store() {
    let desk = seeded_desk();
    let id = SubmissionId::new("2");
    let report = desk.advance_submission(&id).expect("submission exists");

    assert!(report.outcome.changed());
    let stored = desk.submissions().fetch(&id).unwrap();
    assert_eq!(stored.status, SubmissionStatus::InProgress);
    assert_eq!(stored.current_stage, PipelineStage::Screening);
}

#[test]
fn advance_on_hired_submission_is_unchanged() {
    let desk = seeded_desk();
    let id = SubmissionId::new("3");
    let report = desk.advance_submission(&id).expect("submission exists");

    assert_eq!(
        report.outcome,
        TransitionOutcome::Unchanged {
            status: SubmissionStatus::Hired
        }
    );
    assert_eq!(
        desk.submissions().fetch(&id).unwrap().status,
        SubmissionStatus::Hired
    );
}

#[test]
fn reject_with_blank_reason_changes_nothing() {
    let desk = seeded_desk();
    let id = SubmissionId::new("1");
    let before = desk.submissions().fetch(&id).unwrap();

    match desk.reject_submission(&id, "", now()) {
        Err(DeskError::Transition(TransitionError::BlankReason)) => {}
        other => panic!("expected blank reason error, got {other:?}"),
    }
    assert_eq!(desk.submissions().fetch(&id).unwrap(), before);
}

#[test]
fn reject_appends_feedback_note_with_configured_author() {
    let desk = RecruitingDesk::seeded(
        DeskConfig {
            rejection_author: "Talent Partner".to_string(),
        },
        now(),
    );
    let id = SubmissionId::new("1");
    desk.reject_submission(&id, "too junior", now())
        .expect("submission exists");

    let stored = desk.submissions().fetch(&id).unwrap();
    assert_eq!(stored.status, SubmissionStatus::Rejected);
    assert_eq!(stored.current_stage, PipelineStage::Interview);
    assert_eq!(stored.notes.len(), 1);
    assert_eq!(stored.notes[0].kind, NoteKind::Feedback);
    assert_eq!(stored.notes[0].content, "too junior");
    assert_eq!(stored.notes[0].created_by, "Talent Partner");
}

#[test]
fn reject_unknown_submission_is_not_found() {
    let desk = seeded_desk();
    let err = desk
        .reject_submission(&SubmissionId::new("404"), "reason", now())
        .unwrap_err();
    assert_eq!(err.to_string(), "Candidate not found");
}

#[test]
fn patched_status_keeps_stage_consistent() {
    let desk = seeded_desk();
    let id = SubmissionId::new("1");
    let updated = desk
        .update_submission(
            &id,
            SubmissionPatch {
                status: Some(SubmissionStatus::Hired),
                ..SubmissionPatch::default()
            },
        )
        .expect("submission exists");
    assert_eq!(updated.current_stage, PipelineStage::Accepted);
}

#[test]
fn submission_detail_resolves_references() {
    let desk = seeded_desk();
    let view = desk
        .submission_detail(&SubmissionId::new("6"), StageLayout::Detailed)
        .expect("submission exists");
    assert_eq!(
        view.job.as_ref().map(|j| j.title.as_str()),
        Some("Product Manager")
    );
    assert_eq!(view.track.current_label, "Technical");

    desk.delete_job(&JobId::new("2")).unwrap();
    let view = desk
        .submission_detail(&SubmissionId::new("6"), StageLayout::Detailed)
        .expect("submission exists");
    assert!(
        view.job.is_none(),
        "dangling job reference resolves to nothing"
    );
}

#[test]
fn job_detail_compares_stored_and_derived_counts() {
    let desk = seeded_desk();
    let view = desk.job_detail(&JobId::new("1"), today()).expect("job exists");
    assert_eq!(view.job.candidate_count, 5);
    assert_eq!(view.derived_candidate_count, 5);
    assert_eq!(view.pipeline.count(SubmissionStatus::InProgress), 2);
    assert_eq!(view.deadline.days_remaining, 10);
}

#[test]
fn recruiter_detail_lists_owned_submissions() {
    let desk = seeded_desk();
    let view = desk
        .recruiter_detail(&RecruiterId::new("3"))
        .expect("recruiter exists");
    assert_eq!(view.standing.hire_rate, 0);
    assert_eq!(view.submissions.len(), 4);
    assert_eq!(view.activity.derived_submission_count, 4);
}

#[test]
fn messages_prepend_and_track_read_state() {
    let desk = seeded_desk();
    let message = desk.add_message(
        MessageDraft {
            title: "Offer accepted".to_string(),
            content: "Linda Thomas accepted".to_string(),
            kind: MessageKind::Success,
        },
        now(),
    );

    let inbox = desk.inbox(None);
    assert_eq!(inbox.messages[0].id, message.id);
    assert_eq!(inbox.unread_count, 4);

    desk.mark_message_read(&MessageId::new("1")).unwrap();
    assert_eq!(desk.unread_count(), 3);

    desk.mark_all_messages_read();
    assert_eq!(desk.unread_count(), 0);

    desk.delete_message(&message.id).unwrap();
    assert_eq!(desk.inbox(None).messages.len(), 3);
}

#[test]
fn invite_member_derives_name_and_pending_status() {
    let desk = seeded_desk();
    let member = desk
        .invite_member("casey@example.com", TeamRole::Member, now())
        .expect("email present");

    assert_eq!(member.name, "casey");
    assert_eq!(member.status, MemberStatus::Pending);
    assert_eq!(member.joined_at, now());
    assert_eq!(desk.team().len(), 4);

    desk.remove_member(&member.id).unwrap();
    assert_eq!(desk.team().len(), 3);

    assert!(matches!(
        desk.invite_member("   ", TeamRole::Admin, now()),
        Err(DeskError::MissingField { field: "email" })
    ));
}

#[test]
fn employer_profile_is_editable() {
    let desk = seeded_desk();
    let employer = desk
        .update_employer(EmployerPatch {
            size: Some("5000+".to_string()),
            ..EmployerPatch::default()
        })
        .expect("employer seeded");
    assert_eq!(employer.size, "5000+");
    assert_eq!(employer.industry, "Technology");

    let empty = RecruitingDesk::new(DeskConfig::default());
    assert!(empty.employer().is_err());
}

#[test]
fn inbox_search_matches_title_or_content_ignoring_case() {
    let desk = seeded_desk();
    desk.mark_message_read(&MessageId::new("1")).unwrap();

    let inbox = desk.inbox(Some("POSITION"));
    let ids: Vec<&str> = inbox.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(inbox.unread_count, 1);

    let inbox = desk.inbox(Some("zzzz-no-match"));
    assert!(inbox.messages.is_empty());
    assert_eq!(inbox.unread_count, 0);

    assert_eq!(desk.inbox(Some("   ")).messages.len(), 3);
}

#[test]
fn failed_rejections_do_not_consume_note_ids() {
    let desk = seeded_desk();
    assert!(desk
        .reject_submission(&SubmissionId::new("1"), "", now())
        .is_err());
    assert!(desk
        .reject_submission(&SubmissionId::new("404"), "reason", now())
        .is_err());
    let closed = desk
        .reject_submission(&SubmissionId::new("3"), "reason", now())
        .expect("submission exists");
    assert!(!closed.outcome.changed());

    let report = desk
        .reject_submission(&SubmissionId::new("1"), "too junior", now())
        .expect("submission exists");
    assert_eq!(report.submission.notes[0].id.as_str(), "note-000001");
}
