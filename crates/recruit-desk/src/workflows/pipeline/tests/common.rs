use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::config::DeskConfig;
use crate::workflows::pipeline::desk::RecruitingDesk;
use crate::workflows::pipeline::domain::{
    JobId, Recruiter, RecruiterId, Submission, SubmissionId, SubmissionStatus,
};
use crate::workflows::pipeline::router::pipeline_router;
use crate::workflows::pipeline::stages::PipelineStage;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 5, 12, 0, 0).unwrap()
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 5).expect("valid date")
}

pub(super) fn seeded_desk() -> RecruitingDesk {
    RecruitingDesk::seeded(DeskConfig::default(), now())
}

pub(super) fn seeded_router() -> (axum::Router, Arc<RecruitingDesk>) {
    let desk = Arc::new(seeded_desk());
    (pipeline_router(desk.clone()), desk)
}

pub(super) fn submission(id: &str, status: SubmissionStatus, stage: PipelineStage) -> Submission {
    Submission {
        id: SubmissionId::new(id),
        name: format!("Candidate {id}"),
        job_id: JobId::new("1"),
        recruiter_id: RecruiterId::new("1"),
        status,
        submission_date: today(),
        contact: Default::default(),
        education: Vec::new(),
        experience: Vec::new(),
        skills: Vec::new(),
        notes: Vec::new(),
        current_stage: stage,
    }
}

pub(super) fn recruiter(id: &str, submission_count: u32, hire_count: u32) -> Recruiter {
    Recruiter {
        id: RecruiterId::new(id),
        name: format!("Agency {id}"),
        company: format!("Agency {id}"),
        submission_count,
        hire_count,
        email: String::new(),
        phone: String::new(),
        location: String::new(),
        website: None,
        fees: None,
        specialties: Vec::new(),
        performance: Vec::new(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
