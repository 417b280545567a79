use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::desk::{DeskError, RecruitingDesk, SubmissionFilter, TransitionReport};
use super::domain::{
    EmployerPatch, JobDraft, JobId, JobPatch, MessageDraft, MessageId, RecruiterDraft,
    RecruiterId, RecruiterPatch, SubmissionDraft, SubmissionId, SubmissionPatch, TeamMemberId,
    TeamMemberPatch, TeamRole,
};
use super::stages::StageLayout;
use super::store::StoreError;
use super::transitions::TransitionError;

type SharedDesk = Arc<RecruitingDesk>;

/// Router builder exposing the desk's resources under `/api/v1`.
pub fn pipeline_router(desk: SharedDesk) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/jobs", get(list_jobs).post(create_job))
        .route(
            "/api/v1/jobs/:job_id",
            get(job_handler).patch(update_job).delete(delete_job),
        )
        .route(
            "/api/v1/submissions",
            get(list_submissions).post(create_submission),
        )
        .route(
            "/api/v1/submissions/:submission_id",
            get(submission_handler)
                .patch(update_submission)
                .delete(delete_submission),
        )
        .route(
            "/api/v1/submissions/:submission_id/advance",
            post(advance_handler),
        )
        .route(
            "/api/v1/submissions/:submission_id/reject",
            post(reject_handler),
        )
        .route(
            "/api/v1/recruiters",
            get(list_recruiters).post(create_recruiter),
        )
        .route(
            "/api/v1/recruiters/:recruiter_id",
            get(recruiter_handler)
                .patch(update_recruiter)
                .delete(delete_recruiter),
        )
        .route("/api/v1/messages", get(inbox_handler).post(add_message))
        .route("/api/v1/messages/read-all", post(mark_all_read))
        .route(
            "/api/v1/messages/:message_id",
            get(message_handler).delete(delete_message),
        )
        .route("/api/v1/messages/:message_id/read", post(mark_read))
        .route("/api/v1/team", get(list_team).post(invite_member))
        .route(
            "/api/v1/team/:member_id",
            axum::routing::patch(update_member).delete(remove_member),
        )
        .route(
            "/api/v1/settings/general",
            get(employer_handler).patch(update_employer),
        )
        .with_state(desk)
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let status = match &self {
            DeskError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            DeskError::Transition(TransitionError::BlankReason)
            | DeskError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DateQuery {
    pub(crate) today: Option<NaiveDate>,
}

impl DateQuery {
    fn resolve(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LayoutQuery {
    #[serde(default)]
    pub(crate) layout: StageLayout,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InboxQuery {
    pub(crate) search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RejectRequest {
    #[serde(default)]
    pub(crate) reason: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InviteRequest {
    pub(crate) email: String,
    pub(crate) role: TeamRole,
}

pub(crate) async fn dashboard_handler(
    State(desk): State<SharedDesk>,
    Query(query): Query<DateQuery>,
) -> Response {
    Json(desk.dashboard(query.resolve())).into_response()
}

pub(crate) async fn list_jobs(State(desk): State<SharedDesk>) -> Response {
    Json(desk.jobs().snapshot().as_ref().clone()).into_response()
}

pub(crate) async fn create_job(
    State(desk): State<SharedDesk>,
    Json(draft): Json<JobDraft>,
) -> Result<Response, DeskError> {
    let job = desk.create_job(draft, Local::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(job)).into_response())
}

pub(crate) async fn job_handler(
    State(desk): State<SharedDesk>,
    Path(job_id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Response, DeskError> {
    let view = desk.job_detail(&JobId(job_id), query.resolve())?;
    Ok(Json(view).into_response())
}

pub(crate) async fn update_job(
    State(desk): State<SharedDesk>,
    Path(job_id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.update_job(&JobId(job_id), patch)?).into_response())
}

pub(crate) async fn delete_job(
    State(desk): State<SharedDesk>,
    Path(job_id): Path<String>,
) -> Result<StatusCode, DeskError> {
    desk.delete_job(&JobId(job_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list_submissions(
    State(desk): State<SharedDesk>,
    Query(filter): Query<SubmissionFilter>,
) -> Response {
    Json(desk.list_submissions(&filter)).into_response()
}

pub(crate) async fn create_submission(
    State(desk): State<SharedDesk>,
    Json(draft): Json<SubmissionDraft>,
) -> Result<Response, DeskError> {
    let submission = desk.create_submission(draft, Local::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(submission)).into_response())
}

pub(crate) async fn submission_handler(
    State(desk): State<SharedDesk>,
    Path(submission_id): Path<String>,
    Query(query): Query<LayoutQuery>,
) -> Result<Response, DeskError> {
    let view = desk.submission_detail(&SubmissionId(submission_id), query.layout)?;
    Ok(Json(view).into_response())
}

pub(crate) async fn update_submission(
    State(desk): State<SharedDesk>,
    Path(submission_id): Path<String>,
    Json(patch): Json<SubmissionPatch>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.update_submission(&SubmissionId(submission_id), patch)?).into_response())
}

pub(crate) async fn delete_submission(
    State(desk): State<SharedDesk>,
    Path(submission_id): Path<String>,
) -> Result<StatusCode, DeskError> {
    desk.delete_submission(&SubmissionId(submission_id))?;
    Ok(StatusCode::NO_CONTENT)
}

fn transition_response(report: TransitionReport) -> Response {
    Json(json!({
        "outcome": report.outcome,
        "submission": report.submission,
    }))
    .into_response()
}

pub(crate) async fn advance_handler(
    State(desk): State<SharedDesk>,
    Path(submission_id): Path<String>,
) -> Result<Response, DeskError> {
    let report = desk.advance_submission(&SubmissionId(submission_id))?;
    Ok(transition_response(report))
}

pub(crate) async fn reject_handler(
    State(desk): State<SharedDesk>,
    Path(submission_id): Path<String>,
    Json(request): Json<RejectRequest>,
) -> Result<Response, DeskError> {
    let report =
        desk.reject_submission(&SubmissionId(submission_id), &request.reason, Utc::now())?;
    Ok(transition_response(report))
}

pub(crate) async fn list_recruiters(State(desk): State<SharedDesk>) -> Response {
    let recruiters = desk.recruiters().snapshot();
    Json(super::metrics::leaderboard(&recruiters)).into_response()
}

pub(crate) async fn create_recruiter(
    State(desk): State<SharedDesk>,
    Json(draft): Json<RecruiterDraft>,
) -> Result<Response, DeskError> {
    let recruiter = desk.create_recruiter(draft)?;
    Ok((StatusCode::CREATED, Json(recruiter)).into_response())
}

pub(crate) async fn recruiter_handler(
    State(desk): State<SharedDesk>,
    Path(recruiter_id): Path<String>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.recruiter_detail(&RecruiterId(recruiter_id))?).into_response())
}

pub(crate) async fn update_recruiter(
    State(desk): State<SharedDesk>,
    Path(recruiter_id): Path<String>,
    Json(patch): Json<RecruiterPatch>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.update_recruiter(&RecruiterId(recruiter_id), patch)?).into_response())
}

pub(crate) async fn delete_recruiter(
    State(desk): State<SharedDesk>,
    Path(recruiter_id): Path<String>,
) -> Result<StatusCode, DeskError> {
    desk.delete_recruiter(&RecruiterId(recruiter_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn inbox_handler(
    State(desk): State<SharedDesk>,
    Query(query): Query<InboxQuery>,
) -> Response {
    Json(desk.inbox(query.search.as_deref())).into_response()
}

pub(crate) async fn add_message(
    State(desk): State<SharedDesk>,
    Json(draft): Json<MessageDraft>,
) -> Response {
    let message = desk.add_message(draft, Utc::now());
    (StatusCode::CREATED, Json(message)).into_response()
}

pub(crate) async fn message_handler(
    State(desk): State<SharedDesk>,
    Path(message_id): Path<String>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.messages().fetch(&MessageId(message_id))?).into_response())
}

pub(crate) async fn mark_read(
    State(desk): State<SharedDesk>,
    Path(message_id): Path<String>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.mark_message_read(&MessageId(message_id))?).into_response())
}

pub(crate) async fn mark_all_read(State(desk): State<SharedDesk>) -> Response {
    desk.mark_all_messages_read();
    Json(json!({ "unread_count": desk.unread_count() })).into_response()
}

pub(crate) async fn delete_message(
    State(desk): State<SharedDesk>,
    Path(message_id): Path<String>,
) -> Result<StatusCode, DeskError> {
    desk.delete_message(&MessageId(message_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list_team(State(desk): State<SharedDesk>) -> Response {
    Json(desk.team().snapshot().as_ref().clone()).into_response()
}

pub(crate) async fn invite_member(
    State(desk): State<SharedDesk>,
    Json(request): Json<InviteRequest>,
) -> Result<Response, DeskError> {
    let member = desk.invite_member(&request.email, request.role, Utc::now())?;
    Ok((StatusCode::CREATED, Json(member)).into_response())
}

pub(crate) async fn update_member(
    State(desk): State<SharedDesk>,
    Path(member_id): Path<String>,
    Json(patch): Json<TeamMemberPatch>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.update_member(&TeamMemberId(member_id), patch)?).into_response())
}

pub(crate) async fn remove_member(
    State(desk): State<SharedDesk>,
    Path(member_id): Path<String>,
) -> Result<StatusCode, DeskError> {
    desk.remove_member(&TeamMemberId(member_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn employer_handler(
    State(desk): State<SharedDesk>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.employer()?).into_response())
}

pub(crate) async fn update_employer(
    State(desk): State<SharedDesk>,
    Json(patch): Json<EmployerPatch>,
) -> Result<Response, DeskError> {
    Ok(Json(desk.update_employer(patch)?).into_response())
}
