use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::stages::PipelineStage;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier wrapper for posted jobs.
    JobId
);
entity_id!(
    /// Identifier wrapper for candidate submissions.
    SubmissionId
);
entity_id!(
    /// Identifier wrapper for external recruiting agencies.
    RecruiterId
);
entity_id!(NoteId);
entity_id!(MessageId);
entity_id!(TeamMemberId);
entity_id!(EmployerId);

/// Lifecycle of a posted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Filled,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Filled => "Filled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkplaceType {
    #[default]
    Remote,
    Hybrid,
    OnSite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// Open requisition as shown on the jobs board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub closing_date: NaiveDate,
    pub status: JobStatus,
    /// Stored count as reported by the hiring team; never reconciled with submissions.
    pub candidate_count: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub workplace_type: WorkplaceType,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub hiring_manager: String,
}

/// Coarse status tracked for every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    Submitted,
    InProgress,
    Hired,
    Rejected,
}

impl SubmissionStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Submitted, Self::InProgress, Self::Hired, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InProgress => "In Progress",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InProgress => "in-progress",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CandidateContact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Interview,
    Feedback,
    General,
}

/// Append-only remark attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub kind: NoteKind,
}

/// A candidate's application to one job through one recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub job_id: JobId,
    pub recruiter_id: RecruiterId,
    pub status: SubmissionStatus,
    pub submission_date: NaiveDate,
    #[serde(default)]
    pub contact: CandidateContact,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Last stage the candidate reached on the detailed pipeline.
    #[serde(default)]
    pub current_stage: PipelineStage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterFees {
    pub placement: u32,
    pub percentage: u8,
    pub currency: String,
}

/// Performance counters for one reporting window ("Last 30 days", "Year to date").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceWindow {
    pub window: String,
    pub submissions: u32,
    pub interviews: u32,
    pub hires: u32,
}

/// External recruiting agency submitting candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recruiter {
    pub id: RecruiterId,
    pub name: String,
    pub company: String,
    pub submission_count: u32,
    pub hire_count: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<RecruiterFees>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub performance: Vec<PerformanceWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Inbox notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub kind: MessageKind,
}

impl Message {
    /// Whether the title or content contains `term`, which must already be lowercase.
    pub fn mentions(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.content.to_lowercase().contains(term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Owner,
    Admin,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Pending,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub email: String,
    pub name: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
}

/// Hiring company profile edited from the general settings tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub id: EmployerId,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub website: String,
}

/// Fields accepted when posting a new job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub closing_date: NaiveDate,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub candidate_count: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub workplace_type: WorkplaceType,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
    #[serde(default)]
    pub hiring_manager: String,
}

impl JobDraft {
    pub fn into_job(self, id: JobId, today: NaiveDate) -> Job {
        Job {
            id,
            title: self.title,
            department: self.department,
            location: self.location,
            closing_date: self.closing_date,
            status: self.status,
            candidate_count: self.candidate_count,
            description: self.description,
            responsibilities: self.responsibilities,
            requirements: self.requirements,
            skills: self.skills,
            salary: self.salary,
            employment_type: self.employment_type,
            workplace_type: self.workplace_type,
            posted_date: self.posted_date.unwrap_or(today),
            hiring_manager: self.hiring_manager,
        }
    }
}

/// Partial update for a job; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub closing_date: Option<NaiveDate>,
    pub status: Option<JobStatus>,
    pub candidate_count: Option<u32>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<Skill>>,
    /// `null` clears the range; an absent field leaves it untouched.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<SalaryRange>>,
    pub employment_type: Option<EmploymentType>,
    pub workplace_type: Option<WorkplaceType>,
    pub hiring_manager: Option<String>,
}

impl JobPatch {
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(department) = self.department {
            job.department = department;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(closing_date) = self.closing_date {
            job.closing_date = closing_date;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(count) = self.candidate_count {
            job.candidate_count = count;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(responsibilities) = self.responsibilities {
            job.responsibilities = responsibilities;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(skills) = self.skills {
            job.skills = skills;
        }
        if let Some(salary) = self.salary {
            job.salary = salary;
        }
        if let Some(employment_type) = self.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(workplace_type) = self.workplace_type {
            job.workplace_type = workplace_type;
        }
        if let Some(manager) = self.hiring_manager {
            job.hiring_manager = manager;
        }
    }
}

/// Distinguishes an explicit `null` from a missing field in patch bodies.
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Fields accepted when a recruiter submits a new candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub job_id: JobId,
    pub recruiter_id: RecruiterId,
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub contact: CandidateContact,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl SubmissionDraft {
    pub fn into_submission(self, id: SubmissionId, today: NaiveDate) -> Submission {
        Submission {
            id,
            name: self.name,
            job_id: self.job_id,
            recruiter_id: self.recruiter_id,
            status: SubmissionStatus::Submitted,
            submission_date: self.submission_date.unwrap_or(today),
            contact: self.contact,
            education: self.education,
            experience: self.experience,
            skills: self.skills,
            notes: Vec::new(),
            current_stage: PipelineStage::Submitted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPatch {
    pub name: Option<String>,
    pub job_id: Option<JobId>,
    pub recruiter_id: Option<RecruiterId>,
    pub status: Option<SubmissionStatus>,
    pub submission_date: Option<NaiveDate>,
    pub contact: Option<CandidateContact>,
    pub skills: Option<Vec<Skill>>,
}

impl SubmissionPatch {
    pub fn apply(self, submission: &mut Submission) {
        if let Some(name) = self.name {
            submission.name = name;
        }
        if let Some(job_id) = self.job_id {
            submission.job_id = job_id;
        }
        if let Some(recruiter_id) = self.recruiter_id {
            submission.recruiter_id = recruiter_id;
        }
        if let Some(status) = self.status {
            submission.status = status;
            submission.current_stage = PipelineStage::settle(status, submission.current_stage);
        }
        if let Some(date) = self.submission_date {
            submission.submission_date = date;
        }
        if let Some(contact) = self.contact {
            submission.contact = contact;
        }
        if let Some(skills) = self.skills {
            submission.skills = skills;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterDraft {
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub submission_count: u32,
    #[serde(default)]
    pub hire_count: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub fees: Option<RecruiterFees>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl RecruiterDraft {
    pub fn into_recruiter(self, id: RecruiterId) -> Recruiter {
        Recruiter {
            id,
            name: self.name,
            company: self.company,
            submission_count: self.submission_count,
            hire_count: self.hire_count,
            email: self.email,
            phone: self.phone,
            location: self.location,
            website: self.website,
            fees: self.fees,
            specialties: self.specialties,
            performance: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub submission_count: Option<u32>,
    pub hire_count: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub fees: Option<RecruiterFees>,
    pub specialties: Option<Vec<String>>,
}

impl RecruiterPatch {
    pub fn apply(self, recruiter: &mut Recruiter) {
        if let Some(name) = self.name {
            recruiter.name = name;
        }
        if let Some(company) = self.company {
            recruiter.company = company;
        }
        if let Some(count) = self.submission_count {
            recruiter.submission_count = count;
        }
        if let Some(count) = self.hire_count {
            recruiter.hire_count = count;
        }
        if let Some(email) = self.email {
            recruiter.email = email;
        }
        if let Some(phone) = self.phone {
            recruiter.phone = phone;
        }
        if let Some(location) = self.location {
            recruiter.location = location;
        }
        if self.fees.is_some() {
            recruiter.fees = self.fees;
        }
        if let Some(specialties) = self.specialties {
            recruiter.specialties = specialties;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub title: String,
    pub content: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<TeamRole>,
    pub status: Option<MemberStatus>,
}

impl TeamMemberPatch {
    pub fn apply(self, member: &mut TeamMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl EmployerPatch {
    pub fn apply(self, employer: &mut Employer) {
        if let Some(name) = self.name {
            employer.name = name;
        }
        if let Some(industry) = self.industry {
            employer.industry = industry;
        }
        if let Some(size) = self.size {
            employer.size = size;
        }
        if let Some(location) = self.location {
            employer.location = location;
        }
        if let Some(website) = self.website {
            employer.website = website;
        }
    }
}
