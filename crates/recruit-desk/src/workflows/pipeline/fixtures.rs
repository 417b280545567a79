//! Demo dataset loaded into a freshly seeded desk.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::domain::{
    CandidateContact, Education, Employer, EmployerId, EmploymentType, Experience, Job, JobId,
    JobStatus, MemberStatus, Message, MessageId, MessageKind, PerformanceWindow, Recruiter,
    RecruiterFees, RecruiterId, SalaryRange, Skill, SkillLevel, Submission, SubmissionId,
    SubmissionStatus, TeamMember, TeamMemberId, TeamRole, WorkplaceType,
};
use super::stages::PipelineStage;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("fixture times are valid")
        .and_utc()
}

struct JobSeed {
    id: &'static str,
    title: &'static str,
    department: &'static str,
    location: &'static str,
    closing: (i32, u32, u32),
    candidate_count: u32,
    workplace: WorkplaceType,
    manager: &'static str,
    salary: Option<(u32, u32)>,
    skills: &'static [(&'static str, SkillLevel)],
}

const JOB_SEEDS: [JobSeed; 6] = [
    JobSeed {
        id: "1",
        title: "Senior Software Engineer",
        department: "Engineering",
        location: "Remote",
        closing: (2025, 4, 15),
        candidate_count: 5,
        workplace: WorkplaceType::Remote,
        manager: "Alex Rivera",
        salary: Some((150_000, 190_000)),
        skills: &[("Rust", SkillLevel::Advanced), ("Distributed systems", SkillLevel::Advanced)],
    },
    JobSeed {
        id: "2",
        title: "Product Manager",
        department: "Product",
        location: "New York, NY",
        closing: (2025, 4, 30),
        candidate_count: 3,
        workplace: WorkplaceType::Hybrid,
        manager: "Priya Shah",
        salary: Some((130_000, 160_000)),
        skills: &[("Roadmapping", SkillLevel::Expert)],
    },
    JobSeed {
        id: "3",
        title: "UX Designer",
        department: "Design",
        location: "San Francisco, CA",
        closing: (2025, 5, 10),
        candidate_count: 0,
        workplace: WorkplaceType::OnSite,
        manager: "Morgan Lee",
        salary: None,
        skills: &[("Figma", SkillLevel::Advanced)],
    },
    JobSeed {
        id: "4",
        title: "Marketing Specialist",
        department: "Marketing",
        location: "Chicago, IL",
        closing: (2025, 5, 15),
        candidate_count: 0,
        workplace: WorkplaceType::Hybrid,
        manager: "Jordan Blake",
        salary: Some((70_000, 85_000)),
        skills: &[("Campaign analytics", SkillLevel::Intermediate)],
    },
    JobSeed {
        id: "5",
        title: "Data Analyst",
        department: "Analytics",
        location: "Remote",
        closing: (2025, 4, 20),
        candidate_count: 2,
        workplace: WorkplaceType::Remote,
        manager: "Sam Okafor",
        salary: Some((90_000, 110_000)),
        skills: &[("SQL", SkillLevel::Advanced), ("Python", SkillLevel::Intermediate)],
    },
    JobSeed {
        id: "6",
        title: "Frontend Developer",
        department: "Engineering",
        location: "Austin, TX",
        closing: (2025, 6, 1),
        candidate_count: 4,
        workplace: WorkplaceType::OnSite,
        manager: "Alex Rivera",
        salary: Some((110_000, 140_000)),
        skills: &[("TypeScript", SkillLevel::Advanced)],
    },
];

pub(crate) fn jobs() -> Vec<Job> {
    JOB_SEEDS
        .iter()
        .map(|seed| {
            let (year, month, day) = seed.closing;
            Job {
                id: JobId::new(seed.id),
                title: seed.title.to_string(),
                department: seed.department.to_string(),
                location: seed.location.to_string(),
                closing_date: date(year, month, day),
                status: JobStatus::Open,
                candidate_count: seed.candidate_count,
                description: format!(
                    "Join the {} team as a {}.",
                    seed.department, seed.title
                ),
                responsibilities: vec![format!("Own {} deliverables", seed.department)],
                requirements: vec!["3+ years of relevant experience".to_string()],
                skills: seed
                    .skills
                    .iter()
                    .map(|(name, level)| Skill::new(*name, *level))
                    .collect(),
                salary: seed.salary.map(|(min, max)| SalaryRange {
                    min,
                    max,
                    currency: "USD".to_string(),
                }),
                employment_type: EmploymentType::FullTime,
                workplace_type: seed.workplace,
                posted_date: date(2025, 2, 1),
                hiring_manager: seed.manager.to_string(),
            }
        })
        .collect()
}

/// Id, name, job, recruiter, status, submission date, recorded stage.
type SubmissionSeed = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    SubmissionStatus,
    (i32, u32, u32),
    PipelineStage,
);

#[rustfmt::skip]
const SUBMISSION_SEEDS: [SubmissionSeed; 14] = {
    use PipelineStage as Stage;
    use SubmissionStatus as Status;
    [
        ("1", "John Smith", "1", "1", Status::InProgress, (2025, 3, 1), Stage::Interview),
        ("2", "Emily Johnson", "1", "2", Status::Submitted, (2025, 3, 5), Stage::Submitted),
        ("3", "Michael Brown", "1", "1", Status::Hired, (2025, 2, 15), Stage::Accepted),
        ("4", "Sarah Williams", "1", "3", Status::Rejected, (2025, 2, 20), Stage::Interview),
        ("5", "David Miller", "1", "2", Status::InProgress, (2025, 3, 10), Stage::Screening),
        ("6", "Jessica Davis", "2", "3", Status::InProgress, (2025, 3, 2), Stage::Technical),
        ("7", "Thomas Wilson", "2", "1", Status::Submitted, (2025, 3, 8), Stage::Submitted),
        ("8", "Jennifer Garcia", "2", "2", Status::Hired, (2025, 2, 25), Stage::Accepted),
        ("9", "Robert Martinez", "5", "3", Status::Submitted, (2025, 3, 12), Stage::Submitted),
        ("10", "Patricia Anderson", "5", "1", Status::InProgress, (2025, 3, 6), Stage::Interview),
        ("11", "James Taylor", "6", "2", Status::Submitted, (2025, 3, 15), Stage::Submitted),
        ("12", "Linda Thomas", "6", "3", Status::InProgress, (2025, 3, 10), Stage::Offer),
        ("13", "Richard Jackson", "6", "1", Status::Hired, (2025, 2, 28), Stage::Accepted),
        ("14", "Elizabeth White", "6", "2", Status::Rejected, (2025, 3, 1), Stage::Screening),
    ]
};

pub(crate) fn submissions() -> Vec<Submission> {
    SUBMISSION_SEEDS
        .iter()
        .map(|(id, name, job_id, recruiter_id, status, (year, month, day), stage)| {
            let handle = name.to_ascii_lowercase().replace(' ', ".");
            Submission {
                id: SubmissionId::new(*id),
                name: name.to_string(),
                job_id: JobId::new(*job_id),
                recruiter_id: RecruiterId::new(*recruiter_id),
                status: *status,
                submission_date: date(*year, *month, *day),
                contact: CandidateContact {
                    email: format!("{handle}@example.com"),
                    phone: "(555) 010-0000".to_string(),
                    location: "Remote".to_string(),
                    linkedin_url: Some(format!("https://linkedin.com/in/{handle}")),
                    github_url: None,
                    portfolio_url: None,
                },
                education: Vec::new(),
                experience: Vec::new(),
                skills: Vec::new(),
                notes: Vec::new(),
                current_stage: *stage,
            }
        })
        .map(with_profile)
        .collect()
}

/// The first candidate carries a full profile for the detail view.
fn with_profile(mut submission: Submission) -> Submission {
    if submission.id.as_str() == "1" {
        submission.education.push(Education {
            school: "University of Washington".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: date(2012, 9, 1),
            end_date: date(2016, 6, 15),
            description: None,
        });
        submission.experience.push(Experience {
            company: "Northwind Systems".to_string(),
            position: "Software Engineer".to_string(),
            location: "Seattle, WA".to_string(),
            start_date: date(2016, 8, 1),
            end_date: None,
            current: true,
            description: "Backend services and data pipelines.".to_string(),
        });
        submission.skills = vec![
            Skill::new("Rust", SkillLevel::Advanced),
            Skill::new("PostgreSQL", SkillLevel::Expert),
        ];
        submission.contact.github_url = Some("https://github.com/jsmith".to_string());
    }
    submission
}

pub(crate) fn recruiters() -> Vec<Recruiter> {
    let seeds = [
        ("1", "TalentScout Inc.", 5, 2, 25_000, &["Engineering", "Data"][..]),
        ("2", "Apex Recruiting", 5, 1, 20_000, &["Product", "Engineering"][..]),
        ("3", "HirePro Solutions", 4, 0, 18_000, &["Design", "Marketing"][..]),
    ];

    seeds
        .iter()
        .map(|(id, name, submissions, hires, placement, specialties)| Recruiter {
            id: RecruiterId::new(*id),
            name: name.to_string(),
            company: name.to_string(),
            submission_count: *submissions,
            hire_count: *hires,
            email: format!(
                "contact@{}.example.com",
                name.to_ascii_lowercase()
                    .replace(|c: char| !c.is_ascii_alphanumeric(), "")
            ),
            phone: "(555) 020-0000".to_string(),
            location: "New York, NY".to_string(),
            website: None,
            fees: Some(RecruiterFees {
                placement: *placement,
                percentage: 20,
                currency: "USD".to_string(),
            }),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            performance: vec![PerformanceWindow {
                window: "Last 90 days".to_string(),
                submissions: *submissions,
                interviews: submissions.saturating_sub(*hires),
                hires: *hires,
            }],
        })
        .collect()
}

pub(crate) fn messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: MessageId::new("1"),
            title: "New Candidate Application".to_string(),
            content: "Sarah Johnson has applied for Senior Software Engineer position"
                .to_string(),
            timestamp: now - Duration::minutes(30),
            read: false,
            kind: MessageKind::Info,
        },
        Message {
            id: MessageId::new("2"),
            title: "Interview Scheduled".to_string(),
            content: "Technical interview scheduled with Michael Brown".to_string(),
            timestamp: now - Duration::hours(2),
            read: false,
            kind: MessageKind::Success,
        },
        Message {
            id: MessageId::new("3"),
            title: "Urgent: Position Closing Soon".to_string(),
            content: "UX Designer position closes in 24 hours with no candidates".to_string(),
            timestamp: now - Duration::hours(24),
            read: false,
            kind: MessageKind::Warning,
        },
    ]
}

pub(crate) fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: TeamMemberId::new("1"),
            email: "john@example.com".to_string(),
            name: "John Smith".to_string(),
            role: TeamRole::Owner,
            status: MemberStatus::Active,
            joined_at: at(2024, 1, 15, 10, 0),
        },
        TeamMember {
            id: TeamMemberId::new("2"),
            email: "sarah@example.com".to_string(),
            name: "Sarah Johnson".to_string(),
            role: TeamRole::Admin,
            status: MemberStatus::Active,
            joined_at: at(2024, 2, 1, 9, 30),
        },
        TeamMember {
            id: TeamMemberId::new("3"),
            email: "mike@example.com".to_string(),
            name: "Mike Wilson".to_string(),
            role: TeamRole::Member,
            status: MemberStatus::Pending,
            joined_at: at(2024, 3, 10, 14, 20),
        },
    ]
}

pub(crate) fn employer() -> Employer {
    Employer {
        id: EmployerId::new("1"),
        name: "Tech Corp Inc.".to_string(),
        industry: "Technology".to_string(),
        size: "1000-5000".to_string(),
        location: "New York, NY".to_string(),
        website: "https://techcorp.example.com".to_string(),
    }
}
