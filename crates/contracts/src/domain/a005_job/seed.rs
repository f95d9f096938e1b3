use super::aggregate::{Job, JobStatus, JobType};
use crate::domain::common::{ymd, RecordId};

/// Sample job listings
pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: RecordId(1),
            title: "Temple Office Assistant".to_string(),
            department: "Administration".to_string(),
            location: "Pune".to_string(),
            job_type: JobType::FullTime,
            experience: "1-2 years".to_string(),
            salary: "₹18,000 - ₹22,000 / month".to_string(),
            description: "Handle front-desk enquiries, donation receipts and the visitor register.".to_string(),
            status: JobStatus::Open,
            applicants: 14,
            posted_date: ymd(2024, 12, 20),
        },
        Job {
            id: RecordId(2),
            title: "Accounts Executive".to_string(),
            department: "Finance".to_string(),
            location: "Mumbai".to_string(),
            job_type: JobType::FullTime,
            experience: "3-5 years".to_string(),
            salary: "₹35,000 - ₹45,000 / month".to_string(),
            description: "Maintain ledgers, reconcile bank statements and prepare trust filings.".to_string(),
            status: JobStatus::Open,
            applicants: 9,
            posted_date: ymd(2024, 12, 28),
        },
        Job {
            id: RecordId(3),
            title: "Kitchen Volunteer Lead".to_string(),
            department: "Seva".to_string(),
            location: "Pune".to_string(),
            job_type: JobType::Volunteer,
            experience: "Any".to_string(),
            salary: "Unpaid".to_string(),
            description: "Coordinate weekend volunteers for the community kitchen.".to_string(),
            status: JobStatus::Open,
            applicants: 23,
            posted_date: ymd(2025, 1, 2),
        },
        Job {
            id: RecordId(4),
            title: "Web Developer".to_string(),
            department: "Technology".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Contract,
            experience: "2+ years".to_string(),
            salary: "₹60,000 / month".to_string(),
            description: "Build and maintain the community portal and event pages.".to_string(),
            status: JobStatus::Closed,
            applicants: 31,
            posted_date: ymd(2024, 11, 15),
        },
        Job {
            id: RecordId(5),
            title: "Youth Program Intern".to_string(),
            department: "Education".to_string(),
            location: "Bengaluru".to_string(),
            job_type: JobType::Internship,
            experience: "Fresher".to_string(),
            salary: "₹10,000 / month stipend".to_string(),
            description: "Assist in planning weekend classes and youth camps.".to_string(),
            status: JobStatus::Draft,
            applicants: 0,
            posted_date: ymd(2025, 1, 8),
        },
        Job {
            id: RecordId(6),
            title: "Part-time Music Teacher".to_string(),
            department: "Education".to_string(),
            location: "Pune".to_string(),
            job_type: JobType::PartTime,
            experience: "3+ years".to_string(),
            salary: "₹800 / session".to_string(),
            description: "Teach bhajan and harmonium classes on weekends.".to_string(),
            status: JobStatus::Open,
            applicants: 5,
            posted_date: ymd(2024, 12, 5),
        },
    ]
}
