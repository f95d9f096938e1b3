use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{Choice, Entity, ListFilter, RecordId, Searchable, ValidationResult};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
    Volunteer,
}

impl Choice for JobType {
    fn all() -> &'static [Self] {
        &[
            JobType::FullTime,
            JobType::PartTime,
            JobType::Contract,
            JobType::Internship,
            JobType::Volunteer,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Volunteer => "volunteer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Volunteer => "Volunteer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Draft,
}

impl Choice for JobStatus {
    fn all() -> &'static [Self] {
        &[JobStatus::Open, JobStatus::Closed, JobStatus::Draft]
    }

    fn code(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Closed => "Closed",
            JobStatus::Draft => "Draft",
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Job listing published to the community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "jobType")]
    pub job_type: JobType,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub status: JobStatus,
    pub applicants: u32,
    #[serde(rename = "postedDate")]
    pub posted_date: NaiveDate,
}

impl Entity for Job {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Job"
    }

    fn list_name() -> &'static str {
        "Jobs"
    }
}

impl Searchable for Job {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.department.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobDto {
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: JobType,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub status: JobStatus,
}

impl JobDto {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            experience: job.experience.clone(),
            salary: job.salary.clone(),
            description: job.description.clone(),
            status: job.status,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        require("Title", &self.title)?;
        require("Department", &self.department)?;
        require("Location", &self.location)?;
        require("Description", &self.description)?;
        Ok(())
    }

    /// New listing with no applicants yet.
    pub fn into_job(self, posted_date: NaiveDate) -> Job {
        let mut job = Job {
            id: RecordId::default(),
            title: String::new(),
            department: String::new(),
            location: String::new(),
            job_type: self.job_type,
            experience: String::new(),
            salary: String::new(),
            description: String::new(),
            status: self.status,
            applicants: 0,
            posted_date,
        };
        self.apply_to(&mut job);
        job
    }

    pub fn apply_to(&self, job: &mut Job) {
        job.title = self.title.trim().to_string();
        job.department = self.department.trim().to_string();
        job.location = self.location.trim().to_string();
        job.job_type = self.job_type;
        job.experience = self.experience.trim().to_string();
        job.salary = self.salary.trim().to_string();
        job.description = self.description.trim().to_string();
        job.status = self.status;
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub query: String,
    /// Exact department name, compared case-insensitively
    pub department: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

impl ListFilter<Job> for JobFilter {
    fn matches(&self, job: &Job) -> bool {
        job.matches_filter(&self.query)
            && self
                .department
                .as_deref()
                .map_or(true, |d| job.department.eq_ignore_ascii_case(d.trim()))
            && self.job_type.map_or(true, |t| job.job_type == t)
            && self.status.map_or(true, |s| job.status == s)
    }
}

/// Distinct departments, sorted, for the department dropdown.
pub fn departments(jobs: &[Job]) -> Vec<String> {
    let mut names: Vec<String> = jobs.iter().map(|j| j.department.clone()).collect();
    names.sort();
    names.dedup();
    names
}

pub fn total_applicants(jobs: &[Job]) -> u32 {
    jobs.iter().map(|j| j.applicants).sum()
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;
    use crate::domain::common::{Collection, ValidationError};

    #[test]
    fn test_unknown_department_yields_nothing() {
        let jobs = seed::jobs();
        let filter = JobFilter {
            department: Some("Aerospace".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_department_filter_ignores_case() {
        let jobs = seed::jobs();
        let dept = jobs[0].department.to_uppercase();
        let filter = JobFilter {
            department: Some(dept),
            ..Default::default()
        };
        let found = filter.apply(&jobs);
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|j| j.department.eq_ignore_ascii_case(&jobs[0].department)));
    }

    #[test]
    fn test_departments_are_distinct_and_sorted() {
        let depts = departments(&seed::jobs());
        let mut sorted = depts.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(depts, sorted);
    }

    #[test]
    fn test_validate_required_fields() {
        let dto = JobDto {
            title: "Cook".to_string(),
            department: "Kitchen".to_string(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate(),
            Err(ValidationError::Required { field: "Location" })
        );
    }

    #[test]
    fn test_create_and_edit_job() {
        let mut jobs = Collection::from_seed(seed::jobs());
        let dto = JobDto {
            title: "Cook".to_string(),
            department: "Kitchen".to_string(),
            location: "Pune".to_string(),
            description: "Prepare prasad for 200 people".to_string(),
            ..Default::default()
        };
        dto.validate().unwrap();
        let id = jobs.insert(dto.clone().into_job(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()));
        assert_eq!(jobs.get(id).map(|j| j.applicants), Some(0));

        let mut edit = dto;
        edit.status = JobStatus::Closed;
        jobs.modify(id, |j| edit.apply_to(j)).unwrap();
        assert_eq!(jobs.get(id).map(|j| j.status), Some(JobStatus::Closed));
    }
}
