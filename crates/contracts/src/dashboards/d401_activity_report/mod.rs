//! Breakdown tables for the reports page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::{count_choices, CountRow};
use crate::domain::a001_user::{User, UserRole, UserStatus};
use crate::domain::a002_guidance_request::{GuidanceRequest, RequestStatus, RequestType};
use crate::domain::a005_job::{departments, Job, JobStatus, JobType};
use crate::domain::a007_event::{Event, EventCategory};
use crate::domain::common::{ValidationError, ValidationResult};

/// Inclusive date range; an open end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> ValidationResult<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if t < f {
                return Err(ValidationError::Invalid {
                    field: "To date",
                    reason: "must not be before the from date".to_string(),
                });
            }
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| f <= date) && self.to.map_or(true, |t| date <= t)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestReport {
    pub range: DateRange,
    pub total: usize,
    pub by_type: Vec<CountRow>,
    pub by_status: Vec<CountRow>,
    /// Share of requests in range that reached `Resolved`, whole percent
    pub resolution_rate: u32,
}

impl RequestReport {
    pub fn compute(requests: &[GuidanceRequest], range: DateRange) -> Self {
        let in_range: Vec<&GuidanceRequest> = requests
            .iter()
            .filter(|r| range.contains(r.requested_on))
            .collect();
        let by_status = count_choices::<RequestStatus, _>(&in_range, |r| r.status);
        let resolved = in_range
            .iter()
            .filter(|r| r.status == RequestStatus::Resolved)
            .count();
        Self {
            range,
            total: in_range.len(),
            by_type: count_choices::<RequestType, _>(&in_range, |r| r.request_type),
            by_status,
            resolution_rate: CountRow::new("", resolved).percent_of(in_range.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    pub total: usize,
    pub by_role: Vec<CountRow>,
    pub by_status: Vec<CountRow>,
}

impl UserReport {
    pub fn compute(users: &[User]) -> Self {
        Self {
            total: users.len(),
            by_role: count_choices::<UserRole, _>(users, |u| u.role),
            by_status: count_choices::<UserStatus, _>(users, |u| u.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReport {
    pub total: usize,
    pub by_type: Vec<CountRow>,
    pub by_status: Vec<CountRow>,
    pub by_department: Vec<CountRow>,
    pub total_applicants: u32,
}

impl JobReport {
    pub fn compute(jobs: &[Job]) -> Self {
        Self {
            total: jobs.len(),
            by_type: count_choices::<JobType, _>(jobs, |j| j.job_type),
            by_status: count_choices::<JobStatus, _>(jobs, |j| j.status),
            by_department: departments(jobs)
                .into_iter()
                .map(|d| {
                    let n = jobs.iter().filter(|j| j.department == d).count();
                    CountRow::new(d, n)
                })
                .collect(),
            total_applicants: jobs.iter().map(|j| j.applicants).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    pub total: usize,
    pub by_category: Vec<CountRow>,
    pub registrations: u32,
}

impl EventReport {
    pub fn compute(events: &[Event], range: DateRange) -> Self {
        let in_range: Vec<&Event> = events.iter().filter(|e| range.contains(e.date)).collect();
        Self {
            total: in_range.len(),
            by_category: count_choices::<EventCategory, _>(&in_range, |e| e.category),
            registrations: in_range.iter().map(|e| e.registered_attendees).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_user, a002_guidance_request, a005_job, a007_event};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_unbounded_report_counts_every_request_once() {
        let requests = a002_guidance_request::seed::requests();
        let report = RequestReport::compute(&requests, DateRange::default());
        assert_eq!(report.total, requests.len());
        assert_eq!(report.by_type.iter().map(|r| r.count).sum::<usize>(), report.total);
        assert_eq!(report.by_status.iter().map(|r| r.count).sum::<usize>(), report.total);
        assert_eq!(report.by_type.len(), 6);
    }

    #[test]
    fn test_range_is_inclusive() {
        let requests = a002_guidance_request::seed::requests();
        let range = DateRange::new(Some(d(2025, 1, 1)), Some(d(2025, 1, 31))).unwrap();
        let january = RequestReport::compute(&requests, range);
        assert_eq!(january.total, 4);

        let range = DateRange::new(Some(d(2025, 1, 9)), Some(d(2025, 1, 9))).unwrap();
        assert_eq!(RequestReport::compute(&requests, range).total, 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(DateRange::new(Some(d(2025, 2, 1)), Some(d(2025, 1, 1))).is_err());
        assert!(DateRange::new(None, Some(d(2025, 1, 1))).is_ok());
    }

    #[test]
    fn test_empty_range_keeps_zero_rows() {
        let requests = a002_guidance_request::seed::requests();
        let range = DateRange::new(Some(d(2030, 1, 1)), None).unwrap();
        let report = RequestReport::compute(&requests, range);
        assert_eq!(report.total, 0);
        assert_eq!(report.by_status.len(), 4);
        assert_eq!(report.resolution_rate, 0);
    }

    #[test]
    fn test_user_and_job_reports() {
        let users = UserReport::compute(&a001_user::seed::users());
        assert_eq!(users.by_status.iter().map(|r| r.count).sum::<usize>(), users.total);

        let jobs = a005_job::seed::jobs();
        let report = JobReport::compute(&jobs);
        assert_eq!(report.by_department.iter().map(|r| r.count).sum::<usize>(), jobs.len());
        assert!(report
            .by_department
            .iter()
            .any(|r| r.label == "Education" && r.count == 2));
    }

    #[test]
    fn test_event_report_registrations() {
        let events = a007_event::seed::events();
        let all = EventReport::compute(&events, DateRange::default());
        assert_eq!(
            all.registrations,
            events.iter().map(|e| e.registered_attendees).sum::<u32>()
        );
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(CountRow::new("x", 1).percent_of(3), 33);
        assert_eq!(CountRow::new("x", 2).percent_of(3), 67);
        assert_eq!(CountRow::new("x", 5).percent_of(0), 0);
    }
}
