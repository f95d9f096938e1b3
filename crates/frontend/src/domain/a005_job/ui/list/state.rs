use contracts::domain::a005_job::{Job, JobFilter, JobStatus, JobType};
use contracts::domain::common::{Choice, ListFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_ci, ListPaging, Sortable};

impl Sortable for Job {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_ci(&self.title, &other.title),
            "department" => cmp_ci(&self.department, &other.department),
            "job_type" => self.job_type.label().cmp(other.job_type.label()),
            "status" => self.status.label().cmp(other.status.label()),
            "applicants" => self.applicants.cmp(&other.applicants),
            _ => self.posted_date.cmp(&other.posted_date),
        }
    }
}

#[derive(Clone, Debug)]
pub struct JobListState {
    pub items: Vec<Job>,
    pub search_query: String,
    pub department: String,
    pub job_type: String,
    pub status: String,
    pub paging: ListPaging,
}

impl JobListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            department: String::new(),
            job_type: String::new(),
            status: String::new(),
            paging: ListPaging::new("posted_date", false, page_size),
        }
    }

    pub fn filter(&self) -> JobFilter {
        JobFilter {
            query: self.search_query.clone(),
            department: Some(self.department.trim().to_string()).filter(|d| !d.is_empty()),
            job_type: JobType::from_code(&self.job_type),
            status: JobStatus::from_code(&self.status),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.search_query, &self.department, &self.job_type, &self.status]
            .iter()
            .filter(|v| !v.trim().is_empty())
            .count()
    }

    pub fn refresh(&mut self, source: &[Job]) {
        let rows = self.filter().apply(source);
        self.items = self.paging.page_of(rows);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<JobListState> {
    RwSignal::new(JobListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_job::seed;

    #[test]
    fn test_unknown_department_yields_nothing() {
        let mut state = JobListState::new(10);
        state.department = "Astronomy".to_string();
        state.refresh(&seed::jobs());
        assert_eq!(state.paging.total_count, 0);
        assert!(state.items.is_empty());
        assert_eq!(state.paging.total_pages, 1);
    }

    #[test]
    fn test_department_filter_ignores_case() {
        let mut state = JobListState::new(10);
        state.department = "education".to_string();
        state.refresh(&seed::jobs());
        assert_eq!(state.paging.total_count, 2);
    }

    #[test]
    fn test_sort_by_applicants() {
        let mut state = JobListState::new(10);
        state.paging.toggle_sort("applicants");
        state.refresh(&seed::jobs());
        assert!(state
            .items
            .windows(2)
            .all(|w| w[0].applicants <= w[1].applicants));
    }
}
