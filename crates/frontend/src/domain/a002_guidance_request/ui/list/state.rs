use contracts::domain::a002_guidance_request::{
    GuidanceRequest, RequestFilter, RequestStatus, RequestType,
};
use contracts::domain::common::{Choice, ListFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_ci, ListPaging, Sortable};

impl Sortable for GuidanceRequest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "devotee" => cmp_ci(&self.devotee, &other.devotee),
            "request_type" => self.request_type.label().cmp(other.request_type.label()),
            "status" => self.status.label().cmp(other.status.label()),
            "counsellor" => cmp_ci(
                self.assigned_counsellor.as_deref().unwrap_or(""),
                other.assigned_counsellor.as_deref().unwrap_or(""),
            ),
            _ => self.requested_on.cmp(&other.requested_on),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestListState {
    pub items: Vec<GuidanceRequest>,
    pub search_query: String,
    pub request_type: String,
    pub status: String,
    pub paging: ListPaging,
}

impl RequestListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            request_type: String::new(),
            status: String::new(),
            // Newest first
            paging: ListPaging::new("requested_on", false, page_size),
        }
    }

    pub fn filter(&self) -> RequestFilter {
        RequestFilter {
            query: self.search_query.clone(),
            request_type: RequestType::from_code(&self.request_type),
            status: RequestStatus::from_code(&self.status),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.search_query, &self.request_type, &self.status]
            .iter()
            .filter(|v| !v.trim().is_empty())
            .count()
    }

    pub fn refresh(&mut self, source: &[GuidanceRequest]) {
        let rows = self.filter().apply(source);
        self.items = self.paging.page_of(rows);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<RequestListState> {
    RwSignal::new(RequestListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_guidance_request::seed;

    #[test]
    fn test_newest_request_comes_first() {
        let requests = seed::requests();
        let mut state = RequestListState::new(10);
        state.refresh(&requests);
        let dates: Vec<_> = state.items.iter().map(|r| r.requested_on).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_status_filter() {
        let requests = seed::requests();
        let mut state = RequestListState::new(10);
        state.status = RequestStatus::Pending.code().to_string();
        state.refresh(&requests);
        assert!(!state.items.is_empty());
        assert!(state.items.iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn test_search_matches_assigned_counsellor() {
        let requests = seed::requests();
        let mut state = RequestListState::new(10);
        state.search_query = "ramesh".to_string();
        state.refresh(&requests);
        assert!(state
            .items
            .iter()
            .all(|r| r.assigned_counsellor.as_deref() == Some("Ramesh Kulkarni")));
        assert_eq!(state.active_filters_count(), 1);
    }
}
