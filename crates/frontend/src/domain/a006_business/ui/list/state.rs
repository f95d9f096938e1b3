use contracts::domain::a006_business::{Business, BusinessFilter};
use contracts::domain::common::ListFilter;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_ci, ListPaging, Sortable};

impl Sortable for Business {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => cmp_ci(&self.category, &other.category)
                .then_with(|| cmp_ci(&self.sub_category, &other.sub_category)),
            "location" => cmp_ci(&self.location, &other.location),
            "rating" => self.rating.total_cmp(&other.rating),
            "review_count" => self.review_count.cmp(&other.review_count),
            "is_verified" => self.is_verified.cmp(&other.is_verified),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BusinessListState {
    pub items: Vec<Business>,
    pub search_query: String,
    pub category: String,
    pub verified_only: bool,
    pub paging: ListPaging,
}

impl BusinessListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            category: String::new(),
            verified_only: false,
            paging: ListPaging::new("name", true, page_size),
        }
    }

    pub fn filter(&self) -> BusinessFilter {
        BusinessFilter {
            query: self.search_query.clone(),
            category: Some(self.category.clone()).filter(|c| !c.trim().is_empty()),
            verified_only: self.verified_only,
        }
    }

    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.search_query.trim().is_empty())
            + usize::from(!self.category.is_empty())
            + usize::from(self.verified_only)
    }

    pub fn refresh(&mut self, source: &[Business]) {
        let rows = self.filter().apply(source);
        self.items = self.paging.page_of(rows);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<BusinessListState> {
    RwSignal::new(BusinessListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_business::seed;

    #[test]
    fn test_verified_only() {
        let businesses = seed::businesses();
        let mut state = BusinessListState::new(10);
        state.verified_only = true;
        state.refresh(&businesses);
        assert_eq!(
            state.paging.total_count,
            businesses.iter().filter(|b| b.is_verified).count()
        );
        assert_eq!(state.active_filters_count(), 1);
    }

    #[test]
    fn test_best_rated_first() {
        let mut state = BusinessListState::new(10);
        state.paging.toggle_sort("rating");
        state.paging.toggle_sort("rating");
        state.refresh(&seed::businesses());
        assert!(state.items.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_category_filter() {
        let mut state = BusinessListState::new(10);
        state.category = "Retail".to_string();
        state.refresh(&seed::businesses());
        assert!(state.items.iter().all(|b| b.category == "Retail"));
    }
}
