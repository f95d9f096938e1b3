use contracts::domain::a001_user::{User, UserFilter, UserRole, UserStatus};
use contracts::domain::common::{Choice, ListFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_ci, ListPaging, Sortable};

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "role" => self.role.label().cmp(other.role.label()),
            "phone" => self.phone.cmp(&other.phone),
            "email" => cmp_ci(&self.email, &other.email),
            "status" => self.status.label().cmp(other.status.label()),
            "created_on" => self.created_on.cmp(&other.created_on),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserListState {
    pub items: Vec<User>,
    pub search_query: String,
    /// Role code, empty for any
    pub role: String,
    /// Status code, empty for any
    pub status: String,
    pub paging: ListPaging,
}

impl UserListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            role: String::new(),
            status: String::new(),
            paging: ListPaging::new("name", true, page_size),
        }
    }

    pub fn filter(&self) -> UserFilter {
        UserFilter {
            query: self.search_query.clone(),
            role: UserRole::from_code(&self.role),
            status: UserStatus::from_code(&self.status),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.search_query, &self.role, &self.status]
            .iter()
            .filter(|v| !v.trim().is_empty())
            .count()
    }

    pub fn refresh(&mut self, source: &[User]) {
        let rows = self.filter().apply(source);
        self.items = self.paging.page_of(rows);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<UserListState> {
    RwSignal::new(UserListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::seed;

    #[test]
    fn test_role_filter_and_search_combine() {
        let users = seed::users();
        let mut state = UserListState::new(10);
        state.role = "counsellor".to_string();
        state.refresh(&users);
        assert_eq!(state.paging.total_count, 3);

        state.search_query = "SUNITA".to_string();
        state.refresh(&users);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Sunita Menon");
        assert_eq!(state.active_filters_count(), 2);
    }

    #[test]
    fn test_sort_by_created_on_descending() {
        let users = seed::users();
        let mut state = UserListState::new(3);
        state.paging.toggle_sort("created_on");
        state.paging.toggle_sort("created_on");
        state.refresh(&users);
        assert_eq!(state.items[0].name, "Deepa Pillai");
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.paging.total_pages, 4);
    }

    #[test]
    fn test_unknown_status_code_means_any() {
        let users = seed::users();
        let mut state = UserListState::new(50);
        state.status = "archived".to_string();
        state.refresh(&users);
        assert_eq!(state.paging.total_count, users.len());
    }
}
