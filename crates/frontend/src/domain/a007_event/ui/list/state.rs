use chrono::NaiveDate;
use contracts::domain::a007_event::{Event, EventCategory, EventFilter, EventType, EventWhen};
use contracts::domain::common::{Choice, ListFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_ci, ListPaging, Sortable};

impl Sortable for Event {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_ci(&self.title, &other.title),
            "registered" => self.registered_attendees.cmp(&other.registered_attendees),
            _ => (self.date, self.time).cmp(&(other.date, other.time)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EventListState {
    pub items: Vec<Event>,
    pub search_query: String,
    pub event_type: String,
    pub category: String,
    pub when: EventWhen,
    pub paging: ListPaging,
}

impl EventListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            event_type: String::new(),
            category: String::new(),
            when: EventWhen::Upcoming,
            paging: ListPaging::new("date", true, page_size),
        }
    }

    pub fn filter(&self, today: NaiveDate) -> EventFilter {
        EventFilter {
            query: self.search_query.clone(),
            event_type: EventType::from_code(&self.event_type),
            category: EventCategory::from_code(&self.category),
            when: self.when,
            ..EventFilter::new(today)
        }
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.search_query, &self.event_type, &self.category]
            .iter()
            .filter(|v| !v.trim().is_empty())
            .count()
            + usize::from(self.when != EventWhen::All)
    }

    pub fn refresh(&mut self, source: &[Event], today: NaiveDate) {
        let rows = self.filter(today).apply(source);
        self.items = self.paging.page_of(rows);
    }
}

pub fn create_state(page_size: usize) -> RwSignal<EventListState> {
    RwSignal::new(EventListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_event::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_upcoming_by_default_soonest_first() {
        let mut state = EventListState::new(10);
        state.refresh(&seed::events(), today());
        assert!(!state.items.is_empty());
        assert!(state.items.iter().all(|e| e.date >= today()));
        assert!(state.items.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_all_dates_covers_past_and_upcoming() {
        let events = seed::events();
        let mut state = EventListState::new(50);
        state.when = EventWhen::All;
        state.refresh(&events, today());
        assert_eq!(state.paging.total_count, events.len());

        state.when = EventWhen::Past;
        state.refresh(&events, today());
        assert!(state.items.iter().all(|e| e.date < today()));
    }
}
