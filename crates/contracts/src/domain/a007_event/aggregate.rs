use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{optional_email, parse_count, parse_date, parse_time, require};
use crate::domain::common::{
    Choice, Entity, ListFilter, RecordId, Searchable, ValidationError, ValidationResult,
};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    Offline,
    Online,
    Hybrid,
}

impl EventType {
    /// Whether attendees need a physical venue.
    pub fn needs_venue(&self) -> bool {
        !matches!(self, EventType::Online)
    }
}

impl Choice for EventType {
    fn all() -> &'static [Self] {
        &[EventType::Offline, EventType::Online, EventType::Hybrid]
    }

    fn code(&self) -> &'static str {
        match self {
            EventType::Offline => "offline",
            EventType::Online => "online",
            EventType::Hybrid => "hybrid",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EventType::Offline => "Offline",
            EventType::Online => "Online",
            EventType::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventCategory {
    #[default]
    Satsang,
    Festival,
    Workshop,
    Seva,
    Youth,
    Health,
}

impl Choice for EventCategory {
    fn all() -> &'static [Self] {
        &[
            EventCategory::Satsang,
            EventCategory::Festival,
            EventCategory::Workshop,
            EventCategory::Seva,
            EventCategory::Youth,
            EventCategory::Health,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            EventCategory::Satsang => "satsang",
            EventCategory::Festival => "festival",
            EventCategory::Workshop => "workshop",
            EventCategory::Seva => "seva",
            EventCategory::Youth => "youth",
            EventCategory::Health => "health",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EventCategory::Satsang => "Satsang",
            EventCategory::Festival => "Festival",
            EventCategory::Workshop => "Workshop",
            EventCategory::Seva => "Seva",
            EventCategory::Youth => "Youth",
            EventCategory::Health => "Health camp",
        }
    }
}

/// Time window for the events list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventWhen {
    #[default]
    All,
    Upcoming,
    Past,
}

impl Choice for EventWhen {
    fn all() -> &'static [Self] {
        &[EventWhen::All, EventWhen::Upcoming, EventWhen::Past]
    }

    fn code(&self) -> &'static str {
        match self {
            EventWhen::All => "all",
            EventWhen::Upcoming => "upcoming",
            EventWhen::Past => "past",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EventWhen::All => "All dates",
            EventWhen::Upcoming => "Upcoming",
            EventWhen::Past => "Past",
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
    pub description: String,
    /// City or "Online"
    pub location: String,
    pub venue: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: String,
    #[serde(rename = "contactName")]
    pub contact_name: String,
    #[serde(rename = "contactPhone")]
    pub contact_phone: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    /// 0 = no limit
    #[serde(rename = "maxAttendees")]
    pub max_attendees: u32,
    #[serde(rename = "registeredAttendees")]
    pub registered_attendees: u32,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    #[serde(rename = "isFree")]
    pub is_free: bool,
    #[serde(rename = "requiresRegistration")]
    pub requires_registration: bool,
}

impl Event {
    /// Events dated today count as upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }

    /// Remaining seats, `None` when the event has no limit.
    pub fn seats_left(&self) -> Option<u32> {
        (self.max_attendees > 0).then(|| self.max_attendees.saturating_sub(self.registered_attendees))
    }

    pub fn is_full(&self) -> bool {
        self.seats_left() == Some(0)
    }

    pub fn toggle_featured(&mut self) {
        self.is_featured = !self.is_featured;
    }
}

impl Entity for Event {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.venue.as_str(),
            self.organizer.as_str(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

/// Event form. Date, time and capacity keep the raw input text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDto {
    pub title: String,
    pub event_type: EventType,
    pub category: EventCategory,
    pub description: String,
    pub location: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub organizer: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub max_attendees: String,
    pub is_featured: bool,
    pub is_free: bool,
    pub requires_registration: bool,
}

impl EventDto {
    pub fn from_event(e: &Event) -> Self {
        Self {
            title: e.title.clone(),
            event_type: e.event_type,
            category: e.category,
            description: e.description.clone(),
            location: e.location.clone(),
            venue: e.venue.clone(),
            date: e.date.format("%Y-%m-%d").to_string(),
            time: e.time.format("%H:%M").to_string(),
            organizer: e.organizer.clone(),
            contact_name: e.contact_name.clone(),
            contact_phone: e.contact_phone.clone(),
            contact_email: e.contact_email.clone(),
            max_attendees: if e.max_attendees == 0 {
                String::new()
            } else {
                e.max_attendees.to_string()
            },
            is_featured: e.is_featured,
            is_free: e.is_free,
            requires_registration: e.requires_registration,
        }
    }

    /// Checks the form and returns the parsed date, time and capacity.
    pub fn validate(&self) -> ValidationResult<(NaiveDate, NaiveTime, u32)> {
        require("Title", &self.title)?;
        require("Description", &self.description)?;
        require("Location", &self.location)?;
        if self.event_type.needs_venue() {
            require("Venue", &self.venue)?;
        }
        let date = parse_date("Date", &self.date)?;
        let time = parse_time("Time", &self.time)?;
        require("Organizer", &self.organizer)?;
        optional_email("Contact email", &self.contact_email)?;
        let max = parse_count("Max attendees", &self.max_attendees)?;
        Ok((date, time, max))
    }

    pub fn to_event(&self) -> ValidationResult<Event> {
        let (date, time, max_attendees) = self.validate()?;
        Ok(Event {
            id: RecordId::default(),
            title: self.title.trim().to_string(),
            event_type: self.event_type,
            category: self.category,
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            venue: self.venue.trim().to_string(),
            date,
            time,
            organizer: self.organizer.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            contact_phone: self.contact_phone.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            max_attendees,
            registered_attendees: 0,
            is_featured: self.is_featured,
            is_free: self.is_free,
            requires_registration: self.requires_registration,
        })
    }

    /// Rewrites `event` from the form, keeping its id and registrations.
    /// Capacity may not drop below the number already registered.
    pub fn apply_to(&self, event: &mut Event) -> ValidationResult {
        let mut updated = self.to_event()?;
        if updated.max_attendees > 0 && updated.max_attendees < event.registered_attendees {
            return Err(ValidationError::Invalid {
                field: "Max attendees",
                reason: format!("{} people are already registered", event.registered_attendees),
            });
        }
        updated.id = event.id;
        updated.registered_attendees = event.registered_attendees;
        *event = updated;
        Ok(())
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub query: String,
    pub event_type: Option<EventType>,
    pub category: Option<EventCategory>,
    pub when: EventWhen,
    pub today: NaiveDate,
}

impl EventFilter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            query: String::new(),
            event_type: None,
            category: None,
            when: EventWhen::All,
            today,
        }
    }
}

impl ListFilter<Event> for EventFilter {
    fn matches(&self, e: &Event) -> bool {
        let in_window = match self.when {
            EventWhen::All => true,
            EventWhen::Upcoming => e.is_upcoming(self.today),
            EventWhen::Past => !e.is_upcoming(self.today),
        };
        in_window
            && e.matches_filter(&self.query)
            && self.event_type.map_or(true, |t| e.event_type == t)
            && self.category.map_or(true, |c| e.category == c)
    }
}

/// Events sorted by date then time, soonest first.
pub fn by_date(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.date, e.time));
    sorted
}

pub fn upcoming_count(events: &[Event], today: NaiveDate) -> usize {
    events.iter().filter(|e| e.is_upcoming(today)).count()
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn form() -> EventDto {
        EventDto {
            title: "Gita Jayanti".to_string(),
            description: "Recitation and discourse".to_string(),
            location: "Pune".to_string(),
            venue: "Main hall".to_string(),
            date: "2025-12-01".to_string(),
            time: "18:30".to_string(),
            organizer: "Events committee".to_string(),
            max_attendees: "100".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_upcoming_and_past_partition_the_seed() {
        let events = seed::events();
        let today = d(2025, 1, 15);
        let mut filter = EventFilter::new(today);
        filter.when = EventWhen::Upcoming;
        let upcoming = filter.apply(&events).len();
        filter.when = EventWhen::Past;
        let past = filter.apply(&events).len();
        assert!(upcoming > 0);
        assert!(past > 0);
        assert_eq!(upcoming + past, events.len());
        assert_eq!(upcoming, upcoming_count(&events, today));
    }

    #[test]
    fn test_event_today_is_upcoming() {
        let e = form().to_event().unwrap();
        assert!(e.is_upcoming(e.date));
        assert!(!e.is_upcoming(d(2025, 12, 2)));
    }

    #[test]
    fn test_seats_left() {
        let mut e = form().to_event().unwrap();
        assert_eq!(e.seats_left(), Some(100));
        e.registered_attendees = 100;
        assert!(e.is_full());
        e.max_attendees = 0;
        assert_eq!(e.seats_left(), None);
        assert!(!e.is_full());
    }

    #[test]
    fn test_online_event_needs_no_venue() {
        let mut f = form();
        f.venue = String::new();
        assert_eq!(
            f.validate().map(|_| ()),
            Err(ValidationError::Required { field: "Venue" })
        );
        f.event_type = EventType::Online;
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_bad_date_and_time_are_rejected() {
        let mut f = form();
        f.date = "01/12/2025".to_string();
        assert!(matches!(
            f.validate(),
            Err(ValidationError::Invalid { field: "Date", .. })
        ));
        let mut f = form();
        f.time = "25:00".to_string();
        assert!(matches!(
            f.validate(),
            Err(ValidationError::Invalid { field: "Time", .. })
        ));
    }

    #[test]
    fn test_edit_keeps_registrations_and_guards_capacity() {
        let mut e = seed::events().remove(0);
        let registered = e.registered_attendees;
        assert!(registered > 1);
        let mut f = EventDto::from_event(&e);
        f.title = "Renamed".to_string();
        f.apply_to(&mut e).unwrap();
        assert_eq!(e.title, "Renamed");
        assert_eq!(e.registered_attendees, registered);

        f.max_attendees = (registered - 1).to_string();
        assert!(f.apply_to(&mut e).is_err());
        assert_eq!(e.title, "Renamed");
    }

    #[test]
    fn test_type_and_category_filters() {
        let events = seed::events();
        let mut filter = EventFilter::new(d(2025, 1, 1));
        filter.event_type = Some(EventType::Online);
        assert!(filter
            .apply(&events)
            .iter()
            .all(|e| e.event_type == EventType::Online));
        filter.event_type = None;
        filter.category = Some(EventCategory::Festival);
        assert!(!filter.apply(&events).is_empty());
    }

    #[test]
    fn test_by_date_orders_soonest_first() {
        let sorted = by_date(&seed::events());
        assert!(sorted.windows(2).all(|w| (w[0].date, w[0].time) <= (w[1].date, w[1].time)));
    }
}
