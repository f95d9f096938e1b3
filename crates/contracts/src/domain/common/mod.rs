//! Common types and traits for all entities

pub mod choice;
pub mod collection;
pub mod entity;
pub mod record_id;
pub mod search;
pub mod validation;

// Re-exports
pub use choice::Choice;
pub use collection::Collection;
pub use entity::Entity;
pub use record_id::{IdGenerator, RecordId};
pub use search::{contains_ci, ListFilter, Searchable};
pub use validation::{ValidationError, ValidationResult};

use chrono::{NaiveDate, NaiveTime};

/// Calendar date for seed data; out-of-range input falls back to the epoch.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Wall-clock time for seed data; out-of-range input falls back to midnight.
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
