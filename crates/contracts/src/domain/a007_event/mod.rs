pub mod aggregate;
pub mod seed;

pub use aggregate::{Event, EventCategory, EventDto, EventFilter, EventType, EventWhen};
