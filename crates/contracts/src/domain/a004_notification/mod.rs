pub mod aggregate;
pub mod seed;

pub use aggregate::{Audience, Notification, NotificationDto};
