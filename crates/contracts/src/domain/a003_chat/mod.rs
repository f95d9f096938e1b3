pub mod aggregate;
pub mod seed;

pub use aggregate::{ChatMessage, Conversation, ADMIN_SENDER};
