use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{Choice, Collection, Entity, RecordId, Searchable, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Audience {
    #[default]
    All,
    Admins,
    Counsellors,
    Devotees,
}

impl Choice for Audience {
    fn all() -> &'static [Self] {
        &[
            Audience::All,
            Audience::Admins,
            Audience::Counsellors,
            Audience::Devotees,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Admins => "admins",
            Audience::Counsellors => "counsellors",
            Audience::Devotees => "devotees",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Audience::All => "Everyone",
            Audience::Admins => "Admins",
            Audience::Counsellors => "Counsellors",
            Audience::Devotees => "Devotees",
        }
    }
}

/// Announcement composed in the dashboard. Never delivered anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    #[serde(rename = "createdOn")]
    pub created_on: NaiveDate,
    pub read: bool,
}

impl Notification {
    /// Returns whether the flag changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }
}

impl Entity for Notification {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Notification"
    }

    fn list_name() -> &'static str {
        "Notifications"
    }
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationDto {
    pub title: String,
    pub message: String,
    pub audience: Audience,
}

impl NotificationDto {
    pub fn validate(&self) -> ValidationResult {
        require("Title", &self.title)?;
        require("Message", &self.message)?;
        Ok(())
    }

    /// Composed notifications start read: the admin wrote them.
    pub fn into_notification(self, created_on: NaiveDate) -> Notification {
        Notification {
            id: RecordId::default(),
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
            audience: self.audience,
            created_on,
            read: true,
        }
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Marks every notification read and returns how many changed.
pub fn mark_all_read(items: &mut Collection<Notification>) -> usize {
    let mut changed = 0;
    items.for_each_mut(|n| {
        if n.mark_read() {
            changed += 1;
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;
    use crate::domain::common::ValidationError;

    #[test]
    fn test_compose_requires_title_and_message() {
        let mut dto = NotificationDto::default();
        assert_eq!(dto.validate(), Err(ValidationError::Required { field: "Title" }));
        dto.title = "Diwali celebration".to_string();
        assert_eq!(dto.validate(), Err(ValidationError::Required { field: "Message" }));
        dto.message = "Join us at 7 pm.".to_string();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_mark_all_read() {
        let mut items = Collection::from_seed(seed::notifications());
        let unread = unread_count(items.items());
        assert!(unread > 0);
        assert_eq!(mark_all_read(&mut items), unread);
        assert_eq!(unread_count(items.items()), 0);
        assert_eq!(mark_all_read(&mut items), 0);
    }

    #[test]
    fn test_composed_notification_is_appended_once() {
        let mut items = Collection::from_seed(seed::notifications());
        let before = items.len();
        let dto = NotificationDto {
            title: "Hall closed".to_string(),
            message: "Maintenance on Monday".to_string(),
            audience: Audience::Devotees,
        };
        let id = items.insert(dto.into_notification(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()));
        assert_eq!(items.len(), before + 1);
        assert_eq!(items.get(id).map(|n| n.audience), Some(Audience::Devotees));
    }
}
