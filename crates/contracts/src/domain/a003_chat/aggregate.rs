use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::a001_user::UserRole;
use crate::domain::common::validation::require;
use crate::domain::common::{Entity, RecordId, Searchable, ValidationResult};

/// Sender name used for messages typed in the dashboard.
pub const ADMIN_SENDER: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: RecordId,
    pub sender: String,
    pub text: String,
    pub time: NaiveTime,
    pub read: bool,
}

impl ChatMessage {
    pub fn is_from_admin(&self) -> bool {
        self.sender == ADMIN_SENDER
    }
}

/// Message thread between the admin desk and one community member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: RecordId,
    pub participant: String,
    #[serde(rename = "participantRole")]
    pub participant_role: UserRole,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(participant: &str, participant_role: UserRole) -> Self {
        Self {
            id: RecordId::default(),
            participant: participant.trim().to_string(),
            participant_role,
            messages: Vec::new(),
        }
    }

    /// Appends an admin message. Messages are local only; nothing is sent.
    pub fn send(&mut self, text: &str, now: NaiveDateTime) -> ValidationResult<RecordId> {
        require("Message", text)?;
        let millis = now.and_utc().timestamp_millis();
        let last = self.messages.iter().map(|m| m.id.0).max().unwrap_or(0);
        let id = RecordId(if millis > last { millis } else { last + 1 });
        self.messages.push(ChatMessage {
            id,
            sender: ADMIN_SENDER.to_string(),
            text: text.trim().to_string(),
            time: now.time(),
            read: true,
        });
        Ok(id)
    }

    /// Marks every incoming message read; returns how many changed.
    pub fn mark_read(&mut self) -> usize {
        let mut changed = 0;
        for m in self.messages.iter_mut().filter(|m| !m.read) {
            m.read = true;
            changed += 1;
        }
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Entity for Conversation {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Conversation"
    }

    fn list_name() -> &'static str {
        "Conversations"
    }
}

impl Searchable for Conversation {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.participant.as_str()];
        if let Some(m) = self.last_message() {
            fields.push(m.text.as_str());
        }
        fields
    }
}

pub fn total_unread(conversations: &[Conversation]) -> usize {
    conversations.iter().map(Conversation::unread_count).sum()
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;
    use crate::domain::common::search::filter_list;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_send_appends_admin_message() {
        let mut c = seed::conversations().remove(0);
        let before = c.messages.len();
        let id = c.send("  See you on Sunday ", at(9, 15)).unwrap();
        assert_eq!(c.messages.len(), before + 1);
        let last = c.last_message().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "See you on Sunday");
        assert!(last.is_from_admin());
        assert!(last.read);
        assert_eq!(last.time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    }

    #[test]
    fn test_send_rejects_empty_text() {
        let mut c = Conversation::new("Priya Sharma", UserRole::Devotee);
        assert!(c.send("   ", at(9, 0)).is_err());
        assert!(c.messages.is_empty());
    }

    #[test]
    fn test_send_same_instant_keeps_ids_unique() {
        let mut c = Conversation::new("Priya Sharma", UserRole::Devotee);
        let a = c.send("one", at(9, 0)).unwrap();
        let b = c.send("two", at(9, 0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mark_read_clears_unread() {
        let mut convs = seed::conversations();
        let total = total_unread(&convs);
        assert!(total > 0);
        let c = convs.iter_mut().find(|c| c.unread_count() > 0).unwrap();
        let n = c.unread_count();
        assert_eq!(c.mark_read(), n);
        assert_eq!(c.unread_count(), 0);
        assert_eq!(total_unread(&convs), total - n);
    }

    #[test]
    fn test_search_by_participant() {
        let convs = seed::conversations();
        let found = filter_list(&convs, "ramesh");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].participant_role, UserRole::Counsellor);
    }
}
