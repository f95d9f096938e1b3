use super::aggregate::{ChatMessage, Conversation, ADMIN_SENDER};
use crate::domain::a001_user::UserRole;
use crate::domain::common::{hm, RecordId};

fn msg(id: i64, sender: &str, text: &str, time: (u32, u32), read: bool) -> ChatMessage {
    ChatMessage {
        id: RecordId(id),
        sender: sender.to_string(),
        text: text.to_string(),
        time: hm(time.0, time.1),
        read,
    }
}

/// Sample chat threads
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: RecordId(1),
            participant: "Priya Sharma".to_string(),
            participant_role: UserRole::Devotee,
            messages: vec![
                msg(1, "Priya Sharma", "Namaste! Is the Sunday satsang still at 6 pm?", (9, 12), true),
                msg(2, ADMIN_SENDER, "Yes, 6 pm in the main hall.", (9, 20), true),
                msg(3, "Priya Sharma", "Can I bring my parents along?", (9, 41), false),
            ],
        },
        Conversation {
            id: RecordId(2),
            participant: "Ramesh Kulkarni".to_string(),
            participant_role: UserRole::Counsellor,
            messages: vec![
                msg(4, ADMIN_SENDER, "Two new career requests are waiting for you.", (10, 2), true),
                msg(5, "Ramesh Kulkarni", "Thanks, I will pick them up today.", (10, 30), true),
            ],
        },
        Conversation {
            id: RecordId(3),
            participant: "Vikram Singh".to_string(),
            participant_role: UserRole::Devotee,
            messages: vec![
                msg(6, "Vikram Singh", "I have not heard back on my request yet.", (11, 5), false),
                msg(7, "Vikram Singh", "Could someone call me this week?", (11, 6), false),
            ],
        },
        Conversation {
            id: RecordId(4),
            participant: "Sunita Menon".to_string(),
            participant_role: UserRole::Counsellor,
            messages: vec![msg(8, "Sunita Menon", "Updated the notes for the family request.", (16, 45), true)],
        },
    ]
}
