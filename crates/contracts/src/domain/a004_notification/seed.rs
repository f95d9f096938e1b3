use super::aggregate::{Audience, Notification};
use crate::domain::common::{ymd, RecordId};

/// Sample notifications
pub fn notifications() -> Vec<Notification> {
    let rows: [(i64, &str, &str, Audience, (i32, u32, u32), bool); 5] = [
        (
            1,
            "New guidance request",
            "Priya Sharma submitted a spiritual guidance request.",
            Audience::Admins,
            (2025, 1, 6),
            false,
        ),
        (
            2,
            "Counsellor onboarded",
            "Sunita Menon has been added as a counsellor.",
            Audience::All,
            (2024, 3, 19),
            true,
        ),
        (
            3,
            "Job posting closing soon",
            "Applications for Temple Office Assistant close this Friday.",
            Audience::Devotees,
            (2025, 1, 3),
            false,
        ),
        (
            4,
            "Event reminder",
            "Makar Sankranti celebration starts at 7 am on 14 January.",
            Audience::All,
            (2025, 1, 10),
            false,
        ),
        (
            5,
            "Pending requests",
            "Three requests have been waiting for more than two days.",
            Audience::Counsellors,
            (2025, 1, 9),
            true,
        ),
    ];
    rows.into_iter()
        .map(|(id, title, message, audience, (y, m, d), read)| Notification {
            id: RecordId(id),
            title: title.to_string(),
            message: message.to_string(),
            audience,
            created_on: ymd(y, m, d),
            read,
        })
        .collect()
}
