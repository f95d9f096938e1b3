use super::aggregate::{Event, EventCategory, EventType};
use crate::domain::common::{hm, ymd, RecordId};

struct Row {
    id: i64,
    title: &'static str,
    event_type: EventType,
    category: EventCategory,
    description: &'static str,
    location: &'static str,
    venue: &'static str,
    date: (i32, u32, u32),
    time: (u32, u32),
    organizer: &'static str,
    contact: (&'static str, &'static str, &'static str),
    attendees: (u32, u32),
    flags: (bool, bool, bool),
}

impl From<Row> for Event {
    fn from(r: Row) -> Self {
        let (y, m, d) = r.date;
        let (name, phone, email) = r.contact;
        let (max, registered) = r.attendees;
        let (featured, free, registration) = r.flags;
        Event {
            id: RecordId(r.id),
            title: r.title.to_string(),
            event_type: r.event_type,
            category: r.category,
            description: r.description.to_string(),
            location: r.location.to_string(),
            venue: r.venue.to_string(),
            date: ymd(y, m, d),
            time: hm(r.time.0, r.time.1),
            organizer: r.organizer.to_string(),
            contact_name: name.to_string(),
            contact_phone: phone.to_string(),
            contact_email: email.to_string(),
            max_attendees: max,
            registered_attendees: registered,
            is_featured: featured,
            is_free: free,
            requires_registration: registration,
        }
    }
}

/// Sample events around January 2025
pub fn events() -> Vec<Event> {
    vec![
        Row {
            id: 1,
            title: "Makar Sankranti Utsav",
            event_type: EventType::Offline,
            category: EventCategory::Festival,
            description: "Kite festival, til-gul distribution and evening aarti.",
            location: "Pune",
            venue: "Community Centre Grounds",
            date: (2025, 1, 14),
            time: (16, 0),
            organizer: "Festivals Committee",
            contact: ("Kavita Rao", "+91 98220 11223", "kavita.rao@community.org"),
            attendees: (500, 342),
            flags: (true, true, false),
        },
        Row {
            id: 2,
            title: "Weekly Online Satsang",
            event_type: EventType::Online,
            category: EventCategory::Satsang,
            description: "Bhajans followed by a short discourse on the Gita.",
            location: "Online",
            venue: "",
            date: (2025, 1, 19),
            time: (19, 30),
            organizer: "Ramesh Kulkarni",
            contact: ("Ramesh Kulkarni", "+91 98450 33445", "ramesh.k@community.org"),
            attendees: (0, 87),
            flags: (false, true, true),
        },
        Row {
            id: 3,
            title: "Free Health Check-up Camp",
            event_type: EventType::Offline,
            category: EventCategory::Health,
            description: "Blood pressure, sugar and eye screening by volunteer doctors.",
            location: "Mumbai",
            venue: "Seva Hall, Dadar",
            date: (2025, 2, 2),
            time: (9, 0),
            organizer: "Seva Team",
            contact: ("Sunita Menon", "+91 99200 55667", "sunita.m@community.org"),
            attendees: (200, 64),
            flags: (true, true, true),
        },
        Row {
            id: 4,
            title: "Youth Leadership Workshop",
            event_type: EventType::Hybrid,
            category: EventCategory::Youth,
            description: "Two-day workshop on leadership and public speaking.",
            location: "Bengaluru",
            venue: "Conference Room B",
            date: (2025, 2, 15),
            time: (10, 0),
            organizer: "Education Wing",
            contact: ("Arjun Mehta", "+91 90080 77889", "arjun.m@community.org"),
            attendees: (60, 60),
            flags: (false, false, true),
        },
        Row {
            id: 5,
            title: "Diwali Deepotsav",
            event_type: EventType::Offline,
            category: EventCategory::Festival,
            description: "Lighting of a thousand diyas and cultural programme.",
            location: "Pune",
            venue: "Main Temple Courtyard",
            date: (2024, 11, 1),
            time: (18, 0),
            organizer: "Festivals Committee",
            contact: ("Kavita Rao", "+91 98220 11223", "kavita.rao@community.org"),
            attendees: (0, 1200),
            flags: (false, true, false),
        },
        Row {
            id: 6,
            title: "Meditation Basics",
            event_type: EventType::Online,
            category: EventCategory::Workshop,
            description: "Introductory guided meditation series for beginners.",
            location: "Online",
            venue: "",
            date: (2024, 12, 10),
            time: (7, 0),
            organizer: "Sunita Menon",
            contact: ("Sunita Menon", "+91 99200 55667", "sunita.m@community.org"),
            attendees: (100, 73),
            flags: (false, false, true),
        },
    ]
    .into_iter()
    .map(Event::from)
    .collect()
}
