use super::aggregate::{GuidanceRequest, RequestStatus, RequestType};
use crate::domain::common::{ymd, RecordId};

struct Row {
    id: i64,
    devotee: &'static str,
    phone: &'static str,
    request_type: RequestType,
    status: RequestStatus,
    requested_on: (i32, u32, u32),
    message: &'static str,
    counsellor: Option<&'static str>,
}

impl From<Row> for GuidanceRequest {
    fn from(r: Row) -> Self {
        let (y, m, d) = r.requested_on;
        Self {
            id: RecordId(r.id),
            devotee: r.devotee.to_string(),
            phone: r.phone.to_string(),
            request_type: r.request_type,
            status: r.status,
            requested_on: ymd(y, m, d),
            message: r.message.to_string(),
            assigned_counsellor: r.counsellor.map(str::to_string),
            response: None,
        }
    }
}

/// Sample guidance requests
pub fn requests() -> Vec<GuidanceRequest> {
    use RequestStatus::*;
    use RequestType::*;
    let rows = vec![
        Row {
            id: 1,
            devotee: "Priya Sharma",
            phone: "+91 99870 45001",
            request_type: Spiritual,
            status: Pending,
            requested_on: (2025, 1, 6),
            message: "I find it hard to keep a daily meditation routine. How do I stay consistent?",
            counsellor: None,
        },
        Row {
            id: 2,
            devotee: "Vikram Singh",
            phone: "+91 99870 45002",
            request_type: Career,
            status: InProgress,
            requested_on: (2025, 1, 4),
            message: "Confused between a job offer abroad and staying close to family.",
            counsellor: Some("Ramesh Kulkarni"),
        },
        Row {
            id: 3,
            devotee: "Lakshmi Narayan",
            phone: "+91 99870 45003",
            request_type: Family,
            status: Resolved,
            requested_on: (2024, 12, 18),
            message: "Looking for guidance on resolving a long-running dispute with my brother.",
            counsellor: Some("Sunita Menon"),
        },
        Row {
            id: 4,
            devotee: "Anand Joshi",
            phone: "+91 99870 45004",
            request_type: Health,
            status: Pending,
            requested_on: (2025, 1, 8),
            message: "Recovering from surgery and feeling low. Would like someone to talk to.",
            counsellor: None,
        },
        Row {
            id: 5,
            devotee: "Deepa Pillai",
            phone: "+91 99870 45005",
            request_type: Education,
            status: InProgress,
            requested_on: (2024, 12, 29),
            message: "My son is choosing a college stream and we need some direction.",
            counsellor: Some("Sunita Menon"),
        },
        Row {
            id: 6,
            devotee: "Rohit Verma",
            phone: "+91 99001 22334",
            request_type: Other,
            status: Rejected,
            requested_on: (2024, 12, 10),
            message: "Want to know if I can sell products at the temple premises.",
            counsellor: None,
        },
        Row {
            id: 7,
            devotee: "Priya Sharma",
            phone: "+91 99870 45001",
            request_type: Family,
            status: Pending,
            requested_on: (2025, 1, 9),
            message: "Planning a naming ceremony and would like help with the rituals.",
            counsellor: None,
        },
    ];
    rows.into_iter().map(GuidanceRequest::from).collect()
}
