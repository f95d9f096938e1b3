use super::aggregate::{User, UserRole, UserStatus};
use crate::domain::common::{ymd, RecordId};

fn user(
    id: i64,
    name: &str,
    role: UserRole,
    phone: &str,
    email: &str,
    status: UserStatus,
    created_on: (i32, u32, u32),
) -> User {
    User {
        id: RecordId(id),
        name: name.to_string(),
        role,
        phone: phone.to_string(),
        email: email.to_string(),
        status,
        created_by: "Super Admin".to_string(),
        created_on: ymd(created_on.0, created_on.1, created_on.2),
    }
}

/// Sample users shown before anything is created
pub fn users() -> Vec<User> {
    use UserRole::*;
    use UserStatus::*;
    vec![
        user(1, "Super Admin", Admin, "+91 98200 00001", "admin@community.org", Active, (2024, 1, 2)),
        user(2, "Kavita Rao", Admin, "+91 98200 00002", "kavita.rao@community.org", Active, (2024, 2, 11)),
        user(3, "Ramesh Kulkarni", Counsellor, "+91 98450 12001", "ramesh.k@community.org", Active, (2024, 3, 5)),
        user(4, "Sunita Menon", Counsellor, "+91 98450 12002", "sunita.m@community.org", Active, (2024, 3, 19)),
        user(5, "Arjun Mehta", Counsellor, "+91 98450 12003", "arjun.mehta@community.org", Inactive, (2024, 4, 7)),
        user(6, "Priya Sharma", Devotee, "+91 99870 45001", "priya.sharma@mail.com", Active, (2024, 5, 14)),
        user(7, "Vikram Singh", Devotee, "+91 99870 45002", "vikram.singh@mail.com", Active, (2024, 6, 2)),
        user(8, "Lakshmi Narayan", Devotee, "+91 99870 45003", "lakshmi.n@mail.com", Inactive, (2024, 6, 23)),
        user(9, "Anand Joshi", Devotee, "+91 99870 45004", "anand.joshi@mail.com", Active, (2024, 7, 30)),
        user(10, "Deepa Pillai", Devotee, "+91 99870 45005", "deepa.pillai@mail.com", Active, (2024, 8, 16)),
    ]
}
