pub mod create;
pub mod form;
pub mod list;

use contracts::domain::a001_user::{UserRole, UserStatus};

pub fn role_badge_class(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "badge badge--warning",
        UserRole::Counsellor => "badge badge--primary",
        UserRole::Devotee => "badge badge--neutral",
    }
}

pub fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge badge--success",
        UserStatus::Inactive => "badge badge--error",
    }
}
