pub mod details;
pub mod list;

use contracts::domain::a002_guidance_request::RequestStatus;

pub fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge badge--warning",
        RequestStatus::InProgress => "badge badge--primary",
        RequestStatus::Resolved => "badge badge--success",
        RequestStatus::Rejected => "badge badge--error",
    }
}
