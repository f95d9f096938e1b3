pub mod form;
pub mod list;

use contracts::domain::a005_job::JobStatus;

pub fn status_badge_class(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Open => "badge badge--success",
        JobStatus::Closed => "badge badge--error",
        JobStatus::Draft => "badge badge--neutral",
    }
}
