pub mod aggregate;
pub mod seed;

pub use aggregate::{departments, Job, JobDto, JobFilter, JobStatus, JobType};
