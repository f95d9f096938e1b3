pub mod aggregate;
pub mod seed;

pub use aggregate::{GuidanceRequest, GuidanceRequestDto, RequestFilter, RequestStatus, RequestType};
