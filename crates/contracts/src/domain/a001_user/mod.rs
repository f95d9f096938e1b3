pub mod aggregate;
pub mod seed;

pub use aggregate::{count_by_role, User, UserDto, UserFilter, UserRole, UserStatus};
