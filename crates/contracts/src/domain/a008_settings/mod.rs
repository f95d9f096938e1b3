pub mod aggregate;

pub use aggregate::{AdminProfile, AppSettings, PasswordChange, Theme, MIN_PASSWORD_LEN};
