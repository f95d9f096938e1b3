use chrono::{NaiveDate, NaiveTime};

use super::RecordId;

/// Form validation failure. The `Display` text is what the UI alerts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("{field} does not match")]
    Mismatch { field: &'static str },

    #[error("{kind} \"{name}\" already exists")]
    Duplicate { kind: &'static str, name: String },

    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: RecordId },
}

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Required-field presence check; whitespace-only counts as missing.
pub fn require(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Required e-mail with a minimal `local@domain.tld` shape check.
pub fn require_email(field: &'static str, value: &str) -> ValidationResult {
    require(field, value)?;
    check_email_shape(field, value)
}

/// Same as [`require_email`] but an empty value is accepted.
pub fn optional_email(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Ok(());
    }
    check_email_shape(field, value)
}

fn check_email_shape(field: &'static str, value: &str) -> ValidationResult {
    let invalid = || ValidationError::Invalid {
        field,
        reason: "expected an address like name@example.org".to_string(),
    };
    let value = value.trim();
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || value.contains(char::is_whitespace)
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(())
}

/// Parses an `<input type="date">` value (`YYYY-MM-DD`).
pub fn parse_date(field: &'static str, value: &str) -> ValidationResult<NaiveDate> {
    require(field, value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ValidationError::Invalid {
        field,
        reason: e.to_string(),
    })
}

/// Parses an `<input type="time">` value (`HH:MM`, seconds optional).
pub fn parse_time(field: &'static str, value: &str) -> ValidationResult<NaiveTime> {
    require(field, value)?;
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| ValidationError::Invalid {
            field,
            reason: e.to_string(),
        })
}

/// Parses a non-negative whole number; blank means zero.
pub fn parse_count(field: &'static str, value: &str) -> ValidationResult<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse::<u32>().map_err(|_| ValidationError::Invalid {
        field,
        reason: "expected a whole number".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(
            require("Name", "   "),
            Err(ValidationError::Required { field: "Name" })
        );
        assert!(require("Name", "Asha").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(require_email("Email", "asha@example.org").is_ok());
        assert!(require_email("Email", "asha@example").is_err());
        assert!(require_email("Email", "@example.org").is_err());
        assert!(require_email("Email", "a b@example.org").is_err());
        assert!(require_email("Email", "a@b@example.org").is_err());
        assert_eq!(
            require_email("Email", ""),
            Err(ValidationError::Required { field: "Email" })
        );
        assert!(optional_email("Email", "").is_ok());
        assert!(optional_email("Email", "nope").is_err());
    }

    #[test]
    fn test_parse_date_and_time() {
        assert_eq!(
            parse_date("Date", "2025-02-14"),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap())
        );
        assert!(parse_date("Date", "14.02.2025").is_err());
        assert_eq!(
            parse_time("Time", "18:30"),
            Ok(NaiveTime::from_hms_opt(18, 30, 0).unwrap())
        );
        assert_eq!(
            parse_time("Time", "18:30:15"),
            Ok(NaiveTime::from_hms_opt(18, 30, 15).unwrap())
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("Seats", ""), Ok(0));
        assert_eq!(parse_count("Seats", " 120 "), Ok(120));
        assert!(parse_count("Seats", "-3").is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ValidationError::Required { field: "Category name" };
        assert_eq!(err.to_string(), "Category name is required");
        let err = ValidationError::NotFound {
            kind: "Job",
            id: RecordId(7),
        };
        assert_eq!(err.to_string(), "Job #7 not found");
    }
}
