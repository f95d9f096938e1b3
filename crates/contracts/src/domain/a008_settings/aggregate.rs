//! Records behind the profile and settings screens.

use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require, require_email};
use crate::domain::common::{Choice, ValidationError, ValidationResult};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Signed-in administrator as shown on the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub bio: String,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Super Admin".to_string(),
            email: "admin@community.org".to_string(),
            phone: "+91 98765 43210".to_string(),
            designation: "Community Administrator".to_string(),
            bio: "Oversees members, counsellors and community programmes.".to_string(),
        }
    }
}

impl AdminProfile {
    pub fn validate(&self) -> ValidationResult {
        require("Name", &self.name)?;
        require_email("Email", &self.email)?;
        require("Phone", &self.phone)?;
        Ok(())
    }

    /// Two-letter avatar text.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Choice for Theme {
    fn all() -> &'static [Self] {
        &[Theme::Light, Theme::Dark]
    }

    fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "organizationName")]
    pub organization_name: String,
    #[serde(rename = "supportEmail")]
    pub support_email: String,
    pub theme: Theme,
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: usize,
    #[serde(rename = "emailNotifications")]
    pub email_notifications: bool,
    #[serde(rename = "smsNotifications")]
    pub sms_notifications: bool,
    #[serde(rename = "allowSelfSignup")]
    pub allow_self_signup: bool,
    #[serde(rename = "maintenanceMode")]
    pub maintenance_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            organization_name: "Community Seva Trust".to_string(),
            support_email: "support@community.org".to_string(),
            theme: Theme::Light,
            items_per_page: 10,
            email_notifications: true,
            sms_notifications: false,
            allow_self_signup: true,
            maintenance_mode: false,
        }
    }
}

impl AppSettings {
    /// `page_sizes` are the page sizes the list pages offer.
    pub fn validate(&self, page_sizes: &[usize]) -> ValidationResult {
        require("Organization name", &self.organization_name)?;
        require_email("Support email", &self.support_email)?;
        if !page_sizes.contains(&self.items_per_page) {
            let allowed = page_sizes
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ValidationError::Invalid {
                field: "Items per page",
                reason: format!("must be one of {allowed}"),
            });
        }
        Ok(())
    }

    /// Pretty JSON for the export preview.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Change-password form on the settings page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordChange {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn validate(&self) -> ValidationResult {
        require("Current password", &self.current)?;
        require("New password", &self.new_password)?;
        require("Confirm password", &self.confirm)?;
        validate_password_strength("New password", &self.new_password)?;
        if self.new_password == self.current {
            return Err(ValidationError::Invalid {
                field: "New password",
                reason: "must differ from the current password".to_string(),
            });
        }
        if self.new_password != self.confirm {
            return Err(ValidationError::Mismatch {
                field: "Confirm password",
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_password_strength(field: &'static str, value: &str) -> ValidationResult {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::Invalid {
            field,
            reason: format!("must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current: current.to_string(),
            new_password: new.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn test_password_change_rules() {
        assert!(change("old-pass", "new-secret", "new-secret").validate().is_ok());
        assert_eq!(
            change("", "new-secret", "new-secret").validate(),
            Err(ValidationError::Required { field: "Current password" })
        );
        assert!(matches!(
            change("old-pass", "short", "short").validate(),
            Err(ValidationError::Invalid { field: "New password", .. })
        ));
        assert_eq!(
            change("old-pass", "new-secret", "new-secreT").validate(),
            Err(ValidationError::Mismatch { field: "Confirm password" })
        );
        assert!(change("same-pass", "same-pass", "same-pass").validate().is_err());
    }

    const PAGE_SIZES: &[usize] = &[10, 25, 50];

    #[test]
    fn test_default_settings_are_valid() {
        AppSettings::default().validate(PAGE_SIZES).unwrap();
        AdminProfile::default().validate().unwrap();
    }

    #[test]
    fn test_items_per_page_must_be_offered() {
        let mut s = AppSettings::default();
        s.items_per_page = 0;
        assert!(s.validate(PAGE_SIZES).is_err());
        s.items_per_page = 25;
        assert!(s.validate(PAGE_SIZES).is_ok());
        s.items_per_page = 37;
        assert_eq!(
            s.validate(PAGE_SIZES),
            Err(ValidationError::Invalid {
                field: "Items per page",
                reason: "must be one of 10, 25, 50".to_string(),
            })
        );
    }

    #[test]
    fn test_imported_page_size_is_checked() {
        let mut s = AppSettings::default();
        s.items_per_page = 37;
        let imported = AppSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(imported.items_per_page, 37);
        assert!(imported.validate(PAGE_SIZES).is_err());
    }

    #[test]
    fn test_json_export_uses_camel_case() {
        let s = AppSettings::default();
        let json = s.to_json().unwrap();
        assert!(json.contains("\"organizationName\""));
        assert!(json.contains("\"theme\": \"Light\""));
        assert_eq!(AppSettings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_initials() {
        assert_eq!(AdminProfile::default().initials(), "SA");
        let p = AdminProfile {
            name: "kavita".to_string(),
            ..Default::default()
        };
        assert_eq!(p.initials(), "K");
    }
}
