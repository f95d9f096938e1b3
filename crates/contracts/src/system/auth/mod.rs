//! Sign-in screens. Forms are validated only; no session is created.

use serde::{Deserialize, Serialize};

use crate::domain::a008_settings::aggregate::validate_password_strength;
use crate::domain::common::validation::{require, require_email};
use crate::domain::common::{ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult {
        require_email("Email", &self.email)?;
        require("Password", &self.password)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> ValidationResult {
        require("Full name", &self.full_name)?;
        require_email("Email", &self.email)?;
        require("Phone", &self.phone)?;
        require("Password", &self.password)?;
        validate_password_strength("Password", &self.password)?;
        check_confirmation(&self.password, &self.confirm_password)?;
        if !self.accept_terms {
            return Err(ValidationError::Required {
                field: "Terms acceptance",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> ValidationResult {
        require_email("Email", &self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> ValidationResult {
        require("New password", &self.password)?;
        validate_password_strength("New password", &self.password)?;
        check_confirmation(&self.password, &self.confirm_password)
    }
}

fn check_confirmation(password: &str, confirm: &str) -> ValidationResult {
    require("Confirm password", confirm)?;
    if password != confirm {
        return Err(ValidationError::Mismatch {
            field: "Confirm password",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_shape_and_password() {
        let mut f = LoginForm {
            email: "admin@community.org".to_string(),
            password: "x".to_string(),
            remember_me: false,
        };
        assert!(f.validate().is_ok());
        f.email = "admin".to_string();
        assert!(matches!(
            f.validate(),
            Err(ValidationError::Invalid { field: "Email", .. })
        ));
        f.email = "admin@community.org".to_string();
        f.password.clear();
        assert_eq!(
            f.validate(),
            Err(ValidationError::Required { field: "Password" })
        );
    }

    #[test]
    fn test_signup_checks() {
        let ok = SignupForm {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.org".to_string(),
            phone: "98765 00000".to_string(),
            password: "long-enough".to_string(),
            confirm_password: "long-enough".to_string(),
            accept_terms: true,
        };
        assert!(ok.validate().is_ok());

        let mut f = ok.clone();
        f.accept_terms = false;
        assert_eq!(
            f.validate(),
            Err(ValidationError::Required { field: "Terms acceptance" })
        );

        let mut f = ok.clone();
        f.confirm_password = "different".to_string();
        assert_eq!(
            f.validate(),
            Err(ValidationError::Mismatch { field: "Confirm password" })
        );

        let mut f = ok;
        f.password = "short".to_string();
        f.confirm_password = "short".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_forgot_and_reset() {
        assert!(ForgotPasswordForm::default().validate().is_err());
        let f = ForgotPasswordForm {
            email: "a@b.in".to_string(),
        };
        assert!(f.validate().is_ok());

        let r = ResetPasswordForm {
            password: "abcdefgh".to_string(),
            confirm_password: String::new(),
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::Required { field: "Confirm password" })
        );
    }
}
