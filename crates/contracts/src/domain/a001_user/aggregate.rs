use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require, require_email};
use crate::domain::common::{
    contains_ci, Choice, Entity, ListFilter, RecordId, Searchable, ValidationResult,
};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Counsellor,
    #[default]
    Devotee,
}

impl Choice for UserRole {
    fn all() -> &'static [Self] {
        &[UserRole::Admin, UserRole::Counsellor, UserRole::Devotee]
    }

    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Counsellor => "counsellor",
            UserRole::Devotee => "devotee",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Counsellor => "Counsellor",
            UserRole::Devotee => "Devotee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl Choice for UserStatus {
    fn all() -> &'static [Self] {
        &[UserStatus::Active, UserStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Admin, counsellor or devotee account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub role: UserRole,
    pub phone: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(rename = "createdOn")]
    pub created_on: NaiveDate,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        };
    }
}

impl Entity for User {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str(), self.email.as_str()]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/edit form for a user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserDto {
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        require("Name", &self.name)?;
        require("Phone", &self.phone)?;
        require_email("Email", &self.email)?;
        Ok(())
    }

    /// New user record; the collection assigns the id.
    pub fn into_user(self, created_by: &str, created_on: NaiveDate) -> User {
        User {
            id: RecordId::default(),
            name: self.name.trim().to_string(),
            role: self.role,
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            status: self.status,
            created_by: created_by.to_string(),
            created_on,
        }
    }

    pub fn apply_to(&self, user: &mut User) {
        user.name = self.name.trim().to_string();
        user.phone = self.phone.trim().to_string();
        user.email = self.email.trim().to_string();
        user.role = self.role;
        user.status = self.status;
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub query: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl ListFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        user.matches_filter(&self.query)
            && self.role.map_or(true, |r| user.role == r)
            && self.status.map_or(true, |s| user.status == s)
    }
}

pub fn count_by_role(users: &[User], role: UserRole) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

/// Users with the given role whose name contains `query`, for pickers.
pub fn names_with_role(users: &[User], role: UserRole, query: &str) -> Vec<String> {
    users
        .iter()
        .filter(|u| u.role == role && u.is_active() && contains_ci(&u.name, query))
        .map(|u| u.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;
    use crate::domain::common::ValidationError;

    fn dto() -> UserDto {
        UserDto {
            name: "  Meera Iyer ".to_string(),
            phone: "+91 98450 11223".to_string(),
            email: "meera@example.org".to_string(),
            role: UserRole::Counsellor,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_validate_names_missing_field() {
        let mut d = dto();
        d.phone.clear();
        assert_eq!(d.validate(), Err(ValidationError::Required { field: "Phone" }));
        let mut d = dto();
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::Required { field: "Name" }));
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_into_user_trims_and_stamps_creator() {
        let created_on = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let user = dto().into_user("Super Admin", created_on);
        assert_eq!(user.name, "Meera Iyer");
        assert_eq!(user.created_by, "Super Admin");
        assert_eq!(user.created_on, created_on);
        assert_eq!(user.role, UserRole::Counsellor);
    }

    #[test]
    fn test_filter_by_role_and_status() {
        let users = seed::users();
        let counsellors = UserFilter {
            role: Some(UserRole::Counsellor),
            ..Default::default()
        }
        .apply(&users);
        assert!(!counsellors.is_empty());
        assert!(counsellors.iter().all(|u| u.role == UserRole::Counsellor));

        let inactive = UserFilter {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        }
        .apply(&users);
        assert!(inactive.iter().all(|u| !u.is_active()));
    }

    #[test]
    fn test_filter_search_matches_email_and_phone() {
        let users = seed::users();
        let first = &users[0];
        let by_email = UserFilter {
            query: first.email.to_uppercase(),
            ..Default::default()
        }
        .apply(&users);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, first.id);
    }

    #[test]
    fn test_role_codes_round_trip_through_choice() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(*role));
        }
        assert_eq!(UserRole::from_code("owner"), None);
    }

    #[test]
    fn test_toggle_status() {
        let mut user = seed::users().remove(0);
        let before = user.status;
        user.toggle_status();
        assert_ne!(user.status, before);
        user.toggle_status();
        assert_eq!(user.status, before);
    }
}
