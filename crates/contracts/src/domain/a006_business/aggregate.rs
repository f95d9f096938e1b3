use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{optional_email, require};
use crate::domain::common::{Entity, ListFilter, RecordId, Searchable, ValidationResult};

/// Business listed in the community directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// 0.0 ..= 5.0
    pub rating: f32,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    pub description: String,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

impl Business {
    pub fn toggle_verified(&mut self) {
        self.is_verified = !self.is_verified;
    }

    /// Rating as filled/empty stars, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = self.rating.round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

impl Entity for Business {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Business"
    }

    fn list_name() -> &'static str {
        "Businesses"
    }
}

impl Searchable for Business {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.sub_category.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessDto {
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub description: String,
    pub is_verified: bool,
}

impl BusinessDto {
    pub fn from_business(b: &Business) -> Self {
        Self {
            name: b.name.clone(),
            category: b.category.clone(),
            sub_category: b.sub_category.clone(),
            location: b.location.clone(),
            phone: b.phone.clone(),
            email: b.email.clone(),
            website: b.website.clone(),
            description: b.description.clone(),
            is_verified: b.is_verified,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        require("Business name", &self.name)?;
        require("Category", &self.category)?;
        require("Location", &self.location)?;
        require("Phone", &self.phone)?;
        optional_email("Email", &self.email)?;
        Ok(())
    }

    /// New listing without reviews.
    pub fn into_business(self) -> Business {
        let mut b = Business {
            id: RecordId::default(),
            name: String::new(),
            category: String::new(),
            sub_category: String::new(),
            location: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            rating: 0.0,
            review_count: 0,
            description: String::new(),
            is_verified: false,
        };
        self.apply_to(&mut b);
        b
    }

    pub fn apply_to(&self, b: &mut Business) {
        b.name = self.name.trim().to_string();
        b.category = self.category.trim().to_string();
        b.sub_category = self.sub_category.trim().to_string();
        b.location = self.location.trim().to_string();
        b.phone = self.phone.trim().to_string();
        b.email = self.email.trim().to_string();
        b.website = self.website.trim().to_string();
        b.description = self.description.trim().to_string();
        b.is_verified = self.is_verified;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessFilter {
    pub query: String,
    pub category: Option<String>,
    pub verified_only: bool,
}

impl ListFilter<Business> for BusinessFilter {
    fn matches(&self, b: &Business) -> bool {
        b.matches_filter(&self.query)
            && self
                .category
                .as_deref()
                .map_or(true, |c| b.category.eq_ignore_ascii_case(c))
            && (!self.verified_only || b.is_verified)
    }
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;

    #[test]
    fn test_verified_only_filter() {
        let all = seed::businesses();
        let filter = BusinessFilter {
            verified_only: true,
            ..Default::default()
        };
        let verified = filter.apply(&all);
        assert!(verified.len() < all.len());
        assert!(verified.iter().all(|b| b.is_verified));
    }

    #[test]
    fn test_search_matches_location() {
        let all = seed::businesses();
        let filter = BusinessFilter {
            query: "PUNE".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&all).iter().all(|b| b.location.contains("Pune")));
    }

    #[test]
    fn test_toggle_verified_and_stars() {
        let mut b = seed::businesses().remove(0);
        let was = b.is_verified;
        b.toggle_verified();
        assert_ne!(b.is_verified, was);

        b.rating = 4.4;
        assert_eq!(b.stars(), "★★★★☆");
        b.rating = 0.0;
        assert_eq!(b.stars(), "☆☆☆☆☆");
    }

    #[test]
    fn test_new_business_has_no_reviews() {
        let dto = BusinessDto {
            name: "Shree Sweets".to_string(),
            category: "Food & Catering".to_string(),
            location: "Pune".to_string(),
            phone: "020 2553 0000".to_string(),
            ..Default::default()
        };
        dto.validate().unwrap();
        let b = dto.into_business();
        assert_eq!(b.review_count, 0);
        assert_eq!(b.rating, 0.0);
        assert!(!b.is_verified);
    }

    #[test]
    fn test_bad_optional_email_rejected() {
        let dto = BusinessDto {
            name: "X".to_string(),
            category: "Y".to_string(),
            location: "Z".to_string(),
            phone: "1".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
