//! Promotional offers attached to businesses.
//!
//! `business_id` is informational: it is not checked against the business
//! list, and deleting a business leaves its offers in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{parse_date, require};
use crate::domain::common::{Choice, Entity, RecordId, Searchable, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OfferType {
    #[default]
    Percentage,
    FlatAmount,
    BuyOneGetOne,
    FreeService,
}

impl OfferType {
    /// Whether the offer carries a numeric value.
    pub fn has_value(&self) -> bool {
        matches!(self, OfferType::Percentage | OfferType::FlatAmount)
    }
}

impl Choice for OfferType {
    fn all() -> &'static [Self] {
        &[
            OfferType::Percentage,
            OfferType::FlatAmount,
            OfferType::BuyOneGetOne,
            OfferType::FreeService,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            OfferType::Percentage => "percentage",
            OfferType::FlatAmount => "flat",
            OfferType::BuyOneGetOne => "bogo",
            OfferType::FreeService => "free",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OfferType::Percentage => "Percentage off",
            OfferType::FlatAmount => "Flat amount off",
            OfferType::BuyOneGetOne => "Buy one get one",
            OfferType::FreeService => "Free service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: RecordId,
    #[serde(rename = "businessId")]
    pub business_id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub value: f64,
    pub code: String,
    #[serde(rename = "validFrom")]
    pub valid_from: NaiveDate,
    #[serde(rename = "validTo")]
    pub valid_to: NaiveDate,
    pub terms: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Offer {
    /// Active and `date` falls inside the validity window (inclusive).
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.valid_from <= date && date <= self.valid_to
    }

    pub fn display_value(&self) -> String {
        match self.offer_type {
            OfferType::Percentage => format!("{}% off", trim_float(self.value)),
            OfferType::FlatAmount => format!("₹{} off", trim_float(self.value)),
            OfferType::BuyOneGetOne => "Buy 1 Get 1".to_string(),
            OfferType::FreeService => "Free".to_string(),
        }
    }
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

impl Entity for Offer {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Offer"
    }

    fn list_name() -> &'static str {
        "Offers"
    }
}

impl Searchable for Offer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.code.as_str(), self.description.as_str()]
    }
}

/// Offer form. Dates and value arrive as raw input strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OfferDto {
    pub business_id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub offer_type: OfferType,
    pub value: String,
    pub code: String,
    pub valid_from: String,
    pub valid_to: String,
    pub terms: String,
    pub is_active: bool,
}

impl OfferDto {
    pub fn from_offer(o: &Offer) -> Self {
        Self {
            business_id: Some(o.business_id),
            title: o.title.clone(),
            description: o.description.clone(),
            offer_type: o.offer_type,
            value: if o.offer_type.has_value() {
                trim_float(o.value)
            } else {
                String::new()
            },
            code: o.code.clone(),
            valid_from: o.valid_from.format("%Y-%m-%d").to_string(),
            valid_to: o.valid_to.format("%Y-%m-%d").to_string(),
            terms: o.terms.clone(),
            is_active: o.is_active,
        }
    }

    /// Validates the form and builds the offer (id left for the collection).
    pub fn to_offer(&self) -> ValidationResult<Offer> {
        let business_id = self
            .business_id
            .ok_or(ValidationError::Required { field: "Business" })?;
        require("Offer title", &self.title)?;
        require("Offer code", &self.code)?;
        let value = self.parse_value()?;
        let valid_from = parse_date("Valid from", &self.valid_from)?;
        let valid_to = parse_date("Valid to", &self.valid_to)?;
        if valid_to < valid_from {
            return Err(ValidationError::Invalid {
                field: "Valid to",
                reason: "must not be before the start date".to_string(),
            });
        }
        Ok(Offer {
            id: RecordId::default(),
            business_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            offer_type: self.offer_type,
            value,
            code: self.code.trim().to_uppercase(),
            valid_from,
            valid_to,
            terms: self.terms.trim().to_string(),
            is_active: self.is_active,
        })
    }

    fn parse_value(&self) -> ValidationResult<f64> {
        if !self.offer_type.has_value() {
            return Ok(0.0);
        }
        require("Value", &self.value)?;
        let value: f64 = self
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::Invalid {
                field: "Value",
                reason: "expected a number".to_string(),
            })?;
        let in_range = match self.offer_type {
            OfferType::Percentage => value > 0.0 && value <= 100.0,
            _ => value > 0.0,
        };
        if !in_range {
            return Err(ValidationError::Invalid {
                field: "Value",
                reason: match self.offer_type {
                    OfferType::Percentage => "percentage must be above 0 and at most 100".to_string(),
                    _ => "amount must be above 0".to_string(),
                },
            });
        }
        Ok(value)
    }
}

pub fn active_on(offers: &[Offer], date: NaiveDate) -> usize {
    offers.iter().filter(|o| o.is_valid_on(date)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> OfferDto {
        OfferDto {
            business_id: Some(RecordId(1)),
            title: "Festive discount".to_string(),
            description: String::new(),
            offer_type: OfferType::Percentage,
            value: "15".to_string(),
            code: "diwali15".to_string(),
            valid_from: "2025-01-01".to_string(),
            valid_to: "2025-01-31".to_string(),
            terms: "One per member".to_string(),
            is_active: true,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_valid_offer() {
        let offer = dto().to_offer().unwrap();
        assert_eq!(offer.code, "DIWALI15");
        assert_eq!(offer.value, 15.0);
        assert_eq!(offer.display_value(), "15% off");
        assert!(offer.is_valid_on(d(2025, 1, 1)));
        assert!(offer.is_valid_on(d(2025, 1, 31)));
        assert!(!offer.is_valid_on(d(2025, 2, 1)));
    }

    #[test]
    fn test_business_is_required() {
        let mut o = dto();
        o.business_id = None;
        assert_eq!(
            o.to_offer(),
            Err(ValidationError::Required { field: "Business" })
        );
    }

    #[test]
    fn test_window_must_be_ordered() {
        let mut o = dto();
        o.valid_to = "2024-12-31".to_string();
        assert!(matches!(
            o.to_offer(),
            Err(ValidationError::Invalid { field: "Valid to", .. })
        ));
    }

    #[test]
    fn test_percentage_range() {
        let mut o = dto();
        o.value = "120".to_string();
        assert!(o.to_offer().is_err());
        o.value = "0".to_string();
        assert!(o.to_offer().is_err());
        o.value = "100".to_string();
        assert!(o.to_offer().is_ok());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let mut o = dto();
        o.offer_type = OfferType::FlatAmount;
        for bad in ["inf", "-inf", "NaN", "infinity"] {
            o.value = bad.to_string();
            assert_eq!(
                o.to_offer(),
                Err(ValidationError::Invalid {
                    field: "Value",
                    reason: "expected a number".to_string(),
                })
            );
        }
        o.value = "250".to_string();
        assert_eq!(o.to_offer().map(|offer| offer.value), Ok(250.0));
    }

    #[test]
    fn test_valueless_types_ignore_value() {
        let mut o = dto();
        o.offer_type = OfferType::BuyOneGetOne;
        o.value = "garbage".to_string();
        let offer = o.to_offer().unwrap();
        assert_eq!(offer.value, 0.0);
        assert_eq!(offer.display_value(), "Buy 1 Get 1");
    }

    #[test]
    fn test_inactive_offer_is_never_valid() {
        let mut o = dto();
        o.is_active = false;
        let offer = o.to_offer().unwrap();
        assert!(!offer.is_valid_on(d(2025, 1, 10)));
        assert_eq!(active_on(&[offer], d(2025, 1, 10)), 0);
    }

    #[test]
    fn test_edit_round_trip_keeps_fields() {
        let offer = dto().to_offer().unwrap();
        let again = OfferDto::from_offer(&offer).to_offer().unwrap();
        assert_eq!(again, offer);
    }
}
