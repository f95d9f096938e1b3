use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{Choice, Entity, ListFilter, RecordId, Searchable, ValidationResult};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    Spiritual,
    Career,
    Family,
    Health,
    Education,
    Other,
}

impl Choice for RequestType {
    fn all() -> &'static [Self] {
        &[
            RequestType::Spiritual,
            RequestType::Career,
            RequestType::Family,
            RequestType::Health,
            RequestType::Education,
            RequestType::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RequestType::Spiritual => "spiritual",
            RequestType::Career => "career",
            RequestType::Family => "family",
            RequestType::Health => "health",
            RequestType::Education => "education",
            RequestType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RequestType::Spiritual => "Spiritual",
            RequestType::Career => "Career",
            RequestType::Family => "Family",
            RequestType::Health => "Health",
            RequestType::Education => "Education",
            RequestType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl RequestStatus {
    /// Still waiting on a counsellor.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::InProgress)
    }
}

impl Choice for RequestStatus {
    fn all() -> &'static [Self] {
        &[
            RequestStatus::Pending,
            RequestStatus::InProgress,
            RequestStatus::Resolved,
            RequestStatus::Rejected,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Resolved => "resolved",
            RequestStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In progress",
            RequestStatus::Resolved => "Resolved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Support ticket submitted by a devotee and handled by a counsellor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceRequest {
    pub id: RecordId,
    pub devotee: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    #[serde(rename = "requestedOn")]
    pub requested_on: NaiveDate,
    pub message: String,
    #[serde(rename = "assignedCounsellor")]
    pub assigned_counsellor: Option<String>,
    pub response: Option<String>,
}

impl GuidanceRequest {
    /// Routes the request to a counsellor. A pending request moves to
    /// `InProgress`; closed requests keep their status.
    pub fn assign(&mut self, counsellor: &str) -> ValidationResult {
        require("Counsellor", counsellor)?;
        self.assigned_counsellor = Some(counsellor.trim().to_string());
        if self.status == RequestStatus::Pending {
            self.status = RequestStatus::InProgress;
        }
        Ok(())
    }

    /// Records the counsellor's reply and resolves the request.
    pub fn respond(&mut self, text: &str) -> ValidationResult {
        require("Response", text)?;
        self.response = Some(text.trim().to_string());
        self.status = RequestStatus::Resolved;
        Ok(())
    }

    pub fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

impl Entity for GuidanceRequest {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Guidance request"
    }

    fn list_name() -> &'static str {
        "Guidance requests"
    }
}

impl Searchable for GuidanceRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.devotee.as_str(), self.phone.as_str(), self.message.as_str()];
        if let Some(c) = &self.assigned_counsellor {
            fields.push(c.as_str());
        }
        fields
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Request logged by an admin on a devotee's behalf
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuidanceRequestDto {
    pub devotee: String,
    pub phone: String,
    pub request_type: RequestType,
    pub message: String,
}

impl GuidanceRequestDto {
    pub fn validate(&self) -> ValidationResult {
        require("Devotee", &self.devotee)?;
        require("Phone", &self.phone)?;
        require("Message", &self.message)?;
        Ok(())
    }

    pub fn into_request(self, requested_on: NaiveDate) -> GuidanceRequest {
        GuidanceRequest {
            id: RecordId::default(),
            devotee: self.devotee.trim().to_string(),
            phone: self.phone.trim().to_string(),
            request_type: self.request_type,
            status: RequestStatus::Pending,
            requested_on,
            message: self.message.trim().to_string(),
            assigned_counsellor: None,
            response: None,
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    pub query: String,
    pub request_type: Option<RequestType>,
    pub status: Option<RequestStatus>,
}

impl ListFilter<GuidanceRequest> for RequestFilter {
    fn matches(&self, r: &GuidanceRequest) -> bool {
        r.matches_filter(&self.query)
            && self.request_type.map_or(true, |t| r.request_type == t)
            && self.status.map_or(true, |s| r.status == s)
    }
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;
    use crate::domain::common::ValidationError;

    fn pending() -> GuidanceRequest {
        seed::requests()
            .into_iter()
            .find(|r| r.status == RequestStatus::Pending)
            .unwrap()
    }

    #[test]
    fn test_assign_moves_pending_to_in_progress() {
        let mut r = pending();
        r.assign(" Ramesh Kulkarni ").unwrap();
        assert_eq!(r.assigned_counsellor.as_deref(), Some("Ramesh Kulkarni"));
        assert_eq!(r.status, RequestStatus::InProgress);
    }

    #[test]
    fn test_assign_keeps_closed_status() {
        let mut r = pending();
        r.set_status(RequestStatus::Rejected);
        r.assign("Sunita Menon").unwrap();
        assert_eq!(r.status, RequestStatus::Rejected);
    }

    #[test]
    fn test_assign_requires_counsellor() {
        let mut r = pending();
        assert_eq!(
            r.assign(""),
            Err(ValidationError::Required { field: "Counsellor" })
        );
        assert!(r.assigned_counsellor.is_none());
    }

    #[test]
    fn test_respond_resolves() {
        let mut r = pending();
        r.respond("Please join the Sunday satsang.").unwrap();
        assert_eq!(r.status, RequestStatus::Resolved);
        assert!(!r.is_open());
        assert!(r.respond("  ").is_err());
    }

    #[test]
    fn test_filter_by_type_and_status() {
        let all = seed::requests();
        let filter = RequestFilter {
            status: Some(RequestStatus::Pending),
            ..Default::default()
        };
        let pending = filter.apply(&all);
        assert!(!pending.is_empty());
        assert!(pending.iter().all(|r| r.status == RequestStatus::Pending));

        let filter = RequestFilter {
            request_type: Some(RequestType::Career),
            query: "zzz-no-match".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn test_new_request_starts_pending() {
        let dto = GuidanceRequestDto {
            devotee: "Anand Joshi".to_string(),
            phone: "+91 99870 45004".to_string(),
            request_type: RequestType::Family,
            message: "Need advice".to_string(),
        };
        dto.validate().unwrap();
        let r = dto.into_request(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
        assert_eq!(r.status, RequestStatus::Pending);
        assert!(r.assigned_counsellor.is_none());
    }
}
