//! Staff account creation request.
//!
//! Creation mode is a tagged union so each mode carries only the
//! fields it needs: linking an existing console user takes a user id,
//! creating a fresh one takes the new user's details.

use console_core::error::FlowError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::workflow::validation::first_violation;

/// Details for a brand-new console user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffDetails {
    #[validate(length(min = 1, message = "name required"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, message = "phone must be at least 10 digits"))]
    pub phone: Option<String>,
}

/// Body of `POST /staff`, tagged by creation mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum CreateStaffRequest {
    #[serde(rename_all = "camelCase")]
    LinkExistingUser { user_id: Uuid },
    CreateNewUser(NewStaffDetails),
}

impl CreateStaffRequest {
    /// Per-variant validation; the link mode is valid by construction.
    pub fn validate(&self) -> Result<(), FlowError> {
        match self {
            CreateStaffRequest::LinkExistingUser { .. } => Ok(()),
            CreateStaffRequest::CreateNewUser(details) => {
                details.validate().map_err(|errors| first_violation(&errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_mode_needs_only_a_user_id() {
        let request = CreateStaffRequest::LinkExistingUser {
            user_id: Uuid::new_v4(),
        };
        assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mode"], "linkExistingUser");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn create_mode_validates_details() {
        let request = CreateStaffRequest::CreateNewUser(NewStaffDetails {
            name: "Priya".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
        });
        let err = request.validate().unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn create_mode_accepts_complete_details() {
        let request = CreateStaffRequest::CreateNewUser(NewStaffDetails {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            phone: Some("9876543210".to_string()),
        });
        assert!(request.validate().is_ok());
    }
}
