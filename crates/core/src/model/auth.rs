//! Auth request and response payloads.
//!
//! These are wire shapes only. The logged-in session value, and the
//! decision of where (if anywhere) to persist a token, belong to
//! `givehub-client` and its caller.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::User;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Successful auth response: the bearer token plus the account it belongs
/// to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayload {
    pub token: String,
    pub user: User,
}

/// Request body for `PUT /api/auth/update-profile`; only the provided
/// fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request body for `PUT /api/auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_payload_decodes_token_and_user() {
        let payload: SessionPayload = serde_json::from_str(
            r#"{
                "token": "eyJhbGciOi.fake.token",
                "user": {
                    "_id": "u7",
                    "fullName": "Joseph Okafor",
                    "email": "joseph@example.com",
                    "role": "user",
                    "createdAt": "2024-01-15T08:00:00Z"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(payload.token, "eyJhbGciOi.fake.token");
        assert_eq!(payload.user.id, "u7");
    }

    #[test]
    fn profile_update_serializes_only_set_fields() {
        let update = UpdateProfile {
            phone_number: Some("+2348012345678".into()),
            ..UpdateProfile::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "phoneNumber": "+2348012345678" }));
    }
}
