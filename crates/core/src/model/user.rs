//! User accounts, roles, and the embedded user reference form.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// Account role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Whether this role may act on other users' applications and manage
    /// campaigns.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full user account as returned by the users and auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Deactivated accounts keep their records but cannot sign in.
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// The embedded form of a user carried on other entities.
///
/// Populated references omit fields the full account carries, and some
/// older records omit the role entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A reference to a user: a populated summary object or a bare id string,
/// depending on whether the endpoint populated the relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Embedded(UserSummary),
    Id(EntityId),
}

impl UserRef {
    /// The referenced user's id regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            UserRef::Embedded(user) => &user.id,
            UserRef::Id(id) => id,
        }
    }

    /// Display name, when the reference is populated and carries one.
    pub fn full_name(&self) -> Option<&str> {
        match self {
            UserRef::Embedded(user) => user.full_name.as_deref(),
            UserRef::Id(_) => None,
        }
    }

    /// True when the reference is populated with an admin role.
    pub fn is_admin(&self) -> bool {
        match self {
            UserRef::Embedded(user) => user.role.is_some_and(Role::is_admin),
            UserRef::Id(_) => false,
        }
    }
}

/// Request body for `POST /api/users/create-admin` (superadmin action).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdmin {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request body for `PUT /api/users/{id}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRole {
    pub role: Role,
}

fn default_true() -> bool {
    true
}
