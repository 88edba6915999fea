//! User management endpoints (admin surface).

use givehub_core::model::{CreateAdmin, Role, UpdateRole, User};
use givehub_core::validation;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /api/users` — every account (admin listing).
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.request(Method::GET, "/api/users");
        self.send_json(request, "user list").await
    }

    /// `POST /api/users/create-admin` — superadmin action.
    pub async fn create_admin(&self, input: &CreateAdmin) -> Result<User, ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::POST, "/api/users/create-admin").json(input);
        let user: User = self.send_json(request, "admin create").await?;

        tracing::info!(user_id = %user.id, "Admin account created");
        Ok(user)
    }

    /// `PUT /api/users/{id}/role`
    pub async fn set_user_role(&self, id: &str, role: Role) -> Result<User, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/users/{id}/role"))
            .json(&UpdateRole { role });
        let user: User = self.send_json(request, "user role").await?;

        tracing::info!(user_id = %id, role = %role, "User role updated");
        Ok(user)
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/users/{id}"));
        self.send_unit(request, "user delete").await
    }
}
