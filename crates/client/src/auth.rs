//! Auth endpoints.
//!
//! `login` and `register` return a [`Session`] value; attaching it to a
//! client with [`ApiClient::with_session`](crate::ApiClient::with_session)
//! is the caller's move.

use givehub_core::model::{
    ChangePassword, Credentials, RegisterUser, SessionPayload, UpdateProfile, User,
};
use givehub_core::validation;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::session::Session;

impl ApiClient {
    /// `POST /api/auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        validation::validate_request(credentials)?;

        let request = self.request(Method::POST, "/api/auth/login").json(credentials);
        let payload: SessionPayload = self.send_json(request, "login").await?;

        tracing::info!(user_id = %payload.user.id, role = %payload.user.role, "Signed in");
        Ok(Session::from(payload))
    }

    /// `POST /api/auth/register` — creates the account and signs it in.
    pub async fn register(&self, input: &RegisterUser) -> Result<Session, ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::POST, "/api/auth/register").json(input);
        let payload: SessionPayload = self.send_json(request, "register").await?;

        tracing::info!(user_id = %payload.user.id, "Account registered");
        Ok(Session::from(payload))
    }

    /// `PUT /api/auth/update-profile` — returns the updated account.
    pub async fn update_profile(&self, input: &UpdateProfile) -> Result<User, ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::PUT, "/api/auth/update-profile").json(input);
        self.send_json(request, "profile update").await
    }

    /// `PUT /api/auth/change-password`
    pub async fn change_password(&self, input: &ChangePassword) -> Result<(), ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::PUT, "/api/auth/change-password").json(input);
        self.send_unit(request, "password change").await
    }
}
