//! Public contact form endpoint.

use givehub_core::model::ContactRequest;
use givehub_core::validation;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `POST /api/contact/contact` — no session required.
    pub async fn send_contact(&self, input: &ContactRequest) -> Result<(), ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::POST, "/api/contact/contact").json(input);
        self.send_unit(request, "contact send").await
    }
}
