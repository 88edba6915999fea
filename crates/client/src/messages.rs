//! Conversation message endpoints.

use givehub_core::model::{Message, SendMessage};
use givehub_core::validation;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `POST /api/messages` — append a message to an application's
    /// thread. Returns the created message with its server id and
    /// timestamp.
    pub async fn send_message(&self, input: &SendMessage) -> Result<Message, ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::POST, "/api/messages").json(input);
        self.send_json(request, "message send").await
    }
}
