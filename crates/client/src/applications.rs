//! Application endpoints.

use givehub_core::model::{Application, SubmitApplication, UpdateApplicationStatus};
use givehub_core::validation::{self, DocumentUpload};
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /api/applications` — every application (the admin review
    /// queue).
    pub async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        let request = self.request(Method::GET, "/api/applications");
        self.send_json(request, "application list").await
    }

    /// `GET /api/applications/my-applications` — the signed-in user's
    /// own.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        let request = self.request(Method::GET, "/api/applications/my-applications");
        self.send_json(request, "my applications").await
    }

    /// `GET /api/applications/{id}`
    pub async fn application(&self, id: &str) -> Result<Application, ApiError> {
        let request = self.request(Method::GET, &format!("/api/applications/{id}"));
        self.send_json(request, "application").await
    }

    /// `POST /api/applications` — multipart submission with up to
    /// [`validation::MAX_DOCUMENTS`] supporting documents.
    ///
    /// Field rules and the document limits are checked before any bytes
    /// go out.
    pub async fn submit_application(
        &self,
        input: &SubmitApplication,
        documents: &[DocumentUpload],
    ) -> Result<Application, ApiError> {
        validation::validate_request(input)?;
        validation::validate_documents(documents)?;

        let mut form = reqwest::multipart::Form::new()
            .text("title", input.title.clone())
            .text("description", input.description.clone());
        if let Some(campaign) = &input.campaign {
            form = form.text("campaign", campaign.clone());
        }
        for document in documents {
            let part = reqwest::multipart::Part::bytes(document.bytes.clone())
                .file_name(document.file_name.clone())
                .mime_str(&document.content_type)?;
            form = form.part("documents", part);
        }

        let request = self.request(Method::POST, "/api/applications").multipart(form);
        let application: Application = self.send_json(request, "application submit").await?;

        tracing::info!(
            application_id = %application.id,
            documents = documents.len(),
            "Application submitted"
        );

        Ok(application)
    }

    /// `PUT /api/applications/{id}/status` — admin decision, with an
    /// optional review note recorded on the thread.
    pub async fn set_application_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatus,
    ) -> Result<Application, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/applications/{id}/status"))
            .json(update);
        self.send_json(request, "application status").await
    }

    /// `DELETE /api/applications/{id}`
    pub async fn delete_application(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/applications/{id}"));
        self.send_unit(request, "application delete").await
    }
}
