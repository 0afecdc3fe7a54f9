//! # Templates Backend Client
//!
//! HTTP implementation of [`TemplateService`] against the backend that proxies
//! the WhatsApp Business template management API.

use crate::{
    models::template::{
        CreateTemplatePayload, MetaTemplate, TemplateListResponse, TemplateMutationResponse,
        UpdateTemplatePayload,
    },
    services::TemplateService,
    utils,
};
use anyhow::Context;
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Failures of the templates backend that callers need to tell apart
#[derive(Debug, Display, Error, PartialEq)]
pub enum TemplateApiError {
    #[display("template {_0} not found")]
    NotFound(#[error(not(source))] String),
}

#[derive(Clone)]
pub struct TemplateApiHandler {
    /// HTTP client for making API requests
    pub client: reqwest::Client,
    /// Base URL of the templates collection, without trailing slash
    pub base_url: String,
    /// Bearer token for the backend
    pub auth_token: String,
}

impl TemplateApiHandler {
    /// Creates a handler sharing the application's HTTP client
    pub fn new(base_url: &str, auth_token: &str) -> Self {
        Self {
            client: utils::REQUEST_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        }
    }

    fn template_url(&self, template_id: &str) -> String {
        format!("{base}/{id}", base = self.base_url, id = template_id)
    }

    /// Sends the request and fails on non-success statuses, keeping the body
    /// of the reply in the error. 404 becomes [`TemplateApiError::NotFound`].
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        template_id: Option<&str>,
    ) -> anyhow::Result<reqwest::Response> {
        let response = request
            .header("accept", "application/json")
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .context("Failed to send request to templates API")?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if let (reqwest::StatusCode::NOT_FOUND, Some(id)) = (status, template_id) {
            return Err(TemplateApiError::NotFound(id.to_string()).into());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| {
                log::warn!("Failed to read templates API error body: {e}");
                "Unable to read response body".to_string()
            });

        anyhow::bail!("Templates API returned error status {}: {}", status, body)
    }
}

#[async_trait]
impl TemplateService for TemplateApiHandler {
    async fn list_templates(&self) -> anyhow::Result<Vec<MetaTemplate>> {
        let response = self.send(self.client.get(&self.base_url), None).await?;

        let page: TemplateListResponse = response
            .json()
            .await
            .context("Failed to parse templates list response")?;

        Ok(page.data)
    }

    async fn get_template(&self, template_id: &str) -> anyhow::Result<MetaTemplate> {
        let response = self
            .send(self.client.get(self.template_url(template_id)), Some(template_id))
            .await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse template {template_id}"))
    }

    async fn create_template(
        &self,
        payload: &CreateTemplatePayload,
    ) -> anyhow::Result<TemplateMutationResponse> {
        let response = self
            .send(self.client.post(&self.base_url).json(payload), None)
            .await?;

        response
            .json()
            .await
            .context("Failed to parse template creation response")
    }

    async fn update_template(
        &self,
        template_id: &str,
        payload: &UpdateTemplatePayload,
    ) -> anyhow::Result<TemplateMutationResponse> {
        let response = self
            .send(
                self.client.post(self.template_url(template_id)).json(payload),
                Some(template_id),
            )
            .await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse template {template_id} update response"))
    }

    async fn delete_template(&self, template_id: &str) -> anyhow::Result<()> {
        self.send(self.client.delete(self.template_url(template_id)), Some(template_id))
            .await?;

        Ok(())
    }
}
