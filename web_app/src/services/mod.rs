pub mod templates;

use crate::models::template::{
    CreateTemplatePayload, MetaTemplate, TemplateMutationResponse, UpdateTemplatePayload,
};
use async_trait::async_trait;

/// Template CRUD against the backend that mirrors the messaging provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateService {
    async fn list_templates(&self) -> anyhow::Result<Vec<MetaTemplate>>;

    async fn get_template(&self, template_id: &str) -> anyhow::Result<MetaTemplate>;

    async fn create_template(
        &self,
        payload: &CreateTemplatePayload,
    ) -> anyhow::Result<TemplateMutationResponse>;

    /// Replaces the template content, there is no partial update.
    async fn update_template(
        &self,
        template_id: &str,
        payload: &UpdateTemplatePayload,
    ) -> anyhow::Result<TemplateMutationResponse>;

    async fn delete_template(&self, template_id: &str) -> anyhow::Result<()>;
}

pub type ImplTemplateService = Box<dyn TemplateService>;
