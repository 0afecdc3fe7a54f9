//! # WhatsApp Template API Module
//!
//! Business operations behind the template screens of the dashboard: listing,
//! loading a template into an editable form, and submitting forms as new or
//! updated templates once they pass validation.

use crate::{
    forms::{
        template::{self as form, TemplateFormState},
        validation::{self, TemplateFormError},
    },
    metric,
    models::template::{CreateTemplatePayload, MetaTemplate, TemplateMutationResponse},
    services,
};
use serde::Serialize;

/// Outcome of checking a form, as shown inline by the dashboard
#[derive(Debug, Serialize, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Message of the first broken rule, the one that blocks submission
    pub error: Option<String>,
    /// Messages of every broken rule
    pub errors: Vec<String>,
}

/// Retrieves all templates known by the backend.
pub async fn list_templates(
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<Vec<MetaTemplate>> {
    template_service.list_templates().await
}

/// Retrieves a single template as stored by the backend.
pub async fn get_template(
    template_id: &str,
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<MetaTemplate> {
    template_service.get_template(template_id).await
}

/// Loads a template and turns it into an editable form.
pub async fn get_template_form(
    template_id: &str,
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<TemplateFormState> {
    let template = template_service.get_template(template_id).await?;

    Ok(TemplateFormState::from_template(&template))
}

/// Validates the form and submits it as a new template.
///
/// # Returns
/// * `anyhow::Result<TemplateMutationResponse>` - Backend answer, or a
///   [`TemplateFormError`] when the form is not ready to be submitted
pub async fn create_template(
    form: &TemplateFormState,
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<TemplateMutationResponse> {
    check_form(form)?;

    let payload = form::build_create_payload(form);
    let response = template_service.create_template(&payload).await?;

    tracing::info!(
        "Template {} created with status {:?}",
        payload.name,
        response.status
    );
    metric::incr_template_action_statds("create");

    Ok(response)
}

/// Validates the form and replaces the content of an existing template.
pub async fn update_template(
    template_id: &str,
    form: &TemplateFormState,
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<TemplateMutationResponse> {
    check_form(form)?;

    let payload = form::build_update_payload(form);
    let response = template_service
        .update_template(template_id, &payload)
        .await?;

    tracing::info!("Template {} updated", template_id);
    metric::incr_template_action_statds("update");

    Ok(response)
}

/// Deletes a template.
pub async fn delete_template(
    template_id: &str,
    template_service: &services::ImplTemplateService,
) -> anyhow::Result<()> {
    template_service.delete_template(template_id).await?;

    tracing::info!("Template {} deleted", template_id);
    metric::incr_template_action_statds("delete");

    Ok(())
}

/// Checks the form without submitting anything.
pub fn validation_report(form: &TemplateFormState) -> ValidationReport {
    let errors = validation::collect_template_form_errors(form)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    ValidationReport {
        is_valid: errors.is_empty(),
        error: errors.first().cloned(),
        errors,
    }
}

/// Request body the form would be submitted as, only for valid forms.
pub fn preview_payload(form: &TemplateFormState) -> Result<CreateTemplatePayload, TemplateFormError> {
    validation::validate_template_form_state(form)?;

    Ok(form::build_create_payload(form))
}

fn check_form(form: &TemplateFormState) -> Result<(), TemplateFormError> {
    validation::validate_template_form_state(form).inspect_err(|err| {
        tracing::info!("Template form {} rejected: {}", form.name, err);
        metric::incr_template_action_statds("rejected");
    })
}
