//! Pre-submission checks for the template form.
//!
//! These are client-side guards only: the messaging provider runs its own
//! review once the template is submitted.

use super::template::{ButtonForm, ComponentKind, FormComponent, TemplateFormState};
use crate::{
    models::template::{ButtonType, HeaderFormat},
    utils,
};
use derive_more::{Display, Error};

/// Rule violated by a template form. `Display` gives the message shown to the user.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormError {
    #[display("Cada tipo de componente (HEADER, BODY, FOOTER, BUTTONS) solo puede aparecer una vez")]
    DuplicateComponent,
    #[display("El nombre de la plantilla es obligatorio")]
    MissingName,
    #[display("El idioma de la plantilla es obligatorio")]
    MissingLanguage,
    #[display("La categoría de la plantilla es obligatoria")]
    MissingCategory,
    #[display("El cuerpo (BODY) de la plantilla es obligatorio")]
    MissingBody,
    #[display("El encabezado de tipo texto necesita contenido")]
    MissingHeaderText,
    #[display("Agrega un ejemplo para cada variable del encabezado")]
    MissingHeaderExamples,
    #[display("Agrega un ejemplo para cada variable del cuerpo")]
    MissingBodyExamples,
    #[display("Todos los botones necesitan texto, y los de tipo URL o teléfono su enlace o número")]
    InvalidButtons,
    #[display("Las variables de la plantilla no pueden pasar de 100")]
    VariableOutOfRange,
}

/// Checks the form before it is submitted, stopping at the first broken rule.
///
/// Rules, in order: one component per type, name, language, category,
/// non-blank BODY, non-blank TEXT header, header examples, body examples,
/// buttons and placeholder range.
pub fn validate_template_form_state(form: &TemplateFormState) -> Result<(), TemplateFormError> {
    match collect_template_form_errors(form).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every broken rule of the form, in the same order [`validate_template_form_state`] checks them.
pub fn collect_template_form_errors(form: &TemplateFormState) -> Vec<TemplateFormError> {
    let mut errors = Vec::new();

    if has_duplicate_kinds(&form.components) {
        errors.push(TemplateFormError::DuplicateComponent);
    }
    if is_blank(&form.name) {
        errors.push(TemplateFormError::MissingName);
    }
    if is_blank(&form.language) {
        errors.push(TemplateFormError::MissingLanguage);
    }
    if is_blank(&form.category) {
        errors.push(TemplateFormError::MissingCategory);
    }

    let body = form.component(ComponentKind::Body);
    if body.and_then(FormComponent::text).is_none_or(is_blank) {
        errors.push(TemplateFormError::MissingBody);
    }

    if let Some(FormComponent::Header {
        format: HeaderFormat::Text,
        text,
        examples,
    }) = form.component(ComponentKind::Header)
    {
        if is_blank(text) {
            errors.push(TemplateFormError::MissingHeaderText);
        }
        if !examples_cover_placeholders(text, examples) {
            errors.push(TemplateFormError::MissingHeaderExamples);
        }
    }

    if let Some(FormComponent::Body { text, examples }) = body {
        if !examples_cover_placeholders(text, examples) {
            errors.push(TemplateFormError::MissingBodyExamples);
        }
    }

    if let Some(FormComponent::Buttons { buttons }) = form.component(ComponentKind::Buttons) {
        if !buttons.iter().all(button_is_valid) {
            errors.push(TemplateFormError::InvalidButtons);
        }
    }

    if form
        .components
        .iter()
        .filter_map(FormComponent::text)
        .any(utils::has_out_of_range_variable)
    {
        errors.push(TemplateFormError::VariableOutOfRange);
    }

    errors
}

fn has_duplicate_kinds(components: &[FormComponent]) -> bool {
    components.iter().enumerate().any(|(pos, component)| {
        components[..pos]
            .iter()
            .any(|previous| previous.kind() == component.kind())
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Every `{{N}}` in `text` needs a non-blank `examples[N-1]`.
fn examples_cover_placeholders(text: &str, examples: &[String]) -> bool {
    utils::extract_variable_indexes(Some(text))
        .iter()
        .all(|idx| {
            examples
                .get((*idx - 1) as usize)
                .is_some_and(|value| !is_blank(value))
        })
}

fn button_is_valid(button: &ButtonForm) -> bool {
    let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !is_blank(v));

    if is_blank(&button.text) {
        return false;
    }

    match button.button_type {
        ButtonType::Url => has(&button.url),
        ButtonType::PhoneNumber => has(&button.phone_number),
        _ => true,
    }
}
