//! JSON endpoints used by the dashboard's WhatsApp template screens.

use crate::{
    api,
    forms::template::TemplateFormState,
    front::{AppState, errors},
};
use ntex::web;

/// Lists the templates to fill the templates table
#[web::get("")]
async fn list_templates(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let templates = api::template::list_templates(&app_state.template_service)
        .await
        .map_err(|e| errors::template_operation_error("at GET /whatsapp/templates", e))?;

    Ok(web::HttpResponse::Ok().json(&templates))
}

/// Blank form to start a new template
#[web::get("/new")]
async fn new_template_form(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&TemplateFormState::empty(&app_state.form_defaults)))
}

/// Checks a form on every change so the dashboard can show the inline error
/// and enable or disable the submit button
#[web::post("/validate")]
async fn validate_template_form(
    form: web::types::Json<TemplateFormState>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::template::validation_report(&form)))
}

/// Request body a valid form would be submitted as
#[web::post("/payload")]
async fn preview_template_payload(
    form: web::types::Json<TemplateFormState>,
) -> Result<impl web::Responder, web::Error> {
    let payload = api::template::preview_payload(&form)
        .map_err(|e| errors::UserError::FormInputValueError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&payload))
}

#[web::get("/{template_id}")]
async fn get_template(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let template_id = path.0.as_str();
    let template = api::template::get_template(template_id, &app_state.template_service)
        .await
        .map_err(|e| {
            errors::template_operation_error(
                &format!("at GET /whatsapp/templates/{template_id}"),
                e,
            )
        })?;

    Ok(web::HttpResponse::Ok().json(&template))
}

/// Editable form of an existing template
#[web::get("/{template_id}/form")]
async fn get_template_form(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let template_id = path.0.as_str();
    let form = api::template::get_template_form(template_id, &app_state.template_service)
        .await
        .map_err(|e| {
            errors::template_operation_error(
                &format!("at GET /whatsapp/templates/{template_id}/form"),
                e,
            )
        })?;

    Ok(web::HttpResponse::Ok().json(&form))
}

#[web::post("")]
async fn create_template(
    app_state: web::types::State<AppState>,
    form: web::types::Json<TemplateFormState>,
) -> Result<impl web::Responder, web::Error> {
    let response = api::template::create_template(&form, &app_state.template_service)
        .await
        .map_err(|e| errors::template_operation_error("at POST /whatsapp/templates", e))?;

    Ok(web::HttpResponse::Created().json(&response))
}

#[web::put("/{template_id}")]
async fn update_template(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
    form: web::types::Json<TemplateFormState>,
) -> Result<impl web::Responder, web::Error> {
    let template_id = path.0.as_str();
    let response = api::template::update_template(template_id, &form, &app_state.template_service)
        .await
        .map_err(|e| {
            errors::template_operation_error(
                &format!("at PUT /whatsapp/templates/{template_id}"),
                e,
            )
        })?;

    Ok(web::HttpResponse::Ok().json(&response))
}

#[web::delete("/{template_id}")]
async fn delete_template(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(String,)>,
) -> Result<impl web::Responder, web::Error> {
    let template_id = path.0.as_str();
    api::template::delete_template(template_id, &app_state.template_service)
        .await
        .map_err(|e| {
            errors::template_operation_error(
                &format!("at DELETE /whatsapp/templates/{template_id}"),
                e,
            )
        })?;

    Ok(web::HttpResponse::NoContent().finish())
}
