use crate::{forms::validation::TemplateFormError, services::templates::TemplateApiError};
use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    TemplateNotFound(#[error(not(source))] String),
    FormInputValueError(#[error(not(source))] String),
}

impl UserError {
    fn get_error_message(&self) -> String {
        match self {
            UserError::UrlNotFound => "recurso no encontrado".to_string(),
            UserError::TemplateNotFound(id) => format!("plantilla {id} no encontrada"),
            UserError::FormInputValueError(msg) => msg.to_string(),
        }
    }
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        web::HttpResponse::build(self.status_code()).json(&json!({
            "error": self.get_error_message()
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::TemplateNotFound(_) => http::StatusCode::NOT_FOUND,
            UserError::FormInputValueError(_) => http::StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    ExternalServiceError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::ExternalServiceError(msg) => format!("[ExternalServiceError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        web::HttpResponse::build(self.status_code()).json(&json!({
            "error": "Intente mas tarde"
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ServerError::ExternalServiceError(_) => http::StatusCode::BAD_GATEWAY,
        }
    }
}

/// Maps a failure of the template operations to the response the dashboard gets:
/// invalid forms are the user's to fix, unknown templates are a 404 and
/// everything else is blamed on the templates backend.
pub fn template_operation_error(context: &str, err: anyhow::Error) -> web::Error {
    if let Some(form_err) = err.downcast_ref::<TemplateFormError>() {
        return UserError::FormInputValueError(form_err.to_string()).into();
    }

    if let Some(TemplateApiError::NotFound(id)) = err.downcast_ref::<TemplateApiError>() {
        return UserError::TemplateNotFound(id.to_string()).into();
    }

    ServerError::ExternalServiceError(format!("{context}: {err:#}")).into()
}
