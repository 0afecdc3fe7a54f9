//! Route configuration module.
//!
//! Routes are grouped by functionality into logical scopes.

use super::whatsapp_templates;
use crate::consts;
use ntex::web;

/// Configures WhatsApp template routes.
///
/// # Routes
/// - `GET /whatsapp/templates` - List templates
/// - `GET /whatsapp/templates/new` - Blank template form
/// - `POST /whatsapp/templates/validate` - Validation report of a form
/// - `POST /whatsapp/templates/payload` - Request body a valid form is submitted as
/// - `GET /whatsapp/templates/{template_id}` - Template as stored by the backend
/// - `GET /whatsapp/templates/{template_id}/form` - Editable form of a template
/// - `POST /whatsapp/templates` - Create template from a form
/// - `PUT /whatsapp/templates/{template_id}` - Replace template content from a form
/// - `DELETE /whatsapp/templates/{template_id}` - Delete template
pub fn whatsapp_templates(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(consts::TEMPLATES_SCOPE_PATH).service((
        whatsapp_templates::list_templates,
        whatsapp_templates::new_template_form,
        whatsapp_templates::validate_template_form,
        whatsapp_templates::preview_template_payload,
        whatsapp_templates::get_template_form,
        whatsapp_templates::get_template,
        whatsapp_templates::create_template,
        whatsapp_templates::update_template,
        whatsapp_templates::delete_template,
    )));
}
