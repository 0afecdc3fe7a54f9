pub mod errors;
pub mod routes;
pub mod server;
pub mod whatsapp_templates;

use crate::{forms::template::FormDefaults, services};

pub struct AppState {
    pub template_service: services::ImplTemplateService,
    pub form_defaults: FormDefaults,
}
