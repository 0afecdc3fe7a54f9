pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "es_CO";
pub const DEFAULT_TEMPLATE_CATEGORY: &str = "MARKETING";

pub const TEMPLATES_SCOPE_PATH: &str = "/whatsapp/templates";

/// Highest `{{N}}` a template may reference
pub const MAX_TEMPLATE_VARIABLE_INDEX: u32 = 100;
