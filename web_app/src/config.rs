//! Application configuration management with security considerations.
//!
//! This module handles all configuration values required for the application.
//! Sensitive fields are clearly marked and should never be logged.

use crate::forms::template::FormDefaults;
use envconfig::Envconfig;
use std::sync::LazyLock;

/// Application configuration loaded from environment variables.
///
/// # Security Requirements
/// - All `SENSITIVE` fields must be stored securely (encrypted at rest)
/// - Never log or expose sensitive values
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// Path to SSL private key file (SENSITIVE PATH)
    /// Security: File should have 600 permissions
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE)
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// Origin of the admin dashboard allowed by CORS (NON-SENSITIVE)
    #[envconfig(default = "http://localhost:5173")]
    pub dashboard_origin: String,

    /// Base URL of the backend that stores the WhatsApp templates (NON-SENSITIVE)
    /// Example: "https://api.iglesia.co/whatsapp/templates"
    pub templates_api_url: String,

    /// 🔒 SENSITIVE: Bearer token for the templates backend
    pub templates_api_token: String,

    /// 🔒 SENSITIVE: Logfire write token, only used in prod
    #[envconfig(default = "")]
    pub logfire_token: String,

    /// Language preselected in a new template form (NON-SENSITIVE)
    #[envconfig(default = "es_CO")]
    pub default_template_language: String,

    /// Category preselected in a new template form (NON-SENSITIVE)
    #[envconfig(default = "MARKETING")]
    pub default_template_category: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Defaults for new template forms
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            language: self.default_template_language.clone(),
            category: self.default_template_category.clone(),
        }
    }
}

/// Global application configuration instance
///
/// If loading fails, the application will panic with a descriptive error message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_config() -> AppConfig {
        let env = HashMap::from([
            (
                "TEMPLATES_API_URL".to_string(),
                "https://api.iglesia.co/whatsapp/templates/".to_string(),
            ),
            ("TEMPLATES_API_TOKEN".to_string(), "secret".to_string()),
        ]);

        AppConfig::init_from_hashmap(&env).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = create_test_config();

        assert!(!config.is_prod());
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.form_defaults(), FormDefaults::default());
    }
}
