//! # WhatsApp Templates Admin Service
//!
//! Backend for the WhatsApp message template screens of the church
//! administration dashboard. Configures logging, TLS, middleware and routes.

#![recursion_limit = "256"]
pub mod api;
pub mod config;
pub mod consts;
pub mod forms;
pub mod front;
pub mod logger;
pub mod metric;
pub mod models;
pub mod services;
pub mod utils;

use logfire::config::MetricsOptions;
use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;

    // Logfire exports traces and metrics in prod, a console logger is enough elsewhere
    let shutdown_handler = if app_config.is_prod() {
        Some(
            logfire::configure()
                .install_panic_handler()
                .with_metrics(Some(MetricsOptions::default()))
                .send_to_logfire(logfire::config::SendToLogfire::Yes)
                .with_token(&app_config.logfire_token)
                .finish()?,
        )
    } else {
        logger::setup_simple_logger()?;
        None
    };

    let template_service = services::templates::TemplateApiHandler::new(
        &app_config.templates_api_url,
        &app_config.templates_api_token,
    );

    configure_and_run_server(template_service).await?;

    if let Some(handler) = shutdown_handler {
        handler.shutdown()?;
    }

    Ok(())
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor() -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    let app_config = &*config::APP_CONFIG;
    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Creates application state from the provided services
fn create_app_state(
    template_service: services::templates::TemplateApiHandler,
    app_config: &config::AppConfig,
) -> front::AppState {
    front::AppState {
        template_service: Box::new(template_service),
        form_defaults: app_config.form_defaults(),
    }
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(
    template_service: services::templates::TemplateApiHandler,
) -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let server_addr = (
        app_config.web_server_host.to_string(),
        app_config.web_server_port,
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS", "PUT", "DELETE"])
                    .allowed_origin(&app_config.dashboard_origin)
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(template_service.clone(), app_config))
            .configure(front::routes::whatsapp_templates)
            .service(front::server::health)
            .default_service(web::route().to(front::server::serve_not_found))
    });

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor()?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    log::info!(
        "Serving WhatsApp templates on {}:{}",
        app_config.web_server_host,
        app_config.web_server_port
    );

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
