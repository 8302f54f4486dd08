//! # Vet Clinic Dashboard
//!
//! Entry point of the veterinary clinic backend. Loads the configuration,
//! sets up logging, starts the collar simulator and serves the dashboard
//! routes, with TLS in production.
#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod fixtures;
pub mod front;
pub mod logger;
pub mod metric;
pub mod models;
pub mod repo;
pub mod services;
pub mod utils;

use std::sync::Arc;

use logfire::config::MetricsOptions;
use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};
use tokio::sync::RwLock;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::init_config()?;

    // logfire takes over the log output when a token is configured
    let shutdown_handler = match &app_config.logfire_token {
        Some(token) => Some(
            logfire::configure()
                .install_panic_handler()
                .with_metrics(Some(MetricsOptions::default()))
                .send_to_logfire(logfire::config::SendToLogfire::Yes)
                .with_token(token)
                .finish()?,
        ),
        None => {
            logger::setup_simple_logger(&app_config.log_level)?;
            None
        }
    };

    let pets_repo = repo::http::HttpPetRepo::from_config()?;
    let store = Arc::new(services::store::PetStore::new(Box::new(pets_repo)));

    let devices: services::iot_simulator::SharedDevices =
        Arc::new(RwLock::new(fixtures::devices()));
    let _simulator =
        services::iot_simulator::start_simulator(devices.clone(), app_config.iot_refresh_period());

    let app_state = front::AppState::new(store, devices, app_config.invoice_tax_rule);

    log::info!(
        "starting server on {}:{} (env: {}, tax rule: {})",
        app_config.web_server_host,
        app_config.web_server_port,
        app_config.env,
        app_config.invoice_tax_rule
    );

    configure_and_run_server(app_config, app_state).await?;

    if let Some(handler) = shutdown_handler {
        handler.shutdown()?;
    }

    Ok(())
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor(
    app_config: &config::AppConfig,
) -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

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

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(
    app_config: &'static config::AppConfig,
    app_state: front::AppState,
) -> anyhow::Result<()> {
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS", "PATCH", "DELETE"])
                    .allowed_origin(&app_config.allowed_origin)
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(app_state.clone())
            .configure(front::routes::pets)
            .configure(front::routes::owners)
            .configure(front::routes::vaccinations)
            .configure(front::routes::calendar)
            .configure(front::routes::police)
            .configure(front::routes::laboratory)
            .configure(front::routes::services)
            .configure(front::routes::pharmacy)
            .configure(front::routes::marketplace)
            .configure(front::routes::iot)
            .configure(front::routes::session)
            .configure(front::routes::pets_api)
            .service((front::server::index, front::owner::register_owner_and_pet))
            .default_service(web::route().to(front::server::serve_not_found))
    });

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor(app_config)?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
