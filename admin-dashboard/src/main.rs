use admin_dashboard::config::get_configuration;
use admin_dashboard::services::PermissionResolver;
use admin_dashboard::startup::{build_router, SessionOptions};
use admin_dashboard::utils::jwt::TokenVerifier;
use admin_dashboard::AppState;
use dotenvy::dotenv;
use service_core::observability::logging::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "admin-dashboard",
        &configuration.observability.log_level,
        configuration.observability.otlp_endpoint.as_deref(),
    );

    admin_dashboard::services::metrics::init_metrics();

    let resolver = Arc::new(PermissionResolver::new(configuration.permissions.memoize));
    let verifier = Arc::new(TokenVerifier::from_settings(&configuration.auth).map_err(|e| {
        tracing::error!("Failed to initialize token verifier: {}", e);
        e
    })?);
    let state = AppState::new(resolver, verifier);

    let app = build_router(
        state,
        SessionOptions {
            secure_cookies: configuration.server.secure_cookies,
            inactivity_hours: configuration.server.session_inactivity_hours,
        },
    );

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!(
        memoize = configuration.permissions.memoize,
        "Starting admin-dashboard on {}", address
    );
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
