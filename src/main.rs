//! VoteAssist server entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vote_assist::adapters::dialogflow::{DialogflowClient, DialogflowConfig};
use vote_assist::adapters::http::{app_router, AppState};
use vote_assist::adapters::postgres::{create_pool, run_migrations, PostgresLookupStore};
use vote_assist::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting VoteAssist"
    );

    let pool = create_pool(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let classifier_config = DialogflowConfig::new(
        config.classifier.project_id.clone(),
        config.classifier.access_token.clone(),
    )
    .with_language_code(config.classifier.language_code.clone())
    .with_base_url(config.classifier.base_url.clone())
    .with_timeout(config.classifier.timeout());

    let state = AppState::new(
        Arc::new(PostgresLookupStore::new(pool)),
        Arc::new(DialogflowClient::new(classifier_config)?),
        config.database.lookup_timeout(),
    );
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
