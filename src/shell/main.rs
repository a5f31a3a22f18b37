use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use timesheets::modules::employees::use_cases::manage_employees::handler::bootstrap_hr_account;
use timesheets::shared::auth::token::TokenSigner;
use timesheets::shared::core::clock::SystemClock;
use timesheets::shared::infrastructure::in_memory::InMemoryDatabase;
use timesheets::shared::infrastructure::sqlite::SqliteDatabase;
use timesheets::shell::config::Config;
use timesheets::shell::http::{GRAPHQL_PATH, router};
use timesheets::shell::state::{AppState, Ports};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let ports = if config.uses_in_memory_database() {
        tracing::warn!("using the in-memory database, data is lost on exit");
        Ports::backed_by(Arc::new(InMemoryDatabase::new()))
    } else {
        let database = SqliteDatabase::open(&config.database_path)
            .with_context(|| format!("opening database at {}", config.database_path))?;
        tracing::info!(path = %config.database_path, "database ready");
        Ports::backed_by(Arc::new(database))
    };

    if let Some((name, pin)) = config.hr_bootstrap() {
        bootstrap_hr_account(&*ports.hr_accounts, name, pin)
            .await
            .context("bootstrapping the HR account")?;
    }

    let state = AppState::new(
        ports,
        Arc::new(SystemClock),
        config.calendar(),
        TokenSigner::new(&config.token_secret, config.token_ttl()),
    );

    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, graphql = GRAPHQL_PATH, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
