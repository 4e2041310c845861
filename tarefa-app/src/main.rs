//! # Tarefa
//!
//! Process entry point for the Tarefa desktop task manager. Startup is
//! fail-fast: configuration, store open, and schema migration must all
//! succeed before the session flow is handed to the embedding shell;
//! the application has no degraded mode without a working store.

use tarefa_app::{config::Config, session::SessionFlow};
use tarefa_core::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarefa=info,tarefa_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Tarefa v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // Fatal on failure: opening the file and migrating the schema are the
    // only operations with no user-recoverable error.
    let store = Store::open(config.store()).await?;
    let flow = SessionFlow::new(store, config.email_policy());

    tracing::info!(screen = ?flow.screen(), "Session flow ready, handing over to the shell");

    // The GUI shell owns the event loop from here; this headless build
    // parks until interrupted.
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutdown signal received, closing store");
    flow.store().clone().close().await;

    Ok(())
}
