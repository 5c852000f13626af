use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use vaultd::config::{Cli, Settings};
use vaultd::consensus::{ConsensusState, HttpTipState, StaticTipState, TipState};
use vaultd::store::Store;
use vaultd::vault::Vault;
use vaultd::VaultAppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli).expect("failed to load configuration");

    vaultd::config::logging::init(&settings.log, &settings.log_path())
        .expect("failed to initialize logging");

    std::fs::create_dir_all(settings.data_dir()).expect("failed to create data directory");

    let database_url = format!("sqlite://{}", settings.database_path().display());
    let store = Store::open(&database_url)
        .await
        .expect("failed to open store");
    tracing::info!(path = %settings.database_path().display(), "opened store");

    let vault = Arc::new(Vault::new(store));

    if let Some(secret) = &settings.secret {
        match vault.unlock(secret.as_bytes()).await {
            Ok(()) => tracing::info!("vault unlocked from configured secret"),
            Err(e) => tracing::warn!(error = %e, "failed to auto-unlock vault with configured secret"),
        }
    }

    let tip_state: Arc<dyn TipState> = match &settings.tip_url {
        Some(url) => Arc::new(HttpTipState::new(url.clone())),
        None => Arc::new(StaticTipState(ConsensusState::default())),
    };

    let http_password = settings.http.password.clone().unwrap_or_default();
    if http_password.is_empty() {
        tracing::warn!("no http.password configured; the HTTP surface is effectively unauthenticated");
    }

    let state = Arc::new(VaultAppState {
        vault,
        http_password,
        tip_state,
        started_at: Utc::now(),
    });

    let app = vaultd::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.http.address)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", settings.http.address, e));
    tracing::info!(address = %settings.http.address, "vaultd listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown = async {
        shutdown_rx.await.ok();
    };

    let server = tokio::spawn(axum::serve(listener, app).with_graceful_shutdown(shutdown));

    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutdown signal received");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(Duration::from_secs(10), server).await {
        Ok(Ok(Ok(()))) => tracing::info!("vaultd shut down cleanly"),
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "server error"),
        Ok(Err(e)) => tracing::error!(error = %e, "server task panicked"),
        Err(_) => panic!("graceful shutdown exceeded 10s bound"),
    }
}
