pub mod config;
pub mod consensus;
pub mod modules;
pub mod seed;
pub mod signing;
pub mod store;
pub mod vault;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use consensus::TipState;
use modules::vaultapi::vault_routes;
use vault::Vault;

/// Shared state for the vault HTTP surface. Deliberately narrower than the
/// original `AppState`: no DB pool, JWT service, or outbound HTTP client for
/// unrelated chains — just the vault, the auth password, and a consensus
/// tip provider for requests that omit `state`/`network`.
pub struct VaultAppState {
    pub vault: Arc<Vault>,
    pub http_password: String,
    pub tip_state: Arc<dyn TipState>,
    pub started_at: DateTime<Utc>,
}

pub fn create_app(state: Arc<VaultAppState>) -> Router {
    vault_routes(state)
        .layer(RequestBodyLimitLayer::new(1024 * 100))
        .layer(TraceLayer::new_for_http())
}
