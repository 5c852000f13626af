use axum::routing::{get, post, put};
use axum::{middleware, Router};
use std::sync::Arc;

use crate::VaultAppState;

use super::{auth::basic_auth, controller};

pub fn vault_routes(state: Arc<VaultAppState>) -> Router {
    Router::new()
        .route("/state", get(controller::state))
        .route("/unlock", post(controller::unlock))
        .route("/lock", put(controller::lock))
        .route("/seeds", get(controller::list_seeds).post(controller::add_seed))
        .route("/seeds/{id}", get(controller::get_seed))
        .route(
            "/seeds/{id}/keys",
            get(controller::seed_keys).post(controller::add_keys),
        )
        .route("/sign", post(controller::sign))
        .route("/v2/sign", post(controller::sign_v2_handler))
        .route("/blind/sign", post(controller::blind_sign))
        .layer(middleware::from_fn_with_state(state.clone(), basic_auth))
        .with_state(state)
}
