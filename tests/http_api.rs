//! HTTP-level coverage of the vault surface: auth, lock/unlock, seed/key
//! idempotency, and v1 signing end to end through `create_app`.

use std::sync::Arc;

use axum_test::TestServer;
use base64::Engine;
use chrono::Utc;
use serde_json::json;
use vaultd::consensus::{ConsensusState, StaticTipState};
use vaultd::store::Store;
use vaultd::vault::Vault;
use vaultd::{create_app, VaultAppState};

const PASSWORD: &str = "test-password";

async fn server() -> TestServer {
    let store = Store::open("sqlite::memory:").await.unwrap();
    let state = Arc::new(VaultAppState {
        vault: Arc::new(Vault::new(store)),
        http_password: PASSWORD.to_string(),
        tip_state: Arc::new(StaticTipState(ConsensusState::default())),
        started_at: Utc::now(),
    });
    TestServer::new(create_app(state)).unwrap()
}

fn basic_auth_header() -> String {
    let creds = base64::engine::general_purpose::STANDARD.encode(format!("operator:{PASSWORD}"));
    format!("Basic {creds}")
}

#[tokio::test]
async fn unauthenticated_request_is_rejected() {
    let server = server().await;
    let response = server.get("/state").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let server = server().await;
    let bad = base64::engine::general_purpose::STANDARD.encode("operator:nope");
    let response = server
        .get("/state")
        .add_header("authorization", format!("Basic {bad}"))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn state_reports_version_when_authenticated() {
    let server = server().await;
    let response = server
        .get("/state")
        .add_header("authorization", basic_auth_header())
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn seeds_are_locked_until_unlock() {
    let server = server().await;
    let auth = basic_auth_header();

    let response = server
        .post("/seeds")
        .add_header("authorization", auth.clone())
        .json(&json!({ "phrase": "foo bar baz" }))
        .await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    server
        .post("/unlock")
        .add_header("authorization", auth.clone())
        .json(&json!({ "secret": "hunter2" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .post("/unlock")
        .add_header("authorization", auth.clone())
        .json(&json!({ "secret": "hunter2" }))
        .await
        .assert_status(axum::http::StatusCode::BAD_REQUEST);

    server
        .put("/lock")
        .add_header("authorization", auth.clone())
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server
        .post("/unlock")
        .add_header("authorization", auth)
        .json(&json!({ "secret": "wrong" }))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_seed_is_idempotent_and_keys_derive() {
    let server = server().await;
    let auth = basic_auth_header();

    server
        .post("/unlock")
        .add_header("authorization", auth.clone())
        .json(&json!({ "secret": "hunter2" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let first = server
        .post("/seeds")
        .add_header("authorization", auth.clone())
        .json(&json!({ "phrase": "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about" }))
        .await;
    first.assert_status_ok();
    let first_meta: serde_json::Value = first.json();
    let seed_id = first_meta["id"].as_i64().unwrap();

    let second = server
        .post("/seeds")
        .add_header("authorization", auth.clone())
        .json(&json!({ "phrase": "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about" }))
        .await;
    second.assert_status_ok();
    let second_meta: serde_json::Value = second.json();
    assert_eq!(second_meta["id"].as_i64().unwrap(), seed_id);

    let list = server
        .get("/seeds")
        .add_header("authorization", auth.clone())
        .await;
    list.assert_status_ok();
    let list_body: serde_json::Value = list.json();
    assert_eq!(list_body["seeds"].as_array().unwrap().len(), 1);

    let keys = server
        .post(&format!("/seeds/{seed_id}/keys"))
        .add_header("authorization", auth.clone())
        .json(&json!({ "count": 2 }))
        .await;
    keys.assert_status_ok();
    let keys_body: serde_json::Value = keys.json();
    let keys_arr = keys_body["keys"].as_array().unwrap();
    assert_eq!(keys_arr.len(), 2);
    assert_eq!(keys_arr[0]["seed_index"].as_i64(), Some(0));
    assert_eq!(keys_arr[1]["seed_index"].as_i64(), Some(1));
}

#[tokio::test]
async fn sign_v1_rejects_malformed_request() {
    let server = server().await;
    let auth = basic_auth_header();

    server
        .post("/unlock")
        .add_header("authorization", auth.clone())
        .json(&json!({ "secret": "hunter2" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let zero_id: [u8; 32] = [0u8; 32];
    let response = server
        .post("/sign")
        .add_header("authorization", auth)
        .json(&json!({
            "state": { "height": 5, "id": zero_id },
            "transaction": { "signatures": [] },
        }))
        .await;
    // state without network is an invalid combination.
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
