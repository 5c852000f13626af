//! HTTP Basic auth middleware. Unlike the rest of this codebase's JWT
//! bearer scheme, a local signing daemon authenticates with a single
//! configured password — there is no user registry to check against.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::Arc;

use super::schema::ErrorResponse;
use crate::VaultAppState;

pub async fn basic_auth(
    State(state): State<Arc<VaultAppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(header) = request.headers().get(axum::http::header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(header) = header.to_str() else {
        return unauthorized();
    };
    let Some(encoded) = header.strip_prefix("Basic ") else {
        return unauthorized();
    };
    let Ok(decoded) = BASE64.decode(encoded) else {
        return unauthorized();
    };
    let Ok(credentials) = String::from_utf8(decoded) else {
        return unauthorized();
    };
    // username is ignored; only the password is checked, matching a
    // single-operator local daemon rather than a multi-user service.
    let password = credentials.splitn(2, ':').nth(1).unwrap_or("");

    if !constant_time_eq(password.as_bytes(), state.http_password.as_bytes()) {
        return unauthorized();
    }

    next.run(request).await
}

fn unauthorized() -> Response {
    let mut response =
        (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new("incorrect secret"))).into_response();
    response.headers_mut().insert(
        axum::http::header::WWW_AUTHENTICATE,
        axum::http::HeaderValue::from_static(r#"Basic realm="vaultd""#),
    );
    response
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
