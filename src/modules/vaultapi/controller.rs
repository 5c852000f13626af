use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use zeroize::Zeroize;

use crate::consensus::{ChainIndex, ConsensusState, Network};
use crate::signing::{sign_v1, sign_v2, SigningError};
use crate::store::StoreError;
use crate::vault::VaultError;
use crate::VaultAppState;

use super::schema::*;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn err(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(message)))
}

fn vault_error(e: VaultError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        VaultError::Locked => err(StatusCode::SERVICE_UNAVAILABLE, "vault is locked"),
        VaultError::Unlocked => err(StatusCode::BAD_REQUEST, "already unlocked"),
        VaultError::IncorrectSecret => err(StatusCode::UNAUTHORIZED, "incorrect secret"),
        VaultError::NotFound => err(StatusCode::NOT_FOUND, "not found"),
        VaultError::Store(StoreError::NotFound) => err(StatusCode::NOT_FOUND, "not found"),
        other => err(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub async fn state(State(state): State<Arc<VaultAppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("VAULTD_COMMIT").unwrap_or("unknown"),
        os: std::env::consts::OS,
        build_time: option_env!("VAULTD_BUILD_TIME").unwrap_or("unknown"),
        start_time: state.started_at,
    })
}

pub async fn unlock(
    State(state): State<Arc<VaultAppState>>,
    Json(mut req): Json<UnlockRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let result = state.vault.unlock(req.secret.as_bytes()).await;
    req.secret.zeroize();
    result.map_err(vault_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn lock(State(state): State<Arc<VaultAppState>>) -> StatusCode {
    state.vault.lock().await;
    StatusCode::NO_CONTENT
}

pub async fn list_seeds(
    State(state): State<Arc<VaultAppState>>,
    Query(q): Query<SeedsQuery>,
) -> ApiResult<SeedsResponse> {
    let (limit, offset) = parse_bounds(q.limit, q.offset).map_err(|m| err(StatusCode::BAD_REQUEST, m))?;
    let seeds = state.vault.seeds(limit, offset).await.map_err(vault_error)?;
    Ok(Json(SeedsResponse { seeds }))
}

pub async fn add_seed(
    State(state): State<Arc<VaultAppState>>,
    Json(req): Json<AddSeedRequest>,
) -> ApiResult<crate::store::SeedMeta> {
    // Lock state takes precedence over phrase validity: a locked vault
    // always reports 503, even for a malformed phrase.
    if !state.vault.is_unlocked().await {
        return Err(vault_error(VaultError::Locked));
    }
    let mut seed = crate::seed::decode_phrase(&req.phrase)
        .map_err(|e| err(StatusCode::BAD_REQUEST, e.to_string()))?;
    let meta = state.vault.add_seed(&mut seed.0).await.map_err(vault_error)?;
    Ok(Json(meta))
}

pub async fn get_seed(
    State(state): State<Arc<VaultAppState>>,
    Path(id): Path<i64>,
) -> ApiResult<crate::store::SeedMeta> {
    let meta = state.vault.seed_meta(id).await.map_err(vault_error)?;
    Ok(Json(meta))
}

pub async fn seed_keys(
    State(state): State<Arc<VaultAppState>>,
    Path(id): Path<i64>,
    Query(q): Query<SeedsQuery>,
) -> ApiResult<KeysResponse> {
    let (limit, offset) = parse_bounds(q.limit, q.offset).map_err(|m| err(StatusCode::BAD_REQUEST, m))?;
    let keys = state.vault.seed_keys(id, offset, limit).await.map_err(vault_error)?;
    Ok(Json(KeysResponse { keys }))
}

pub async fn add_keys(
    State(state): State<Arc<VaultAppState>>,
    Path(id): Path<i64>,
    Json(req): Json<AddKeysRequest>,
) -> ApiResult<KeysResponse> {
    let mut keys = Vec::with_capacity(req.count as usize);
    for _ in 0..req.count {
        let (pk, index) = state.vault.next_key(id).await.map_err(vault_error)?;
        let address = crate::consensus::UnlockConditions::standard(pk).address().to_hex();
        keys.push(crate::store::SeedKey {
            public_key: hex::encode(pk),
            address,
            seed_index: index,
        });
    }
    Ok(Json(KeysResponse { keys }))
}

pub async fn sign(
    State(state): State<Arc<VaultAppState>>,
    Json(req): Json<SignRequest>,
) -> ApiResult<SignResponse> {
    let cs = resolve_consensus_state(&state, req.state, req.network)
        .await
        .map_err(|m| err(StatusCode::BAD_REQUEST, m))?;
    let result = sign_v1(&state.vault, &cs, req.transaction)
        .await
        .map_err(signing_error)?;
    Ok(Json(SignResponse { transaction: result.txn, fully_signed: result.fully_signed }))
}

pub async fn sign_v2_handler(
    State(state): State<Arc<VaultAppState>>,
    Json(req): Json<SignV2Request>,
) -> ApiResult<SignV2Response> {
    let cs = resolve_consensus_state(&state, req.state, req.network)
        .await
        .map_err(|m| err(StatusCode::BAD_REQUEST, m))?;
    let result = sign_v2(&state.vault, &cs, req.transaction)
        .await
        .map_err(signing_error)?;
    Ok(Json(SignV2Response { transaction: result.txn, fully_signed: result.fully_signed }))
}

pub async fn blind_sign(
    State(state): State<Arc<VaultAppState>>,
    Json(req): Json<BlindSignRequest>,
) -> ApiResult<BlindSignResponse> {
    let pk_bytes = hex::decode(&req.public_key).map_err(|_| err(StatusCode::BAD_REQUEST, "invalid public key"))?;
    let hash_bytes = hex::decode(&req.sig_hash).map_err(|_| err(StatusCode::BAD_REQUEST, "invalid sigHash"))?;
    if pk_bytes.len() != 32 || hash_bytes.len() != 32 {
        return Err(err(StatusCode::BAD_REQUEST, "publicKey and sigHash must be 32 bytes"));
    }
    let mut pk = [0u8; 32];
    pk.copy_from_slice(&pk_bytes);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hash_bytes);

    let sig = state.vault.sign(&pk, &hash).await.map_err(vault_error)?;
    Ok(Json(BlindSignResponse { signature: hex::encode(sig) }))
}

fn signing_error(e: SigningError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        SigningError::UnsupportedAfterRequireHeight | SigningError::UnsupportedBeforeAllowHeight => {
            err(StatusCode::BAD_REQUEST, e.to_string())
        }
        SigningError::NoSignaturesAdded => err(StatusCode::BAD_REQUEST, e.to_string()),
        SigningError::PolicyTooDeep => err(StatusCode::BAD_REQUEST, e.to_string()),
        SigningError::Vault(v) => vault_error(v),
    }
}

fn parse_bounds(limit: Option<i64>, offset: Option<i64>) -> Result<(i64, i64), &'static str> {
    let limit = limit.unwrap_or(100);
    let offset = offset.unwrap_or(0);
    if !(1..=500).contains(&limit) || offset < 0 {
        return Err("limit must be in [1, 500] and offset must be >= 0");
    }
    Ok((limit, offset))
}

async fn resolve_consensus_state(
    state: &VaultAppState,
    index: Option<ChainIndex>,
    network: Option<Network>,
) -> Result<ConsensusState, &'static str> {
    match (index, network) {
        (Some(index), Some(network)) => Ok(ConsensusState { index, network }),
        (None, None) => state
            .tip_state
            .tip_state()
            .await
            .map_err(|_| "failed to fetch tip state"),
        _ => Err("state and network must both be provided or both omitted"),
    }
}
