use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Metadata about a stored seed, as returned by the store and the HTTP
/// layer. Never carries plaintext or encrypted seed bytes.
#[derive(Debug, Clone, Serialize)]
pub struct SeedMeta {
    pub id: i64,
    pub last_index: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct SeedRow {
    pub id: i64,
    pub encrypted_seed: Vec<u8>,
    pub date_created: i64,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct SigningKeyRow {
    pub public_key: Vec<u8>,
    pub seed_id: i64,
    pub seed_index: i64,
}

/// A public key derived from a vault seed, as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct SeedKey {
    pub public_key: String,
    pub address: String,
    pub seed_index: i64,
}
