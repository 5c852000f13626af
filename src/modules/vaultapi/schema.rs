use serde::{Deserialize, Serialize};

use crate::consensus::{ChainIndex, Network, Transaction, V2Transaction};
use crate::store::{SeedKey, SeedMeta};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub version: &'static str,
    pub commit: &'static str,
    pub os: &'static str,
    pub build_time: &'static str,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SeedsResponse {
    pub seeds: Vec<SeedMeta>,
}

#[derive(Debug, Deserialize)]
pub struct AddSeedRequest {
    pub phrase: String,
}

#[derive(Debug, Serialize)]
pub struct KeysResponse {
    pub keys: Vec<SeedKey>,
}

#[derive(Debug, Deserialize)]
pub struct AddKeysRequest {
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    #[serde(default)]
    pub state: Option<ChainIndex>,
    #[serde(default)]
    pub network: Option<Network>,
    pub transaction: Transaction,
}

#[derive(Debug, Serialize)]
pub struct SignResponse {
    pub transaction: Transaction,
    #[serde(rename = "fullySigned")]
    pub fully_signed: bool,
}

#[derive(Debug, Deserialize)]
pub struct SignV2Request {
    #[serde(default)]
    pub state: Option<ChainIndex>,
    #[serde(default)]
    pub network: Option<Network>,
    pub transaction: V2Transaction,
}

#[derive(Debug, Serialize)]
pub struct SignV2Response {
    pub transaction: V2Transaction,
    #[serde(rename = "fullySigned")]
    pub fully_signed: bool,
}

#[derive(Debug, Deserialize)]
pub struct BlindSignRequest {
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(rename = "sigHash")]
    pub sig_hash: String,
}

#[derive(Debug, Serialize)]
pub struct BlindSignResponse {
    pub signature: String,
}
