//! The remote "chain tip" collaborator.
//!
//! A sign request that omits its own `state`/`network` asks the server to
//! fill them in from whatever node it considers current. This is an
//! external dependency by design (§1): the vault core never needs it
//! directly, only the HTTP signing handlers do, and only when the caller
//! didn't supply consensus state itself.

use async_trait::async_trait;

use super::types::ConsensusState;

#[derive(Debug, thiserror::Error)]
pub enum TipError {
    #[error("failed to fetch chain tip: {0}")]
    Fetch(String),
}

#[async_trait]
pub trait TipState: Send + Sync {
    async fn tip_state(&self) -> Result<ConsensusState, TipError>;
}

/// A `TipState` backed by a remote Sia node's `/consensus/tip` and
/// `/consensus/network` endpoints, reached over `reqwest`.
pub struct HttpTipState {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTipState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TipState for HttpTipState {
    async fn tip_state(&self) -> Result<ConsensusState, TipError> {
        let url = format!("{}/consensus/state", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TipError::Fetch(e.to_string()))?;
        resp.json::<ConsensusState>()
            .await
            .map_err(|e| TipError::Fetch(e.to_string()))
    }
}

/// A fixed-state `TipState`, used by tests and by deployments that pin a
/// specific network snapshot instead of polling a node.
#[derive(Clone)]
pub struct StaticTipState(pub ConsensusState);

#[async_trait]
impl TipState for StaticTipState {
    async fn tip_state(&self) -> Result<ConsensusState, TipError> {
        Ok(self.0.clone())
    }
}
