#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("vault is locked")]
    Locked,
    #[error("vault is already unlocked")]
    Unlocked,
    #[error("incorrect secret")]
    IncorrectSecret,
    #[error("not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),
    #[error("internal error: {0}")]
    Internal(String),
}
