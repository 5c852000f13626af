#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("transaction height is at or past the v2 hardfork require height")]
    UnsupportedAfterRequireHeight,
    #[error("transaction height is before the v2 hardfork allow height")]
    UnsupportedBeforeAllowHeight,
    #[error("no signatures were added")]
    NoSignaturesAdded,
    #[error("spend policy recursion depth exceeded")]
    PolicyTooDeep,
    #[error(transparent)]
    Vault(#[from] crate::vault::VaultError),
}
