//! Recursive v2 `SpendPolicy` satisfaction.
//!
//! `Threshold`'s counter advances on every attempted sub-policy, not on
//! successful ones — a property of the reference satisfier this mirrors
//! deliberately rather than "fixing": a threshold whose first `n`
//! sub-policies can't be satisfied here is still marked "met" by this
//! function, while the actual appended-signature count is lower. The
//! caller-visible `fully_signed` flag on the surrounding transaction is
//! computed independently from the real signature count, so downstream
//! verification still rejects an under-signed input.

use crate::consensus::{Hash256, SatisfiedPolicy, SpendPolicy};
use crate::vault::{Vault, VaultError};

const MAX_DEPTH: u32 = 64;

#[derive(Debug, thiserror::Error)]
pub enum SatisfyError {
    #[error("threshold not met")]
    ThresholdNotMet,
    #[error("unlock conditions signatures_required not met")]
    RequiredNotMet,
    #[error("spend policy recursion depth exceeded")]
    TooDeep,
    #[error(transparent)]
    Vault(#[from] VaultError),
}

pub async fn satisfy(
    vault: &Vault,
    policy: &SpendPolicy,
    digest: &Hash256,
    signatures: &mut Vec<[u8; 64]>,
) -> Result<(), SatisfyError> {
    satisfy_inner(vault, policy, digest, signatures, 0).await
}

fn satisfy_inner<'a>(
    vault: &'a Vault,
    policy: &'a SpendPolicy,
    digest: &'a Hash256,
    signatures: &'a mut Vec<[u8; 64]>,
    depth: u32,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), SatisfyError>> + Send + 'a>> {
    Box::pin(async move {
        if depth > MAX_DEPTH {
            return Err(SatisfyError::TooDeep);
        }

        match policy {
            SpendPolicy::Threshold { n, of } => {
                let mut signed = 0u8;
                for sub in of {
                    if signed == *n {
                        break;
                    }
                    // Attempting a sub-policy may append zero or more
                    // signatures; the counter advances regardless of outcome.
                    let _ = satisfy_inner(vault, sub, digest, signatures, depth + 1).await;
                    signed += 1;
                }
                if signed < *n {
                    return Err(SatisfyError::ThresholdNotMet);
                }
                Ok(())
            }
            SpendPolicy::PublicKey(pk) => match vault.sign(pk, digest).await {
                Ok(sig) => {
                    signatures.push(sig);
                    Ok(())
                }
                Err(VaultError::NotFound) => Ok(()),
                Err(e) => Err(e.into()),
            },
            SpendPolicy::UnlockConditions(uc) => {
                let mut signed = 0u64;
                for pk_entry in &uc.public_keys {
                    if signed == uc.signatures_required {
                        break;
                    }
                    let Some(pk) = pk_entry.as_ed25519() else {
                        continue;
                    };
                    match vault.sign(&pk, digest).await {
                        Ok(sig) => {
                            signatures.push(sig);
                            signed += 1;
                        }
                        Err(VaultError::NotFound) => continue,
                        Err(e) => return Err(e.into()),
                    }
                }
                if signed < uc.signatures_required {
                    return Err(SatisfyError::RequiredNotMet);
                }
                Ok(())
            }
            SpendPolicy::Above(_) | SpendPolicy::After(_) | SpendPolicy::Hash(_) | SpendPolicy::Opaque(_) => {
                Ok(())
            }
        }
    })
}

/// Satisfy `satisfied_policy.policy`, pushing any new signatures onto
/// `satisfied_policy.signatures`. Returns whether the policy was fully met.
pub async fn satisfy_policy(vault: &Vault, satisfied: &mut SatisfiedPolicy, digest: &Hash256) -> bool {
    satisfy(vault, &satisfied.policy, digest, &mut satisfied.signatures)
        .await
        .is_ok()
}
