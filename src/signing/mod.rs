//! The signing engine: v1 covered-field signing and v2 spend-policy
//! satisfaction, both stateless per request (all state lives in the vault).

pub mod error;
pub mod policy;
pub mod v1;
pub mod v2;

pub use error::SigningError;
pub use v1::{sign_v1, SignV1Result};
pub use v2::{sign_v2, SignV2Result};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::{
        Algorithm, ChainIndex, ConsensusState, CoveredFields, HardforkV2, Network, SatisfiedPolicy,
        SiacoinInput, SpendPolicy, Transaction, TransactionSignature, UnlockConditions, UnlockKey,
        V2SiacoinInput, V2Transaction,
    };
    use crate::store::Store;
    use crate::vault::Vault;

    async fn unlocked_vault() -> Vault {
        let store = Store::open("sqlite::memory:").await.unwrap();
        let vault = Vault::new(store);
        vault.unlock(b"hunter2").await.unwrap();
        vault
    }

    fn state_at(height: u64) -> ConsensusState {
        ConsensusState {
            index: ChainIndex { height, id: [0u8; 32] },
            network: Network {
                name: "test".into(),
                hardfork_v2: HardforkV2 { allow_height: 10, require_height: 20 },
            },
        }
    }

    #[tokio::test]
    async fn v1_signs_whole_transaction_input() {
        let vault = unlocked_vault().await;
        let mut seed = [1u8; 32];
        let meta = vault.add_seed(&mut seed).await.unwrap();
        let (pk, _) = vault.next_key(meta.id).await.unwrap();

        let uc = UnlockConditions {
            timelock: 0,
            public_keys: vec![UnlockKey { algorithm: Algorithm::Ed25519, key: pk.to_vec() }],
            signatures_required: 1,
        };
        let parent_id = [7u8; 32];
        let txn = Transaction {
            siacoin_inputs: vec![SiacoinInput { parent_id, unlock_conditions: uc }],
            signatures: vec![TransactionSignature {
                parent_id,
                public_key_index: 0,
                timelock: 0,
                covered_fields: CoveredFields { whole_transaction: true, ..Default::default() },
                signature: Vec::new(),
            }],
            ..Default::default()
        };

        let cs = state_at(5);
        let result = sign_v1(&vault, &cs, txn).await.unwrap();
        assert!(result.fully_signed);
        assert!(!result.txn.signatures[0].signature.is_empty());
    }

    #[tokio::test]
    async fn v1_rejects_at_require_height() {
        let vault = unlocked_vault().await;
        let cs = state_at(20);
        let result = sign_v1(&vault, &cs, Transaction::default()).await;
        assert!(matches!(result, Err(SigningError::UnsupportedAfterRequireHeight)));
    }

    #[tokio::test]
    async fn v2_threshold_partial_signing() {
        let vault = unlocked_vault().await;
        let mut seed = [2u8; 32];
        let meta = vault.add_seed(&mut seed).await.unwrap();
        let (pk_ours, _) = vault.next_key(meta.id).await.unwrap();
        let pk_other = [99u8; 32];

        let policy = SpendPolicy::Threshold {
            n: 2,
            of: vec![SpendPolicy::PublicKey(pk_ours), SpendPolicy::PublicKey(pk_other)],
        };
        let txn = V2Transaction {
            siacoin_inputs: vec![V2SiacoinInput {
                parent_id: [1u8; 32],
                satisfied_policy: SatisfiedPolicy { policy, signatures: Vec::new(), preimages: Vec::new() },
            }],
            ..Default::default()
        };

        let cs = state_at(15);
        let result = sign_v2(&vault, &cs, txn).await.unwrap();
        assert!(!result.fully_signed);
        assert_eq!(result.txn.siacoin_inputs[0].satisfied_policy.signatures.len(), 1);
    }

    #[tokio::test]
    async fn v2_rejects_before_allow_height() {
        let vault = unlocked_vault().await;
        let cs = state_at(5);
        let result = sign_v2(&vault, &cs, V2Transaction::default()).await;
        assert!(matches!(result, Err(SigningError::UnsupportedBeforeAllowHeight)));
    }

    #[tokio::test]
    async fn replay_prefix_changes_signature_across_hardfork() {
        let vault = unlocked_vault().await;
        let mut seed = [5u8; 32];
        let meta = vault.add_seed(&mut seed).await.unwrap();
        let (pk, _) = vault.next_key(meta.id).await.unwrap();
        let uc = UnlockConditions {
            timelock: 0,
            public_keys: vec![UnlockKey { algorithm: Algorithm::Ed25519, key: pk.to_vec() }],
            signatures_required: 1,
        };
        let parent_id = [3u8; 32];
        let make_txn = || Transaction {
            siacoin_inputs: vec![SiacoinInput { parent_id, unlock_conditions: uc.clone() }],
            signatures: vec![TransactionSignature {
                parent_id,
                public_key_index: 0,
                timelock: 0,
                covered_fields: CoveredFields { whole_transaction: true, ..Default::default() },
                signature: Vec::new(),
            }],
            ..Default::default()
        };

        let below = sign_v1(&vault, &state_at(8), make_txn()).await.unwrap();
        let at = sign_v1(&vault, &state_at(10), make_txn()).await.unwrap();
        assert_ne!(below.txn.signatures[0].signature, at.txn.signatures[0].signature);
    }
}
