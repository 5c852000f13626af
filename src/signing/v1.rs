//! V1 covered-field signature filling.

use crate::consensus::{sighash, ConsensusState, Transaction};
use crate::signing::error::SigningError;
use crate::vault::{Vault, VaultError};

pub struct SignV1Result {
    pub txn: Transaction,
    pub fully_signed: bool,
}

pub async fn sign_v1(
    vault: &Vault,
    cs: &ConsensusState,
    mut txn: Transaction,
) -> Result<SignV1Result, SigningError> {
    if cs.index.height >= cs.network.hardfork_v2.require_height {
        return Err(SigningError::UnsupportedAfterRequireHeight);
    }

    let mut filled = 0usize;
    let mut already_present = 0usize;

    for i in 0..txn.signatures.len() {
        if !txn.signatures[i].signature.is_empty() {
            already_present += 1;
            continue;
        }

        let Some(pk) = resolve_public_key(&txn, i) else {
            continue;
        };

        let sig = &txn.signatures[i];
        let h = if sig.covered_fields.whole_transaction {
            sighash::whole_sighash(cs, &txn, sig.parent_id, sig.public_key_index, sig.timelock, &[])
        } else {
            sighash::partial_sighash(cs, &txn, &sig.covered_fields)
        };

        match vault.sign(&pk, &h).await {
            Ok(signature) => {
                txn.signatures[i].signature = signature.to_vec();
                filled += 1;
            }
            Err(VaultError::NotFound) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled == 0 && already_present == 0 {
        return Err(SigningError::NoSignaturesAdded);
    }

    let fully_signed = filled + already_present == txn.signatures.len();
    Ok(SignV1Result { txn, fully_signed })
}

/// Resolve the public key a given `signatures[index]` entry should sign
/// under, by scanning inputs for a matching `parent_id`. Returns `None` if
/// the input isn't ours (any resolution step fails).
fn resolve_public_key(txn: &Transaction, index: usize) -> Option<[u8; 32]> {
    let sig = &txn.signatures[index];

    let unlock_conditions = txn
        .siacoin_inputs
        .iter()
        .find(|i| i.parent_id == sig.parent_id)
        .map(|i| &i.unlock_conditions)
        .or_else(|| {
            txn.siafund_inputs
                .iter()
                .find(|i| i.parent_id == sig.parent_id)
                .map(|i| &i.unlock_conditions)
        })?;

    let key = unlock_conditions
        .public_keys
        .get(sig.public_key_index as usize)?;

    key.as_ed25519()
}
