//! V2 signing: one digest per transaction, satisfied independently per input.

use crate::consensus::{sighash, ConsensusState, V2Transaction};
use crate::signing::error::SigningError;
use crate::signing::policy::satisfy_policy;
use crate::vault::Vault;

pub struct SignV2Result {
    pub txn: V2Transaction,
    pub fully_signed: bool,
}

pub async fn sign_v2(
    vault: &Vault,
    cs: &ConsensusState,
    mut txn: V2Transaction,
) -> Result<SignV2Result, SigningError> {
    if cs.index.height < cs.network.hardfork_v2.allow_height {
        return Err(SigningError::UnsupportedBeforeAllowHeight);
    }

    let h = sighash::input_sighash(cs, &txn);
    let mut fully_signed = true;

    for input in &mut txn.siacoin_inputs {
        let ok = satisfy_policy(vault, &mut input.satisfied_policy, &h).await;
        fully_signed &= ok;
    }
    for input in &mut txn.siafund_inputs {
        let ok = satisfy_policy(vault, &mut input.satisfied_policy, &h).await;
        fully_signed &= ok;
    }

    Ok(SignV2Result { txn, fully_signed })
}
