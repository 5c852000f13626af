//! Reference sighash implementation.
//!
//! The specification treats `whole_sighash`/`partial_sighash`/`input_sighash`
//! as opaque operations supplied by the surrounding consensus library. This
//! module gives them a concrete, deterministic body so the signing engine
//! has something real to hash and the replay-prefix behavior described in
//! the design notes (a byte that flips across the v2 hardfork) is testable.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use super::types::{ConsensusState, CoveredFields, Hash256, Transaction, V2Transaction};

pub type Blake2b256 = Blake2b<U32>;

fn replay_prefix(cs: &ConsensusState) -> u8 {
    if cs.index.height >= cs.network.hardfork_v2.allow_height {
        1
    } else {
        0
    }
}

fn hash_siacoin_inputs(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.siacoin_inputs.len()).collect(),
    };
    for i in range {
        let input = &txn.siacoin_inputs[i];
        h.update(input.parent_id);
        h.update(encode_unlock_conditions(&input.unlock_conditions));
    }
}

fn hash_siafund_inputs(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.siafund_inputs.len()).collect(),
    };
    for i in range {
        let input = &txn.siafund_inputs[i];
        h.update(input.parent_id);
        h.update(encode_unlock_conditions(&input.unlock_conditions));
    }
}

fn encode_unlock_conditions(uc: &super::types::UnlockConditions) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&uc.timelock.to_le_bytes());
    buf.extend_from_slice(&(uc.public_keys.len() as u64).to_le_bytes());
    for key in &uc.public_keys {
        buf.extend_from_slice(&key.key);
    }
    buf.extend_from_slice(&uc.signatures_required.to_le_bytes());
    buf
}

fn hash_outputs(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.siacoin_outputs.len()).collect(),
    };
    for i in range {
        let out = &txn.siacoin_outputs[i];
        h.update(out.value.to_le_bytes());
        h.update(out.address.0);
    }
}

fn hash_siafund_outputs(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.siafund_outputs.len()).collect(),
    };
    for i in range {
        let out = &txn.siafund_outputs[i];
        h.update(out.value.to_le_bytes());
        h.update(out.address.0);
    }
}

fn hash_miner_fees(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.miner_fees.len()).collect(),
    };
    for i in range {
        h.update(txn.miner_fees[i].to_le_bytes());
    }
}

fn hash_arbitrary_data(h: &mut Blake2b256, txn: &Transaction, indices: Option<&[u64]>) {
    let range: Vec<usize> = match indices {
        Some(idx) => idx.iter().map(|i| *i as usize).collect(),
        None => (0..txn.arbitrary_data.len()).collect(),
    };
    for i in range {
        h.update(&txn.arbitrary_data[i]);
    }
}

fn hash_signatures(h: &mut Blake2b256, txn: &Transaction, indices: &[u64]) {
    for i in indices.iter().map(|i| *i as usize) {
        let sig = &txn.signatures[i];
        h.update(sig.parent_id);
        h.update(sig.public_key_index.to_le_bytes());
        h.update(sig.timelock.to_le_bytes());
    }
}

/// Digest covering the entire transaction plus the identity of the
/// signature slot being filled (parent id, key index, timelock).
pub fn whole_sighash(
    cs: &ConsensusState,
    txn: &Transaction,
    parent_id: Hash256,
    public_key_index: u64,
    timelock: u64,
    _extra_covered_sigs: &[u64],
) -> Hash256 {
    let mut h = Blake2b256::new();
    h.update([replay_prefix(cs)]);
    hash_siacoin_inputs(&mut h, txn, None);
    hash_outputs(&mut h, txn, None);
    hash_siafund_inputs(&mut h, txn, None);
    hash_siafund_outputs(&mut h, txn, None);
    hash_miner_fees(&mut h, txn, None);
    hash_arbitrary_data(&mut h, txn, None);
    h.update(parent_id);
    h.update(public_key_index.to_le_bytes());
    h.update(timelock.to_le_bytes());
    let digest = h.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Digest covering only the fields named by `covered_fields`.
pub fn partial_sighash(cs: &ConsensusState, txn: &Transaction, covered_fields: &CoveredFields) -> Hash256 {
    let mut h = Blake2b256::new();
    h.update([replay_prefix(cs)]);
    hash_siacoin_inputs(&mut h, txn, Some(&covered_fields.siacoin_inputs));
    hash_outputs(&mut h, txn, Some(&covered_fields.siacoin_outputs));
    hash_siafund_inputs(&mut h, txn, Some(&covered_fields.siafund_inputs));
    hash_siafund_outputs(&mut h, txn, Some(&covered_fields.siafund_outputs));
    hash_miner_fees(&mut h, txn, Some(&covered_fields.miner_fees));
    hash_arbitrary_data(&mut h, txn, Some(&covered_fields.arbitrary_data));
    hash_signatures(&mut h, txn, &covered_fields.signatures);
    let digest = h.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Digest covering a whole v2 transaction; every input signs the same hash.
pub fn input_sighash(cs: &ConsensusState, txn: &V2Transaction) -> Hash256 {
    let mut h = Blake2b256::new();
    h.update([2u8, replay_prefix(cs)]);
    for input in &txn.siacoin_inputs {
        h.update(input.parent_id);
    }
    for out in &txn.siacoin_outputs {
        h.update(out.value.to_le_bytes());
        h.update(out.address.0);
    }
    for input in &txn.siafund_inputs {
        h.update(input.parent_id);
    }
    for out in &txn.siafund_outputs {
        h.update(out.value.to_le_bytes());
        h.update(out.address.0);
    }
    h.update(txn.miner_fees.to_le_bytes());
    for data in &txn.arbitrary_data {
        h.update(data);
    }
    let digest = h.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
