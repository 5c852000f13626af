//! Plain Sia wire types consumed by the signing engine.
//!
//! These are the concrete shapes behind the "opaque" collaborators the core
//! is specified against: transactions, unlock conditions, spend policies,
//! and the network/consensus state that parameterizes sighash computation.

use serde::{Deserialize, Serialize};

pub type Hash256 = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "ed25519")]
    Ed25519,
    #[serde(other)]
    Unknown,
}

/// An algorithm-tagged public key as it appears inside `UnlockConditions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockKey {
    pub algorithm: Algorithm,
    #[serde(with = "hex_bytes")]
    pub key: Vec<u8>,
}

impl UnlockKey {
    pub fn as_ed25519(&self) -> Option<[u8; 32]> {
        if self.algorithm != Algorithm::Ed25519 || self.key.len() != 32 {
            return None;
        }
        let mut pk = [0u8; 32];
        pk.copy_from_slice(&self.key);
        Some(pk)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockConditions {
    pub timelock: u64,
    pub public_keys: Vec<UnlockKey>,
    pub signatures_required: u64,
}

impl UnlockConditions {
    /// Standard single-key unlock conditions for a freshly derived key.
    pub fn standard(pk: [u8; 32]) -> Self {
        Self {
            timelock: 0,
            public_keys: vec![UnlockKey {
                algorithm: Algorithm::Ed25519,
                key: pk.to_vec(),
            }],
            signatures_required: 1,
        }
    }

    /// Canonical byte encoding used as hash input, not a wire format.
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.timelock.to_le_bytes());
        buf.extend_from_slice(&(self.public_keys.len() as u64).to_le_bytes());
        for key in &self.public_keys {
            buf.push(match key.algorithm {
                Algorithm::Ed25519 => 1u8,
                Algorithm::Unknown => 0u8,
            });
            buf.extend_from_slice(&(key.key.len() as u64).to_le_bytes());
            buf.extend_from_slice(&key.key);
        }
        buf.extend_from_slice(&self.signatures_required.to_le_bytes());
        buf
    }

    /// The standard address (unlock hash) for these conditions: a 32-byte
    /// BLAKE2b-256 digest of the canonical encoding followed by a 6-byte
    /// checksum derived from hashing the digest a second time.
    pub fn address(&self) -> Address {
        use crate::consensus::sighash::Blake2b256;
        use blake2::Digest;

        let mut hasher = Blake2b256::new();
        hasher.update(self.canonical_bytes());
        let digest = hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&digest);

        let mut checksum_hasher = Blake2b256::new();
        checksum_hasher.update(hash);
        let checksum_digest = checksum_hasher.finalize();

        let mut bytes = [0u8; 38];
        bytes[..32].copy_from_slice(&hash);
        bytes[32..].copy_from_slice(&checksum_digest[..6]);
        Address(bytes)
    }
}

/// A 38-byte unlock hash: 32-byte BLAKE2b-256 digest plus a 6-byte checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(pub [u8; 38]);

impl Address {
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 38 {
            return Err(serde::de::Error::custom("address must be 38 bytes"));
        }
        let mut buf = [0u8; 38];
        buf.copy_from_slice(&bytes);
        Ok(Address(buf))
    }
}

/// Which parts of a v1 transaction a signature covers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoveredFields {
    #[serde(default)]
    pub whole_transaction: bool,
    #[serde(default)]
    pub siacoin_inputs: Vec<u64>,
    #[serde(default)]
    pub siacoin_outputs: Vec<u64>,
    #[serde(default)]
    pub siafund_inputs: Vec<u64>,
    #[serde(default)]
    pub siafund_outputs: Vec<u64>,
    #[serde(default)]
    pub miner_fees: Vec<u64>,
    #[serde(default)]
    pub arbitrary_data: Vec<u64>,
    #[serde(default)]
    pub signatures: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSignature {
    pub parent_id: Hash256,
    pub public_key_index: u64,
    #[serde(default)]
    pub timelock: u64,
    pub covered_fields: CoveredFields,
    #[serde(default, with = "hex_bytes")]
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiacoinInput {
    pub parent_id: Hash256,
    pub unlock_conditions: UnlockConditions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiafundInput {
    pub parent_id: Hash256,
    pub unlock_conditions: UnlockConditions,
    #[serde(default)]
    pub claim_address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiacoinOutput {
    pub value: u128,
    pub address: Address,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiafundOutput {
    pub value: u64,
    pub address: Address,
}

/// A v1 transaction. Fields not relevant to signing (file contracts,
/// storage proofs) are kept opaque byte blobs so the hasher can still fold
/// them into the digest without the core needing to understand them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub siacoin_inputs: Vec<SiacoinInput>,
    #[serde(default)]
    pub siacoin_outputs: Vec<SiacoinOutput>,
    #[serde(default)]
    pub siafund_inputs: Vec<SiafundInput>,
    #[serde(default)]
    pub siafund_outputs: Vec<SiafundOutput>,
    #[serde(default)]
    pub miner_fees: Vec<u128>,
    #[serde(default, with = "hex_bytes_vec")]
    pub arbitrary_data: Vec<Vec<u8>>,
    #[serde(default)]
    pub signatures: Vec<TransactionSignature>,
}

/// Recursive spend-policy description (v2).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "policy", rename_all = "camelCase")]
pub enum SpendPolicy {
    Above(u64),
    After(u64),
    PublicKey(#[serde(with = "hex_array32")] [u8; 32]),
    Hash(Hash256),
    Threshold { n: u8, of: Vec<SpendPolicy> },
    UnlockConditions(UnlockConditions),
    Opaque(Address),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatisfiedPolicy {
    pub policy: SpendPolicy,
    #[serde(default)]
    pub signatures: Vec<Signature>,
    #[serde(default)]
    pub preimages: Vec<Hash256>,
}

impl Default for SpendPolicy {
    fn default() -> Self {
        SpendPolicy::Threshold { n: 0, of: Vec::new() }
    }
}

pub type Signature = [u8; 64];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V2SiacoinInput {
    pub parent_id: Hash256,
    pub satisfied_policy: SatisfiedPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V2SiafundInput {
    pub parent_id: Hash256,
    pub satisfied_policy: SatisfiedPolicy,
    #[serde(default)]
    pub claim_address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct V2Transaction {
    #[serde(default)]
    pub siacoin_inputs: Vec<V2SiacoinInput>,
    #[serde(default)]
    pub siacoin_outputs: Vec<SiacoinOutput>,
    #[serde(default)]
    pub siafund_inputs: Vec<V2SiafundInput>,
    #[serde(default)]
    pub siafund_outputs: Vec<SiafundOutput>,
    #[serde(default)]
    pub miner_fees: u128,
    #[serde(default, with = "hex_bytes_vec")]
    pub arbitrary_data: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HardforkV2 {
    pub allow_height: u64,
    pub require_height: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub hardfork_v2: HardforkV2,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChainIndex {
    pub height: u64,
    pub id: Hash256,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsensusState {
    pub index: ChainIndex,
    pub network: Network,
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

mod hex_bytes_vec {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(vecs: &[Vec<u8>], s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(vecs.len()))?;
        for v in vecs {
            seq.serialize_element(&hex::encode(v))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<u8>>, D::Error> {
        let strs = Vec::<String>::deserialize(d)?;
        strs.into_iter()
            .map(|s| hex::decode(&s).map_err(serde::de::Error::custom))
            .collect()
    }
}

mod hex_array32 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(d)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(out)
    }
}
