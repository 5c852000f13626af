//! `key_from_seed`: deterministic Ed25519 key derivation from a root seed
//! and an index, matching the reference wallet's child-key scheme —
//! `BLAKE2b-256(seed ∥ index_le_u64)` taken as the Ed25519 signing seed.

use blake2::Digest;
use ed25519_dalek::SigningKey;
use zeroize::Zeroize;

use crate::consensus::sighash::Blake2b256;

pub fn key_from_seed(seed: &[u8; 32], index: u64) -> SigningKey {
    let mut buf = [0u8; 40];
    buf[..32].copy_from_slice(seed);
    buf[32..].copy_from_slice(&index.to_le_bytes());

    let mut hasher = Blake2b256::new();
    hasher.update(&buf);
    let mut digest: [u8; 32] = hasher.finalize().into();

    let key = SigningKey::from_bytes(&digest);
    buf.zeroize();
    digest.zeroize();
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_index_dependent() {
        let seed = [1u8; 32];
        let a = key_from_seed(&seed, 0);
        let b = key_from_seed(&seed, 0);
        let c = key_from_seed(&seed, 1);
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_ne!(a.to_bytes(), c.to_bytes());
    }
}
