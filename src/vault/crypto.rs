//! Key derivation and the AEAD/MAC pair keyed from it.
//!
//! `Argon2id(t=3, m=64 MiB, p=4, len=32)` derives a 32-byte key from the
//! unlock secret and a per-database salt; that key in turn keys both an
//! XChaCha20-Poly1305 AEAD instance and a BLAKE2b-256 MAC instance. The
//! parameters are a contract: changing them would silently re-key every
//! existing vault.

use argon2::{Algorithm, Argon2, Params, Version};
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, KeyInit, Mac};
use blake2::Blake2bMac;
use chacha20poly1305::aead::{Aead, KeyInit as AeadKeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::RngCore;
use zeroize::Zeroize;

use crate::vault::error::VaultError;

type Blake2bMac256 = Blake2bMac<U32>;

const ARGON2_T: u32 = 3;
const ARGON2_M_KIB: u32 = 64 * 1024;
const ARGON2_P: u32 = 4;

pub fn derive_key(secret: &[u8], salt: &[u8; 32]) -> Result<[u8; 32], VaultError> {
    let params = Params::new(ARGON2_M_KIB, ARGON2_T, ARGON2_P, Some(32))
        .map_err(|e| VaultError::Internal(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let mut key = [0u8; 32];
    argon2
        .hash_password_into(secret, salt, &mut key)
        .map_err(|e| VaultError::Internal(e.to_string()))?;
    Ok(key)
}

pub struct Sealed {
    pub aead: XChaCha20Poly1305,
    pub mac_key: [u8; 32],
}

impl Sealed {
    pub fn new(key: [u8; 32]) -> Self {
        let aead = XChaCha20Poly1305::new_from_slice(&key).expect("32-byte key");
        Sealed { aead, mac_key: key }
    }

    /// 32-byte keyed-BLAKE2b MAC over `data`.
    pub fn mac(&self, data: &[u8]) -> [u8; 32] {
        let mut mac = Blake2bMac256::new_from_slice(&self.mac_key).expect("32-byte key");
        Mac::update(&mut mac, data);
        mac.finalize_fixed().into()
    }

    /// Seals `plaintext` (32-byte seed) under a fresh random nonce, returning
    /// `nonce(24) ∥ ciphertext(32) ∥ tag(16)` = 72 bytes.
    pub fn seal_seed(&self, plaintext: &[u8; 32]) -> Result<[u8; 72], VaultError> {
        let mut nonce_bytes = [0u8; 24];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        let ct = self
            .aead
            .encrypt(nonce, plaintext.as_slice())
            .map_err(|_| VaultError::Internal("seal failed".into()))?;

        let mut blob = [0u8; 72];
        blob[..24].copy_from_slice(&nonce_bytes);
        blob[24..].copy_from_slice(&ct);
        Ok(blob)
    }

    /// Opens a 72-byte `nonce ∥ ciphertext ∥ tag` blob, returning the 32-byte
    /// plaintext. Any length other than 72 is a programming error (not a
    /// protocol error) and panics.
    pub fn open_seed(&self, blob: &[u8]) -> Result<[u8; 32], VaultError> {
        assert_eq!(blob.len(), 72, "encrypted seed blob must be 72 bytes");
        let nonce = XNonce::from_slice(&blob[..24]);
        let pt = self
            .aead
            .decrypt(nonce, &blob[24..])
            .map_err(|_| VaultError::IncorrectSecret)?;
        assert_eq!(pt.len(), 32, "decrypted seed must be 32 bytes");
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&pt);
        Ok(seed)
    }
}

impl Drop for Sealed {
    fn drop(&mut self) {
        self.mac_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_key_is_deterministic() {
        let salt = [1u8; 32];
        let a = derive_key(b"hunter2", &salt).unwrap();
        let b = derive_key(b"hunter2", &salt).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seal_open_round_trip() {
        let key = derive_key(b"hunter2", &[2u8; 32]).unwrap();
        let sealed = Sealed::new(key);
        let seed = [42u8; 32];
        let blob = sealed.seal_seed(&seed).unwrap();
        let opened = sealed.open_seed(&blob).unwrap();
        assert_eq!(opened, seed);
    }

    #[test]
    fn open_with_wrong_key_fails() {
        let key_a = derive_key(b"alice", &[3u8; 32]).unwrap();
        let key_b = derive_key(b"bob", &[3u8; 32]).unwrap();
        let blob = Sealed::new(key_a).seal_seed(&[9u8; 32]).unwrap();
        assert!(matches!(
            Sealed::new(key_b).open_seed(&blob),
            Err(VaultError::IncorrectSecret)
        ));
    }
}
