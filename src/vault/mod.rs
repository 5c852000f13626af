//! Vault core: the lock/unlock state machine and the seed/key operations
//! that require the unlocked key material. A single mutex serializes state
//! transitions and every operation that touches plaintext seeds or keys.

pub mod crypto;
pub mod error;
pub mod keyderive;

use std::sync::Arc;

use ed25519_dalek::Signer;
use tokio::sync::Mutex;
use zeroize::Zeroize;

use crate::store::{SeedKey, SeedMeta, Store};

pub use error::VaultError;

use crypto::Sealed;
use keyderive::key_from_seed;

type Result<T> = std::result::Result<T, VaultError>;

enum State {
    Locked,
    Unlocked(Sealed),
}

pub struct Vault {
    store: Store,
    state: Mutex<State>,
}

impl Vault {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            state: Mutex::new(State::Locked),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn is_unlocked(&self) -> bool {
        matches!(*self.state.lock().await, State::Unlocked(_))
    }

    /// Derive the vault key from `secret`, verifying it against an existing
    /// seed if one is present. Returns `Unlocked` already held → `ErrUnlocked`.
    pub async fn unlock(&self, secret: &[u8]) -> Result<()> {
        let mut guard = self.state.lock().await;
        if matches!(*guard, State::Unlocked(_)) {
            return Err(VaultError::Unlocked);
        }

        let salt = match self.store.key_salt().await? {
            Some(salt) => salt,
            None => {
                let mut fresh = [0u8; 32];
                rand::RngCore::fill_bytes(&mut rand::rng(), &mut fresh);
                match self.store.set_key_salt(&fresh).await {
                    Ok(()) => fresh,
                    Err(crate::store::StoreError::SaltSet) => {
                        self.store.key_salt().await?.expect("salt set by concurrent unlock")
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let mut key = crypto::derive_key(secret, &salt)?;
        let sealed = Sealed::new(key);
        key.zeroize();

        match self.store.bytes_for_verify().await {
            Ok(blob) => {
                sealed.open_seed(&blob)?;
            }
            Err(crate::store::StoreError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        *guard = State::Unlocked(sealed);
        Ok(())
    }

    pub async fn lock(&self) {
        let mut guard = self.state.lock().await;
        *guard = State::Locked;
    }

    pub async fn add_seed(&self, seed: &mut [u8; 32]) -> Result<SeedMeta> {
        let guard = self.state.lock().await;
        let sealed = match &*guard {
            State::Locked => {
                seed.zeroize();
                return Err(VaultError::Locked);
            }
            State::Unlocked(s) => s,
        };

        let mac = sealed.mac(seed);
        let blob = match sealed.seal_seed(seed) {
            Ok(b) => b,
            Err(e) => {
                seed.zeroize();
                return Err(e);
            }
        };
        seed.zeroize();

        let meta = self.store.add_seed(&mac, &blob).await?;
        Ok(meta)
    }

    pub async fn seed_meta(&self, id: i64) -> Result<SeedMeta> {
        let guard = self.state.lock().await;
        require_unlocked(&guard)?;
        Ok(self.store.seed_meta(id).await?)
    }

    pub async fn seeds(&self, limit: i64, offset: i64) -> Result<Vec<SeedMeta>> {
        let guard = self.state.lock().await;
        require_unlocked(&guard)?;
        Ok(self.store.seeds(limit, offset).await?)
    }

    pub async fn seed_keys(&self, id: i64, offset: i64, limit: i64) -> Result<Vec<SeedKey>> {
        let guard = self.state.lock().await;
        require_unlocked(&guard)?;
        Ok(self.store.seed_keys(id, offset, limit).await?)
    }

    /// Derive the next unused key for `seed_id`, record it, and return the
    /// public key bytes together with its derivation index.
    pub async fn next_key(&self, seed_id: i64) -> Result<([u8; 32], i64)> {
        let guard = self.state.lock().await;
        let sealed = match &*guard {
            State::Locked => return Err(VaultError::Locked),
            State::Unlocked(s) => s,
        };

        let index = self.store.next_index(seed_id).await?;
        let blob = self.store.seed(seed_id).await?;
        let mut seed = sealed.open_seed(&blob)?;

        let sk = key_from_seed(&seed, index as u64);
        let pk = sk.verifying_key().to_bytes();
        seed.zeroize();
        drop(sk);

        self.store.add_key_index(seed_id, &pk, index).await?;
        Ok((pk, index))
    }

    /// Sign `digest` with the private key corresponding to `public_key`.
    pub async fn sign(&self, public_key: &[u8; 32], digest: &[u8; 32]) -> Result<[u8; 64]> {
        let guard = self.state.lock().await;
        let sealed = match &*guard {
            State::Locked => return Err(VaultError::Locked),
            State::Unlocked(s) => s,
        };

        let (seed_id, index) = self
            .store
            .signing_key_index(public_key)
            .await
            .map_err(|e| match e {
                crate::store::StoreError::NotFound => VaultError::NotFound,
                other => other.into(),
            })?;

        let blob = self.store.seed(seed_id).await?;
        let mut seed = sealed.open_seed(&blob)?;
        let sk = key_from_seed(&seed, index as u64);
        let sig = sk.sign(digest);
        seed.zeroize();

        Ok(sig.to_bytes())
    }
}

fn require_unlocked(guard: &State) -> Result<()> {
    match guard {
        State::Locked => Err(VaultError::Locked),
        State::Unlocked(_) => Ok(()),
    }
}

pub type SharedVault = Arc<Vault>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    async fn unlocked_vault() -> Vault {
        let store = Store::open("sqlite::memory:").await.unwrap();
        let vault = Vault::new(store);
        vault.unlock(b"hunter2").await.unwrap();
        vault
    }

    #[tokio::test]
    async fn locked_rejects_add_seed() {
        let store = Store::open("sqlite::memory:").await.unwrap();
        let vault = Vault::new(store);
        let mut seed = [1u8; 32];
        assert!(matches!(vault.add_seed(&mut seed).await, Err(VaultError::Locked)));
    }

    #[tokio::test]
    async fn unlock_twice_errors() {
        let vault = unlocked_vault().await;
        assert!(matches!(vault.unlock(b"hunter2").await, Err(VaultError::Unlocked)));
    }

    #[tokio::test]
    async fn wrong_secret_on_second_unlock_rejected() {
        let vault = unlocked_vault().await;
        let mut seed = [7u8; 32];
        vault.add_seed(&mut seed).await.unwrap();
        vault.lock().await;
        assert!(matches!(
            vault.unlock(b"wrong").await,
            Err(VaultError::IncorrectSecret)
        ));
    }

    #[tokio::test]
    async fn next_key_then_sign_round_trips() {
        let vault = unlocked_vault().await;
        let mut seed = [3u8; 32];
        let meta = vault.add_seed(&mut seed).await.unwrap();

        let (pk_bytes, _index) = vault.next_key(meta.id).await.unwrap();
        let digest = [9u8; 32];
        let sig_bytes = vault.sign(&pk_bytes, &digest).await.unwrap();

        let vk = ed25519_dalek::VerifyingKey::from_bytes(&pk_bytes).unwrap();
        let sig = ed25519_dalek::Signature::from_bytes(&sig_bytes);
        assert!(vk.verify_strict(&digest, &sig).is_ok());
    }

    #[tokio::test]
    async fn sign_unknown_key_is_not_found() {
        let vault = unlocked_vault().await;
        assert!(matches!(
            vault.sign(&[0u8; 32], &[0u8; 32]).await,
            Err(VaultError::NotFound)
        ));
    }
}
