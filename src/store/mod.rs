//! Durable storage for encrypted seeds and derived key indices (sqlx over
//! SQLite). Every public method is a single transaction; busy/locked errors
//! are retried with jittered exponential backoff.

pub mod error;
pub mod migrations;
pub mod models;

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{SqlitePool, Transaction};

pub use error::{Result, StoreError};
pub use models::{SeedKey, SeedMeta};

use models::{SeedRow, SigningKeyRow};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub factor: f64,
    pub cap: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_millis(50),
            factor: 1.8,
            cap: Duration::from_secs(15),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    retry: RetryPolicy,
}

impl Store {
    pub async fn open(database_url: &str) -> Result<Self> {
        Self::open_with_retry(database_url, RetryPolicy::default()).await
    }

    pub async fn open_with_retry(database_url: &str, retry: RetryPolicy) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::Database)?
            .create_if_missing(true)
            .foreign_keys(true)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("journal_mode", "WAL")
            .pragma("secure_delete", "OFF")
            .pragma("cache_size", "-65536");

        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(opts)
            .await?;

        let store = Self { pool, retry };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        let target_version = migrations::migrations().len() as i64;
        let current = self.schema_version().await?;

        if current.is_none() {
            let mut tx = self.pool.begin().await?;
            migrations::init_fresh_schema(&mut tx).await?;
            tx.commit().await?;
            return Ok(());
        }

        let mut version = current.unwrap();
        for migration in migrations::migrations().into_iter().skip(version as usize) {
            let mut tx = self.pool.begin().await?;
            (migration.run)(&mut tx).await?;
            version += 1;
            sqlx::query("UPDATE global_settings SET db_version = ? WHERE id = 0")
                .bind(version)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
        }

        debug_assert_eq!(version, target_version);
        Ok(())
    }

    async fn schema_version(&self) -> Result<Option<i64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT db_version FROM global_settings WHERE id = 0")
            .fetch_optional(&self.pool)
            .await
            .or_else(|e| match &e {
                sqlx::Error::Database(_) => Ok(None),
                _ => Err(e),
            })?;
        Ok(row.map(|(v,)| v))
    }

    async fn with_retry<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        let mut delay = self.retry.base_delay;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(StoreError::Database(e)) if attempt + 1 < self.retry.max_attempts && is_busy(&e) => {
                    attempt += 1;
                    let jitter = rand::rng().random_range(0.0..delay.as_secs_f64() * 0.25);
                    tokio::time::sleep(delay + Duration::from_secs_f64(jitter)).await;
                    delay = delay
                        .mul_f64(self.retry.factor)
                        .min(self.retry.cap);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub async fn key_salt(&self) -> Result<Option<[u8; 32]>> {
        self.with_retry(|| async {
            let row: Option<(Option<Vec<u8>>,)> =
                sqlx::query_as("SELECT key_salt FROM global_settings WHERE id = 0")
                    .fetch_optional(&self.pool)
                    .await?;
            Ok(row.and_then(|(s,)| s).map(|v| {
                let mut salt = [0u8; 32];
                salt.copy_from_slice(&v);
                salt
            }))
        })
        .await
    }

    pub async fn set_key_salt(&self, salt: &[u8; 32]) -> Result<()> {
        self.with_retry(|| async {
            let mut tx = self.pool.begin().await?;
            let existing: Option<(Option<Vec<u8>>,)> =
                sqlx::query_as("SELECT key_salt FROM global_settings WHERE id = 0")
                    .fetch_optional(&mut *tx)
                    .await?;
            if matches!(existing, Some((Some(_),))) {
                return Err(StoreError::SaltSet);
            }
            sqlx::query("UPDATE global_settings SET key_salt = ? WHERE id = 0")
                .bind(salt.as_slice())
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            Ok(())
        })
        .await
    }

    pub async fn bytes_for_verify(&self) -> Result<Vec<u8>> {
        self.with_retry(|| async {
            let row: Option<(Vec<u8>,)> =
                sqlx::query_as("SELECT encrypted_seed FROM seeds LIMIT 1")
                    .fetch_optional(&self.pool)
                    .await?;
            row.map(|(b,)| b).ok_or(StoreError::NotFound)
        })
        .await
    }

    pub async fn add_seed(&self, mac: &[u8; 32], encrypted_seed: &[u8; 72]) -> Result<SeedMeta> {
        self.with_retry(|| async {
            let mut tx = self.pool.begin().await?;
            if let Some(row) = existing_seed_by_mac(&mut tx, mac.as_slice()).await? {
                let meta = seed_meta_in_tx(&mut tx, row.id).await?;
                tx.commit().await?;
                return Ok(meta);
            }
            let now_ms = Utc::now().timestamp_millis();
            let id: (i64,) = sqlx::query_as(
                "INSERT INTO seeds (seed_mac, encrypted_seed, date_created) VALUES (?, ?, ?) RETURNING id",
            )
            .bind(mac.as_slice())
            .bind(encrypted_seed.as_slice())
            .bind(now_ms)
            .fetch_one(&mut *tx)
            .await?;
            let meta = seed_meta_in_tx(&mut tx, id.0).await?;
            tx.commit().await?;
            Ok(meta)
        })
        .await
    }

    pub async fn seed(&self, id: i64) -> Result<[u8; 72]> {
        self.with_retry(|| async {
            let row: Option<SeedRow> =
                sqlx::query_as("SELECT id, encrypted_seed, date_created FROM seeds WHERE id = ?")
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
            let row = row.ok_or(StoreError::NotFound)?;
            let mut blob = [0u8; 72];
            blob.copy_from_slice(&row.encrypted_seed);
            Ok(blob)
        })
        .await
    }

    pub async fn seed_meta(&self, id: i64) -> Result<SeedMeta> {
        self.with_retry(|| async {
            let mut tx = self.pool.begin().await?;
            let meta = seed_meta_in_tx(&mut tx, id).await?;
            tx.commit().await?;
            Ok(meta)
        })
        .await
    }

    pub async fn seeds(&self, limit: i64, offset: i64) -> Result<Vec<SeedMeta>> {
        self.with_retry(|| async {
            let rows: Vec<(i64, i64)> = sqlx::query_as(
                "SELECT id, date_created FROM seeds ORDER BY date_created ASC LIMIT ? OFFSET ?",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
            let mut metas = Vec::with_capacity(rows.len());
            for (id, created_ms) in rows {
                let last_index = self.last_index(&self.pool, id).await?;
                metas.push(SeedMeta {
                    id,
                    last_index,
                    created_at: millis_to_datetime(created_ms),
                });
            }
            Ok(metas)
        })
        .await
    }

    pub async fn seed_keys(&self, id: i64, offset: i64, limit: i64) -> Result<Vec<SeedKey>> {
        self.with_retry(|| async {
            let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM seeds WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
            if exists.is_none() {
                return Err(StoreError::NotFound);
            }
            let rows: Vec<SigningKeyRow> = sqlx::query_as(
                "SELECT public_key, seed_id, seed_index FROM signing_keys
                 WHERE seed_id = ? ORDER BY seed_index ASC LIMIT ? OFFSET ?",
            )
            .bind(id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows
                .into_iter()
                .map(|r| SeedKey {
                    public_key: hex::encode(&r.public_key),
                    address: crate::consensus::UnlockConditions::standard(
                        ed25519_pubkey_bytes(&r.public_key),
                    )
                    .address()
                    .to_hex(),
                    seed_index: r.seed_index,
                })
                .collect())
        })
        .await
    }

    pub async fn next_index(&self, id: i64) -> Result<i64> {
        self.with_retry(|| async {
            let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM seeds WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
            if exists.is_none() {
                return Err(StoreError::NotFound);
            }
            let idx = self.last_index(&self.pool, id).await?;
            Ok(if idx == 0 {
                let any: Option<(i64,)> = sqlx::query_as(
                    "SELECT seed_index FROM signing_keys WHERE seed_id = ? LIMIT 1",
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
                if any.is_some() {
                    idx + 1
                } else {
                    0
                }
            } else {
                idx + 1
            })
        })
        .await
    }

    pub async fn signing_key_index(&self, public_key: &[u8; 32]) -> Result<(i64, i64)> {
        self.with_retry(|| async {
            let row: Option<(i64, i64)> = sqlx::query_as(
                "SELECT seed_id, seed_index FROM signing_keys WHERE public_key = ?",
            )
            .bind(public_key.as_slice())
            .fetch_optional(&self.pool)
            .await?;
            row.ok_or(StoreError::NotFound)
        })
        .await
    }

    pub async fn add_key_index(&self, seed_id: i64, public_key: &[u8; 32], index: i64) -> Result<()> {
        self.with_retry(|| async {
            sqlx::query(
                "INSERT INTO signing_keys (public_key, seed_id, seed_index) VALUES (?, ?, ?)
                 ON CONFLICT(public_key) DO NOTHING",
            )
            .bind(public_key.as_slice())
            .bind(seed_id)
            .bind(index)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
        .await
    }

    async fn last_index(&self, pool: &SqlitePool, seed_id: i64) -> Result<i64> {
        let row: (Option<i64>,) =
            sqlx::query_as("SELECT MAX(seed_index) FROM signing_keys WHERE seed_id = ?")
                .bind(seed_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0.unwrap_or(0))
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn existing_seed_by_mac(
    tx: &mut Transaction<'_, sqlx::Sqlite>,
    mac: &[u8],
) -> Result<Option<SeedRow>> {
    let row: Option<SeedRow> =
        sqlx::query_as("SELECT id, encrypted_seed, date_created FROM seeds WHERE seed_mac = ?")
            .bind(mac)
            .fetch_optional(&mut **tx)
            .await?;
    Ok(row)
}

async fn seed_meta_in_tx(tx: &mut Transaction<'_, sqlx::Sqlite>, id: i64) -> Result<SeedMeta> {
    let row: Option<(i64, i64)> = sqlx::query_as("SELECT id, date_created FROM seeds WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    let (id, created_ms) = row.ok_or(StoreError::NotFound)?;
    let last_index: (Option<i64>,) =
        sqlx::query_as("SELECT MAX(seed_index) FROM signing_keys WHERE seed_id = ?")
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;
    Ok(SeedMeta {
        id,
        last_index: last_index.0.unwrap_or(0),
        created_at: millis_to_datetime(created_ms),
    })
}

fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_else(Utc::now)
}

fn ed25519_pubkey_bytes(bytes: &[u8]) -> [u8; 32] {
    let mut pk = [0u8; 32];
    if bytes.len() == 32 {
        pk.copy_from_slice(bytes);
    }
    pk
}

fn is_busy(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => matches!(db_err.code().as_deref(), Some("5") | Some("6")),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Store {
        Store::open("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn key_salt_write_once() {
        let store = memory_store().await;
        assert_eq!(store.key_salt().await.unwrap(), None);
        let salt = [7u8; 32];
        store.set_key_salt(&salt).await.unwrap();
        assert_eq!(store.key_salt().await.unwrap(), Some(salt));
        let other = [9u8; 32];
        assert!(matches!(
            store.set_key_salt(&other).await,
            Err(StoreError::SaltSet)
        ));
        assert_eq!(store.key_salt().await.unwrap(), Some(salt));
    }

    #[tokio::test]
    async fn add_seed_is_idempotent_on_mac() {
        let store = memory_store().await;
        let mac = [1u8; 32];
        let blob = [2u8; 72];
        let first = store.add_seed(&mac, &blob).await.unwrap();
        let second = store.add_seed(&mac, &blob).await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn bytes_for_verify_empty_db_is_not_found() {
        let store = memory_store().await;
        assert!(matches!(store.bytes_for_verify().await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn next_index_and_add_key_index() {
        let store = memory_store().await;
        let meta = store.add_seed(&[3u8; 32], &[4u8; 72]).await.unwrap();
        assert_eq!(store.next_index(meta.id).await.unwrap(), 0);

        let pk = [5u8; 32];
        store.add_key_index(meta.id, &pk, 0).await.unwrap();
        assert_eq!(store.next_index(meta.id).await.unwrap(), 1);

        // idempotent: re-adding the same public key at a different index is a no-op.
        store.add_key_index(meta.id, &pk, 99).await.unwrap();
        let (seed_id, idx) = store.signing_key_index(&pk).await.unwrap();
        assert_eq!(seed_id, meta.id);
        assert_eq!(idx, 0);
    }

    #[tokio::test]
    async fn seed_keys_not_found_for_missing_seed() {
        let store = memory_store().await;
        assert!(matches!(
            store.seed_keys(42, 0, 10).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn migration_converges_with_fresh_init() {
        let store = memory_store().await;
        let snap = migrations::snapshot_schema(store.pool()).await.unwrap();

        let fresh_url = "sqlite::memory:";
        let fresh = Store::open(fresh_url).await.unwrap();
        let fresh_snap = migrations::snapshot_schema(fresh.pool()).await.unwrap();

        assert_eq!(snap, fresh_snap);
    }
}
