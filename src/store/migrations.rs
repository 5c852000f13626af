//! Append-only schema migrations.
//!
//! Each entry is a pure function of a transaction. `db_version` on a fresh
//! database equals `migrations().len()`; opening an existing database runs
//! whatever steps have not yet been applied, each inside its own
//! transaction. A fresh database is initialized directly to the final
//! schema (`init_fresh_schema`) rather than by replaying every step, but
//! the two paths are asserted to converge to byte-equal schemas in tests.

use futures::future::BoxFuture;
use sqlx::{Sqlite, Transaction};

pub struct Migration {
    pub description: &'static str,
    pub run: fn(&mut Transaction<'_, Sqlite>) -> BoxFuture<'_, sqlx::Result<()>>,
}

pub fn migrations() -> Vec<Migration> {
    vec![Migration {
        description: "initial schema: seeds, signing_keys, global_settings",
        run: |tx| Box::pin(create_initial_schema(tx)),
    }]
}

async fn create_initial_schema(tx: &mut Transaction<'_, Sqlite>) -> sqlx::Result<()> {
    for stmt in INITIAL_SCHEMA_STATEMENTS {
        sqlx::query(stmt).execute(&mut **tx).await?;
    }
    Ok(())
}

/// The complete schema, also used directly by `init_fresh_schema` so a
/// brand-new database skips replaying history.
pub(crate) const INITIAL_SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS seeds (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        seed_mac        BLOB NOT NULL UNIQUE,
        encrypted_seed  BLOB NOT NULL,
        date_created    INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_seeds_date_created ON seeds(date_created)",
    r#"
    CREATE TABLE IF NOT EXISTS signing_keys (
        public_key   BLOB PRIMARY KEY,
        seed_id      INTEGER NOT NULL REFERENCES seeds(id),
        seed_index   INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_signing_keys_seed_id ON signing_keys(seed_id)",
    "CREATE INDEX IF NOT EXISTS idx_signing_keys_seed_id_index ON signing_keys(seed_id, seed_index)",
    r#"
    CREATE TABLE IF NOT EXISTS global_settings (
        id          INTEGER PRIMARY KEY CHECK (id = 0),
        db_version  INTEGER NOT NULL,
        key_salt    BLOB
    )
    "#,
];

pub async fn init_fresh_schema(tx: &mut Transaction<'_, Sqlite>) -> sqlx::Result<()> {
    for stmt in INITIAL_SCHEMA_STATEMENTS {
        sqlx::query(stmt).execute(&mut **tx).await?;
    }
    let version = migrations().len() as i64;
    sqlx::query("INSERT OR IGNORE INTO global_settings (id, db_version, key_salt) VALUES (0, ?, NULL)")
        .bind(version)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Snapshot of the logical schema (tables, columns, indices) used to assert
/// that migrations converge to the same shape as a fresh install.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaSnapshot {
    pub tables: Vec<(String, Vec<String>)>,
    pub indices: Vec<String>,
}

pub async fn snapshot_schema(pool: &sqlx::SqlitePool) -> sqlx::Result<SchemaSnapshot> {
    let mut tables = Vec::new();
    let table_names: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .fetch_all(pool)
            .await?;
    for (table,) in table_names {
        let columns: Vec<(i64, String, String, i64, Option<String>, i64)> =
            sqlx::query_as(&format!("PRAGMA table_info({table})"))
                .fetch_all(pool)
                .await?;
        let column_names = columns.into_iter().map(|c| c.1).collect();
        tables.push((table, column_names));
    }

    let indices: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='index' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .fetch_all(pool)
            .await?;

    Ok(SchemaSnapshot {
        tables,
        indices: indices.into_iter().map(|(n,)| n).collect(),
    })
}
