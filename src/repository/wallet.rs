//! Wallet Repository
//!
//! Durable wallet persistence with row-level exclusive locking.
//! Concurrent mutation attempts on the same wallet serialize on the row lock
//! acquired by `get_for_update`; attempts on different wallets never contend.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::Wallet;
use crate::error::AppError;

/// Repository over the `wallets` table.
///
/// Mutating reads and writes take an explicit transaction handle so the
/// caller controls the transactional scope; `get` is a plain snapshot read
/// against the pool.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    pool: PgPool,
}

impl WalletRepository {
    /// Create a new WalletRepository with a database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Non-locking snapshot read, for read-only queries.
    pub async fn get(&self, id: Uuid) -> Result<Wallet, AppError> {
        let row: Option<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT id, balance
            FROM wallets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (id, balance) = row.ok_or(AppError::WalletNotFound(id))?;

        row_to_wallet(id, balance)
    }

    /// Open a transactional scope on the pool.
    ///
    /// The returned handle finalizes the scope: `commit` makes writes
    /// durable, `rollback` discards them and releases any row locks. A
    /// dropped, un-committed handle rolls back, so a cancelled attempt never
    /// leaves a dangling lock.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// Read the wallet row and acquire its exclusive lock for the duration
    /// of the transaction.
    ///
    /// Blocks while another transaction holds the lock on the same id; there
    /// is no lock-wait timeout here, connection timeouts are the backstop.
    pub async fn get_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Wallet, AppError> {
        let row: Option<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT id, balance
            FROM wallets
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        let (id, balance) = row.ok_or(AppError::WalletNotFound(id))?;

        row_to_wallet(id, balance)
    }

    /// Persist the wallet's current balance to the row locked within the
    /// same transaction.
    ///
    /// Fails with `WalletNotFound` if the row no longer exists (deleted
    /// out-of-band, not expected in normal operation).
    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        wallet: &Wallet,
    ) -> Result<Wallet, AppError> {
        let row: Option<(Uuid, i64)> = sqlx::query_as(
            r#"
            UPDATE wallets
            SET balance = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, balance
            "#,
        )
        .bind(wallet.id())
        .bind(wallet.balance())
        .fetch_optional(&mut **tx)
        .await?;

        let (id, balance) = row.ok_or(AppError::WalletNotFound(wallet.id()))?;

        row_to_wallet(id, balance)
    }
}

/// Materialize a domain Wallet from a stored row.
///
/// A stored balance violating the domain invariant means the row was
/// corrupted outside this service; surface it as an internal error rather
/// than a client-facing domain rejection.
fn row_to_wallet(id: Uuid, balance: i64) -> Result<Wallet, AppError> {
    Wallet::new(id, balance).map_err(|e| {
        tracing::error!("Stored wallet {} violates balance invariant: {}", id, e);
        AppError::Internal(format!("stored wallet {} is invalid: {}", id, e))
    })
}
