//! Wallet Handler
//!
//! The only place that combines locking, balance arithmetic, and persistence
//! into one atomic unit per mutation attempt.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::Wallet;
use crate::error::AppError;
use crate::repository::WalletRepository;

use super::{OperationType, UpdateBalanceCommand};

/// Handler for wallet reads and balance mutations
pub struct WalletHandler {
    repository: WalletRepository,
}

impl WalletHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: WalletRepository::new(pool),
        }
    }

    /// Read the current balance without locking.
    pub async fn get_balance(&self, wallet_id: Uuid) -> Result<Wallet, AppError> {
        self.repository.get(wallet_id).await
    }

    /// Execute a balance mutation as one atomic unit:
    /// begin -> lock row -> apply arithmetic -> persist -> commit.
    ///
    /// Any failure between begin and commit rolls the scope back exactly
    /// once, discarding the in-memory mutation and releasing the row lock,
    /// and surfaces the underlying error unchanged. A cancelled attempt
    /// (dropped future) rolls back through transaction drop semantics.
    pub async fn execute(&self, command: UpdateBalanceCommand) -> Result<Wallet, AppError> {
        let mut tx = self.repository.begin().await?;

        match self.apply(&mut tx, &command).await {
            Ok(wallet) => {
                tx.commit().await?;
                Ok(wallet)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        wallet_id = %command.wallet_id,
                        "Failed to roll back transaction: {}",
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    /// Lock the wallet row, mutate the in-memory entity, and persist it
    /// within the caller's transaction. The entity value is exclusively
    /// owned by this attempt; on error it is simply discarded.
    async fn apply(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        command: &UpdateBalanceCommand,
    ) -> Result<Wallet, AppError> {
        let mut wallet = self
            .repository
            .get_for_update(tx, command.wallet_id)
            .await?;

        match command.operation_type {
            OperationType::Deposit => wallet.deposit(command.amount)?,
            OperationType::Withdraw => wallet.withdraw(command.amount)?,
        }

        self.repository.update(tx, &wallet).await
    }
}
