//! Command definitions
//!
//! Commands represent intentions to change the system state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two balance mutations a wallet supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Deposit,
    Withdraw,
}

/// Command to mutate a wallet balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBalanceCommand {
    pub wallet_id: Uuid,
    pub operation_type: OperationType,
    /// Caller-supplied amount; validated by the domain entity, not here
    pub amount: i64,
}

impl UpdateBalanceCommand {
    pub fn new(wallet_id: Uuid, operation_type: OperationType, amount: i64) -> Self {
        Self {
            wallet_id,
            operation_type,
            amount,
        }
    }
}
