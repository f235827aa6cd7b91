//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent arithmetic rule violations on a wallet balance.
/// They are independent of the web/infrastructure layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Amount of zero is a no-op and is rejected
    #[error("amount cannot be zero")]
    ZeroAmount,

    /// Negative amounts are malformed input
    #[error("amount cannot be negative")]
    NegativeAmount,

    /// Deposit would push the balance past the representable range
    #[error("balance overflow")]
    Overflow,

    /// Withdrawal would drive the balance negative
    #[error("insufficient balance")]
    InsufficientBalance,
}

impl DomainError {
    /// Check if this is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ZeroAmount | Self::NegativeAmount | Self::InsufficientBalance
        )
    }
}
