//! Wallet entity
//!
//! Domain primitive holding a wallet identity and its balance.
//! All arithmetic is validated before the balance is touched, ensuring an
//! invalid balance cannot exist in the system.

use uuid::Uuid;

use super::DomainError;

/// Wallet represents a balance-holding account.
///
/// # Invariants
/// - Balance is never negative
/// - Balance arithmetic never wraps; overflowing deposits are rejected
/// - The identifier is immutable after construction
///
/// A `Wallet` value is request-scoped: the repository materializes it from a
/// row, exactly one arithmetic call mutates it, and it is either persisted or
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    id: Uuid,
    balance: i64,
}

impl Wallet {
    /// Create a new Wallet with validation.
    ///
    /// # Errors
    /// - `DomainError::NegativeAmount` if the initial balance is negative
    pub fn new(id: Uuid, balance: i64) -> Result<Self, DomainError> {
        if balance < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { id, balance })
    }

    /// Wallet identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    /// - `DomainError::ZeroAmount` if `amount == 0`
    /// - `DomainError::NegativeAmount` if `amount < 0`
    /// - `DomainError::Overflow` if the sum exceeds `i64::MAX`
    ///
    /// The balance is left unchanged on any rejection.
    pub fn deposit(&mut self, amount: i64) -> Result<(), DomainError> {
        if amount == 0 {
            return Err(DomainError::ZeroAmount);
        }
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DomainError::Overflow)?;

        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// # Errors
    /// - `DomainError::ZeroAmount` if `amount == 0`
    /// - `DomainError::NegativeAmount` if `amount < 0`
    /// - `DomainError::InsufficientBalance` if `balance < amount`
    ///
    /// The balance is left unchanged on any rejection.
    pub fn withdraw(&mut self, amount: i64) -> Result<(), DomainError> {
        if amount == 0 {
            return Err(DomainError::ZeroAmount);
        }
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        if self.balance < amount {
            return Err(DomainError::InsufficientBalance);
        }

        self.balance -= amount;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet() {
        let id = Uuid::new_v4();
        let wallet = Wallet::new(id, 100).unwrap();
        assert_eq!(wallet.id(), id);
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn test_new_wallet_zero_balance_ok() {
        let wallet = Wallet::new(Uuid::new_v4(), 0);
        assert!(wallet.is_ok());
    }

    #[test]
    fn test_new_wallet_negative_balance_rejected() {
        let wallet = Wallet::new(Uuid::new_v4(), -1);
        assert_eq!(wallet.unwrap_err(), DomainError::NegativeAmount);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 30).unwrap();
        wallet.deposit(50).unwrap();
        assert_eq!(wallet.balance(), 80);
    }

    #[test]
    fn test_deposit_zero_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 30).unwrap();
        assert_eq!(wallet.deposit(0), Err(DomainError::ZeroAmount));
        assert_eq!(wallet.balance(), 30);
    }

    #[test]
    fn test_deposit_negative_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 30).unwrap();
        assert_eq!(wallet.deposit(-10), Err(DomainError::NegativeAmount));
        assert_eq!(wallet.balance(), 30);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), i64::MAX - 10).unwrap();
        assert_eq!(wallet.deposit(11), Err(DomainError::Overflow));
        assert_eq!(wallet.balance(), i64::MAX - 10);
    }

    #[test]
    fn test_deposit_up_to_max_ok() {
        let mut wallet = Wallet::new(Uuid::new_v4(), i64::MAX - 10).unwrap();
        wallet.deposit(10).unwrap();
        assert_eq!(wallet.balance(), i64::MAX);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 200).unwrap();
        wallet.withdraw(100).unwrap();
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn test_withdraw_entire_balance_ok() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 100).unwrap();
        wallet.withdraw(100).unwrap();
        assert_eq!(wallet.balance(), 0);
    }

    #[test]
    fn test_withdraw_zero_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 100).unwrap();
        assert_eq!(wallet.withdraw(0), Err(DomainError::ZeroAmount));
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn test_withdraw_negative_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 100).unwrap();
        assert_eq!(wallet.withdraw(-5), Err(DomainError::NegativeAmount));
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn test_withdraw_more_than_balance_rejected() {
        let mut wallet = Wallet::new(Uuid::new_v4(), 100).unwrap();
        assert_eq!(wallet.withdraw(101), Err(DomainError::InsufficientBalance));
        assert_eq!(wallet.balance(), 100);
    }
}
