//! Repository module
//!
//! Database-backed persistence with row-level locking.

mod wallet;

pub use wallet::WalletRepository;
