//! Command Handlers module
//!
//! Orchestrates wallet operations over the repository: each balance mutation
//! runs as a single transaction holding the wallet's row lock.

mod commands;
mod wallet_handler;

pub use commands::{OperationType, UpdateBalanceCommand};
pub use wallet_handler::WalletHandler;
