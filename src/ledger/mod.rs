// Ledger module
//
// This module contains the core ledger implementation including:
// - Block structure and payload variants
// - Transaction structure
// - Chain structure with proof-of-work mining and validation

pub mod block;
pub mod chain;
pub mod transaction;

// Re-export main components for easier access
pub use block::{Block, Payload, GENESIS_PREVIOUS_HASH};
pub use chain::{ChainError, Ledger, LedgerConfig};
pub use transaction::{Transaction, TransactionError, SYSTEM_ADDRESS};
