//! A minimal append-only ledger with cryptographic linking, proof-of-work
//! admission for new blocks, and a toy collateral-free lending pool.
//!
//! The [`Ledger`] owns the chain of [`Block`]s and the pending
//! [`Transaction`] queue; the [`LendingPool`] keeps its own liquidity
//! counters on the side.

pub mod ledger;
pub mod lending;

pub use ledger::{
    Block, ChainError, Ledger, LedgerConfig, Payload, Transaction, TransactionError,
};
pub use lending::{LendingPool, PoolError};
