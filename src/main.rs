use log::{info, warn};

use minichain::{ChainError, Ledger, LendingPool, Transaction};

// Walks through the sample flow: submit transactions, mine them, check the
// chain, then exercise the lending pool.
fn main() -> Result<(), ChainError> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut ledger = Ledger::new();

    ledger.add_transaction(Transaction::new("address1", "address2", 100.0)?);
    ledger.add_transaction(Transaction::new("address2", "address1", 50.0)?);

    let block = ledger.mine_pending_transactions("miner1")?;
    info!("Block #{} has been added to the ledger", block.index);
    info!("Hash: {}", block.hash);

    info!("Balance of miner1 is {}", ledger.balance_of("miner1"));
    info!("Ledger validity: {}", ledger.is_chain_valid());

    let mut pool = LendingPool::new();
    if let Err(err) = pool.deposit(1000.0) {
        warn!("Deposit rejected: {}", err);
    }
    if let Err(err) = pool.borrow(500.0) {
        warn!("Borrow rejected: {}", err);
    }
    if let Err(err) = pool.borrow(600.0) {
        warn!("Borrow rejected: {}", err);
    }
    info!("Available liquidity: {}", pool.available_liquidity());

    Ok(())
}
