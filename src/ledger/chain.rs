use chrono::Utc;
use log::info;
use thiserror::Error;

use super::block::{Block, Payload};
use super::transaction::{Transaction, TransactionError};

/// Errors that can occur during ledger operations
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Proof of work exhausted after {attempts} attempts")]
    ProofOfWorkExhausted { attempts: u64 },
}

/// Configuration for a ledger
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Mining difficulty (number of leading zero hex digits required)
    pub difficulty: u32,

    /// Reward credited to the miner of each block
    pub mining_reward: f64,

    /// Optional cap on proof-of-work attempts per block
    ///
    /// `None` reproduces the unbounded reference search; a bound makes the
    /// search abort with `ProofOfWorkExhausted` instead of blocking forever.
    pub max_proof_attempts: Option<u64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            difficulty: 2,
            mining_reward: 50.0,
            max_proof_attempts: None,
        }
    }
}

/// An append-only chain of blocks plus a queue of pending transactions
///
/// The ledger is a plain owned value: every operation takes `&self` or
/// `&mut self`, and the caller decides how it is shared. The chain always
/// contains at least the genesis block and is never reordered or truncated.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// The chain of blocks
    chain: Vec<Block>,

    /// Pending transactions to be included in the next block
    pending: Vec<Transaction>,

    config: LedgerConfig,
}

impl Ledger {
    /// Creates a new ledger seeded with a genesis block
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Creates a new ledger with an explicit configuration
    pub fn with_config(config: LedgerConfig) -> Self {
        Ledger {
            chain: vec![Block::genesis(Utc::now().timestamp())],
            pending: Vec::new(),
            config,
        }
    }

    /// Gets the last block in the chain
    pub fn latest_block(&self) -> &Block {
        self.chain.last().expect("chain always contains genesis")
    }

    /// The entire chain, genesis first
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Transactions submitted but not yet mined
    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending
    }

    /// Adds a transaction to the pending queue
    ///
    /// Does not touch the block sequence. Amount validation already happened
    /// in [`Transaction::new`], so queueing cannot fail.
    ///
    /// # Returns
    ///
    /// The index of the block that will include this transaction
    pub fn add_transaction(&mut self, transaction: Transaction) -> u64 {
        self.pending.push(transaction);
        self.chain.len() as u64
    }

    /// Searches for a nonce whose block digest meets the difficulty target
    ///
    /// Tries nonces from 0 upward and accepts the first digest whose leading
    /// hex digits are all `0` for `difficulty` digits. With difficulty 0 the
    /// target is empty and nonce 0 is accepted immediately.
    ///
    /// # Returns
    ///
    /// The accepted nonce and its digest, or `ProofOfWorkExhausted` if the
    /// configured attempt cap runs out first
    pub fn proof_of_work(
        &self,
        index: u64,
        previous_hash: &str,
        timestamp: i64,
        payload: &Payload,
    ) -> Result<(u64, String), ChainError> {
        let target = "0".repeat(self.config.difficulty as usize);
        let mut proof: u64 = 0;
        let mut attempts: u64 = 0;

        loop {
            let hash = Block::new(
                index,
                previous_hash.to_string(),
                timestamp,
                payload.clone(),
                proof,
            )
            .hash;

            if hash.starts_with(&target) {
                return Ok((proof, hash));
            }

            attempts += 1;
            if let Some(max) = self.config.max_proof_attempts {
                if attempts >= max {
                    return Err(ChainError::ProofOfWorkExhausted { attempts });
                }
            }

            proof += 1;
        }
    }

    /// Mines the pending transactions into a new block
    ///
    /// A reward transaction from the system address to `miner_address` is
    /// included alongside the pending queue; an empty queue still mines a
    /// reward-only block. On success the block is appended and the queue is
    /// cleared; on failure neither the chain nor the queue is touched.
    ///
    /// # Returns
    ///
    /// The newly mined block
    pub fn mine_pending_transactions(
        &mut self,
        miner_address: &str,
    ) -> Result<Block, ChainError> {
        let mut transactions = self.pending.clone();
        transactions.push(Transaction::coinbase(miner_address, self.config.mining_reward));

        let latest = self.latest_block();
        let index = latest.index + 1;
        let previous_hash = latest.hash.clone();
        let timestamp = Utc::now().timestamp();
        let payload = Payload::Transactions(transactions);

        let (proof, hash) =
            self.proof_of_work(index, &previous_hash, timestamp, &payload)?;

        let block = Block::new(index, previous_hash, timestamp, payload, proof);
        debug_assert_eq!(block.hash, hash);

        info!(
            "Block {} mined by {} with hash {}",
            block.index, miner_address, block.hash
        );

        self.chain.push(block.clone());
        self.pending.clear();

        Ok(block)
    }

    /// Appends a raw-data block without proof-of-work
    ///
    /// The block is hash-linked to the chain like any other (proof 0) and is
    /// covered by validation, but skips the mining admission step.
    pub fn append_data_block(&mut self, data: impl Into<String>) -> Block {
        let latest = self.latest_block();
        let block = Block::new(
            latest.index + 1,
            latest.hash.clone(),
            Utc::now().timestamp(),
            Payload::Data(data.into()),
            0,
        );

        info!("Block {} appended with hash {}", block.index, block.hash);

        self.chain.push(block.clone());
        block
    }

    /// Validates the integrity of the chain
    ///
    /// # Returns
    ///
    /// true if the chain is valid, false otherwise
    pub fn is_chain_valid(&self) -> bool {
        self.first_invalid_block().is_none()
    }

    /// Finds the first block that fails validation
    ///
    /// Walks the chain from index 1, recomputing each block's hash from its
    /// stored fields and checking the link to its predecessor. Difficulty is
    /// an admission policy at mining time and is not re-checked here.
    ///
    /// # Returns
    ///
    /// The index of the first inconsistent block, or `None` if the whole
    /// chain is internally consistent
    pub fn first_invalid_block(&self) -> Option<u64> {
        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let previous = &self.chain[i - 1];

            // Check if the hash is correct
            if current.hash != current.calculate_hash() {
                return Some(current.index);
            }

            // Check if the previous hash is correct
            if current.previous_hash != previous.hash {
                return Some(current.index);
            }
        }

        None
    }

    /// Calculates the balance of an address from the mined chain
    ///
    /// Credits every transaction received and debits every transaction sent;
    /// pending transactions do not count until mined.
    pub fn balance_of(&self, address: &str) -> f64 {
        let mut balance = 0.0;

        for block in &self.chain {
            for transaction in block.transactions() {
                if transaction.recipient == address {
                    balance += transaction.amount;
                }
                if transaction.sender == address {
                    balance -= transaction.amount;
                }
            }
        }

        balance
    }

    #[cfg(test)]
    pub(crate) fn block_mut(&mut self, index: usize) -> &mut Block {
        &mut self.chain[index]
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
