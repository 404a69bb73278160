use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::transaction::Transaction;

/// Sentinel previous-hash of the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Payload carried by a block
///
/// Each variant has exactly one deterministic serialization path, so the
/// block digest is reproducible regardless of what the block stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Empty payload of the genesis block
    Genesis,

    /// Ordered list of mined transactions
    Transactions(Vec<Transaction>),

    /// Opaque application data
    Data(String),
}

impl Payload {
    /// Canonical serialization of the payload used as hashing input
    fn canonical_json(&self) -> serde_json::Value {
        match self {
            Payload::Genesis => serde_json::Value::Null,
            Payload::Transactions(transactions) => serde_json::Value::Array(
                transactions.iter().map(Transaction::canonical_json).collect(),
            ),
            Payload::Data(data) => serde_json::Value::String(data.clone()),
        }
    }
}

/// Represents a block in the ledger
///
/// Immutable after construction; the stored hash is recomputable from the
/// other fields, which is exactly what chain validation checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Index of the block in the chain
    pub index: u64,

    /// Hash of the previous block
    pub previous_hash: String,

    /// Timestamp when the block was created (seconds since epoch)
    pub timestamp: i64,

    /// Payload stored in this block
    pub payload: Payload,

    /// Proof of work (nonce)
    pub proof: u64,

    /// Hash of the current block (calculated)
    pub hash: String,
}

impl Block {
    /// Creates a new block, computing its hash from the other fields
    pub fn new(
        index: u64,
        previous_hash: String,
        timestamp: i64,
        payload: Payload,
        proof: u64,
    ) -> Self {
        let block = Block {
            index,
            previous_hash,
            timestamp,
            payload,
            proof,
            hash: String::new(),
        };

        let hash = block.calculate_hash();

        Block { hash, ..block }
    }

    /// Creates the genesis block
    ///
    /// Index 0, the sentinel previous-hash, an empty payload and proof 0;
    /// the hash is computed the same way as for any other block.
    pub fn genesis(timestamp: i64) -> Self {
        Block::new(
            0,
            GENESIS_PREVIOUS_HASH.to_string(),
            timestamp,
            Payload::Genesis,
            0,
        )
    }

    /// Calculates the hash of the block
    ///
    /// A pure function of (index, previous_hash, timestamp, payload, proof)
    /// in that fixed order; the stored `hash` field does not participate.
    ///
    /// # Returns
    ///
    /// The SHA-256 hash of the block as a hexadecimal string
    pub fn calculate_hash(&self) -> String {
        let mut hasher = Sha256::new();

        let block_data = serde_json::json!({
            "index": self.index,
            "previous_hash": self.previous_hash,
            "timestamp": self.timestamp,
            "payload": self.payload.canonical_json(),
            "proof": self.proof,
        });

        hasher.update(block_data.to_string().as_bytes());

        format!("{:x}", hasher.finalize())
    }

    /// The transactions mined into this block, if any
    pub fn transactions(&self) -> &[Transaction] {
        match &self.payload {
            Payload::Transactions(transactions) => transactions,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new("address1", "address2", 10.0).unwrap(),
            Transaction::coinbase("miner1", 50.0),
        ]
    }

    #[test]
    fn test_new_block() {
        let block = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );

        assert_eq!(block.index, 1);
        assert_eq!(block.previous_hash, "previous_hash");
        assert_eq!(block.proof, 100);
        assert!(!block.hash.is_empty());
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn test_genesis_block() {
        let block = Block::genesis(1_700_000_000);

        assert_eq!(block.index, 0);
        assert_eq!(block.previous_hash, GENESIS_PREVIOUS_HASH);
        assert_eq!(block.payload, Payload::Genesis);
        assert_eq!(block.proof, 0);
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn test_calculate_hash_deterministic() {
        let a = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );
        let b = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );

        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash.len(), 64); // SHA-256 hash is 64 characters in hex
    }

    #[test]
    fn test_hash_changes_with_any_field() {
        let base = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );

        let changed_index = Block::new(
            2,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );
        let changed_previous = Block::new(
            1,
            "other_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            100,
        );
        let changed_timestamp = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_001,
            Payload::Transactions(sample_transactions()),
            100,
        );
        let changed_payload = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Data("tampered".to_string()),
            100,
        );
        let changed_proof = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            101,
        );

        assert_ne!(base.hash, changed_index.hash);
        assert_ne!(base.hash, changed_previous.hash);
        assert_ne!(base.hash, changed_timestamp.hash);
        assert_ne!(base.hash, changed_payload.hash);
        assert_ne!(base.hash, changed_proof.hash);
    }

    #[test]
    fn test_transactions_accessor() {
        let block = Block::new(
            1,
            "previous_hash".to_string(),
            1_700_000_000,
            Payload::Transactions(sample_transactions()),
            0,
        );
        assert_eq!(block.transactions().len(), 2);

        let genesis = Block::genesis(1_700_000_000);
        assert!(genesis.transactions().is_empty());
    }
}
