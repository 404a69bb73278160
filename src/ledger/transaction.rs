use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel sender address used for mining reward transactions
pub const SYSTEM_ADDRESS: &str = "0";

/// Errors that can occur during transaction operations
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("System error: {0}")]
    SystemError(String),
}

/// Represents a transfer of value between two addresses
///
/// Transactions are immutable once created: construction validates the
/// amount, so every `Transaction` value in circulation is well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's address
    pub sender: String,

    /// Recipient's address
    pub recipient: String,

    /// Amount being transferred
    pub amount: f64,
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Arguments
    ///
    /// * `sender` - The address of the sender
    /// * `recipient` - The address of the recipient
    /// * `amount` - The amount to transfer (finite, non-negative)
    ///
    /// # Returns
    ///
    /// A new Transaction, or `InvalidAmount` if the amount is negative or
    /// not a finite number
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: f64,
    ) -> Result<Self, TransactionError> {
        if !amount.is_finite() {
            return Err(TransactionError::InvalidAmount(format!(
                "Amount must be a finite number: {}",
                amount
            )));
        }

        if amount < 0.0 {
            return Err(TransactionError::InvalidAmount(format!(
                "Amount must be non-negative: {}",
                amount
            )));
        }

        Ok(Transaction {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        })
    }

    /// Creates a coinbase transaction (mining reward)
    ///
    /// The sender is the system address `"0"`; no real account is debited.
    pub fn coinbase(recipient: impl Into<String>, amount: f64) -> Self {
        Transaction {
            sender: SYSTEM_ADDRESS.to_string(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// Checks if the transaction is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.sender == SYSTEM_ADDRESS
    }

    /// Produces the canonical serialization used as hashing input
    ///
    /// Field order is fixed; identical field values yield identical bytes.
    pub fn canonical_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sender": self.sender,
            "recipient": self.recipient,
            "amount": self.amount,
        })
    }

    /// Renders the transaction as a human-readable JSON string
    pub fn to_json(&self) -> Result<String, TransactionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TransactionError::SystemError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let transaction = Transaction::new("address1", "address2", 100.0).unwrap();

        assert_eq!(transaction.sender, "address1");
        assert_eq!(transaction.recipient, "address2");
        assert_eq!(transaction.amount, 100.0);
        assert!(!transaction.is_coinbase());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Transaction::new("address1", "address2", -5.0);
        assert!(matches!(result, Err(TransactionError::InvalidAmount(_))));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(Transaction::new("a", "b", f64::NAN).is_err());
        assert!(Transaction::new("a", "b", f64::INFINITY).is_err());
    }

    #[test]
    fn test_coinbase_transaction() {
        let transaction = Transaction::coinbase("miner1", 50.0);

        assert_eq!(transaction.sender, SYSTEM_ADDRESS);
        assert_eq!(transaction.recipient, "miner1");
        assert_eq!(transaction.amount, 50.0);
        assert!(transaction.is_coinbase());
    }

    #[test]
    fn test_canonical_json_deterministic() {
        let a = Transaction::new("address1", "address2", 10.0).unwrap();
        let b = Transaction::new("address1", "address2", 10.0).unwrap();

        assert_eq!(
            a.canonical_json().to_string(),
            b.canonical_json().to_string()
        );
    }

    #[test]
    fn test_to_json() {
        let transaction = Transaction::new("address1", "address2", 10.0).unwrap();
        let json = transaction.to_json().unwrap();

        assert!(json.contains("\"sender\": \"address1\""));
        assert!(json.contains("\"recipient\": \"address2\""));
    }

    #[test]
    fn test_duplicates_permitted() {
        let a = Transaction::new("address1", "address2", 10.0).unwrap();
        let b = Transaction::new("address1", "address2", 10.0).unwrap();

        // No uniqueness constraint; resubmission produces an equal value
        assert_eq!(a, b);
    }
}
