use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during lending pool operations
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity { requested: f64, available: f64 },
}

/// A collateral-free lending pool with a single shared liquidity balance
///
/// The pool tracks two monotonically increasing accumulators; the invariant
/// `total_borrowed <= total_deposited` holds after every successful call.
/// Deposits are not backed by verified transfers and there is no repayment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LendingPool {
    /// Total amount ever deposited into the pool
    total_deposited: f64,

    /// Total amount ever borrowed from the pool
    total_borrowed: f64,
}

impl LendingPool {
    /// Creates a new, empty lending pool
    pub fn new() -> Self {
        LendingPool::default()
    }

    /// Deposits an amount into the pool
    ///
    /// # Returns
    ///
    /// `InvalidAmount` unless the amount is positive and finite
    pub fn deposit(&mut self, amount: f64) -> Result<(), PoolError> {
        Self::check_amount(amount)?;

        self.total_deposited += amount;
        info!("Deposit of {} made to the lending pool", amount);

        Ok(())
    }

    /// Borrows an amount from the pool
    ///
    /// # Returns
    ///
    /// `InvalidAmount` unless the amount is positive and finite;
    /// `InsufficientLiquidity` when the amount exceeds the available
    /// liquidity. Counters are untouched on failure.
    pub fn borrow(&mut self, amount: f64) -> Result<(), PoolError> {
        Self::check_amount(amount)?;

        let available = self.available_liquidity();
        if amount > available {
            return Err(PoolError::InsufficientLiquidity {
                requested: amount,
                available,
            });
        }

        self.total_borrowed += amount;
        info!("Borrow of {} made from the lending pool", amount);

        Ok(())
    }

    /// Liquidity currently available for borrowing
    pub fn available_liquidity(&self) -> f64 {
        self.total_deposited - self.total_borrowed
    }

    /// Total amount ever deposited
    pub fn total_deposited(&self) -> f64 {
        self.total_deposited
    }

    /// Total amount ever borrowed
    pub fn total_borrowed(&self) -> f64 {
        self.total_borrowed
    }

    fn check_amount(amount: f64) -> Result<(), PoolError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PoolError::InvalidAmount(format!(
                "Amount must be positive: {}",
                amount
            )));
        }
        Ok(())
    }
}
