//! Domain errors for money and wallet operations

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when working with money and wallets.
///
/// Every error is raised at the point of detection and handed straight
/// back to the caller. Nothing is logged, retried, or clamped internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// A negative amount was supplied, or an operation would produce one
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// A sum exceeded the representable decimal range
    #[error("Amount overflow: {0} + {1}")]
    AmountOverflow(Decimal, Decimal),

    /// A binary operation was attempted across two different currencies
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// A withdrawal targeted a currency the wallet has no entry for
    #[error("No {0} in wallet")]
    CurrencyNotHeld(String),

    /// A withdrawal asked for more than the held balance
    #[error("Insufficient funds: requested {requested} {currency}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
        currency: String,
    },
}

/// Result type alias for money and wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    /// Check whether this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, WalletError::InsufficientFunds { .. })
    }

    /// Check whether this is a currency mismatch error
    pub fn is_currency_mismatch(&self) -> bool {
        matches!(self, WalletError::CurrencyMismatch { .. })
    }

    /// Check whether this is a currency-not-held error
    pub fn is_currency_not_held(&self) -> bool {
        matches!(self, WalletError::CurrencyNotHeld(_))
    }

    /// Check whether this is an amount overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, WalletError::AmountOverflow(_, _))
    }
}
