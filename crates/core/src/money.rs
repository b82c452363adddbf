//! Money - A non-negative decimal amount tagged with a currency
//!
//! Amounts can never go negative; this is enforced by the constructor
//! and by every operation that produces a new value. Arithmetic and
//! comparison are only defined between values of the same currency.

use crate::currency::Currency;
use crate::error::{WalletError, WalletResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of a single currency.
///
/// # Invariant
/// The amount is always >= 0. The fields are private, so the invariant
/// cannot be bypassed after construction.
///
/// Equality is deliberately not `PartialEq`: comparing across currencies
/// is an error rather than `false`, and amounts of the same currency
/// compare within a tolerance. Use [`Money::approx_eq`].
///
/// # Examples
/// ```
/// use purse_core::{Currency, Money};
/// use rust_decimal::Decimal;
///
/// let m = Money::new(Decimal::new(100, 0), Currency::usd()).unwrap();
/// assert_eq!(m.amount(), Decimal::new(100, 0));
///
/// // Negative amounts are rejected
/// let negative = Money::new(Decimal::new(-100, 0), Currency::usd());
/// assert!(negative.is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMoney", into = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create money from an amount and a currency.
    ///
    /// Returns an error if the amount is negative.
    pub fn new(amount: Decimal, currency: Currency) -> WalletResult<Self> {
        if amount < Decimal::ZERO {
            Err(WalletError::NegativeAmount(amount))
        } else {
            Ok(Self { amount, currency })
        }
    }

    /// Zero of the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Build money without the non-negativity check.
    ///
    /// Callers must guarantee `amount >= 0`.
    pub(crate) fn new_unchecked(amount: Decimal, currency: Currency) -> Self {
        debug_assert!(amount >= Decimal::ZERO);
        Self { amount, currency }
    }

    /// The amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Amount difference below which two values of the same currency
    /// compare equal (1e-6)
    pub fn tolerance() -> Decimal {
        Decimal::new(1, 6)
    }

    fn require_same_currency(&self, other: &Money) -> WalletResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(WalletError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }

    /// Approximate equality within [`Money::tolerance`].
    ///
    /// Returns an error if the currencies differ; cross-currency values
    /// are not comparable at all.
    pub fn approx_eq(&self, other: &Money) -> WalletResult<bool> {
        self.require_same_currency(other)?;
        let diff = (self.amount - other.amount).abs();
        Ok(diff < Self::tolerance())
    }

    /// The sum of two values of the same currency.
    ///
    /// Returns an error if the currencies differ or if the sum exceeds
    /// the representable decimal range.
    pub fn add(&self, other: &Money) -> WalletResult<Money> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| WalletError::AmountOverflow(self.amount, other.amount))?;
        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// The difference of two values of the same currency.
    ///
    /// Returns an error if the currencies differ or if the result would
    /// be negative.
    pub fn sub(&self, other: &Money) -> WalletResult<Money> {
        self.require_same_currency(other)?;
        Money::new(self.amount - other.amount, self.currency.clone())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

/// Wire shape for [`Money`]. Deserialization re-validates the amount.
#[derive(Serialize, Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<RawMoney> for Money {
    type Error = WalletError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.amount, raw.currency)
    }
}

impl From<Money> for RawMoney {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
        }
    }
}
