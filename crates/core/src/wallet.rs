//! Wallet - At most one Money entry per currency
//!
//! A wallet is a keyed balance map. Lookups never fail (an absent
//! currency reads as zero), deposits always succeed, and a withdrawal
//! that cannot be honored leaves the wallet exactly as it was.

use crate::currency::Currency;
use crate::error::{WalletError, WalletResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A collection of money with at most one entry per currency.
///
/// Per currency slot the lifecycle is: absent until the first deposit,
/// present through deposits and partial withdrawals, and absent again
/// only after an explicit [`Wallet::remove`]. Withdrawing the exact held
/// amount keeps a zero entry; it does not delete the slot.
///
/// Serialized form is the list of entries sorted by currency code. The
/// currency of each entry doubles as its key, so nothing is lost;
/// entries sharing a code fold into one on the way back in.
///
/// # Examples
/// ```
/// use purse_core::{Currency, Money, Wallet};
/// use rust_decimal::Decimal;
///
/// # fn main() -> Result<(), purse_core::WalletError> {
/// let mut wallet = Wallet::new();
/// wallet.deposit(Money::new(Decimal::new(100, 0), Currency::usd())?)?;
/// wallet.deposit(Money::new(Decimal::new(50, 0), Currency::usd())?)?;
///
/// assert_eq!(wallet.balance(&Currency::usd()).amount(), Decimal::new(150, 0));
/// assert!(wallet.balance(&Currency::eur()).is_zero());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Money>", into = "Vec<Money>")]
pub struct Wallet {
    holdings: HashMap<Currency, Money>,
}

impl Wallet {
    /// Create an empty wallet
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
        }
    }

    /// Create a wallet seeded with one entry
    pub fn with_initial(money: Money) -> Self {
        let mut wallet = Self::new();
        wallet.holdings.insert(money.currency().clone(), money);
        wallet
    }

    /// The held value for a currency, or zero if absent.
    ///
    /// Reading never inserts; the wallet stays unchanged.
    pub fn balance(&self, currency: &Currency) -> Money {
        match self.holdings.get(currency) {
            Some(money) => money.clone(),
            None => Money::zero(currency.clone()),
        }
    }

    /// Delete the entry for a currency. No-op if absent.
    pub fn remove(&mut self, currency: &Currency) {
        self.holdings.remove(currency);
    }

    /// Number of distinct currencies held
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Check if the wallet holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Check if the wallet has an entry for this currency.
    ///
    /// A zero-amount entry still counts as held.
    pub fn contains(&self, currency: &Currency) -> bool {
        self.holdings.contains_key(currency)
    }

    /// Add money to the wallet.
    ///
    /// An existing entry is replaced by the sum, keeping the entry's own
    /// currency value; otherwise the money is inserted as-is, so a zero
    /// deposit creates a zero entry. The only failure is
    /// [`WalletError::AmountOverflow`], which leaves the wallet unchanged.
    pub fn deposit(&mut self, money: Money) -> WalletResult<()> {
        let currency = money.currency().clone();
        let next = match self.holdings.get(&currency) {
            // Key equality rules out a currency mismatch; only overflow
            // can fail here.
            Some(held) => held.add(&money)?,
            None => money,
        };
        self.holdings.insert(currency, next);
        Ok(())
    }

    /// Take money out of the wallet.
    ///
    /// Fails with [`WalletError::CurrencyNotHeld`] when there is no entry
    /// for the currency, and with [`WalletError::InsufficientFunds`] when
    /// the entry is too small. On failure the wallet is untouched.
    /// Withdrawing the exact held amount leaves a zero entry behind.
    pub fn withdraw(&mut self, money: Money) -> WalletResult<()> {
        let currency = money.currency().clone();
        let held = self
            .holdings
            .get(&currency)
            .ok_or_else(|| WalletError::CurrencyNotHeld(currency.code().to_string()))?;

        if money.amount() > held.amount() {
            return Err(WalletError::InsufficientFunds {
                requested: money.amount(),
                available: held.amount(),
                currency: currency.code().to_string(),
            });
        }

        let next = Money::new_unchecked(held.amount() - money.amount(), held.currency().clone());
        self.holdings.insert(currency, next);
        Ok(())
    }

    /// The held values, sorted by currency code
    pub fn holdings(&self) -> Vec<Money> {
        let mut all: Vec<Money> = self.holdings.values().cloned().collect();
        all.sort_by(|a, b| a.currency().code().cmp(b.currency().code()));
        all
    }
}

impl TryFrom<Vec<Money>> for Wallet {
    type Error = WalletError;

    fn try_from(entries: Vec<Money>) -> Result<Self, Self::Error> {
        let mut wallet = Wallet::new();
        for money in entries {
            wallet.deposit(money)?;
        }
        Ok(wallet)
    }
}

impl From<Wallet> for Vec<Money> {
    fn from(wallet: Wallet) -> Self {
        let mut all: Vec<Money> = wallet.holdings.into_values().collect();
        all.sort_by(|a, b| a.currency().code().cmp(b.currency().code()));
        all
    }
}
