//! Currency - Identity of a currency
//!
//! A currency is a code plus a human-readable name. Identity lives in
//! the code alone: the name never takes part in equality, hashing, or
//! ordering, so two currencies with the same code are the same currency
//! even when their names differ.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A currency identity.
///
/// Construction performs no normalization or registry lookup; callers
/// supply already-validated codes. The preset constructors below cover
/// the common fiat currencies.
///
/// # Examples
/// ```
/// use purse_core::Currency;
///
/// let usd = Currency::usd();
/// assert_eq!(usd.code(), "USD");
///
/// // The name carries no identity
/// let dollar = Currency::new("USD", "Dollar");
/// assert_eq!(usd, dollar);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    name: String,
}

impl Currency {
    /// Create a currency from a code and a display name
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The currency code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Preset currencies ===

    /// US Dollar
    pub fn usd() -> Self {
        Self::new("USD", "US Dollar")
    }

    /// Euro
    pub fn eur() -> Self {
        Self::new("EUR", "Euro")
    }

    /// British Pound
    pub fn gbp() -> Self {
        Self::new("GBP", "British Pound")
    }

    /// Japanese Yen
    pub fn jpy() -> Self {
        Self::new("JPY", "Japanese Yen")
    }

    /// Russian Ruble
    pub fn rub() -> Self {
        Self::new("RUB", "Russian Ruble")
    }

    /// Vietnamese Dong
    pub fn vnd() -> Self {
        Self::new("VND", "Vietnamese Dong")
    }
}

// Identity is the code alone. All four impls must stay in agreement.

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
