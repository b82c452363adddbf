//! Purse Core - Domain types
//!
//! This crate contains the fundamental types of the wallet system:
//! - `Currency`: Identity of a currency (code plus display name)
//! - `Money`: A non-negative decimal amount tagged with a currency
//! - `Wallet`: At most one `Money` per `Currency`, with deposit/withdraw rules

pub mod currency;
pub mod error;
pub mod money;
pub mod wallet;

pub use currency::Currency;
pub use error::{WalletError, WalletResult};
pub use money::Money;
pub use wallet::Wallet;
