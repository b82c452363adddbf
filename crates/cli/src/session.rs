//! Session - named wallets driven by scenario commands

use purse_core::{Currency, Money, Wallet, WalletError};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::script::{parse_script, Command, ScriptError};

/// Errors that can occur when executing scenario commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown wallet: {0}")]
    UnknownWallet(String),

    #[error("Wallet already exists: {0}")]
    DuplicateWallet(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Resolve a script code against the preset currencies.
///
/// Codes are uppercased first, so scripts are case-insensitive. Unknown
/// codes become ad-hoc currencies with the code doubling as the name.
pub fn resolve_currency(code: &str) -> Currency {
    let code = code.to_uppercase();
    match code.as_str() {
        "USD" => Currency::usd(),
        "EUR" => Currency::eur(),
        "GBP" => Currency::gbp(),
        "JPY" => Currency::jpy(),
        "RUB" => Currency::rub(),
        "VND" => Currency::vnd(),
        _ => Currency::new(code.as_str(), code.as_str()),
    }
}

/// The visible result of one executed command
#[derive(Debug, Clone)]
pub enum Outcome {
    Opened { wallet: String },
    Deposited { wallet: String, money: Money },
    Withdrew { wallet: String, money: Money },
    Balance { wallet: String, money: Money },
    Holdings { wallet: String, entries: Vec<Money> },
    Contains { wallet: String, code: String, held: bool },
    Removed { wallet: String, code: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Opened { wallet } => write!(f, "opened {}", wallet),
            Outcome::Deposited { wallet, money } => write!(f, "{} += {}", wallet, money),
            Outcome::Withdrew { wallet, money } => write!(f, "{} -= {}", wallet, money),
            Outcome::Balance { wallet, money } => write!(f, "{}: {}", wallet, money),
            Outcome::Holdings { wallet, entries } => {
                if entries.is_empty() {
                    write!(f, "{}: empty", wallet)
                } else {
                    let list: Vec<String> = entries.iter().map(|m| m.to_string()).collect();
                    write!(f, "{}: {}", wallet, list.join(", "))
                }
            }
            Outcome::Contains { wallet, code, held } => {
                let verdict = if *held { "holds" } else { "does not hold" };
                write!(f, "{} {} {}", wallet, verdict, code)
            }
            Outcome::Removed { wallet, code } => write!(f, "removed {} from {}", code, wallet),
        }
    }
}

/// The result of one script line
#[derive(Debug, Clone)]
pub struct LineResult {
    pub line: usize,
    pub result: Result<Outcome, SessionError>,
}

/// Named wallets plus the command execution over them.
///
/// One failed command never aborts the session; errors are handed back
/// per line so failure scenarios can live in the same script as the
/// happy path.
#[derive(Debug, Default)]
pub struct Session {
    wallets: BTreeMap<String, Wallet>,
}

impl Session {
    /// Create a session with no wallets
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wallets
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// Check if the session has no wallets
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Look up a wallet by name
    pub fn get(&self, name: &str) -> Option<&Wallet> {
        self.wallets.get(name)
    }

    /// Final session state as pretty JSON, wallets keyed by name
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.wallets)
    }

    /// Execute a single command
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Open { wallet, seed } => {
                if self.wallets.contains_key(wallet) {
                    return Err(SessionError::DuplicateWallet(wallet.clone()));
                }
                let opened = match seed {
                    Some((amount, code)) => {
                        let money = Money::new(*amount, resolve_currency(code))?;
                        Wallet::with_initial(money)
                    }
                    None => Wallet::new(),
                };
                self.wallets.insert(wallet.clone(), opened);
                tracing::debug!(wallet = %wallet, "opened wallet");
                Ok(Outcome::Opened {
                    wallet: wallet.clone(),
                })
            }

            Command::Deposit {
                wallet,
                amount,
                code,
            } => {
                let money = Money::new(*amount, resolve_currency(code))?;
                let held = self.wallet_mut(wallet)?;
                held.deposit(money.clone())?;
                tracing::debug!(wallet = %wallet, money = %money, "deposit");
                Ok(Outcome::Deposited {
                    wallet: wallet.clone(),
                    money,
                })
            }

            Command::Withdraw {
                wallet,
                amount,
                code,
            } => {
                let money = Money::new(*amount, resolve_currency(code))?;
                let held = self.wallet_mut(wallet)?;
                held.withdraw(money.clone())?;
                tracing::debug!(wallet = %wallet, money = %money, "withdraw");
                Ok(Outcome::Withdrew {
                    wallet: wallet.clone(),
                    money,
                })
            }

            Command::Balance { wallet, code } => {
                let currency = resolve_currency(code);
                let money = self.wallet(wallet)?.balance(&currency);
                Ok(Outcome::Balance {
                    wallet: wallet.clone(),
                    money,
                })
            }

            Command::Holdings { wallet } => {
                let entries = self.wallet(wallet)?.holdings();
                Ok(Outcome::Holdings {
                    wallet: wallet.clone(),
                    entries,
                })
            }

            Command::Contains { wallet, code } => {
                let currency = resolve_currency(code);
                let held = self.wallet(wallet)?.contains(&currency);
                Ok(Outcome::Contains {
                    wallet: wallet.clone(),
                    code: currency.code().to_string(),
                    held,
                })
            }

            Command::Remove { wallet, code } => {
                let currency = resolve_currency(code);
                self.wallet_mut(wallet)?.remove(&currency);
                tracing::debug!(wallet = %wallet, code = currency.code(), "removed entry");
                Ok(Outcome::Removed {
                    wallet: wallet.clone(),
                    code: currency.code().to_string(),
                })
            }
        }
    }

    /// Parse and execute a whole script.
    ///
    /// Parse errors refuse the script up front; execution errors are
    /// collected per line and the run continues.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<LineResult>, ScriptError> {
        let lines = parse_script(script)?;
        Ok(lines
            .into_iter()
            .map(|entry| LineResult {
                line: entry.line,
                result: self.execute(&entry.command),
            })
            .collect())
    }

    fn wallet(&self, name: &str) -> Result<&Wallet, SessionError> {
        self.wallets
            .get(name)
            .ok_or_else(|| SessionError::UnknownWallet(name.to_string()))
    }

    fn wallet_mut(&mut self, name: &str) -> Result<&mut Wallet, SessionError> {
        self.wallets
            .get_mut(name)
            .ok_or_else(|| SessionError::UnknownWallet(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolve_currency_presets() {
        assert_eq!(resolve_currency("usd").code(), "USD");
        assert_eq!(resolve_currency("usd").name(), "US Dollar");
        assert_eq!(resolve_currency("RUB").name(), "Russian Ruble");
    }

    #[test]
    fn test_resolve_currency_unknown_code() {
        let currency = resolve_currency("xau");
        assert_eq!(currency.code(), "XAU");
        assert_eq!(currency.name(), "XAU");
    }

    #[test]
    fn test_open_and_deposit() {
        let mut session = Session::new();
        session
            .execute(&Command::Open {
                wallet: "alice".to_string(),
                seed: None,
            })
            .unwrap();
        session
            .execute(&Command::Deposit {
                wallet: "alice".to_string(),
                amount: dec!(100),
                code: "usd".to_string(),
            })
            .unwrap();

        let wallet = session.get("alice").unwrap();
        assert_eq!(wallet.balance(&Currency::usd()).amount(), dec!(100));
    }

    #[test]
    fn test_open_with_seed() {
        let mut session = Session::new();
        session
            .execute(&Command::Open {
                wallet: "bob".to_string(),
                seed: Some((dec!(25), "eur".to_string())),
            })
            .unwrap();

        let wallet = session.get("bob").unwrap();
        assert_eq!(wallet.balance(&Currency::eur()).amount(), dec!(25));
    }

    #[test]
    fn test_duplicate_open() {
        let mut session = Session::new();
        let open = Command::Open {
            wallet: "alice".to_string(),
            seed: None,
        };
        session.execute(&open).unwrap();

        let result = session.execute(&open);
        assert_eq!(
            result.unwrap_err(),
            SessionError::DuplicateWallet("alice".to_string())
        );
    }

    #[test]
    fn test_unknown_wallet() {
        let mut session = Session::new();
        let result = session.execute(&Command::Deposit {
            wallet: "ghost".to_string(),
            amount: dec!(5),
            code: "usd".to_string(),
        });
        assert_eq!(
            result.unwrap_err(),
            SessionError::UnknownWallet("ghost".to_string())
        );
    }

    #[test]
    fn test_wallet_error_passes_through() {
        let mut session = Session::new();
        session
            .execute(&Command::Open {
                wallet: "alice".to_string(),
                seed: Some((dec!(100), "usd".to_string())),
            })
            .unwrap();

        let result = session.execute(&Command::Withdraw {
            wallet: "alice".to_string(),
            amount: dec!(150),
            code: "usd".to_string(),
        });
        assert!(matches!(
            result,
            Err(SessionError::Wallet(WalletError::InsufficientFunds { .. }))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut session = Session::new();
        session
            .execute(&Command::Open {
                wallet: "alice".to_string(),
                seed: None,
            })
            .unwrap();

        let result = session.execute(&Command::Deposit {
            wallet: "alice".to_string(),
            amount: dec!(-5),
            code: "usd".to_string(),
        });
        assert!(matches!(
            result,
            Err(SessionError::Wallet(WalletError::NegativeAmount(_)))
        ));
    }

    #[test]
    fn test_outcome_display() {
        let money = Money::new(dec!(150), Currency::usd()).unwrap();
        let outcome = Outcome::Balance {
            wallet: "alice".to_string(),
            money,
        };
        assert_eq!(outcome.to_string(), "alice: 150 USD");

        let outcome = Outcome::Contains {
            wallet: "alice".to_string(),
            code: "RUB".to_string(),
            held: false,
        };
        assert_eq!(outcome.to_string(), "alice does not hold RUB");

        let outcome = Outcome::Holdings {
            wallet: "alice".to_string(),
            entries: Vec::new(),
        };
        assert_eq!(outcome.to_string(), "alice: empty");
    }
}
