//! Purse CLI - Scenario runner for in-memory wallets
//!
//! This crate provides the `purse` binary and its plumbing: a line-based
//! script format (`script`) and the session that executes parsed commands
//! against named wallets (`session`).

pub mod script;
pub mod session;

pub use script::{parse_script, Command, ScriptError, ScriptLine, Verb};
pub use session::{resolve_currency, LineResult, Outcome, Session, SessionError};

/// Built-in walkthrough scenario for `purse demo`.
///
/// Deliberately includes one failing line (the overdraft) to show how
/// errors are reported without stopping the run.
pub const DEMO_SCRIPT: &str = "\
# Purse demo: deposits, a failed overdraft, and cleanup
open alice 100 usd
deposit alice 50 usd
balance alice usd
deposit alice 2000 jpy
holdings alice
withdraw alice 500 usd      # more than alice holds
withdraw alice 30 usd
balance alice usd
contains alice rub
remove alice jpy
holdings alice
";
