//! Scenario scripts - line-based wallet commands
//!
//! One command per line. Blank lines are skipped and `#` starts a
//! comment that runs to the end of the line. Verbs are matched
//! case-insensitively.
//!
//! ```text
//! open <wallet> [<amount> <code>]
//! deposit <wallet> <amount> <code>
//! withdraw <wallet> <amount> <code>
//! balance <wallet> <code>
//! holdings <wallet>
//! contains <wallet> <code>
//! remove <wallet> <code>
//! ```

use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Errors that can occur when parsing a scenario script
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Line {line}: unknown command: {verb}")]
    UnknownVerb { line: usize, verb: String },

    #[error("Line {line}: usage: {usage}")]
    Usage { line: usize, usage: &'static str },

    #[error("Line {line}: invalid amount: {value}")]
    InvalidAmount { line: usize, value: String },
}

/// Command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    Open,
    Deposit,
    Withdraw,
    Balance,
    Holdings,
    Contains,
    Remove,
}

/// A parsed scenario command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a wallet, optionally seeded with an opening amount
    Open {
        wallet: String,
        seed: Option<(Decimal, String)>,
    },
    Deposit {
        wallet: String,
        amount: Decimal,
        code: String,
    },
    Withdraw {
        wallet: String,
        amount: Decimal,
        code: String,
    },
    Balance {
        wallet: String,
        code: String,
    },
    Holdings {
        wallet: String,
    },
    Contains {
        wallet: String,
        code: String,
    },
    Remove {
        wallet: String,
        code: String,
    },
}

/// A command paired with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a whole script into commands.
///
/// Stops at the first malformed line; malformed scripts are refused as
/// a whole rather than partially executed.
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        commands.push(ScriptLine {
            line,
            command: parse_line(line, text)?,
        });
    }

    Ok(commands)
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.is_empty() {
        return Err(ScriptError::Usage {
            line,
            usage: "<command> [args]",
        });
    }

    let verb: Verb = parts[0].parse().map_err(|_| ScriptError::UnknownVerb {
        line,
        verb: parts[0].to_string(),
    })?;
    let args = &parts[1..];

    match verb {
        Verb::Open => match args {
            [wallet] => Ok(Command::Open {
                wallet: wallet.to_string(),
                seed: None,
            }),
            [wallet, amount, code] => Ok(Command::Open {
                wallet: wallet.to_string(),
                seed: Some((parse_amount(line, amount)?, code.to_string())),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "open <wallet> [<amount> <code>]",
            }),
        },
        Verb::Deposit => match args {
            [wallet, amount, code] => Ok(Command::Deposit {
                wallet: wallet.to_string(),
                amount: parse_amount(line, amount)?,
                code: code.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "deposit <wallet> <amount> <code>",
            }),
        },
        Verb::Withdraw => match args {
            [wallet, amount, code] => Ok(Command::Withdraw {
                wallet: wallet.to_string(),
                amount: parse_amount(line, amount)?,
                code: code.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "withdraw <wallet> <amount> <code>",
            }),
        },
        Verb::Balance => match args {
            [wallet, code] => Ok(Command::Balance {
                wallet: wallet.to_string(),
                code: code.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "balance <wallet> <code>",
            }),
        },
        Verb::Holdings => match args {
            [wallet] => Ok(Command::Holdings {
                wallet: wallet.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "holdings <wallet>",
            }),
        },
        Verb::Contains => match args {
            [wallet, code] => Ok(Command::Contains {
                wallet: wallet.to_string(),
                code: code.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "contains <wallet> <code>",
            }),
        },
        Verb::Remove => match args {
            [wallet, code] => Ok(Command::Remove {
                wallet: wallet.to_string(),
                code: code.to_string(),
            }),
            _ => Err(ScriptError::Usage {
                line,
                usage: "remove <wallet> <code>",
            }),
        },
    }
}

fn parse_amount(line: usize, value: &str) -> Result<Decimal, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidAmount {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_full_script() {
        let script = "\
# a comment line
open alice

deposit alice 100.50 usd   # trailing comment
withdraw alice 30 usd
balance alice usd
holdings alice
contains alice eur
remove alice usd
";
        let lines = parse_script(script).unwrap();
        assert_eq!(lines.len(), 7);

        assert_eq!(
            lines[0].command,
            Command::Open {
                wallet: "alice".to_string(),
                seed: None,
            }
        );
        assert_eq!(lines[0].line, 2);

        assert_eq!(
            lines[1].command,
            Command::Deposit {
                wallet: "alice".to_string(),
                amount: dec!(100.50),
                code: "usd".to_string(),
            }
        );
        assert_eq!(lines[1].line, 4);
    }

    #[test]
    fn test_open_with_seed() {
        let lines = parse_script("open alice 100 usd").unwrap();
        assert_eq!(
            lines[0].command,
            Command::Open {
                wallet: "alice".to_string(),
                seed: Some((dec!(100), "usd".to_string())),
            }
        );
    }

    #[test]
    fn test_verbs_case_insensitive() {
        let lines = parse_script("DEPOSIT alice 5 USD\nWithdraw alice 1 usd").unwrap();
        assert!(matches!(lines[0].command, Command::Deposit { .. }));
        assert!(matches!(lines[1].command, Command::Withdraw { .. }));
    }

    #[test]
    fn test_unknown_verb() {
        let result = parse_script("open alice\nfly alice 1 usd");
        assert_eq!(
            result,
            Err(ScriptError::UnknownVerb {
                line: 2,
                verb: "fly".to_string(),
            })
        );
    }

    #[test]
    fn test_wrong_arg_count() {
        let result = parse_script("deposit alice 100");
        assert!(matches!(result, Err(ScriptError::Usage { line: 1, .. })));
    }

    #[test]
    fn test_invalid_amount() {
        let result = parse_script("deposit alice lots usd");
        assert_eq!(
            result,
            Err(ScriptError::InvalidAmount {
                line: 1,
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_negative_amount_parses() {
        // Negative amounts are a session-level error, not a parse error
        let lines = parse_script("deposit alice -5 usd").unwrap();
        assert_eq!(
            lines[0].command,
            Command::Deposit {
                wallet: "alice".to_string(),
                amount: dec!(-5),
                code: "usd".to_string(),
            }
        );
    }

    #[test]
    fn test_comment_only_script_is_empty() {
        let lines = parse_script("# nothing here\n\n   # still nothing\n").unwrap();
        assert!(lines.is_empty());
    }
}
