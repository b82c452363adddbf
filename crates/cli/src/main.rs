//! Purse CLI - Main entry point
//!
//! Examples:
//!   purse demo
//!   purse run scenario.txt
//!   purse run scenario.txt --json
//!   echo "open alice 100 usd" | purse run

use clap::{Parser, Subcommand};
use purse_cli::{LineResult, Session, DEMO_SCRIPT};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "purse")]
#[command(about = "Purse - multi-currency wallet scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario script
    Run {
        /// Script path; reads stdin when omitted
        script: Option<PathBuf>,

        /// Print the final session state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in demo scenario.
    ///
    /// The demo script deliberately includes a failing command, so
    /// reported failures do not affect the exit code here.
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script, json } => {
            let source = match script {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mut session = Session::new();
            let results = session.run_script(&source)?;
            let failures = report(&results);

            if json {
                println!("{}", session.to_json()?);
            }

            if failures > 0 {
                anyhow::bail!("{} command(s) failed", failures);
            }
        }

        Commands::Demo => {
            let mut session = Session::new();
            let results = session.run_script(DEMO_SCRIPT)?;
            report(&results);
        }
    }

    Ok(())
}

/// Print one line per executed command and return the failure count
fn report(results: &[LineResult]) -> usize {
    let mut failures = 0;
    for entry in results {
        match &entry.result {
            Ok(outcome) => println!("✅ {}", outcome),
            Err(err) => {
                failures += 1;
                println!("❌ Line {}: {}", entry.line, err);
            }
        }
    }
    failures
}
