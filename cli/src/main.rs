//! ChainSig CLI: canonicalize EVM method/event declarations and compute
//! their selectors from the terminal.
//!
//! # Commands
//! ```text
//! chainsig sig     <declaration>...
//! chainsig batch   --file <path|->
//! chainsig lookup  --selector <hex> --file <path>
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd_batch;
mod cmd_lookup;
mod cmd_sig;
mod logging;

#[derive(Parser)]
#[command(
    name = "chainsig",
    about = "EVM signature canonicalizer and selector hasher (ChainSig CLI)",
    long_about = "
ChainSig CLI: turn copy-pasted Solidity declarations into canonical ABI
signatures, Keccak-256 hashes and 4-byte selectors.

ENVIRONMENT VARIABLES:
  CHAINSIG_LOG         Log filter level (default: warn)
  CHAINSIG_LOG_JSON    Emit JSON logs on stderr (true/false)
",
    version
)]
struct Cli {
    /// Enable debug logging for ChainSig components
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Global log level
    #[arg(long, global = true, env = "CHAINSIG_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "CHAINSIG_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize one declaration and print its hash and selector
    Sig {
        /// Declaration text; multiple tokens are joined by spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        interface: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Canonicalize every declaration line of a file
    Batch {
        /// File with one declaration per line ("-" for stdin)
        #[arg(short, long)]
        file: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the declarations in a file matching a selector or topic hash
    Lookup {
        /// 4-byte selector or 32-byte topic (hex)
        #[arg(short, long)]
        selector: String,
        /// File with one declaration per line ("-" for stdin)
        #[arg(short, long)]
        file: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(&logging::LogConfig::from_cli(
        &cli.log_level,
        cli.log_json,
        cli.verbose,
    ));

    match cli.command {
        Commands::Sig { interface, json } => cmd_sig::run(&interface.join(" "), json),
        Commands::Batch { file, json } => cmd_batch::run(&file, json),
        Commands::Lookup {
            selector,
            file,
            json,
        } => cmd_lookup::run(&selector, &file, json),
    }
}

/// Read a whole file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &str) -> Result<String> {
    use anyhow::Context;
    use std::io::Read;

    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}
