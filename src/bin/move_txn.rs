//! move-txn: offline builder and signer for Move entry-function transactions
//!
//! ## Features
//!
//! - **type-tag**: canonicalise a type tag and show its BCS bytes
//! - **encode**: build a raw transaction and print its bytes, signing message and hash
//! - **sign**: sign (or simulate-sign) a transaction and print the submission body
//! - **decode**: read raw transaction bytes back
//! - **account**: derive addresses and keys
//!
//! ## Example Usage
//!
//! ```bash
//! # Canonical form of a type tag
//! move-txn type-tag "0x1::coin::CoinStore< 0x1::aptos_coin::AptosCoin >"
//!
//! # Encode a transfer on testnet
//! move-txn encode 0x1::aptos_account::transfer --sender 0xabc \
//!     --arg address:0x2 --arg u64:1000 --network testnet
//!
//! # Sign with the default profile in ~/.aptos/config.yaml
//! move-txn sign 0x1::aptos_account::transfer --arg address:0x2 --arg u64:1000
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod txn_cli;

use txn_cli::{
    account::AccountCmd,
    decode::DecodeCmd,
    encode::{EncodeCmd, SignCmd},
    type_tag::TypeTagCmd,
    CliContext,
};

#[derive(Parser)]
#[command(
    name = "move-txn",
    author,
    version,
    about = "Build, encode and sign Move entry-function transactions offline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging to stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Profile name in the config file [env: MOVE_TXN_PROFILE, default: default]
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Config file [env: MOVE_TXN_CONFIG, default: ~/.aptos/config.yaml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a type tag and print its canonical form and bytes
    TypeTag(TypeTagCmd),

    /// Build a raw transaction and print its canonical bytes and hash
    Encode(EncodeCmd),

    /// Sign a transaction and print the submission body
    Sign(SignCmd),

    /// Decode raw transaction bytes
    Decode(DecodeCmd),

    /// Derive account addresses and keys
    Account(AccountCmd),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let Cli {
        command,
        json,
        verbose,
        profile,
        config,
    } = Cli::parse();
    init_tracing(verbose);

    let ctx = CliContext::new(json, profile, config);
    let result = match command {
        Commands::TypeTag(cmd) => cmd.execute(&ctx),
        Commands::Encode(cmd) => cmd.execute(&ctx),
        Commands::Sign(cmd) => cmd.execute(&ctx),
        Commands::Decode(cmd) => cmd.execute(&ctx),
        Commands::Account(cmd) => cmd.execute(&ctx),
    };

    if let Err(err) = result {
        eprintln!("{}", txn_cli::output::format_error(&err, json));
        std::process::exit(1);
    }
}
