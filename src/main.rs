//! oldphone CLI entry point.
//!
//! Provides `mail` and `call` subcommands, each driving one operation of the
//! phone capability against the configured output stream.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use oldphone::config::Config;
use oldphone::old_phone::OldPhone;
use oldphone::phone::Phone;

/// oldphone: send messages and place calls through the legacy phone.
#[derive(Parser)]
#[command(name = "oldphone", version, about)]
struct Cli {
    /// Config file (defaults to `$OLDPHONE_CONFIG_PATH` or `~/.oldphone/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Send a text message.
    Mail {
        /// Message content, passed through unchanged.
        #[arg(allow_hyphen_values = true)]
        content: String,
    },
    /// Place a call.
    Call {
        /// Number to dial, passed through unchanged.
        #[arg(allow_hyphen_values = true)]
        phone_number: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    oldphone::logging::init_cli(&config.logging.level);
    debug!(target_stream = ?config.output.target, "configuration loaded");

    let provider = OldPhone::with_sink(config.output.target.sink());
    let phone: &dyn Phone = &provider;

    match cli.command {
        Command::Mail { content } => phone.send_mail(&content),
        Command::Call { phone_number } => phone.call_phone(&phone_number),
    }

    Ok(())
}
