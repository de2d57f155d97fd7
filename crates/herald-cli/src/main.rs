//! Herald CLI: entry point.
//!
//! # Commands
//!
//! - `herald send [-c TYPE] DESTINATION MESSAGE`: send one notification
//! - `herald demo`: send the three sample notifications
//! - `herald channels`: list registered channel types
//! - `herald init [--force]`: write `~/.herald/config.json` with defaults
//! - `herald files [--dir DIR] [FILE...]`: print files and their total size

mod channels_cmd;
mod files_cmd;
mod helpers;
mod init_cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use herald_channels::{channel_names, ChannelError, ChannelRegistry};
use herald_core::config::load_config;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Herald: pluggable notification dispatch
#[derive(Parser)]
#[command(name = "herald", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one notification
    Send {
        /// Channel type (email, sms, telegram). Defaults to the configured channel.
        #[arg(short, long)]
        channel: Option<String>,

        /// Email address, phone number, or account id
        destination: String,

        /// Message body
        message: String,
    },

    /// Send the sample email, SMS, and Telegram notifications
    Demo,

    /// List channel types the registry can build
    Channels,

    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print a list of text files and their total size in bytes
    Files {
        /// Folder the file names are resolved against
        #[arg(short, long)]
        dir: Option<String>,

        /// File names (defaults to the configured list)
        files: Vec<String>,
    },
}

/// Sample dispatches run by `herald demo`.
const DEMO: &[(&str, &str, &str)] = &[
    ("email", "nexus@email.com", "Hello!"),
    ("sms", "1234567890", "Hi!"),
    ("telegram", "telegram_user_42", "Yo!"),
];

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match cli.command {
        Commands::Send {
            channel,
            destination,
            message,
        } => {
            let config = load_config(None);
            let channel_type = channel.unwrap_or(config.dispatch.default_channel);
            if let Err(e) = send_one(&ChannelRegistry::new(), &channel_type, &destination, &message)
            {
                helpers::print_error("Error:", &e);
                if let Some(hint) = unknown_type_hint(&e) {
                    eprintln!("{hint}");
                }
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Demo => {
            let registry = ChannelRegistry::new();
            for (channel_type, destination, message) in DEMO {
                send_one(&registry, channel_type, destination, message)
                    .with_context(|| format!("demo {channel_type} dispatch failed"))?;
            }
            Ok(())
        }
        Commands::Channels => channels_cmd::run(),
        Commands::Init { force } => init_cmd::run(None, force),
        Commands::Files { dir, files } => {
            let config = load_config(None);
            if files_cmd::run(&config.files, dir, files).await.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Create a channel and send one message through it.
fn send_one(
    registry: &ChannelRegistry,
    channel_type: &str,
    destination: &str,
    message: &str,
) -> Result<(), ChannelError> {
    let channel = registry.create(channel_type, destination)?;
    info!(channel = channel.spec().name, "dispatching");
    channel.send(message)
}

/// For `UnknownChannelType`, the line listing the types that do exist.
fn unknown_type_hint(err: &ChannelError) -> Option<String> {
    match err {
        ChannelError::UnknownChannelType(_) => {
            Some(format!("Known channel types: {}", channel_names().join(", ")))
        }
        _ => None,
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("herald=debug,herald_core=debug,herald_channels=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use clap::CommandFactory;
    use herald_channels::MemoryTransport;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::parse_from(["herald", "send", "-c", "SMS", "1234567890", "Hi!"]);
        match cli.command {
            Commands::Send {
                channel,
                destination,
                message,
            } => {
                assert_eq!(channel.as_deref(), Some("SMS"));
                assert_eq!(destination, "1234567890");
                assert_eq!(message, "Hi!");
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_demo_lines() {
        let memory = Arc::new(MemoryTransport::new());
        let registry = ChannelRegistry::with_transport(memory.clone());
        for (channel_type, destination, message) in DEMO {
            send_one(&registry, channel_type, destination, message).unwrap();
        }
        assert_eq!(
            memory.lines(),
            vec![
                "Sending Email to nexus@email.com: Hello!",
                "Sending SMS to 1234567890: Hi!",
                "Sending Telegram to telegram_user_42: Yo!",
            ]
        );
    }

    #[test]
    fn test_send_one_unknown_type() {
        let registry = ChannelRegistry::with_transport(Arc::new(MemoryTransport::new()));
        let err = send_one(&registry, "fax", "123", "x").unwrap_err();
        assert_eq!(err, ChannelError::UnknownChannelType("fax".into()));
        assert_eq!(
            unknown_type_hint(&err).as_deref(),
            Some("Known channel types: email, sms, telegram")
        );
    }

    #[test]
    fn test_no_hint_for_missing_destination() {
        let err = ChannelError::MissingDestination { label: "Email" };
        assert!(unknown_type_hint(&err).is_none());
    }

    #[test]
    fn test_parse_init_force() {
        let cli = Cli::parse_from(["herald", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
