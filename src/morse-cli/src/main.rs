// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;
mod console;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};

use morse_core::Converter;

use config::{CliConfig, ConsoleConfig};
use console::{Console, ExitReason};

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION"));

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION,
)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Encode TEXT to Morse code, print it and exit
    #[arg(
        short = 'e',
        long = "encode",
        value_name = "TEXT",
        conflicts_with = "decode",
        allow_hyphen_values = true
    )]
    encode: Option<String>,
    /// Decode Morse CODE to text, print it and exit
    #[arg(short = 'd', long = "decode", value_name = "CODE", allow_hyphen_values = true)]
    decode: Option<String>,
    /// Do not print the menu banner on start
    #[arg(long = "no-banner")]
    no_banner: bool,
}

/// Result of a one-shot `--encode` / `--decode` run, if one was requested.
fn one_shot(cli: &Cli) -> Option<String> {
    if let Some(text) = cli.encode.as_deref() {
        return Some(morse_core::encode(text));
    }
    cli.decode.as_deref().map(morse_core::decode)
}

/// Merge CLI overrides into the loaded configuration.
fn apply_cli(mut cfg: CliConfig, cli: &Cli) -> CliConfig {
    if let Some(level) = cli.log_level.clone() {
        cfg.general.log_level = Some(level);
    }
    if cli.no_banner {
        cfg.console.show_banner = false;
    }
    cfg
}

fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", CliConfig::example_toml());
        return Ok(());
    }

    let (cfg, config_path) = if let Some(ref path) = cli.config {
        let cfg = CliConfig::load_from_file(path)?;
        (cfg, Some(path.clone()))
    } else {
        CliConfig::load_from_default_paths()?
    };
    let cfg = apply_cli(cfg, &cli);
    cfg.validate()?;

    morse_app::init_logging(cfg.general.log_level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }

    if let Some(output) = one_shot(&cli) {
        println!("{}", output);
        return Ok(());
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let reason = rt.block_on(run_console(cfg.console));
    // A stdin read may still be parked on the blocking pool; don't wait for it.
    rt.shutdown_background();

    info!("Console closed ({:?})", reason);
    Ok(())
}

async fn run_console(options: ConsoleConfig) -> ExitReason {
    let reader = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(reader, tokio::io::stdout(), Converter::default(), options);
    console.run(interrupted()).await
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("morse-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_one_shot_encode() {
        let cli = parse(&["--encode", "sos"]);
        assert_eq!(one_shot(&cli), Some("... --- ...".to_string()));
    }

    #[test]
    fn test_one_shot_decode_accepts_leading_dash() {
        let cli = parse(&["-d", "-- --- .-. ... ."]);
        assert_eq!(one_shot(&cli), Some("MORSE".to_string()));
    }

    #[test]
    fn test_interactive_without_one_shot() {
        let cli = parse(&[]);
        assert_eq!(one_shot(&cli), None);
    }

    #[test]
    fn test_encode_conflicts_with_decode() {
        let res = Cli::try_parse_from(["morse-cli", "-e", "A", "-d", ".-"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["--log-level", "debug", "--no-banner"]);
        let cfg = apply_cli(CliConfig::default(), &cli);
        assert_eq!(cfg.general.log_level.as_deref(), Some("debug"));
        assert!(!cfg.console.show_banner);
        assert!(cfg.console.echo_original);
    }

    #[test]
    fn test_cli_keeps_config_when_not_overridden() {
        let mut cfg = CliConfig::default();
        cfg.general.log_level = Some("warn".to_string());
        let cfg = apply_cli(cfg, &parse(&[]));
        assert_eq!(cfg.general.log_level.as_deref(), Some("warn"));
        assert!(cfg.console.show_banner);
    }
}
