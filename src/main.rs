//! Tiptime - tip calculator for your terminal
//!
//! Type a bill amount and a tip percentage, flip the round-up switch, and
//! read the tip formatted for your locale.

mod config;
mod core;
mod tip;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::app::App;
use crate::core::state::AppState;
use crate::tip::{CurrencyFormat, TipRequest};
use crate::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "tiptime")]
#[command(version)]
#[command(about = "Tip calculator for your terminal", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Locale for currency formatting, e.g. en-US or de_DE
    #[arg(short, long, value_name = "TAG", env = "TIPTIME_LOCALE", global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a tip without opening the form
    Calc {
        /// Bill amount (unparseable text counts as 0)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Tip percentage (defaults to 15)
        #[arg(short, long, allow_hyphen_values = true)]
        tip: Option<String>,

        /// Round the tip up to the next whole unit
        #[arg(short, long)]
        round_up: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct CalcOutput {
    #[serde(flatten)]
    request: TipRequest,
    tip: f64,
    formatted: String,
    locale: String,
}

fn setup_logging(verbosity: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // The TUI owns the terminal, so logs go to a file
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tiptime")
        .join("logs");

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tiptime.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

/// CLI flag, then config, then the system locale
fn resolve_currency(cli_locale: Option<&str>, config: &config::Config) -> CurrencyFormat {
    match cli_locale.or(config.format.locale.as_deref()) {
        Some(tag) => CurrencyFormat::for_locale(tag),
        None => CurrencyFormat::system(),
    }
}

/// Explicit `--config`, else the default file if it exists, else built-in defaults
fn load_config(path: Option<PathBuf>) -> Result<config::Config> {
    let path = path.or_else(|| {
        let default_config = config::Config::default_path()?;
        default_config.exists().then_some(default_config)
    });

    Ok(match path {
        Some(path) => config::Config::load(&path)?,
        None => config::Config::default(),
    })
}

fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(config::Config::default_path) {
        Some(path) => path,
        None => anyhow::bail!("Could not determine a config directory; pass --config"),
    };
    config::init_config(&path, force)?;
    println!("Created {}", path.display());
    Ok(())
}

fn calc(
    currency: &CurrencyFormat,
    amount: &str,
    tip_text: Option<&str>,
    round_up: bool,
    json: bool,
) -> Result<()> {
    let mut request = TipRequest::new(tip::parse_amount(amount)).with_round_up(round_up);
    if let Some(tip_text) = tip_text {
        request = request.with_tip_percent(tip::parse_amount(tip_text));
    }

    let formatted = request.format(currency);
    if json {
        let output = CalcOutput {
            request,
            tip: request.tip(),
            formatted,
            locale: currency.locale(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Init { force }) => init(cli.config, force),
        Some(Commands::Calc {
            amount,
            tip: tip_text,
            round_up,
            json,
        }) => {
            let config = load_config(cli.config)?;
            let currency = resolve_currency(cli.locale.as_deref(), &config);
            tracing::info!(locale = %currency.locale(), "Resolved currency format");
            calc(&currency, &amount, tip_text.as_deref(), round_up, json)
        }
        None => {
            let config = load_config(cli.config)?;
            let currency = resolve_currency(cli.locale.as_deref(), &config);
            tracing::info!(locale = %currency.locale(), "Resolved currency format");

            let mut state = AppState::new(currency, Theme::from_name(&config.display.theme));
            state.show_hints = config.display.show_hints;
            tracing::info!(theme = %state.theme.name, "Starting form");

            let mut app = App::new(state)?;
            app.run().await
        }
    }
}
