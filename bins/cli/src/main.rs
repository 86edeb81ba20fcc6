//! Flowlytix money command-line tool.
//!
//! Lists the currency registry and runs parsing, allocation, rounding and
//! formatting from the shell, using the configured defaults.
//!
//! Usage: flowlytix-money allocate '$10.00' --ratios 1,1,1

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use flowlytix_core::{Currency, Locale, Money, RoundingMode, aggregate};
use flowlytix_shared::AppConfig;
use flowlytix_shared::config::{LoggingConfig, MoneyConfig};
use flowlytix_shared::types::currency;

/// Flowlytix money - exact minor-unit amounts from the command line.
#[derive(Parser, Debug)]
#[command(name = "flowlytix-money")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported currencies
    Currencies {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse user-typed amount text
    Parse {
        /// Text such as "$1,234.50" or "USD 100"
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Currency (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<Currency>,
    },

    /// Split an amount proportionally
    Allocate {
        /// Amount text to split
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Comma-separated non-negative ratios
        #[arg(short, long, value_delimiter = ',', required = true)]
        ratios: Vec<f64>,
        /// Currency (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<Currency>,
    },

    /// Split an amount into equal parts
    Split {
        /// Amount text to split
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Number of parts
        #[arg(short, long)]
        parts: usize,
        /// Currency (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<Currency>,
    },

    /// Convert a major-unit amount to minor units with a rounding mode
    Round {
        /// Major-unit amount, e.g. 10.995
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        /// Rounding mode (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<RoundingMode>,
        /// Currency (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<Currency>,
    },

    /// Render minor units for a locale
    Format {
        /// Signed count of minor units
        #[arg(allow_hyphen_values = true)]
        minor_units: i64,
        /// Currency (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<Currency>,
        /// Locale tag such as en-US or de-DE (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<Locale>,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    debug!(
        currency = %config.money.default_currency,
        rounding = %config.money.default_rounding,
        locale = %config.money.locale,
        "Configuration loaded"
    );

    let output = run(cli.command, &config.money)?;
    println!("{output}");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(command: Command, defaults: &MoneyConfig) -> anyhow::Result<String> {
    match command {
        Command::Currencies { json } => list_currencies(json),
        Command::Parse { text, currency } => {
            let money = Money::parse(&text, currency.unwrap_or(defaults.default_currency))?;
            let record = serde_json::to_string(&money.to_record())?;
            Ok(format!("{money}\n{record}"))
        }
        Command::Allocate {
            amount,
            ratios,
            currency,
        } => {
            let total = Money::parse(&amount, currency.unwrap_or(defaults.default_currency))?;
            let parts = total.allocate(&ratios)?;
            info!(%total, parts = parts.len(), "Allocated amount");
            Ok(render_parts(&parts, defaults.locale)?)
        }
        Command::Split {
            amount,
            parts,
            currency,
        } => {
            let total = Money::parse(&amount, currency.unwrap_or(defaults.default_currency))?;
            let shares = total.allocate_equal(parts)?;
            info!(%total, parts, "Split amount");
            Ok(render_parts(&shares, defaults.locale)?)
        }
        Command::Round {
            amount,
            mode,
            currency,
        } => {
            let money = Money::from_decimal(
                amount,
                currency.unwrap_or(defaults.default_currency),
                mode.unwrap_or(defaults.default_rounding),
            )?;
            Ok(format!("{money} ({} minor units)", money.minor_units()))
        }
        Command::Format {
            minor_units,
            currency,
            locale,
        } => {
            let money =
                Money::from_integer(minor_units, currency.unwrap_or(defaults.default_currency))?;
            Ok(money.format(locale.unwrap_or(defaults.locale)))
        }
    }
}

fn list_currencies(json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(currency::all())?);
    }
    let lines: Vec<String> = currency::all()
        .iter()
        .map(|d| {
            format!(
                "{:<4} {:<4} {:<2} {}",
                d.code, d.symbol, d.minor_unit_digits, d.name
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn render_parts(parts: &[Money], locale: Locale) -> anyhow::Result<String> {
    let total = aggregate::sum(parts)?;
    let mut lines: Vec<String> = parts
        .iter()
        .enumerate()
        .map(|(index, part)| format!("{:>3}  {}", index + 1, part.format(locale)))
        .collect();
    lines.push(format!("sum  {}", total.format(locale)));
    Ok(lines.join("\n"))
}
