//! rusty-sbpfx CLI - fetch and parse SBP mark-to-market FX rate sheets
//!
//! ## Example Usage
//!
//! ```bash
//! # Show today's ready rates
//! rusty-sbpfx rates
//!
//! # One currency on a given day, as JSON
//! rusty-sbpfx rates --date 2025-08-27 --currency USD --json
//!
//! # Save the raw PDF
//! rusty-sbpfx download sheet.pdf --date 2025-08-27
//!
//! # Parse a sheet already on disk
//! rusty-sbpfx parse sheet.pdf --date 2025-08-27
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rusty_sbpfx::config::ClientConfig;
use rusty_sbpfx::currency::Currency;
use rusty_sbpfx::data::sources::SbpClient;
use rusty_sbpfx::data::{parse_pdf_content, save_rate_sheet};
use rusty_sbpfx::error::SbpError;
use rusty_sbpfx::parser::parse_exchange_rate_text;
use rusty_sbpfx::query::RateQuery;
use rusty_sbpfx::types::{ExchangeRate, ParseContext, RateSheet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// rusty-sbpfx: State Bank of Pakistan FX rate sheets
#[derive(Parser)]
#[command(name = "rusty-sbpfx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch and parse SBP mark-to-market FX rate sheets", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print ready rates
    Rates {
        /// Rate sheet date (YYYY-MM-DD, default: today UTC)
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Only show this currency
        #[arg(short = 'C', long)]
        currency: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the rate sheet URL for a date
    Url {
        /// Rate sheet date (YYYY-MM-DD, default: today UTC)
        #[arg(short = 'd', long)]
        date: Option<String>,
    },

    /// Download the raw rate sheet PDF
    Download {
        /// Output file (default: <download_dir>/<DD-Mon-YY>.pdf)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Rate sheet date (YYYY-MM-DD, default: today UTC)
        #[arg(short = 'd', long)]
        date: Option<String>,
    },

    /// Parse a rate sheet stored on disk
    Parse {
        /// PDF file, or extracted text with --text
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Date stamped on the records (default: today UTC)
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Source location stamped on the records (default: the file path)
        #[arg(long)]
        url: Option<String>,

        /// Treat FILE as already-extracted plain text
        #[arg(long)]
        text: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    #[serde(flatten)]
    client: ClientConfig,
    #[serde(default = "default_download_dir")]
    download_dir: PathBuf,
}

fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rusty-sbpfx")
        .join("sheets")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            download_dir: default_download_dir(),
        }
    }
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        if let Some(config_path) = path {
            if config_path.exists() {
                match fs::read_to_string(config_path) {
                    Ok(contents) => match Self::parse(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("{} {}", "Warning:".yellow(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
                    }
                }
            } else {
                eprintln!(
                    "{} Config file {} not found, using defaults",
                    "Warning:".yellow(),
                    config_path.display()
                );
            }
        } else if let Some(home) = dirs::home_dir() {
            let default_config = home.join(".rusty-sbpfx").join("config.toml");
            if let Ok(contents) = fs::read_to_string(&default_config) {
                if let Ok(config) = Self::parse(&contents) {
                    return config;
                }
            }
        }

        Config::default()
    }

    fn parse(contents: &str) -> Result<Self, SbpError> {
        toml::from_str(contents)
            .map_err(|e| SbpError::ConfigError(format!("Failed to parse config: {}", e)))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load(cli.config.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-sbpfx".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("Base URL: {}", config.client.base_url.dimmed());
    }

    let result = match cli.command {
        Commands::Rates {
            date,
            currency,
            json,
        } => show_rates(&config, date.as_deref(), currency.as_deref(), json).await,
        Commands::Url { date } => show_url(&config, date.as_deref()),
        Commands::Download { output, date } => {
            download(&config, output, date.as_deref()).await
        }
        Commands::Parse {
            file,
            date,
            url,
            text,
            json,
        } => parse_file(&file, date.as_deref(), url, text, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if e.is_layout_error() {
            eprintln!(
                "{}",
                "The document was fetched but no rate table was recognised; try another date."
                    .dimmed()
            );
        }
        process::exit(1);
    }
}

fn query_for(date: Option<&str>) -> Result<RateQuery, SbpError> {
    match date {
        Some(date) => RateQuery::for_date(date),
        None => Ok(RateQuery::today()),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn show_rates(
    config: &Config,
    date: Option<&str>,
    currency: Option<&str>,
    json: bool,
) -> Result<(), SbpError> {
    let query = query_for(date)?;
    let currency = currency.map(str::parse::<Currency>).transpose()?;
    let client = SbpClient::with_config(config.client.clone())?;

    let pb = spinner(&format!("Fetching rate sheet for {}...", query.date));
    let fetched = client.get_exchange_rates(&query).await;
    pb.finish_and_clear();
    let mut rates = fetched?;

    if let Some(currency) = currency {
        let rate = rates
            .remove(&currency)
            .ok_or(SbpError::RateNotFound(currency))?;
        rates = RateSheet::new();
        rates.insert(currency, rate);
    }

    print_rates(&rates, json)
}

fn show_url(config: &Config, date: Option<&str>) -> Result<(), SbpError> {
    let query = query_for(date)?;
    println!("{}", query.url(&config.client.base_url));
    Ok(())
}

async fn download(
    config: &Config,
    output: Option<PathBuf>,
    date: Option<&str>,
) -> Result<(), SbpError> {
    let query = query_for(date)?;
    let output = match output {
        Some(path) => path,
        None => {
            fs::create_dir_all(&config.download_dir)?;
            let file_name = query.date.format("%d-%b-%y.pdf").to_string();
            config.download_dir.join(file_name)
        }
    };

    let client = SbpClient::with_config(config.client.clone())?;
    let pb = spinner(&format!("Downloading {}...", client.url(&query)));
    let content = client.fetch_rate_sheet(&query).await;
    pb.finish_and_clear();

    let written = save_rate_sheet(&output, &content?)?;
    println!(
        "{} Saved {} bytes to {}",
        "✓".green().bold(),
        written,
        output.display()
    );
    Ok(())
}

fn parse_file(
    file: &Path,
    date: Option<&str>,
    url: Option<String>,
    text: bool,
    json: bool,
) -> Result<(), SbpError> {
    let query = query_for(date)?;
    let source = url.unwrap_or_else(|| file.display().to_string());
    let ctx = ParseContext::new(query.date, source);

    let rates = if text {
        let contents = fs::read_to_string(file)?;
        parse_exchange_rate_text(&contents, &ctx)?
    } else {
        let contents = fs::read(file)?;
        parse_pdf_content(&contents, &ctx)?
    };

    print_rates(&rates, json)
}

fn sorted(rates: &RateSheet) -> Vec<&ExchangeRate> {
    let mut rows: Vec<&ExchangeRate> = rates.values().collect();
    rows.sort_by_key(|rate| rate.currency);
    rows
}

fn print_rates(rates: &RateSheet, json: bool) -> Result<(), SbpError> {
    let rows = sorted(rates);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if let Some(first) = rows.first() {
        println!(
            "{}",
            format!("SBP Mark-to-Market Rates ({})", first.date).cyan().bold()
        );
        println!("{}", "========================================".cyan());
        println!("  {}", first.url.dimmed());
        println!();
    }

    println!("  {:<10} {:>14}", "Currency".bold(), "Ready".bold());
    for rate in rows {
        println!(
            "  {:<10} {:>14}",
            rate.currency.to_string().bright_green(),
            rate.spot_rate().unwrap_or("-")
        );
    }
    println!();

    Ok(())
}
