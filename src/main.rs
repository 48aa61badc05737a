//! Showroom - browse and search a car listing catalog from the terminal
//!
//! Main entry point wiring configuration, the catalog pipeline and the
//! one-shot commands.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

use showroom::catalog::{self, CatalogView, Listing};
use showroom::config::Config;
use showroom::ShowroomError;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "showroom",
    about = "Browse and search a car listing catalog from the terminal",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document location: an http(s) URL or a local path
    #[clap(long, global = true)]
    catalog: Option<String>,

    /// Image verification endpoint
    #[clap(long, global = true)]
    verify_url: Option<String>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Browse the catalog interactively
    Browse,

    /// Search listings and print the matches
    Search {
        /// Search text, matched against brand and model names
        query: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one brand and its listings
    Show {
        /// Brand name, case-insensitive
        brand: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Submit all catalog images for verification and report the result
    Check {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing from the --log-level flag.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout stays clean for command output
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }
    if let Some(verify_url) = cli.verify_url {
        config.verify_url = Some(verify_url);
    }

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => browse_command(&config).await,
        Command::Search { query, json } => search_command(&config, &query, json).await,
        Command::Show { brand, json } => show_command(&config, &brand, json).await,
        Command::Check { json } => check_command(&config, json).await,
    }
}

#[cfg(feature = "tui")]
async fn browse_command(config: &Config) -> Result<()> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        return Err(
            ShowroomError::Precondition("the browser needs an interactive terminal".to_string())
                .into(),
        );
    }

    let client = catalog::http_client(config.timeout())?;
    let catalog =
        catalog::prepare_catalog(&client, &config.catalog, config.verify_url.as_deref()).await?;

    showroom::tui::App::new(catalog).run().await?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
async fn browse_command(_config: &Config) -> Result<()> {
    anyhow::bail!("This build does not include the interactive browser. Rebuild with --features tui")
}

// Table row structure for listing display
#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Listing")]
    listing: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Images")]
    images: usize,
}

impl ListingRow {
    fn from_listing(listing: &Listing) -> Self {
        Self {
            brand: listing.brand.clone(),
            listing: listing.full_name.clone(),
            rate: format!("€{}/day", listing.rate),
            available: if listing.available { "yes" } else { "no" }.to_string(),
            images: listing.images().len(),
        }
    }
}

fn listing_json(listing: &Listing) -> serde_json::Value {
    serde_json::json!({
        "brand": listing.brand,
        "name": listing.name,
        "fullName": listing.full_name,
        "rate": listing.rate,
        "path": listing.path,
        "available": listing.available,
        "images": listing.images(),
    })
}

async fn search_command(config: &Config, query: &str, json: bool) -> Result<()> {
    let client = catalog::http_client(config.timeout())?;
    let catalog = catalog::prepare_catalog(&client, &config.catalog, None).await?;
    let view = CatalogView::filtered(&catalog, query);

    let mut matches = Vec::new();
    for section in &view.sections {
        if let Some(brand) = catalog.brands.get(section.brand) {
            for &row in &section.listings {
                if let Some(listing) = brand.listings.get(row) {
                    matches.push(listing);
                }
            }
        }
    }

    if json {
        let output: Vec<_> = matches.iter().map(|l| listing_json(l)).collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matching listings.");
        return Ok(());
    }

    let rows: Vec<ListingRow> = matches.iter().map(|l| ListingRow::from_listing(l)).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{} listings match '{query}'\n", matches.len());
    println!("{table}");
    Ok(())
}

async fn show_command(config: &Config, name: &str, json: bool) -> Result<()> {
    let client = catalog::http_client(config.timeout())?;
    let catalog = catalog::prepare_catalog(&client, &config.catalog, None).await?;

    let brand = match catalog
        .brands
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name))
    {
        Some(brand) => brand,
        None => anyhow::bail!("Brand '{}' not found in the catalog", name),
    };

    if json {
        let output = serde_json::json!({
            "brand": brand.name,
            "logo": brand.logo,
            "listings": brand.listings.iter().map(listing_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({} listings)", brand.name, brand.listings.len());
    println!("Logo: {}", brand.logo);

    if !brand.listings.is_empty() {
        let rows: Vec<ListingRow> = brand.listings.iter().map(ListingRow::from_listing).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();
        println!();
        println!("{table}");
    }
    Ok(())
}

// Table row structure for the image check report
#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Listing")]
    listing: String,
    #[tabled(rename = "Submitted")]
    submitted: usize,
    #[tabled(rename = "Kept")]
    kept: usize,
}

async fn check_command(config: &Config, json: bool) -> Result<()> {
    let verify_url = match &config.verify_url {
        Some(url) => url.clone(),
        None => {
            anyhow::bail!("No verify_url configured. Set it in showroom.toml or pass --verify-url")
        }
    };

    let client = catalog::http_client(config.timeout())?;
    let mut catalog = catalog::load_catalog(&client, &config.catalog).await?;

    let submitted: Vec<(String, usize)> = catalog
        .listings()
        .map(|l| (l.full_name.clone(), l.images().len()))
        .collect();

    match catalog::verify_images(&client, &verify_url, &mut catalog).await {
        Ok(()) => {}
        Err(ShowroomError::RemoteValidation(message)) => {
            println!("Image check rejected the batch: {message}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let rows: Vec<CheckRow> = submitted
        .into_iter()
        .zip(catalog.listings())
        .map(|((listing, submitted), verified)| CheckRow {
            listing,
            submitted,
            kept: verified.images().len(),
        })
        .collect();

    if json {
        let output: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "listing": r.listing,
                    "submitted": r.submitted,
                    "kept": r.kept,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let submitted_total: usize = rows.iter().map(|r| r.submitted).sum();
    let kept_total: usize = rows.iter().map(|r| r.kept).sum();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{kept_total} of {submitted_total} images verified\n");
    println!("{table}");
    Ok(())
}
