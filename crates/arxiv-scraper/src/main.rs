//! arXiv scraper CLI application.

use anyhow::{Context, Result};
use arxiv_scraper::ScrapeRequest;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use shared::Config;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scrapes arXiv advanced search results for one category into a CSV file",
    long_about = None
)]
struct Args {
    /// Start date in YYYY-MM-DD format
    #[arg(long = "start_date", value_name = "YYYY-MM-DD")]
    start_date: String,

    /// End date in YYYY-MM-DD format
    #[arg(long = "end_date", value_name = "YYYY-MM-DD")]
    end_date: String,

    /// Category to filter by (e.g. cs, math, gr-qc)
    #[arg(long)]
    category: String,

    /// Include cross-listed papers
    #[arg(long = "cross_list")]
    cross_list: bool,

    /// Output CSV file path [default: output.default_path from config, arxiv_data.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn progress_bar(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template(
            "Scraping pages {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
        )
        .context("Invalid progress bar template")?,
    );
    Ok(bar)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        shared::logging::parse_level(&config.logging.default_level)
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "arxiv-scraper".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    info!(config_file = %args.config.display(), "arXiv scraper starting");

    let request = ScrapeRequest {
        start_date: args.start_date,
        end_date: args.end_date,
        category: args.category,
        cross_list: args.cross_list,
        output: args.output.unwrap_or_else(|| config.default_output()),
    };

    let report = request
        .run(&config, progress_bar(args.quiet)?)
        .await
        .context("Scrape failed")?;

    info!(
        total_results = report.total_results,
        pages = report.pages,
        records = report.records.len(),
        output = %request.output.display(),
        "arXiv scraper finished successfully"
    );
    println!("Data saved to {}", request.output.display());

    Ok(())
}
