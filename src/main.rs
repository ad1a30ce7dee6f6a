use anyhow::{Context, Result};
use catalog_browser::{
    BrowserConfig, CatalogBrowser, CatalogKind,
    browser::application::catalog_client::HttpCatalogClient,
    browser::constants::{
        DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, PAGE_SIZE, SEARCH_DEBOUNCE_MS,
    },
    logging::{self, LogTarget},
    oneshot::{self, QueryReport},
};
use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "catalog-browser",
    version,
    about = "Browse and search a movie or show catalog in the terminal",
    long_about = None
)]
struct Cli {
    /// Run one search and print the results instead of opening the browser
    query: Option<String>,

    /// Catalog to browse
    #[arg(short, long, value_enum, default_value = "movies")]
    kind: KindArg,

    /// Base URL of the catalog service
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Items per grid page
    #[arg(long, default_value_t = PAGE_SIZE)]
    page_size: usize,

    /// Quiet period before a typed query is searched, in milliseconds
    #[arg(long, default_value_t = SEARCH_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Log file for the interactive browser (default: user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Output format for one-shot queries
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Movies,
    Shows,
}

impl From<KindArg> for CatalogKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movies => CatalogKind::Movies,
            KindArg::Shows => CatalogKind::Shows,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BrowserConfig {
        base_url: cli.base_url.clone(),
        kind: cli.kind.into(),
        timeout: Duration::from_secs(cli.timeout_secs),
        page_size: cli.page_size,
        debounce: Duration::from_millis(cli.debounce_ms),
    };

    match cli.query.as_deref() {
        Some(query) => {
            logging::init_tracing(&LogTarget::Stderr, cli.verbose)?;
            run_query(&cli, config, query)
        }
        None => {
            if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
                logging::init_tracing(&LogTarget::File(path), cli.verbose)?;
            }
            tracing::info!(base_url = %config.base_url, kind = ?config.kind, "starting browser");
            let mut browser = CatalogBrowser::new(config)?;
            browser.run()
        }
    }
}

fn run_query(cli: &Cli, config: BrowserConfig, query: &str) -> Result<()> {
    let client = HttpCatalogClient::new(&config.base_url, config.kind, config.timeout)?;
    let show_progress = io::stderr().is_terminal();
    let report = oneshot::run_query(Arc::new(client), config.kind, query, show_progress)?;

    if cli.verbose {
        eprintln!("Service: {}", config.base_url);
        eprintln!("Catalog: {} {}", report.catalog_size, config.kind.noun());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_report(&mut handle, &report, cli.format, !cli.no_color)
        .context("Failed to write results")
}

fn print_report(
    out: &mut impl Write,
    report: &QueryReport,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if report.items.is_empty() {
                writeln!(out, "No {} found.", report.kind.noun())?;
            } else {
                writeln!(out, "Found {} {}:\n", report.items.len(), report.kind.noun())?;
                for item in &report.items {
                    writeln!(out, "{}", oneshot::format_item(item, use_color))?;
                }
            }
            eprintln!(
                "\nSTATUS: {} ({}ms)",
                report.status,
                report.duration.as_millis()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": report.query,
                "status": report.status.to_string(),
                "results": report.items,
                "duration_ms": report.duration.as_millis(),
                "catalog_size": report.catalog_size,
                "returned_count": report.items.len()
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for item in &report.items {
                serde_json::to_writer(&mut *out, item)?;
                writeln!(out)?;
            }
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": report.query,
                    "status": report.status.to_string(),
                    "duration_ms": report.duration.as_millis(),
                    "returned_count": report.items.len()
                }
            });
            serde_json::to_writer(&mut *out, &metadata)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
