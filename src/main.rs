//! CLI entry point for the race summary dashboard.
//!
//! Loads a race's circuit, driver, or constructor summary from the backend
//! API (or a directory of saved payloads), prints its tables, and optionally
//! exports tables to CSV and chart series to JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use race_summary::charts::{CircuitCharts, ConstructorCharts};
use race_summary::config::DashboardConfig;
use race_summary::fetch::BasicClient;
use race_summary::infra::{ApiSummaryClient, DirectorySummaryProvider, ImageMap};
use race_summary::output::{ChartDocument, export_csv, save_json, write_table};
use race_summary::services::{ImageProvider, SummaryProvider};
use race_summary::table::{
    constructor_result_columns, driver_result_columns, fastest_laps_table, project_table, Table,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "race_summary")]
#[command(about = "Race results tables and chart series from the summary API", long_about = None)]
struct Cli {
    /// Summary API base URL or directory of saved summaries (overrides API_BASE_URL)
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Number of ticks on lap-time axes (overrides DASHBOARD_TICK_COUNT)
    #[arg(short, long, global = true)]
    ticks: Option<usize>,

    /// HTTP timeout in seconds (overrides DASHBOARD_HTTP_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fastest laps, pace and position charts for a race
    Circuit {
        #[arg(value_name = "RACE_ID")]
        race_id: u32,

        /// JSON file to write chart series to
        #[arg(short, long)]
        charts: Option<String>,

        /// CSV file to export the fastest-laps table to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Winner, pole, fastest lap and full results for a race
    Drivers {
        #[arg(value_name = "RACE_ID")]
        race_id: u32,

        /// CSV file to export the results table to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Constructor results, points and position charts for a race
    Constructors {
        #[arg(value_name = "RACE_ID")]
        race_id: u32,

        /// JSON file to write chart series to
        #[arg(short, long)]
        charts: Option<String>,

        /// CSV file to export the results table to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Look up the image configured for a circuit or race title
    Image {
        #[arg(value_name = "TITLE")]
        title: String,

        /// JSON map of page titles to image URLs (overrides DASHBOARD_IMAGE_MAP)
        #[arg(long)]
        images: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(source = %config.source, tick_count = config.tick_count, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Circuit {
            race_id,
            charts,
            csv,
        } => {
            let provider = summary_provider(&config)?;
            let summary = provider.circuit_summary(race_id).await?;

            writeln!(
                out,
                "{} - {} {} ({})",
                summary.race_name, summary.location, summary.year, summary.circuit_name
            )?;
            writeln!(
                out,
                "{} laps x {} km = {} km",
                summary.laps, summary.length_km, summary.race_distance_km
            )?;
            writeln!(
                out,
                "Fastest lap: {} by {} on lap {}\n",
                summary.fastest_lap.time,
                summary.fastest_lap.driver.as_deref().unwrap_or("—"),
                summary
                    .fastest_lap
                    .lap
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "—".to_string())
            )?;

            let table = fastest_laps_table(&summary.top_fastest_laps);
            print_section(&mut out, "Top Fastest Laps", &table)?;
            export_if_requested(csv.as_deref(), &table)?;

            let built = CircuitCharts::build(&summary, config.tick_count)?;
            if let Some(axis) = &built.y_axis {
                writeln!(out, "Lap time axis: {}", axis.labels.join("  "))?;
            } else {
                warn!(race_id, "No lap times in summary, skipping lap-time axis");
            }
            if let Some(path) = charts {
                save_json(&path, &ChartDocument::new(race_id, &built))?;
            }
        }
        Commands::Drivers { race_id, csv } => {
            let provider = summary_provider(&config)?;
            let summary = provider.driver_summary(race_id).await?;

            let w = &summary.race_winner;
            let p = &summary.pole_position;
            let f = &summary.fastest_lap;
            writeln!(out, "Race winner:   {} ({}) {}", w.driver, w.team, w.time)?;
            writeln!(out, "Pole position: {} ({}) {}", p.driver, p.team, p.time)?;
            writeln!(
                out,
                "Fastest lap:   {} ({}) lap {} - {}\n",
                f.driver, f.team, f.lap, f.time
            )?;

            let table = project_table(&summary.results, &driver_result_columns())?;
            print_section(&mut out, "Race Results", &table)?;
            export_if_requested(csv.as_deref(), &table)?;
        }
        Commands::Constructors {
            race_id,
            charts,
            csv,
        } => {
            let provider = summary_provider(&config)?;
            let summary = provider.constructor_summary(race_id).await?;

            match &summary.best_finisher {
                Some(b) => writeln!(out, "Best finishing constructor: {} (Pos. {})", b.team, b.position)?,
                None => writeln!(out, "Best finishing constructor: —")?,
            }
            match &summary.most_points {
                Some(m) => writeln!(out, "Most points: {} ({} pts)\n", m.team, m.points)?,
                None => writeln!(out, "Most points: —\n")?,
            }

            let table = project_table(&summary.results, &constructor_result_columns())?;
            print_section(&mut out, "Constructor Results", &table)?;
            export_if_requested(csv.as_deref(), &table)?;

            if let Some(path) = charts {
                let built = ConstructorCharts::build(&summary);
                save_json(&path, &ChartDocument::new(race_id, &built))?;
            }
        }
        Commands::Image { title, images } => {
            let path = images
                .or_else(|| config.image_map.clone())
                .context("no image map configured; pass --images or set DASHBOARD_IMAGE_MAP")?;
            let map = ImageMap::load(&path)?;
            info!(entries = map.len(), path = %path.display(), "Image map loaded");

            match map.image_url(&title).await? {
                Some(url) => writeln!(out, "{url}")?,
                None => writeln!(out, "No image found")?,
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/race_summary.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("race_summary.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Environment config with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(ticks) = cli.ticks {
        config.tick_count = ticks;
    }
    if let Some(secs) = cli.timeout {
        config.http_timeout = Duration::from_secs(secs);
    }
    config.validate()?;
    Ok(config)
}

/// Picks the HTTP client or the directory reader depending on `source`.
fn summary_provider(config: &DashboardConfig) -> Result<Box<dyn SummaryProvider>> {
    if config.is_remote() {
        let http = BasicClient::with_timeout(config.http_timeout)?;
        Ok(Box::new(ApiSummaryClient::new(http, &config.source)))
    } else {
        Ok(Box::new(DirectorySummaryProvider::new(&config.source)))
    }
}

fn print_section<W: Write>(out: &mut W, title: &str, table: &Table) -> Result<()> {
    writeln!(out, "{title}")?;
    write_table(out, table)?;
    writeln!(out)?;
    Ok(())
}

fn export_if_requested(path: Option<&str>, table: &Table) -> Result<()> {
    if let Some(path) = path {
        export_csv(path, table)?;
    }
    Ok(())
}
