use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{info, warn};

use panelscope::api::client::PanelApiClient;
use panelscope::api::PanelApi;
use panelscope::config::Config;
use panelscope::keywords::traits::KeywordExtractor;
use panelscope::keywords::{FrequencyExtractor, DEFAULT_TOP_K};
use panelscope::output::terminal;
use panelscope::view::{run_request, ViewState};

/// Panelscope: query and explore a survey panel database.
///
/// Serves the dashboard (static bundle + /api proxy) and offers the same
/// views from the terminal: dashboard KPIs, natural-language queries,
/// breakdowns, panel cards, trending keywords, and CSV export.
#[derive(Parser)]
#[command(name = "panelscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard bundle and proxy /api to the backend
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Ask the backend a natural-language question about the panel
    Query {
        /// The question, e.g. "서울 거주 20대 여성 중 캠핑을 즐기는 사람"
        prompt: String,

        /// LLM model for the backend to use
        #[arg(long)]
        model: Option<String>,

        /// Number of trending keywords to show (default: 20)
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Comma-separated fields to break down, e.g. gender,age_group
        #[arg(long, value_delimiter = ',')]
        breakdown: Vec<String>,

        /// Max slices per breakdown (default: 6)
        #[arg(long, default_value = "6")]
        max_slices: usize,

        /// Export matched panel IDs to CSV (default file name if no path given)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Free-text panel search: show recognized conditions and estimated count
    Search {
        /// Search text, e.g. "서울 20대 남성"
        query: String,
    },

    /// Show dashboard KPIs and recent queries
    Dashboard {
        /// Render generated demo data instead of calling the backend
        #[arg(long)]
        mock: bool,

        /// RNG seed for --mock (default: 42)
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Show one panel's detail card
    Panel {
        /// Panel ID (mb_sn)
        mb_sn: String,
    },

    /// Extract trending keywords from a JSON file of panel records
    Keywords {
        /// JSON array of records, or an object with a "rows" array
        file: PathBuf,

        /// Number of keywords to return (default: 20)
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Export panel IDs (mb_sn) from a JSON file of records to CSV
    Export {
        /// JSON array of records, or an object with a "rows" array
        file: PathBuf,

        /// Output path (default: panel_ids_YYYYMMDD_HHMMSS.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print mock panel records as JSON
    Mock {
        /// Number of records (default: 100)
        #[arg(long, default_value = "100")]
        count: usize,

        /// RNG seed; the same seed gives the same records
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("panelscope=info")),
        )
        .init();

    run(Cli::parse().command).await
}

/// Execute one subcommand. Only the network-facing ones read the config.
async fn run(command: Commands) -> Result<()> {
    match command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            panelscope::web::run_server(config).await?;
        }

        Commands::Query {
            prompt,
            model,
            top_k,
            breakdown,
            max_slices,
            export,
        } => {
            let api = api_client()?;

            let mut view = ViewState::default();
            let pb = spinner("Running query...");
            run_request(&mut view, || api.sql_search(&prompt, model.as_deref())).await;
            pb.finish_and_clear();
            let response = view.into_result()?;

            terminal::display_sql_answer(&prompt, &response);

            let rows = response.rows();
            if !rows.is_empty() {
                let extractor = FrequencyExtractor { top_k };
                terminal::display_keywords(&extractor.extract(rows));
            }

            if !breakdown.is_empty() {
                let donuts = panelscope::charts::compare(rows, &breakdown, max_slices);
                terminal::display_donuts(&donuts);
            }

            if let Some(path) = export {
                if rows.is_empty() {
                    warn!("Query returned no rows; nothing to export");
                    println!("{}", "No rows to export.".yellow());
                } else {
                    let path = path.unwrap_or_else(default_export_path);
                    let written = panelscope::export::export_rows(rows, &path)?;
                    println!("Exported {written} panel IDs to {}", path.display());
                }
            }
        }

        Commands::Search { query } => {
            let api = api_client()?;

            let mut view = ViewState::default();
            let pb = spinner("Searching panels...");
            run_request(&mut view, || api.search_panels(&query)).await;
            pb.finish_and_clear();

            terminal::display_search(&query, &view.into_result()?);
        }

        Commands::Dashboard { mock: true, seed } => {
            terminal::display_dashboard(&panelscope::mock::mock_dashboard(seed));
        }

        Commands::Dashboard { mock: false, .. } => {
            let api = api_client()?;

            let mut view = ViewState::default();
            let pb = spinner("Loading dashboard...");
            run_request(&mut view, || api.dashboard()).await;
            pb.finish_and_clear();

            terminal::display_dashboard(&view.into_result()?);
        }

        Commands::Panel { mb_sn } => {
            let api = api_client()?;

            let mut view = ViewState::default();
            let pb = spinner("Loading panel...");
            run_request(&mut view, || api.panel_detail(&mb_sn)).await;
            pb.finish_and_clear();

            terminal::display_panel_card(&view.into_result()?);
        }

        Commands::Keywords { file, top_k, json } => {
            let records = load_records(&file)?;
            info!(records = records.len(), "Extracting trending keywords");

            let keywords = FrequencyExtractor { top_k }.extract(&records);
            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                terminal::display_keywords(&keywords);
            }
        }

        Commands::Export { file, output } => {
            let records = load_records(&file)?;
            let path = output.unwrap_or_else(default_export_path);
            let written = panelscope::export::export_rows(&records, &path)?;
            println!("Exported {written} panel IDs to {}", path.display());
        }

        Commands::Mock { count, seed } => {
            let panels = panelscope::mock::mock_panels(count, seed);
            println!("{}", serde_json::to_string_pretty(&panels)?);
        }
    }

    Ok(())
}

/// Backend client for the network-facing views.
fn api_client() -> Result<PanelApiClient> {
    let config = Config::load()?;
    PanelApiClient::new(&config.api_base_url)
}

/// Loading indicator shown while a view's request is pending.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn default_export_path() -> PathBuf {
    PathBuf::from(panelscope::export::default_export_filename(chrono::Local::now()))
}

/// Read panel records from a JSON file: a bare array, or an object whose
/// "rows" (or "panels") field is an array.
fn load_records(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match parsed {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("rows").or_else(|| map.remove("panels")) {
            Some(Value::Array(rows)) => Ok(rows),
            _ => anyhow::bail!(
                "{} has no \"rows\" array. Expected a JSON array of panel records.",
                path.display()
            ),
        },
        _ => anyhow::bail!("{} must contain a JSON array of panel records", path.display()),
    }
}
