use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rapid::config::Config;
use rapid::db::models::AnalysisInput;
use rapid::db::Database;
use rapid::history::{self, FilterCriterion};
use rapid::output::terminal;
use rapid::scoring::engine;
use rapid::signals::build_input;

/// RAPID: trust scoring for website URLs.
///
/// Scores gathered facts about a URL (reachability, SSL, domain age,
/// suspicious patterns), keeps an append-only history of the results, and
/// summarises that history for a dashboard.
#[derive(Parser)]
#[command(name = "rapid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Score a URL and add the result to history
    Score {
        /// The URL to score (scheme optional, e.g. example.com)
        #[arg(required_unless_present = "input")]
        url: Option<String>,

        /// Read a complete AnalysisInput JSON document from a file ("-" for stdin)
        #[arg(long, conflicts_with = "url")]
        input: Option<String>,

        /// The site responded to a request
        #[arg(long)]
        accessible: bool,

        /// HTTP status code returned by the site
        #[arg(long)]
        status: Option<u16>,

        /// A certificate was presented
        #[arg(long)]
        ssl: bool,

        /// The presented certificate validated
        #[arg(long, requires = "ssl")]
        ssl_valid: bool,

        /// Domain age in days from WHOIS (omit when unknown)
        #[arg(long)]
        age_days: Option<u32>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List past analyses, newest first
    History {
        /// all | legitimate | suspicious
        #[arg(long, default_value = "all")]
        filter: FilterCriterion,

        /// Case-insensitive URL search
        #[arg(long, default_value = "")]
        search: String,

        /// Maximum rows to show (default: RAPID_RECENT_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show dashboard statistics over the full history
    Stats,

    /// Show one stored analysis by id
    Show {
        /// The analysis id
        id: String,
    },

    /// Serve the JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
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
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rapid=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing RAPID database...");
            let db = rapid::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            let analyses = db.count_analyses().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables: {table_count}  Stored analyses: {analyses}");
            println!("\nNext step: rapid score example.com --accessible --ssl --ssl-valid");
        }

        Commands::Score {
            url,
            input,
            accessible,
            status,
            ssl,
            ssl_valid,
            age_days,
            json,
        } => {
            let analysis_input = match input {
                Some(path) => read_input(&path)?,
                None => {
                    let raw = url.context("A URL or --input is required")?;
                    build_input(&raw, accessible, status, ssl, ssl_valid, age_days)?
                }
            };

            let result = engine::score(analysis_input);

            let db = rapid::db::initialize_sqlite(&config.db_path)?;
            db.insert_analysis(&result)
                .await
                .context("Analysis was scored but could not be saved to history")?;

            info!(
                url = %result.url,
                trust_score = result.trust_score,
                band = result.band().as_str(),
                patterns = result.suspicious_patterns.len(),
                "Scored URL"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_result(&result);
            }
        }

        Commands::History {
            filter,
            search,
            limit,
        } => {
            let db = rapid::db::open_sqlite(&config.db_path)?;
            let all = db.get_all_analyses().await?;
            let limit = limit.unwrap_or(config.recent_limit as usize);

            let matched: Vec<_> = history::filter(&all, filter, &search)
                .into_iter()
                .rev()
                .take(limit)
                .collect();
            terminal::display_history(&matched, filter, &search);
        }

        Commands::Stats => {
            let db = rapid::db::open_sqlite(&config.db_path)?;
            let all = db.get_all_analyses().await?;
            let stats = history::compute_stats(&all);
            terminal::display_stats(&stats, &history::trust_distribution(&all));
        }

        Commands::Show { id } => {
            let db = rapid::db::open_sqlite(&config.db_path)?;
            match db.get_analysis_by_id(&id).await? {
                Some(result) => terminal::display_result(&result),
                None => anyhow::bail!(
                    "No analysis with id {id}. Run `rapid history` to list stored analyses."
                ),
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let db = rapid::db::initialize_sqlite(&config.db_path)?;
            rapid::web::run_server(config, db, port, &bind).await?;
        }
    }

    Ok(())
}

/// Read an AnalysisInput JSON document from a file, or stdin for "-".
fn read_input(path: &str) -> Result<AnalysisInput> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
    };

    let input: AnalysisInput =
        serde_json::from_str(&raw).with_context(|| format!("Invalid analysis input in {path}"))?;
    if input.url.trim().is_empty() {
        anyhow::bail!("Analysis input in {path} has an empty url");
    }
    Ok(input)
}
