use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use toolscout_catalog::Catalog;
use toolscout_protocol::{DetailLevel, SearchParams, ToolCategory};
use toolscout_search::{SearchConfig, SearchEngine};

#[derive(Parser)]
#[command(
    name = "toolscout",
    version,
    about = "Search a static tool catalog the way an agent would"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank catalog tools against a free-text query.
    Search {
        /// Free-text query.
        query: String,

        /// Maximum results (default comes from the engine config).
        #[arg(long)]
        limit: Option<usize>,

        /// Restrict results to one category.
        #[arg(long)]
        category: Option<ToolCategory>,

        /// true: helper tools only; false: API-calling tools only.
        #[arg(long)]
        helper: Option<bool>,

        /// Payload shape: name_only, name_and_description, or full.
        #[arg(long, default_value = "name_and_description")]
        detail: String,

        /// TOML file overriding strategy weights and the default limit.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Single-line JSON output.
        #[arg(long)]
        compact: bool,
    },
    /// List the embedded catalog inventory.
    Tools {
        /// Restrict the listing to one category.
        #[arg(long)]
        category: Option<ToolCategory>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let catalog = Catalog::load_embedded().context("load embedded tool catalog")?;

    match cli.command {
        Command::Search {
            query,
            limit,
            category,
            helper,
            detail,
            config,
            compact,
        } => {
            let detail_level = parse_detail(&detail)?;
            let config = match config {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("read config {}", path.display()))?;
                    let parsed = SearchConfig::from_toml_str(&raw)
                        .with_context(|| format!("parse config {}", path.display()))?;
                    log::debug!("search config loaded from {}", path.display());
                    parsed
                }
                None => SearchConfig::default(),
            };
            let engine =
                SearchEngine::with_config(catalog, config).context("configure search engine")?;

            let params = SearchParams {
                query,
                detail_level,
                category,
                is_helper: helper,
                limit,
            };
            match engine.search(&params) {
                Ok(response) => {
                    let rendered = if compact {
                        serde_json::to_string(&response)?
                    } else {
                        serde_json::to_string_pretty(&response)?
                    };
                    println!("{rendered}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    // Bad request, not zero matches: structured envelope on stderr.
                    eprintln!("{}", serde_json::to_string(&err.to_envelope())?);
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Tools { category } => {
            let tools: Vec<serde_json::Value> = catalog
                .entries()
                .iter()
                .filter(|entry| category.map_or(true, |c| entry.category == c))
                .map(|entry| {
                    json!({
                        "name": entry.name,
                        "summary": entry.description,
                        "category": entry.category.as_str(),
                        "helper": entry.is_helper,
                    })
                })
                .collect();
            let inventory = json!({ "count": tools.len(), "tools": tools });
            println!("{}", serde_json::to_string_pretty(&inventory)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_detail(raw: &str) -> Result<DetailLevel> {
    match raw {
        "name_only" => Ok(DetailLevel::NameOnly),
        "name_and_description" => Ok(DetailLevel::NameAndDescription),
        "full" => Ok(DetailLevel::Full),
        other => anyhow::bail!(
            "unknown detail level '{other}' (expected name_only, name_and_description, or full)"
        ),
    }
}
