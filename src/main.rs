use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pocketdex::config::Config;
use pocketdex::container::AppContainer;
use pocketdex::detail::DetailRecord;
use pocketdex::pager::{ListState, SummaryEntry};
use pocketdex::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "pocketdex", version, about = "Browse the PokéAPI catalog")]
struct Cli {
    /// Path to a config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List entries page by page
    List {
        /// Pages to load after the initial load
        #[arg(long, default_value_t = 0)]
        more: u32,

        /// Skip fetching tags for listed entries
        #[arg(long)]
        no_backfill: bool,
    },
    /// Show one entry with its evolution chain
    Show {
        id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let container = AppContainer::from_config(&config)?;

    match cli.command {
        Command::List { more, no_backfill } => {
            let pager = &container.pager;
            let page_failures = if no_backfill {
                pager
                    .load_pages(config.catalog.initial_pages + more)
                    .await
                    .page_failures
            } else {
                let mut failures = pager.initial_load().await.page_failures;
                for _ in 0..more {
                    failures += pager.load_more().await.page_failures;
                }
                failures
            };

            match pager.state() {
                ListState::Failed { message } => anyhow::bail!(message),
                state => print_entries(state.entries()),
            }
            if page_failures > 0 {
                eprintln!(
                    "Warning: {} page(s) failed to load; the list may be incomplete",
                    page_failures
                );
            }
        }
        Command::Show { id, json } => {
            let record = container
                .detail_view
                .load_detail(&id, true)
                .await
                .with_context(|| format!("could not load entry '{}'", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(record.as_ref())?);
            } else {
                print_record(&record);
            }
        }
    }

    Ok(())
}

fn print_entries(entries: &[SummaryEntry]) {
    for entry in entries {
        if entry.tags.is_empty() {
            println!("#{:<5} {}", entry.id, entry.name);
        } else {
            println!("#{:<5} {} [{}]", entry.id, entry.name, entry.tags.join(", "));
        }
    }
}

fn print_record(record: &DetailRecord) {
    println!("#{} {}", record.id, record.name);
    println!("Types:  {}", record.tags.join(", "));
    println!("Height: {}  Weight: {}", record.height, record.weight);
    for metric in &record.metrics {
        println!("  {:<16} {}", metric.name, metric.value);
    }
    if !record.description.is_empty() {
        println!();
        println!("{}", record.description);
    }
    if !record.evolutions.is_empty() {
        let chain: Vec<&str> = record.evolutions.iter().map(|n| n.name.as_str()).collect();
        println!();
        println!("Evolutions: {}", chain.join(" -> "));
    }
}
