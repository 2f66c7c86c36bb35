mod render;
mod search;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use snipestyle_core::{BudgetPreset, SearchForm, DEFAULT_MAX_PRICE};
use snipestyle_serpapi::SerpApiClient;
use tracing_subscriber::EnvFilter;

use crate::render::{JsonSurface, TerminalSurface};

#[derive(Debug, Parser)]
#[command(name = "snipestyle")]
#[command(about = "Search shopping listings and filter them by price")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run up to three shopping searches and print the listings
    Search {
        /// Search terms, e.g. "designer sneakers" "vintage jacket"
        queries: Vec<String>,
        /// Minimum price; 0 means no lower bound
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        /// Maximum price; 1000 or more means no upper bound
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
        max: f64,
        /// Budget preset overriding --min/--max (custom, under-25, 25-50,
        /// 50-100, 100-250, 250-500, 500-plus)
        #[arg(long, default_value_t = BudgetPreset::Custom)]
        budget: BudgetPreset,
        /// Emit one JSON document instead of text cards
        #[arg(long)]
        json: bool,
    },
    /// List the budget presets
    Budgets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            queries,
            min,
            max,
            budget,
            json,
        }) => {
            let config = snipestyle_core::load_app_config_from_env()
                .context("failed to load configuration")?;
            init_tracing(&config.log_level)?;
            tracing::debug!(?config, "configuration loaded");

            let form = SearchForm::new(&queries, min, max, budget)?;
            let client =
                SerpApiClient::from_config(&config).context("failed to build SerpAPI client")?;

            let stdout = std::io::stdout().lock();
            if json {
                search::run_search(&client, &form, &mut JsonSurface::new(stdout)).await?;
            } else {
                search::run_search(&client, &form, &mut TerminalSurface::new(stdout)).await?;
            }
        }
        Some(Commands::Budgets) => {
            for preset in BudgetPreset::ALL {
                let range = match preset.bounds() {
                    Some((lo, hi)) => format!("${lo:.0} - ${hi:.0}"),
                    None => "use --min/--max".to_string(),
                };
                println!("{:<10} {:<10} {range}", preset.slug(), preset.label());
            }
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over
/// the configured level.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
