use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use demofeed_core::feedback::{FeedbackType, Priority, Sentiment, SessionOutcome};
use demofeed_core::{FeedbackStore, SharedFeedbackStore};
use demofeed_infrastructure::load_store_config;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::inspect::FeedbackFilter;

#[derive(Parser)]
#[command(name = "demofeed")]
#[command(
    about = "Demo feedback capture - inspect and maintain feedback archives",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ~/.config/demofeed/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show feedback counts by type, sentiment and priority
    Stats {
        #[arg(long)]
        archive: Option<PathBuf>,
        /// Print the raw statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List closed demo sessions
    Sessions {
        #[arg(long)]
        archive: Option<PathBuf>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        outcome: Option<SessionOutcome>,
    },
    /// List captured feedback items
    Feedback {
        #[arg(long)]
        archive: Option<PathBuf>,
        #[arg(long = "type", value_name = "TYPE")]
        feedback_type: Option<FeedbackType>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        sentiment: Option<Sentiment>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Only items flagged for follow-up
        #[arg(long)]
        actionable: bool,
    },
    /// Summarize deal outcomes
    Pipeline {
        #[arg(long)]
        archive: Option<PathBuf>,
    },
    /// Check that an archive imports cleanly
    Validate { path: PathBuf },
    /// Record sample sessions into the archive
    Seed {
        #[arg(long)]
        archive: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_store_config(cli.config.as_deref()).context("Failed to load config")?;
    let store = SharedFeedbackStore::new(FeedbackStore::with_config(config));

    match cli.command {
        Commands::Stats { archive, json } => {
            commands::inspect::stats(&store, archive.as_deref(), json).await?
        }
        Commands::Sessions {
            archive,
            customer,
            outcome,
        } => commands::inspect::sessions(&store, archive.as_deref(), customer, outcome).await?,
        Commands::Feedback {
            archive,
            feedback_type,
            priority,
            sentiment,
            domain,
            tag,
            actionable,
        } => {
            let filter = FeedbackFilter {
                feedback_type,
                priority,
                sentiment,
                domain,
                tag,
                actionable,
            };
            commands::inspect::feedback(&store, archive.as_deref(), &filter).await?
        }
        Commands::Pipeline { archive } => {
            commands::inspect::pipeline(&store, archive.as_deref()).await?
        }
        Commands::Validate { path } => commands::validate::run(&path).await?,
        Commands::Seed { archive } => commands::seed::run(&store, archive.as_deref()).await?,
    }

    Ok(())
}
