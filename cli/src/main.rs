//! # tutor CLI
//!
//! Command-line interface for tutor - revise programming concepts with a
//! locally hosted language model.
//!
//! ## Usage
//!
//! - `tutor` - Start interactive mode
//! - `tutor explain <topic>` - Explain one concept
//! - `tutor quiz <topic>` - Generate one multiple-choice question

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutor_core::Operation;

mod commands;
mod config;
mod interactive;

use commands::{interactive_command, run_command};
use config::CliConfigLoader;
use interactive::FailurePolicy;

/// tutor - Revise programming concepts with a local language model
#[derive(Parser)]
#[command(name = "tutor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explanations and quiz questions from a locally hosted language model")]
#[command(long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the Ollama server
    #[arg(long)]
    endpoint: Option<String>,

    /// Model name override
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// What to do when a turn fails in interactive mode
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    on_error: FailurePolicy,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a concept
    Explain {
        /// Topic to explain
        #[arg(required = true)]
        topic: Vec<String>,
    },

    /// Generate a multiple-choice question
    Quiz {
        /// Topic of the question
        #[arg(required = true)]
        topic: Vec<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(endpoint) = &cli.endpoint {
        loader = loader.with_endpoint_override(endpoint.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout_override(timeout);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tutor_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Explain { topic }) => {
            run_command(Operation::Explain, topic.join(" "), config_loader).await
        }
        Some(Commands::Quiz { topic }) => {
            run_command(Operation::CreateQcm, topic.join(" "), config_loader).await
        }
        None => interactive_command(config_loader, cli.on_error).await,
    }
}
