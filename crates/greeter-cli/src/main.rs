use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Greeter voice skill - dispatch request envelopes locally", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/greeter/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch one request envelope and print the response envelope
    Dispatch {
        /// JSON request file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Serve this text instead of calling the remote fact source
        #[arg(long)]
        offline_fact: Option<String>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
    /// Print the greeting for the current time
    Wish {
        /// Classify this reference-zone hour instead of the current time
        #[arg(long, allow_hyphen_values = true)]
        hour: Option<i32>,
    },
}

fn init_tracing() {
    // stdout carries the response envelope, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dispatch {
            input,
            offline_fact,
            pretty,
        } => commands::dispatch::run(cli.config, &input, offline_fact, pretty).await?,
        Commands::Wish { hour } => commands::wish::run(cli.config, hour).await?,
    }

    Ok(())
}
