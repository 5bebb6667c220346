//! bmdocs CLI - documentation tooling for the bm bookmark tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "bmdocs")]
#[command(about = "Documentation tooling for the bm bookmark tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docs.toml config file
    #[arg(short, long, default_value = "docs.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold docs.toml and the documentation pages
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the resolved site configuration as JSON
    Config {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render navigation, sidebar and footer partials
    Render {
        /// Output directory
        #[arg(short, long, default_value = "dist/partials")]
        output: PathBuf,
    },

    /// Check that the documentation pages are complete
    Check {
        /// Documentation root (defaults to config or "docs")
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => commands::init::run(yes, &cli.config)?,
        Commands::Config { pretty } => commands::config::run(&cli.config, pretty)?,
        Commands::Render { output } => commands::render::run(&cli.config, &output)?,
        Commands::Check { root, json } => commands::check::run(&cli.config, root, json)?,
    }

    Ok(())
}
