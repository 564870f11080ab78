//! Pagelink CLI - link-in-bio static page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "pagelink")]
#[command(about = "Generate a link-in-bio page from config.yml and a theme")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the site config, relative to --root
    #[arg(short, long, default_value = "config.yml", global = true)]
    config: PathBuf,

    /// Directory holding config, themes and output
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render index.html and stage theme assets (default)
    Build {
        /// Theme to use instead of the one in the config
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Create a starter config and the default theme
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command.unwrap_or(Commands::Build { theme: None }) {
        Commands::Build { theme } => {
            commands::build::run(cli.root, cli.config, theme)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.root, &cli.config, yes)?;
        }
    }

    Ok(())
}
