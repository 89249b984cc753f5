//! componentry CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{AddCommand, ConfigCommand, InitCommand, ListCommand};
use componentry::{observability, ComponentryConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "componentry")]
#[command(version)]
#[command(about = "Add UI components and page templates to your project", long_about = None)]
struct Cli {
    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root to operate on (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install components or templates into the project
    Add(AddCommand),
    /// List everything the registry offers
    List(ListCommand),
    /// Set up Tailwind CSS without installing anything else
    Init(InitCommand),
    /// Print the resolved configuration
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let project_root = match cli.project {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let config = ComponentryConfig::load(&project_root)?;
    tracing::debug!(root = %project_root.display(), ?config, "resolved configuration");

    match cli.command {
        Commands::Add(cmd) => cmd.execute(&project_root, &config)?,
        Commands::List(cmd) => cmd.execute()?,
        Commands::Init(cmd) => cmd.execute(&project_root)?,
        Commands::Config(cmd) => cmd.execute(&config)?,
    }

    Ok(())
}
