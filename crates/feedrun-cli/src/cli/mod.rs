//! CLI for feedrun.

mod commands;

use anyhow::Result;
use clap::Parser;
use feedrun_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_list};

/// Run the scrape and feed-generation stages for each configured page.
#[derive(Debug, Parser)]
#[command(name = "feedrun")]
#[command(about = "feedrun: scrape configured pages and generate their feeds, one by one", long_about = None)]
pub struct Cli {
    /// Slug of a single page to process, or "all".
    #[arg(default_value = "all", value_name = "PAGE")]
    pub page: String,

    /// Pages file (JSON). Overrides `pages_file` from config.toml.
    #[arg(long, value_name = "PATH")]
    pub pages_file: Option<PathBuf>,

    /// Working directory for the stage programs. Overrides `workdir` from config.toml.
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Print the configured pages and exit without running anything.
    #[arg(long)]
    pub list: bool,
}

/// Dispatch target derived from the parsed arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    List,
    Run { page: String },
}

impl From<&Cli> for CliCommand {
    fn from(cli: &Cli) -> Self {
        if cli.list {
            CliCommand::List
        } else {
            CliCommand::Run {
                page: cli.page.clone(),
            }
        }
    }
}

impl CliCommand {
    /// Returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?.with_overrides(cli.pages_file.clone(), cli.workdir.clone());
        tracing::debug!("loaded config: {:?}", cfg);

        match CliCommand::from(&cli) {
            CliCommand::List => run_list(&cfg),
            CliCommand::Run { page } => run_batch(&cfg, &page),
        }
    }
}

#[cfg(test)]
mod tests;
