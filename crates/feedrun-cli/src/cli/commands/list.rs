//! `feedrun --list` – show configured pages.

use anyhow::Result;
use feedrun_core::config::RunnerConfig;
use feedrun_core::pages;
use feedrun_core::report::Reporter;

pub fn run_list(cfg: &RunnerConfig) -> Result<i32> {
    let workdir = cfg.resolved_workdir()?;
    let file = pages::load_pages(&cfg.resolved_pages_file(&workdir))?;
    Reporter::stdout().page_list(&file.pages)?;
    Ok(0)
}
