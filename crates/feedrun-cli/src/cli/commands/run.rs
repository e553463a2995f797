//! `feedrun [PAGE]` – run the scrape/feed pipeline over the selected pages.

use anyhow::Result;
use feedrun_core::batch;
use feedrun_core::config::RunnerConfig;
use feedrun_core::pages::{self, Selector};
use feedrun_core::pipeline::ProcessRunner;
use feedrun_core::report::Reporter;

pub fn run_batch(cfg: &RunnerConfig, page: &str) -> Result<i32> {
    let workdir = cfg.resolved_workdir()?;
    let pages_path = cfg.resolved_pages_file(&workdir);
    let file = pages::load_pages(&pages_path)?;

    let selector = Selector::from_arg(Some(page));
    tracing::info!(?selector, workdir = %workdir.display(), "starting batch");

    let mut runner = ProcessRunner::from_config(cfg, workdir);
    let mut reporter = Reporter::stdout();
    let summary = batch::run_selected(&file, &selector, &mut runner, &mut reporter)?;
    Ok(summary.exit_code())
}
