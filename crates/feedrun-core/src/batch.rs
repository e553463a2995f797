//! Sequential batch execution over the selected pages.
//!
//! Each page runs scrape then feed. A failed scrape skips the feed stage for
//! that page; any failure is recorded and the batch moves on to the next page.

use anyhow::{Context, Result};
use std::io::Write;

use crate::pages::{self, Page, PagesFile, Selector};
use crate::pipeline::{Stage, StageOutcome, StageRunner};
use crate::report::Reporter;

/// A page whose pipeline did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub slug: String,
    /// Stage that failed; the feed stage never runs after a failed scrape.
    pub stage: Stage,
    pub outcome: StageOutcome,
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<PageFailure>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }

    /// Process exit code: 0 only if every page completed.
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }

    pub fn failed_slugs(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.slug.as_str()).collect()
    }
}

/// Run one page through both stages; `Err` carries the failing stage.
fn run_page<R: StageRunner, W: Write>(
    runner: &mut R,
    reporter: &mut Reporter<W>,
    page: &Page,
) -> Result<std::result::Result<(), (Stage, StageOutcome)>> {
    for stage in [Stage::Scrape, Stage::Feed] {
        reporter.stage_start(stage)?;
        tracing::info!(slug = %page.slug, %stage, "stage started");
        let outcome = runner.run_stage(stage, page);
        if !outcome.is_success() {
            tracing::warn!(slug = %page.slug, %stage, %outcome, "stage failed");
            reporter.stage_failed(stage, page)?;
            return Ok(Err((stage, outcome)));
        }
        tracing::info!(slug = %page.slug, %stage, "stage finished");
    }
    Ok(Ok(()))
}

/// Process `pages` in order, one at a time. Only console write errors abort the batch.
pub fn run_pages<R: StageRunner, W: Write>(
    pages: &[&Page],
    runner: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        total: pages.len(),
        ..BatchSummary::default()
    };

    reporter.banner(pages.len()).context("write banner")?;

    for (i, page) in pages.iter().enumerate() {
        reporter.page_start(i + 1, pages.len(), page)?;
        match run_page(runner, reporter, page)? {
            Ok(()) => {
                summary.succeeded += 1;
                reporter.page_completed(page)?;
            }
            Err((stage, outcome)) => summary.failures.push(PageFailure {
                slug: page.slug.clone(),
                stage,
                outcome,
            }),
        }
        reporter.page_end()?;
    }

    reporter.summary(&summary).context("write summary")?;
    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failures.len(),
        "batch finished"
    );
    Ok(summary)
}

/// Select pages, then run them. An unknown slug fails with
/// [`pages::PagesError::UnknownPage`] before the runner is touched.
pub fn run_selected<R: StageRunner, W: Write>(
    file: &PagesFile,
    selector: &Selector,
    runner: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<BatchSummary> {
    let selected = pages::select(file, selector)?;
    run_pages(&selected, runner, reporter)
}
