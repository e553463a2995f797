//! The two-stage pipeline applied to each page: scrape, then feed generation.

mod process;

pub use process::ProcessRunner;

use std::fmt;

use crate::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Scrape,
    Feed,
}

impl Stage {
    /// Scrape receives the page URL; feed generation receives the slug.
    pub fn page_arg<'a>(&self, page: &'a Page) -> &'a str {
        match self {
            Stage::Scrape => &page.url,
            Stage::Feed => &page.slug,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Scrape => write!(f, "scrape"),
            Stage::Feed => write!(f, "feed"),
        }
    }
}

/// How a single stage invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Succeeded,
    /// Non-zero exit; `None` when the process was terminated by a signal.
    Failed { code: Option<i32> },
    /// The program could not be started at all.
    SpawnFailed { reason: String },
}

impl StageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Succeeded)
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageOutcome::Succeeded => write!(f, "succeeded"),
            StageOutcome::Failed { code: Some(c) } => write!(f, "exit code {}", c),
            StageOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            StageOutcome::SpawnFailed { reason } => write!(f, "spawn failed: {}", reason),
        }
    }
}

/// Executes one stage for one page and blocks until it finishes.
pub trait StageRunner {
    fn run_stage(&mut self, stage: Stage, page: &Page) -> StageOutcome;
}
