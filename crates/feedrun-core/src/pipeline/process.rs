//! Stage runner backed by real subprocesses.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{Stage, StageOutcome, StageRunner};
use crate::config::{RunnerConfig, StageCommand};
use crate::pages::Page;

/// Runs each stage as a child process with inherited stdio, so the
/// collaborators' own output streams straight to the terminal.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    scraper: StageCommand,
    feed: StageCommand,
    workdir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new(scraper: StageCommand, feed: StageCommand, workdir: Option<PathBuf>) -> Self {
        Self {
            scraper,
            feed,
            workdir,
        }
    }

    pub fn from_config(cfg: &RunnerConfig, workdir: PathBuf) -> Self {
        Self::new(cfg.scraper.clone(), cfg.feed.clone(), Some(workdir))
    }

    fn command_for(&self, stage: Stage) -> &StageCommand {
        match stage {
            Stage::Scrape => &self.scraper,
            Stage::Feed => &self.feed,
        }
    }

    fn build(&self, stage: Stage, page: &Page) -> Command {
        let spec = self.command_for(stage);
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .arg(stage.page_arg(page))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl StageRunner for ProcessRunner {
    fn run_stage(&mut self, stage: Stage, page: &Page) -> StageOutcome {
        let mut cmd = self.build(stage, page);
        tracing::debug!(slug = %page.slug, %stage, command = ?cmd, "spawning stage");
        match cmd.status() {
            Ok(status) if status.success() => StageOutcome::Succeeded,
            Ok(status) => StageOutcome::Failed {
                code: status.code(),
            },
            Err(e) => {
                tracing::error!(
                    slug = %page.slug,
                    %stage,
                    program = %self.command_for(stage).program,
                    "could not start stage: {}",
                    e
                );
                StageOutcome::SpawnFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
