//! Stage runner that returns canned outcomes and records every call.

use std::collections::HashMap;

use feedrun_core::pages::Page;
use feedrun_core::pipeline::{Stage, StageOutcome, StageRunner};

#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: HashMap<(String, Stage), StageOutcome>,
    /// (stage, argument) for each invocation, in order.
    pub calls: Vec<(Stage, String)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `stage` fail for `slug` with the given exit code. Unlisted calls succeed.
    pub fn fail(mut self, slug: &str, stage: Stage, code: i32) -> Self {
        self.outcomes.insert(
            (slug.to_string(), stage),
            StageOutcome::Failed { code: Some(code) },
        );
        self
    }

    pub fn calls_for(&self, stage: Stage) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|(s, _)| *s == stage)
            .map(|(_, arg)| arg.as_str())
            .collect()
    }
}

impl StageRunner for ScriptedRunner {
    fn run_stage(&mut self, stage: Stage, page: &Page) -> StageOutcome {
        self.calls.push((stage, stage.page_arg(page).to_string()));
        self.outcomes
            .get(&(page.slug.clone(), stage))
            .cloned()
            .unwrap_or(StageOutcome::Succeeded)
    }
}
