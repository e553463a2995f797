use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One external program invocation. The page argument is appended after `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCommand {
    /// Executable name or path (looked up on `PATH` when bare).
    pub program: String,
    /// Leading arguments, e.g. the script to run.
    #[serde(default)]
    pub args: Vec<String>,
}

impl StageCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Runner settings loaded from `~/.config/feedrun/config.toml`.
/// Missing keys fall back to [`RunnerConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Pages file; relative paths resolve against the working directory.
    pub pages_file: PathBuf,
    /// Working directory for subprocesses (None = current directory).
    pub workdir: Option<PathBuf>,
    /// Scrape stage; receives the page URL.
    pub scraper: StageCommand,
    /// Feed generation stage; receives the page slug.
    pub feed: StageCommand,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            pages_file: PathBuf::from("pages_config.json"),
            workdir: None,
            scraper: StageCommand::new("python3", &["linkedin_scraper.py"]),
            feed: StageCommand::new("python3", &["generate_rss.py"]),
        }
    }
}

impl RunnerConfig {
    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, pages_file: Option<PathBuf>, workdir: Option<PathBuf>) -> Self {
        if let Some(p) = pages_file {
            self.pages_file = p;
        }
        if let Some(w) = workdir {
            self.workdir = Some(w);
        }
        self
    }

    /// Effective working directory.
    pub fn resolved_workdir(&self) -> Result<PathBuf> {
        match &self.workdir {
            Some(w) => Ok(w.clone()),
            None => std::env::current_dir().context("determine current directory"),
        }
    }

    /// Pages file path with relative paths anchored at `workdir`.
    pub fn resolved_pages_file(&self, workdir: &Path) -> PathBuf {
        if self.pages_file.is_absolute() {
            self.pages_file.clone()
        } else {
            workdir.join(&self.pages_file)
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedrun")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RunnerConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<RunnerConfig> {
    if !path.exists() {
        let default_cfg = RunnerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RunnerConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
