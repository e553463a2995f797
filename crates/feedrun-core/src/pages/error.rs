//! Error type for loading and selecting pages.

use std::path::PathBuf;

/// Fatal problems with the pages file or the requested page.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    #[error("pages config not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("read pages config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse pages config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("page #{index} has an empty slug")]
    EmptySlug { index: usize },

    #[error("duplicate page slug '{slug}'")]
    DuplicateSlug { slug: String },

    #[error("page '{slug}' has an invalid url '{url}': {reason}")]
    InvalidUrl {
        slug: String,
        url: String,
        reason: String,
    },

    #[error("page '{slug}' not found in config (available pages: {})", available.join(", "))]
    UnknownPage {
        slug: String,
        available: Vec<String>,
    },
}
