//! Pages file: the list of scrape targets, loaded from JSON and validated.

mod error;
mod select;

pub use error::PagesError;
pub use select::{select, Selector};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// One scrape target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier; passed to the feed stage.
    pub slug: String,
    /// Human-readable name, used only for display.
    pub name: String,
    /// Source URL; passed to the scrape stage.
    pub url: String,
}

/// Top-level document: `{"pages": [...]}`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesFile {
    pub pages: Vec<Page>,
}

impl PagesFile {
    /// Slugs in file order.
    pub fn slugs(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.slug.clone()).collect()
    }

    pub fn find(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Check slugs are non-empty and unique and every url is absolute http(s).
    pub fn validate(&self) -> Result<(), PagesError> {
        let mut seen = HashSet::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            if page.slug.trim().is_empty() {
                return Err(PagesError::EmptySlug { index });
            }
            if !seen.insert(page.slug.as_str()) {
                return Err(PagesError::DuplicateSlug {
                    slug: page.slug.clone(),
                });
            }
            validate_url(page)?;
        }
        Ok(())
    }
}

fn validate_url(page: &Page) -> Result<(), PagesError> {
    let invalid = |reason: String| PagesError::InvalidUrl {
        slug: page.slug.clone(),
        url: page.url.clone(),
        reason,
    };
    let parsed = url::Url::parse(&page.url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// Parse and validate a pages document already in memory.
pub fn parse_pages(data: &str, path: &Path) -> Result<PagesFile, PagesError> {
    let file: PagesFile = serde_json::from_str(data).map_err(|source| PagesError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.validate()?;
    Ok(file)
}

/// Load the pages file. A missing file is reported as [`PagesError::NotFound`].
pub fn load_pages(path: &Path) -> Result<PagesFile, PagesError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PagesError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(PagesError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let file = parse_pages(&data, path)?;
    tracing::debug!(path = %path.display(), pages = file.pages.len(), "loaded pages config");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "pages": [
            {"slug": "acme", "name": "Acme Corp", "url": "https://www.linkedin.com/company/acme/"},
            {"slug": "globex", "name": "Globex", "url": "https://www.linkedin.com/company/globex/", "notes": "ignored"}
        ],
        "updated": "2024-05-01"
    }"#;

    #[test]
    fn parse_sample_ignores_unknown_fields() {
        let file = parse_pages(SAMPLE, Path::new("pages.json")).unwrap();
        assert_eq!(file.pages.len(), 2);
        assert_eq!(file.pages[0].name, "Acme Corp");
        assert_eq!(file.slugs(), vec!["acme", "globex"]);
        assert_eq!(file.find("globex").unwrap().name, "Globex");
        assert!(file.find("initech").is_none());
    }

    #[test]
    fn duplicate_slug_rejected() {
        let data = r#"{"pages": [
            {"slug": "a", "name": "A", "url": "https://a.example/"},
            {"slug": "a", "name": "A again", "url": "https://b.example/"}
        ]}"#;
        match parse_pages(data, Path::new("p.json")) {
            Err(PagesError::DuplicateSlug { slug }) => assert_eq!(slug, "a"),
            other => panic!("expected DuplicateSlug, got {other:?}"),
        }
    }

    #[test]
    fn empty_slug_rejected() {
        let data = r#"{"pages": [{"slug": " ", "name": "Blank", "url": "https://a.example/"}]}"#;
        assert!(matches!(
            parse_pages(data, Path::new("p.json")),
            Err(PagesError::EmptySlug { index: 0 })
        ));
    }

    #[test]
    fn non_http_url_rejected() {
        let data = r#"{"pages": [{"slug": "f", "name": "F", "url": "ftp://a.example/"}]}"#;
        match parse_pages(data, Path::new("p.json")) {
            Err(PagesError::InvalidUrl { slug, .. }) => assert_eq!(slug, "f"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
        let relative = r#"{"pages": [{"slug": "r", "name": "R", "url": "/company/r"}]}"#;
        assert!(matches!(
            parse_pages(relative, Path::new("p.json")),
            Err(PagesError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn missing_pages_key_is_parse_error() {
        assert!(matches!(
            parse_pages(r#"{"targets": []}"#, Path::new("p.json")),
            Err(PagesError::Parse { .. })
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages_config.json");
        match load_pages(&path) {
            Err(PagesError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        f.flush().unwrap();
        let file = load_pages(f.path()).unwrap();
        assert_eq!(file.pages.len(), 2);
    }
}
