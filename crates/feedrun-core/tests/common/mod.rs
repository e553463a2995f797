//! Shared fixtures for integration tests.

pub mod scripted;

use feedrun_core::pages::{Page, PagesFile};

pub fn page(slug: &str) -> Page {
    Page {
        slug: slug.to_string(),
        name: format!("Page {slug}"),
        url: format!("https://www.example.com/company/{slug}/"),
    }
}

pub fn pages_file(slugs: &[&str]) -> PagesFile {
    PagesFile {
        pages: slugs.iter().map(|s| page(s)).collect(),
    }
}
