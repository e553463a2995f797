//! Console progress and summary for a batch run.

use std::io::{self, Write};

use crate::batch::BatchSummary;
use crate::pages::Page;
use crate::pipeline::Stage;

const RULE_WIDTH: usize = 60;

/// Writes human-readable progress to any sink (stdout in the binary, a buffer in tests).
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self, ch: char) -> io::Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(RULE_WIDTH))
    }

    pub fn banner(&mut self, page_count: usize) -> io::Result<()> {
        self.rule('=')?;
        writeln!(
            self.out,
            "🚀 Feed Runner - Processing {} page(s)",
            page_count
        )?;
        self.rule('=')?;
        writeln!(self.out)
    }

    /// `index` is 1-based.
    pub fn page_start(&mut self, index: usize, total: usize, page: &Page) -> io::Result<()> {
        writeln!(
            self.out,
            "[{}/{}] 📄 {} ({})",
            index, total, page.name, page.slug
        )?;
        self.rule('-')
    }

    pub fn stage_start(&mut self, stage: Stage) -> io::Result<()> {
        match stage {
            Stage::Scrape => writeln!(self.out, "  🔍 Scraping posts...")?,
            Stage::Feed => writeln!(self.out, "  📡 Generating RSS feed...")?,
        }
        // Children inherit stdout; keep our lines ahead of theirs.
        self.out.flush()
    }

    pub fn stage_failed(&mut self, stage: Stage, page: &Page) -> io::Result<()> {
        match stage {
            Stage::Scrape => writeln!(self.out, "  ❌ Failed to scrape {}", page.slug),
            Stage::Feed => writeln!(self.out, "  ❌ Failed to generate RSS for {}", page.slug),
        }
    }

    pub fn page_completed(&mut self, page: &Page) -> io::Result<()> {
        writeln!(self.out, "  ✅ Completed: {}", page.slug)
    }

    pub fn page_end(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        self.rule('=')?;
        writeln!(self.out, "📊 SUMMARY")?;
        self.rule('=')?;
        writeln!(
            self.out,
            "✅ Success: {}/{} pages",
            summary.succeeded, summary.total
        )?;
        if !summary.failures.is_empty() {
            writeln!(self.out, "❌ Failed: {}", summary.failed_slugs().join(", "))?;
        }
        self.rule('=')?;
        self.out.flush()
    }

    /// Listing used by `--list`.
    pub fn page_list(&mut self, pages: &[Page]) -> io::Result<()> {
        if pages.is_empty() {
            writeln!(self.out, "No pages configured.")?;
            return self.out.flush();
        }
        writeln!(self.out, "{:<24} {:<32} {}", "SLUG", "NAME", "URL")?;
        for p in pages {
            writeln!(self.out, "{:<24} {:<32} {}", p.slug, p.name, p.url)?;
        }
        self.out.flush()
    }
}
