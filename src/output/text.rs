//! Text output formatter for human-readable display

use crate::domain::{Dependency, ReleaseRelatedUrl, Update};
use crate::output::{artifact_rows, OutputFormatter, PullRequestRefs};
use crate::resolver::ArtifactUrls;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn missing(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_release_urls(
        &self,
        update: &Update,
        urls: &[ReleaseRelatedUrl],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if urls.is_empty() {
            writeln!(
                writer,
                "{}",
                self.missing(&format!("No release-related URLs for {}", update))
            )?;
            return Ok(());
        }

        writeln!(writer, "{}", self.heading(&update.to_string()))?;
        let width = urls.iter().map(|u| u.label().len()).max().unwrap_or(0);
        for url in urls {
            let padded = format!("{:<width$}", url.label(), width = width);
            writeln!(writer, "  {}  {}", self.label(&padded), url.url())?;
        }
        Ok(())
    }

    fn format_refs(&self, refs: &PullRequestRefs, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}  {}", self.label("head  "), refs.head)?;
        writeln!(writer, "{}  {}", self.label("create"), refs.create)?;
        Ok(())
    }

    fn format_artifact_urls(
        &self,
        dependencies: &[Dependency],
        urls: &ArtifactUrls,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let rows = artifact_rows(dependencies, urls);
        let keys: Vec<String> = rows.iter().map(|row| row.coordinates.join(", ")).collect();
        let width = keys.iter().map(|k| k.len()).max().unwrap_or(0);

        for (row, key) in rows.iter().zip(&keys) {
            let padded = format!("{:<width$}", key, width = width);
            match row.url {
                Some(url) => writeln!(writer, "{}  {}", self.heading(&padded), url)?,
                None => writeln!(
                    writer,
                    "{}  {}",
                    self.heading(&padded),
                    self.missing("(no URL found)")
                )?,
            }
        }

        let found = rows.iter().filter(|row| row.url.is_some()).count();
        writeln!(writer)?;
        writeln!(writer, "Resolved {} of {} artifact(s)", found, rows.len())?;
        Ok(())
    }
}
