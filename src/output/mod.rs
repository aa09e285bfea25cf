//! Output formatting for command results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{Dependency, ReleaseRelatedUrl, Update};
use crate::resolver::ArtifactUrls;
use serde::Serialize;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Self {
            format,
            color: true,
        }
    }

    /// Disable colored output
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}

/// Pull request references for one fork branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRefs {
    /// Reference used to search for existing pull requests
    pub head: String,
    /// Reference used when opening a pull request
    pub create: String,
}

/// One resolved artifact as shown to the user
///
/// Results are keyed by artifact name, so dependencies sharing a name are
/// grouped into one row carrying all their coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArtifactRow<'a> {
    pub artifact: &'a str,
    pub coordinates: Vec<String>,
    pub url: Option<&'a str>,
}

/// Group dependencies into rows by artifact name, in order of first appearance
pub(crate) fn artifact_rows<'a>(
    dependencies: &'a [Dependency],
    urls: &'a ArtifactUrls,
) -> Vec<ArtifactRow<'a>> {
    let mut rows: Vec<ArtifactRow<'a>> = Vec::new();
    for dependency in dependencies {
        let name = dependency.artifact_id.name.as_str();
        match rows.iter_mut().find(|row| row.artifact == name) {
            Some(row) => row.coordinates.push(dependency.to_string()),
            None => rows.push(ArtifactRow {
                artifact: name,
                coordinates: vec![dependency.to_string()],
                url: urls.get(name).map(String::as_str),
            }),
        }
    }
    rows
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the release-related URLs of an update
    fn format_release_urls(
        &self,
        update: &Update,
        urls: &[ReleaseRelatedUrl],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write pull request references
    fn format_refs(&self, refs: &PullRequestRefs, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Format and write resolved artifact URLs, one entry per artifact name in
    /// the order of `dependencies`
    fn format_artifact_urls(
        &self,
        dependencies: &[Dependency],
        urls: &ArtifactUrls,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
