//! JSON output formatter for machine processing

use crate::domain::{Dependency, ReleaseRelatedUrl, Update};
use crate::output::{artifact_rows, OutputFormatter, PullRequestRefs};
use crate::resolver::ArtifactUrls;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }

    fn write_json<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// JSON representation of release-related URLs
#[derive(Serialize)]
struct JsonReleaseUrls<'a> {
    from: &'a str,
    to: &'a str,
    urls: Vec<JsonReleaseUrl<'a>>,
}

#[derive(Serialize)]
struct JsonReleaseUrl<'a> {
    #[serde(flatten)]
    url: &'a ReleaseRelatedUrl,
    label: &'static str,
}

/// JSON representation of resolved artifacts
#[derive(Serialize)]
struct JsonArtifacts<'a> {
    artifacts: Vec<JsonArtifact<'a>>,
}

#[derive(Serialize)]
struct JsonArtifact<'a> {
    artifact: &'a str,
    coordinates: Vec<String>,
    url: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format_release_urls(
        &self,
        update: &Update,
        urls: &[ReleaseRelatedUrl],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonReleaseUrls {
            from: &update.current_version,
            to: &update.next_version,
            urls: urls
                .iter()
                .map(|url| JsonReleaseUrl {
                    url,
                    label: url.label(),
                })
                .collect(),
        };
        self.write_json(&output, writer)
    }

    fn format_refs(&self, refs: &PullRequestRefs, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_json(refs, writer)
    }

    fn format_artifact_urls(
        &self,
        dependencies: &[Dependency],
        urls: &ArtifactUrls,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonArtifacts {
            artifacts: artifact_rows(dependencies, urls)
                .into_iter()
                .map(|row| JsonArtifact {
                    artifact: row.artifact,
                    coordinates: row.coordinates,
                    url: row.url,
                })
                .collect(),
        };
        self.write_json(&output, writer)
    }
}
