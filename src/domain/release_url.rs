//! Release-related URLs offered to reviewers of an update

use serde::Serialize;
use std::fmt;
use url::Url;

/// A URL that helps a human inspect what changed in an update
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "kebab-case")]
pub enum ReleaseRelatedUrl {
    /// Comparison between the old and new tag
    VersionDiff(Url),
    /// A GitHub release page
    #[serde(rename = "github-release-notes")]
    GitHubReleaseNotes(Url),
    /// A changelog file in the repository
    CustomChangelog(Url),
    /// A release notes file in the repository
    CustomReleaseNotes(Url),
}

impl ReleaseRelatedUrl {
    /// Returns the wrapped URL
    pub fn url(&self) -> &Url {
        match self {
            ReleaseRelatedUrl::VersionDiff(url)
            | ReleaseRelatedUrl::GitHubReleaseNotes(url)
            | ReleaseRelatedUrl::CustomChangelog(url)
            | ReleaseRelatedUrl::CustomReleaseNotes(url) => url,
        }
    }

    /// Returns the label shown next to the URL
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseRelatedUrl::VersionDiff(_) => "Version Diff",
            ReleaseRelatedUrl::GitHubReleaseNotes(_) => "GitHub Release Notes",
            ReleaseRelatedUrl::CustomChangelog(_) => "Changelog",
            ReleaseRelatedUrl::CustomReleaseNotes(_) => "Release Notes",
        }
    }
}

impl fmt::Display for ReleaseRelatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.url())
    }
}
