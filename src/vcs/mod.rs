//! Provider-specific URL and reference conventions
//!
//! This module provides:
//! - Pull request head references for searching and creating pull requests
//! - Candidate release tags for a version
//! - Version diff, release notes and changelog URLs for an update
//!
//! Every function is pure. Provider dispatch is an exhaustive match over
//! `VcsType`, so a new provider has to be handled at each site.

mod refs;
mod urls;

pub use refs::{pull_request_create_ref, pull_request_head_for};
pub use urls::{
    cross_product, extract_repo_vcs_type, possible_compare_urls, possible_release_related_urls,
    possible_tags, CHANGELOG_FILE_NAMES, FILE_EXTENSIONS, RELEASE_NOTES_FILE_NAMES,
};

use crate::domain::{Branch, ReleaseRelatedUrl, Repo, Update, VcsType};
use url::Url;

/// URL builder bound to the configured VCS provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsUrlBuilder {
    vcs_type: VcsType,
    vcs_uri: Url,
}

impl VcsUrlBuilder {
    /// Create a builder for a provider reachable at `vcs_uri`
    pub fn new(vcs_type: VcsType, vcs_uri: Url) -> Self {
        Self { vcs_type, vcs_uri }
    }

    /// See [`pull_request_head_for`]
    pub fn pull_request_head_for(&self, fork: &Repo, branch: &Branch) -> String {
        pull_request_head_for(self.vcs_type, fork, branch)
    }

    /// See [`pull_request_create_ref`]
    pub fn pull_request_create_ref(&self, fork: &Repo, branch: &Branch) -> String {
        pull_request_create_ref(self.vcs_type, fork, branch)
    }

    /// See [`possible_compare_urls`]
    pub fn possible_compare_urls(&self, repo_url: &Url, update: &Update) -> Vec<ReleaseRelatedUrl> {
        possible_compare_urls(self.vcs_type, &self.vcs_uri, repo_url, update)
    }

    /// See [`possible_release_related_urls`]
    pub fn possible_release_related_urls(
        &self,
        repo_url: &Url,
        update: &Update,
    ) -> Vec<ReleaseRelatedUrl> {
        possible_release_related_urls(self.vcs_type, &self.vcs_uri, repo_url, update)
    }
}
