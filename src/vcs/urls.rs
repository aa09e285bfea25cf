//! Candidate URLs for inspecting an update
//!
//! Nothing here touches the network: the URLs follow each provider's web UI
//! conventions and may not exist. Checking them is up to the caller.

use crate::domain::{ReleaseRelatedUrl, Update, VcsType};
use url::Url;

/// Base names of changelog files probed in a repository
pub const CHANGELOG_FILE_NAMES: [&str; 4] = ["CHANGELOG", "Changelog", "changelog", "CHANGES"];

/// Base names of release notes files probed in a repository
pub const RELEASE_NOTES_FILE_NAMES: [&str; 4] =
    ["ReleaseNotes", "RELEASES", "Releases", "releases"];

/// Extensions combined with every probed base name
pub const FILE_EXTENSIONS: [&str; 3] = ["md", "markdown", "rst"];

/// Tag spellings commonly used for a released version, most likely first
pub fn possible_tags(version: &str) -> Vec<String> {
    vec![
        format!("v{}", version),
        version.to_string(),
        format!("release-{}", version),
    ]
}

/// Every `base.extension` combination, grouped by base name
pub fn cross_product(bases: &[&str], extensions: &[&str]) -> Vec<String> {
    bases
        .iter()
        .flat_map(|base| {
            extensions
                .iter()
                .map(move |extension| format!("{}.{}", base, extension))
        })
        .collect()
}

/// Determine which provider hosts `repo_url`
///
/// A repository on the configured provider's host belongs to that provider.
/// Any other host is only recognised when it is a provider's public instance.
pub fn extract_repo_vcs_type(
    vcs_type: VcsType,
    vcs_uri: &Url,
    repo_url: &Url,
) -> Option<VcsType> {
    let host = repo_url.host_str()?;
    if vcs_uri.host_str() == Some(host) {
        Some(vcs_type)
    } else {
        VcsType::from_public_web_host(host)
    }
}

/// Version comparison URLs for every candidate tag pair
pub fn possible_compare_urls(
    vcs_type: VcsType,
    vcs_uri: &Url,
    repo_url: &Url,
    update: &Update,
) -> Vec<ReleaseRelatedUrl> {
    match extract_repo_vcs_type(vcs_type, vcs_uri, repo_url) {
        Some(repo_vcs_type) => compare_urls(repo_vcs_type, repo_url, update),
        None => Vec::new(),
    }
}

/// All release-related URLs for an update, in display order:
/// GitHub release pages, release notes files, changelog files, version diffs
pub fn possible_release_related_urls(
    vcs_type: VcsType,
    vcs_uri: &Url,
    repo_url: &Url,
    update: &Update,
) -> Vec<ReleaseRelatedUrl> {
    let Some(repo_vcs_type) = extract_repo_vcs_type(vcs_type, vcs_uri, repo_url) else {
        return Vec::new();
    };

    let github_release_notes: Vec<ReleaseRelatedUrl> = match repo_vcs_type {
        VcsType::GitHub => possible_tags(&update.next_version)
            .iter()
            .map(|tag| {
                ReleaseRelatedUrl::GitHubReleaseNotes(with_path(
                    repo_url,
                    &["releases", "tag", tag.as_str()],
                ))
            })
            .collect(),
        VcsType::GitLab
        | VcsType::Bitbucket
        | VcsType::BitbucketServer
        | VcsType::AzureRepos => Vec::new(),
    };

    let release_notes = cross_product(&RELEASE_NOTES_FILE_NAMES, &FILE_EXTENSIONS)
        .iter()
        .map(|file| {
            ReleaseRelatedUrl::CustomReleaseNotes(file_url(repo_vcs_type, repo_url, file))
        })
        .collect::<Vec<_>>();

    let changelogs = cross_product(&CHANGELOG_FILE_NAMES, &FILE_EXTENSIONS)
        .iter()
        .map(|file| {
            ReleaseRelatedUrl::CustomChangelog(file_url(repo_vcs_type, repo_url, file))
        })
        .collect::<Vec<_>>();

    github_release_notes
        .into_iter()
        .chain(release_notes)
        .chain(changelogs)
        .chain(compare_urls(repo_vcs_type, repo_url, update))
        .collect()
}

fn compare_urls(
    repo_vcs_type: VcsType,
    repo_url: &Url,
    update: &Update,
) -> Vec<ReleaseRelatedUrl> {
    let from_tags = possible_tags(&update.current_version);
    let to_tags = possible_tags(&update.next_version);

    from_tags
        .iter()
        .zip(to_tags.iter())
        .map(|(from, to)| {
            let url = match repo_vcs_type {
                VcsType::GitHub | VcsType::GitLab => {
                    let range = format!("{}...{}", from, to);
                    with_path(repo_url, &["compare", range.as_str()])
                }
                VcsType::Bitbucket | VcsType::BitbucketServer => {
                    let range = format!("{}..{}", to, from);
                    let mut url = with_path(repo_url, &["compare", range.as_str()]);
                    url.set_fragment(Some("diff"));
                    url
                }
                VcsType::AzureRepos => {
                    let mut url = with_path(repo_url, &["branchCompare"]);
                    url.query_pairs_mut()
                        .append_pair("baseVersion", from)
                        .append_pair("targetVersion", to);
                    url
                }
            };
            ReleaseRelatedUrl::VersionDiff(url)
        })
        .collect()
}

/// URL for browsing a file at the repository root
fn file_url(repo_vcs_type: VcsType, repo_url: &Url, file: &str) -> Url {
    match repo_vcs_type {
        VcsType::GitHub | VcsType::GitLab => with_path(repo_url, &["blob", "master", file]),
        VcsType::Bitbucket => with_path(repo_url, &["master", file]),
        VcsType::BitbucketServer => with_path(repo_url, &["browse", file]),
        VcsType::AzureRepos => {
            let mut url = repo_url.clone();
            url.query_pairs_mut().append_pair("path", file);
            url
        }
    }
}

/// Append path segments to a repository URL, ignoring a trailing slash
fn with_path(repo_url: &Url, segments: &[&str]) -> Url {
    let mut url = repo_url.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
