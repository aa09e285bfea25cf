//! Pull request branch references
//!
//! GitHub addresses a fork's branch with an owner prefix; the other providers
//! scope pull request lookups to the fork already and take the bare branch name.

use crate::domain::{Branch, Repo, VcsType};

/// Head reference used to search for an existing pull request
pub fn pull_request_head_for(vcs_type: VcsType, fork: &Repo, branch: &Branch) -> String {
    match vcs_type {
        VcsType::GitHub => format!("{}/{}:{}", fork.owner, fork.name, branch.name),
        VcsType::GitLab
        | VcsType::Bitbucket
        | VcsType::BitbucketServer
        | VcsType::AzureRepos => branch.name.clone(),
    }
}

/// Head reference used in the body of a create-pull-request call
pub fn pull_request_create_ref(vcs_type: VcsType, fork: &Repo, branch: &Branch) -> String {
    match vcs_type {
        VcsType::GitHub => format!("{}:{}", fork.owner, branch.name),
        VcsType::GitLab
        | VcsType::Bitbucket
        | VcsType::BitbucketServer
        | VcsType::AzureRepos => branch.name.clone(),
    }
}
