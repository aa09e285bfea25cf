//! VCS provider definitions

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported VCS hosting providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsType {
    /// GitHub (github.com or GitHub Enterprise)
    #[serde(rename = "github")]
    GitHub,
    /// GitLab (gitlab.com or self-hosted)
    #[serde(rename = "gitlab")]
    GitLab,
    /// Bitbucket Cloud
    #[serde(rename = "bitbucket")]
    Bitbucket,
    /// Bitbucket Server / Data Center
    #[serde(rename = "bitbucket-server")]
    BitbucketServer,
    /// Azure DevOps Repos
    #[serde(rename = "azure-repos")]
    AzureRepos,
}

impl VcsType {
    /// Returns the configuration name for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsType::GitHub => "github",
            VcsType::GitLab => "gitlab",
            VcsType::Bitbucket => "bitbucket",
            VcsType::BitbucketServer => "bitbucket-server",
            VcsType::AzureRepos => "azure-repos",
        }
    }

    /// Returns the display name for this provider
    pub fn display_name(&self) -> &'static str {
        match self {
            VcsType::GitHub => "GitHub",
            VcsType::GitLab => "GitLab",
            VcsType::Bitbucket => "Bitbucket",
            VcsType::BitbucketServer => "Bitbucket Server",
            VcsType::AzureRepos => "Azure Repos",
        }
    }

    /// Returns the host of the provider's public web instance, if it has one
    pub fn public_web_host(&self) -> Option<&'static str> {
        match self {
            VcsType::GitHub => Some("github.com"),
            VcsType::GitLab => Some("gitlab.com"),
            VcsType::Bitbucket => Some("bitbucket.org"),
            VcsType::BitbucketServer => None,
            VcsType::AzureRepos => Some("dev.azure.com"),
        }
    }

    /// Infers the provider from the host of a public web instance
    pub fn from_public_web_host(host: &str) -> Option<VcsType> {
        Self::all()
            .iter()
            .copied()
            .find(|vcs_type| vcs_type.public_web_host() == Some(host))
    }

    /// Returns all supported providers
    pub fn all() -> &'static [VcsType] {
        &[
            VcsType::GitHub,
            VcsType::GitLab,
            VcsType::Bitbucket,
            VcsType::BitbucketServer,
            VcsType::AzureRepos,
        ]
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for VcsType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        VcsType::all()
            .iter()
            .copied()
            .find(|vcs_type| vcs_type.as_str() == normalized)
            .ok_or_else(|| ConfigError::InvalidVcsType {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for vcs_type in VcsType::all() {
            assert_eq!(vcs_type.as_str().parse::<VcsType>().unwrap(), *vcs_type);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("GitHub".parse::<VcsType>().unwrap(), VcsType::GitHub);
        assert_eq!(
            " Bitbucket-Server ".parse::<VcsType>().unwrap(),
            VcsType::BitbucketServer
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "gitea".parse::<VcsType>().unwrap_err();
        assert!(err.to_string().contains("gitea"));
    }

    #[test]
    fn test_public_web_hosts() {
        assert_eq!(
            VcsType::from_public_web_host("github.com"),
            Some(VcsType::GitHub)
        );
        assert_eq!(
            VcsType::from_public_web_host("gitlab.com"),
            Some(VcsType::GitLab)
        );
        assert_eq!(
            VcsType::from_public_web_host("bitbucket.org"),
            Some(VcsType::Bitbucket)
        );
        assert_eq!(
            VcsType::from_public_web_host("dev.azure.com"),
            Some(VcsType::AzureRepos)
        );
        assert_eq!(VcsType::from_public_web_host("git.example.com"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(VcsType::GitHub.to_string(), "GitHub");
        assert_eq!(VcsType::BitbucketServer.to_string(), "Bitbucket Server");
        assert_eq!(VcsType::AzureRepos.to_string(), "Azure Repos");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&VcsType::BitbucketServer).unwrap();
        assert_eq!(json, "\"bitbucket-server\"");
        let parsed: VcsType = serde_json::from_str("\"azure-repos\"").unwrap();
        assert_eq!(parsed, VcsType::AzureRepos);
    }
}
