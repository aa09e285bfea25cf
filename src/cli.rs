//! CLI argument parsing module for relinfo

use crate::domain::{Dependency, VcsType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// Parse a VCS type name (github, gitlab, bitbucket, bitbucket-server, azure-repos)
fn parse_vcs_type(s: &str) -> Result<VcsType, String> {
    s.parse().map_err(|e: crate::error::ConfigError| e.to_string())
}

/// Parse an absolute URL
fn parse_url(s: &str) -> Result<Url, String> {
    crate::config::parse_url(s).map_err(|e| e.to_string())
}

/// Parse `group:artifact:version` coordinates
fn parse_dependency(s: &str) -> Result<Dependency, String> {
    s.parse().map_err(|e: crate::error::ConfigError| e.to_string())
}

/// Release metadata for dependency updates
#[derive(Parser, Debug, Clone)]
#[command(
    name = "relinfo",
    version,
    about = "Release metadata for dependency updates"
)]
pub struct CliArgs {
    /// Configuration file (default: ./relinfo.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug logging to stderr)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored text output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List release notes, changelog and version diff URLs for an update
    Urls(UrlsArgs),
    /// Print pull request head references for a fork branch
    Refs(RefsArgs),
    /// Resolve project URLs of artifacts from their POMs
    Resolve(ResolveArgs),
}

/// VCS provider options shared by the URL commands
#[derive(Args, Debug, Clone, Default)]
pub struct VcsArgs {
    /// VCS provider type (overrides the config file)
    #[arg(long, value_parser = parse_vcs_type)]
    pub vcs_type: Option<VcsType>,

    /// VCS provider base URL (overrides the config file)
    #[arg(long, value_parser = parse_url)]
    pub vcs_uri: Option<Url>,
}

/// Arguments of `relinfo urls`
#[derive(Args, Debug, Clone)]
pub struct UrlsArgs {
    /// Repository URL (e.g., https://github.com/typelevel/cats)
    #[arg(long, value_parser = parse_url)]
    pub repo_url: Url,

    /// Version currently in use
    #[arg(long)]
    pub from: String,

    /// Version to update to
    #[arg(long)]
    pub to: String,

    /// Only print version diff URLs
    #[arg(long)]
    pub diff_only: bool,

    #[command(flatten)]
    pub vcs: VcsArgs,
}

/// Arguments of `relinfo refs`
#[derive(Args, Debug, Clone)]
pub struct RefsArgs {
    /// Fork owner
    #[arg(long)]
    pub owner: String,

    /// Fork repository name
    #[arg(long)]
    pub repo: String,

    /// Branch holding the update
    #[arg(long)]
    pub branch: String,

    #[command(flatten)]
    pub vcs: VcsArgs,
}

/// Arguments of `relinfo resolve`
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Dependencies as group:artifact:version
    #[arg(required = true, value_parser = parse_dependency)]
    pub dependencies: Vec<Dependency>,

    /// Scala binary version for sbt plugins (e.g., 2.12)
    #[arg(long, requires = "sbt_version")]
    pub scala_version: Option<String>,

    /// sbt binary version for sbt plugins (e.g., 1.0)
    #[arg(long, requires = "scala_version")]
    pub sbt_version: Option<String>,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,
}

impl ResolveArgs {
    /// Dependencies with the sbt plugin qualifiers applied
    pub fn qualified_dependencies(&self) -> Vec<Dependency> {
        self.dependencies
            .iter()
            .cloned()
            .map(|dep| match (&self.scala_version, &self.sbt_version) {
                (Some(scala), Some(sbt)) => dep.with_scala_version(scala).with_sbt_version(sbt),
                _ => dep,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_args() {
        let args = CliArgs::parse_from([
            "relinfo",
            "urls",
            "--repo-url",
            "https://github.com/typelevel/cats",
            "--from",
            "2.9.0",
            "--to",
            "2.10.0",
        ]);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(args.config.is_none());
        match args.command {
            Command::Urls(urls) => {
                assert_eq!(urls.repo_url.as_str(), "https://github.com/typelevel/cats");
                assert_eq!(urls.from, "2.9.0");
                assert_eq!(urls.to, "2.10.0");
                assert!(!urls.diff_only);
                assert!(urls.vcs.vcs_type.is_none());
                assert!(urls.vcs.vcs_uri.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_urls_args_with_vcs_overrides() {
        let args = CliArgs::parse_from([
            "relinfo",
            "urls",
            "--repo-url",
            "https://git.example.com/o/p",
            "--from",
            "1.0",
            "--to",
            "2.0",
            "--vcs-type",
            "gitlab",
            "--vcs-uri",
            "https://git.example.com",
            "--json",
        ]);
        assert!(args.json);
        match args.command {
            Command::Urls(urls) => {
                assert_eq!(urls.vcs.vcs_type, Some(VcsType::GitLab));
                assert_eq!(
                    urls.vcs.vcs_uri.unwrap().host_str(),
                    Some("git.example.com")
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_vcs_type_rejected() {
        let result = CliArgs::try_parse_from([
            "relinfo", "refs", "--owner", "me", "--repo", "proj", "--branch", "b",
            "--vcs-type", "gitea",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_repo_url_rejected() {
        let result = CliArgs::try_parse_from([
            "relinfo", "urls", "--repo-url", "github.com/o/p", "--from", "1", "--to", "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_refs_args() {
        let args = CliArgs::parse_from([
            "relinfo", "refs", "--owner", "me", "--repo", "proj", "--branch", "update/foo",
        ]);
        match args.command {
            Command::Refs(refs) => {
                assert_eq!(refs.owner, "me");
                assert_eq!(refs.repo, "proj");
                assert_eq!(refs.branch, "update/foo");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_args() {
        let args = CliArgs::parse_from([
            "relinfo",
            "resolve",
            "org.typelevel:cats-core_2.13:2.10.0",
            "com.google.guava:guava:33.0.0-jre",
            "--quiet",
        ]);
        match args.command {
            Command::Resolve(resolve) => {
                assert_eq!(resolve.dependencies.len(), 2);
                assert!(resolve.quiet);
                assert_eq!(resolve.dependencies[1].artifact_id.name, "guava");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_requires_dependencies() {
        assert!(CliArgs::try_parse_from(["relinfo", "resolve"]).is_err());
    }

    #[test]
    fn test_resolve_invalid_coordinates_rejected() {
        assert!(CliArgs::try_parse_from(["relinfo", "resolve", "guava"]).is_err());
    }

    #[test]
    fn test_resolve_sbt_qualifiers() {
        let args = CliArgs::parse_from([
            "relinfo",
            "resolve",
            "org.scalameta:sbt-scalafmt:2.5.2",
            "--scala-version",
            "2.12",
            "--sbt-version",
            "1.0",
        ]);
        match args.command {
            Command::Resolve(resolve) => {
                let deps = resolve.qualified_dependencies();
                assert_eq!(deps[0].qualified_artifact_name(), "sbt-scalafmt_2.12_1.0");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_sbt_qualifiers_come_in_pairs() {
        let result = CliArgs::try_parse_from([
            "relinfo",
            "resolve",
            "org.scalameta:sbt-scalafmt:2.5.2",
            "--scala-version",
            "2.12",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "relinfo",
            "refs",
            "--owner",
            "me",
            "--repo",
            "proj",
            "--branch",
            "b",
            "--verbose",
            "--config",
            "/etc/relinfo.toml",
        ]);
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("/etc/relinfo.toml")));
        assert!(!args.no_color);
    }

    #[test]
    fn test_no_color_flag() {
        let args = CliArgs::parse_from([
            "relinfo",
            "--no-color",
            "refs",
            "--owner",
            "me",
            "--repo",
            "proj",
            "--branch",
            "b",
        ]);
        assert!(args.no_color);
    }
}
