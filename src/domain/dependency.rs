//! Dependency coordinate structures

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Artifact identifier, optionally carrying a cross-version qualified name
/// (e.g. `cats-core` published as `cats-core_2.13`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId {
    /// Plain artifact name
    pub name: String,
    /// Name as published in the repository, when it differs from `name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maybe_cross_name: Option<String>,
}

impl ArtifactId {
    /// Creates an artifact id without a cross-version name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            maybe_cross_name: None,
        }
    }

    /// Creates an artifact id with a cross-version name
    pub fn cross(name: impl Into<String>, cross_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            maybe_cross_name: Some(cross_name.into()),
        }
    }

    /// Returns the name under which the artifact is published
    pub fn published_name(&self) -> &str {
        self.maybe_cross_name.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.published_name())
    }
}

/// A library coordinate: group, artifact and resolved version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Group identifier (e.g., "org.typelevel")
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: ArtifactId,
    /// Resolved version
    pub version: String,
    /// sbt binary version, set for sbt plugins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbt_version: Option<String>,
    /// Scala binary version, set for sbt plugins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scala_version: Option<String>,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: ArtifactId,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id,
            version: version.into(),
            sbt_version: None,
            scala_version: None,
        }
    }

    /// Sets the sbt binary version (builder pattern)
    pub fn with_sbt_version(mut self, sbt_version: impl Into<String>) -> Self {
        self.sbt_version = Some(sbt_version.into());
        self
    }

    /// Sets the Scala binary version (builder pattern)
    pub fn with_scala_version(mut self, scala_version: impl Into<String>) -> Self {
        self.scala_version = Some(scala_version.into());
        self
    }

    /// Returns the artifact name as laid out in a Maven repository
    ///
    /// sbt plugins are published with both binary versions appended,
    /// e.g. `sbt-scalafmt_2.12_1.0`.
    pub fn qualified_artifact_name(&self) -> String {
        let base = self.artifact_id.published_name();
        match (&self.scala_version, &self.sbt_version) {
            (Some(scala), Some(sbt)) => format!("{}_{}_{}", base, scala, sbt),
            _ => base.to_string(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id,
            self.artifact_id.published_name(),
            self.version
        )
    }
}

impl FromStr for Dependency {
    type Err = ConfigError;

    /// Parses `group:artifact:version`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Dependency::new(*group, ArtifactId::new(*artifact), *version))
            }
            _ => Err(ConfigError::InvalidCoordinates {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats_core() -> Dependency {
        Dependency::new(
            "org.typelevel",
            ArtifactId::cross("cats-core", "cats-core_2.13"),
            "2.10.0",
        )
    }

    #[test]
    fn test_published_name_prefers_cross_name() {
        assert_eq!(cats_core().artifact_id.published_name(), "cats-core_2.13");
        assert_eq!(ArtifactId::new("guava").published_name(), "guava");
    }

    #[test]
    fn test_qualified_artifact_name_plain() {
        assert_eq!(cats_core().qualified_artifact_name(), "cats-core_2.13");
    }

    #[test]
    fn test_qualified_artifact_name_sbt_plugin() {
        let plugin = Dependency::new("org.scalameta", ArtifactId::new("sbt-scalafmt"), "2.5.2")
            .with_scala_version("2.12")
            .with_sbt_version("1.0");
        assert_eq!(plugin.qualified_artifact_name(), "sbt-scalafmt_2.12_1.0");
    }

    #[test]
    fn test_qualified_artifact_name_needs_both_qualifiers() {
        let dep = Dependency::new("org.scalameta", ArtifactId::new("sbt-scalafmt"), "2.5.2")
            .with_sbt_version("1.0");
        assert_eq!(dep.qualified_artifact_name(), "sbt-scalafmt");
    }

    #[test]
    fn test_dependency_display() {
        assert_eq!(cats_core().to_string(), "org.typelevel:cats-core_2.13:2.10.0");
    }

    #[test]
    fn test_dependency_from_str() {
        let dep: Dependency = "com.google.guava:guava:33.0.0-jre".parse().unwrap();
        assert_eq!(dep.group_id, "com.google.guava");
        assert_eq!(dep.artifact_id.name, "guava");
        assert_eq!(dep.version, "33.0.0-jre");
        assert!(dep.sbt_version.is_none());
    }

    #[test]
    fn test_dependency_from_str_invalid() {
        assert!("guava".parse::<Dependency>().is_err());
        assert!("a:b".parse::<Dependency>().is_err());
        assert!("a:b:c:d".parse::<Dependency>().is_err());
        assert!("a::1.0".parse::<Dependency>().is_err());
    }

    #[test]
    fn test_serde_dependency() {
        let dep = cats_core().with_scala_version("2.13");
        let json = serde_json::to_string(&dep).unwrap();
        assert!(!json.contains("sbt_version"));
        let parsed: Dependency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dep);
    }
}
