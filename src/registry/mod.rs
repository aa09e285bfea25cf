//! Package-metadata resolution
//!
//! This module provides:
//! - The `MetadataResolver` seam the artifact resolver is built on
//! - HTTP client shared foundation with retry logic
//! - Maven repository adapter reading project descriptors (POMs)

mod client;
mod maven;
mod pom;

pub use client::HttpClient;
pub use maven::{MavenRepositoryResolver, MAVEN_CENTRAL_URL};
pub use pom::parse_pom;

use crate::domain::Dependency;
use crate::error::ResolutionError;
use async_trait::async_trait;
use std::fmt;

/// Kind of artifact a resolution request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactType {
    /// Project descriptor only (`.pom`)
    Pom,
}

impl ArtifactType {
    /// Returns the file extension for this artifact type
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactType::Pom => "pom",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A request for the metadata of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub group_id: String,
    /// Artifact name as published, including cross-version qualifiers
    pub artifact_name: String,
    pub version: String,
    /// Whether the dependency graph should be resolved as well
    pub transitive: bool,
    pub artifact_type: ArtifactType,
}

impl ResolutionRequest {
    /// Request for a dependency's own project descriptor
    pub fn for_dependency(dependency: &Dependency) -> Self {
        Self {
            group_id: dependency.group_id.clone(),
            artifact_name: dependency.qualified_artifact_name(),
            version: dependency.version.clone(),
            transitive: false,
            artifact_type: ArtifactType::Pom,
        }
    }

    /// Request for the descriptor of a declared parent project
    pub fn for_parent(parent: &ParentRef) -> Self {
        Self {
            group_id: parent.group_id.clone(),
            artifact_name: parent.artifact_id.clone(),
            version: parent.version.clone(),
            transitive: false,
            artifact_type: ArtifactType::Pom,
        }
    }

    /// Returns `group:artifact:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_name, self.version)
    }
}

/// Source-control section of a project descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scm {
    pub url: Option<String>,
}

/// Parent project declared by a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// The parts of a resolved project descriptor this crate reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub homepage: Option<String>,
    pub scm: Option<Scm>,
    pub parent: Option<ParentRef>,
}

impl ProjectDescriptor {
    /// Returns the declared SCM URL, if any
    pub fn scm_url(&self) -> Option<&str> {
        self.scm.as_ref().and_then(|scm| scm.url.as_deref())
    }
}

/// Trait for package-metadata resolution services
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// Resolve the project descriptor for the requested coordinates
    async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<ProjectDescriptor, ResolutionError>;
}
