//! Artifact project URL resolution
//!
//! Looks up a dependency's project descriptor and picks the most useful link
//! to its source: the declared SCM URL when it is browsable, otherwise the
//! homepage. Resolution is best-effort. Every failure is logged at debug
//! level and reported as an absent URL.

use crate::config::ResolverSettings;
use crate::domain::Dependency;
use crate::error::{AppError, ConfigError};
use crate::registry::{
    HttpClient, MavenRepositoryResolver, MetadataResolver, ProjectDescriptor, ResolutionRequest,
};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Artifact name to project URL
pub type ArtifactUrls = HashMap<String, String>;

/// Default number of concurrent descriptor lookups in a batch
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Maximum number of parent descriptors followed for one dependency
const MAX_PARENT_DEPTH: usize = 3;

/// Resolves project URLs for dependencies through a metadata resolver
pub struct ArtifactResolver {
    resolver: Arc<dyn MetadataResolver>,
    concurrency: usize,
    follow_parent: bool,
}

impl ArtifactResolver {
    /// Create a resolver backed by the given metadata service
    pub fn new(resolver: Arc<dyn MetadataResolver>) -> Self {
        Self {
            resolver,
            concurrency: DEFAULT_CONCURRENCY,
            follow_parent: false,
        }
    }

    /// Create a resolver reading POMs from the configured Maven repositories
    pub fn from_settings(settings: &ResolverSettings) -> Result<Self, AppError> {
        if settings.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency.into());
        }
        let client = HttpClient::new()?;
        let maven = MavenRepositoryResolver::new(client, settings.repositories.clone());
        debug!(
            repositories = settings.repositories.len(),
            concurrency = settings.concurrency,
            follow_parent = settings.follow_parent,
            "configured artifact resolver"
        );
        Ok(Self::new(Arc::new(maven))
            .with_concurrency(settings.concurrency)
            .with_follow_parent(settings.follow_parent))
    }

    /// Set the number of concurrent lookups in `resolve_urls` (at least one)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fall back to parent descriptors when a descriptor has no usable URL
    pub fn with_follow_parent(mut self, follow_parent: bool) -> Self {
        self.follow_parent = follow_parent;
        self
    }

    /// Resolve the project URL of a single dependency
    pub async fn resolve_url(&self, dependency: &Dependency) -> Option<String> {
        let mut request = ResolutionRequest::for_dependency(dependency);
        let mut depth = 0;

        loop {
            let descriptor = match self.resolver.resolve(&request).await {
                Ok(descriptor) => descriptor,
                Err(error) if error.is_not_found() => {
                    debug!(coordinates = %request.coordinates(), "no project descriptor published");
                    return None;
                }
                Err(error) => {
                    debug!(
                        coordinates = %request.coordinates(),
                        %error,
                        "failed to resolve project descriptor"
                    );
                    return None;
                }
            };

            if let Some(url) = select_url(&descriptor) {
                return Some(url);
            }

            match descriptor.parent {
                Some(parent) if self.follow_parent && depth < MAX_PARENT_DEPTH => {
                    depth += 1;
                    request = ResolutionRequest::for_parent(&parent);
                }
                _ => return None,
            }
        }
    }

    /// Resolve the project URLs of a batch of dependencies
    ///
    /// Dependencies without a URL are left out. When several dependencies share
    /// an artifact name, the one appearing last in `dependencies` wins.
    pub async fn resolve_urls(&self, dependencies: &[Dependency]) -> ArtifactUrls {
        stream::iter(dependencies)
            .map(|dependency| async move {
                (
                    dependency.artifact_id.name.clone(),
                    self.resolve_url(dependency).await,
                )
            })
            .buffered(self.concurrency)
            .fold(ArtifactUrls::new(), |mut urls, (name, url)| async move {
                if let Some(url) = url {
                    urls.insert(name, url);
                }
                urls
            })
            .await
    }
}

/// Pick the project URL from a descriptor
///
/// SSH-style SCM addresses (`git@host:owner/repo`) are not browsable and are skipped.
pub fn select_url(descriptor: &ProjectDescriptor) -> Option<String> {
    let scm_url = descriptor
        .scm_url()
        .map(str::trim)
        .filter(|url| !url.is_empty() && !url.starts_with("git@"));

    scm_url
        .or_else(|| {
            descriptor
                .homepage
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
        })
        .map(str::to_string)
}
