//! Maven repository adapter
//!
//! Fetches project descriptors using the standard repository layout:
//! `{repository}/{group path}/{artifact}/{version}/{artifact}-{version}.pom`
//!
//! Repositories are tried in configured order; the first one that serves the
//! descriptor wins.

use crate::error::ResolutionError;
use crate::registry::{
    parse_pom, HttpClient, MetadataResolver, ProjectDescriptor, ResolutionRequest,
};
use async_trait::async_trait;
use tracing::trace;
use url::Url;

/// Maven Central base URL
pub const MAVEN_CENTRAL_URL: &str = "https://repo1.maven.org/maven2/";

/// Maven repository adapter
pub struct MavenRepositoryResolver {
    client: HttpClient,
    repositories: Vec<Url>,
}

impl MavenRepositoryResolver {
    /// Create a new adapter resolving against the given repositories
    pub fn new(client: HttpClient, repositories: Vec<Url>) -> Self {
        Self {
            client,
            repositories,
        }
    }

    /// Build the descriptor URL for a request in a repository
    fn build_url(repository: &Url, request: &ResolutionRequest) -> String {
        format!(
            "{}/{}/{}/{}/{}-{}.{}",
            repository.as_str().trim_end_matches('/'),
            request.group_id.replace('.', "/"),
            request.artifact_name,
            request.version,
            request.artifact_name,
            request.version,
            request.artifact_type.extension()
        )
    }
}

#[async_trait]
impl MetadataResolver for MavenRepositoryResolver {
    async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<ProjectDescriptor, ResolutionError> {
        let coordinates = request.coordinates();
        let mut last_error = None;

        for repository in &self.repositories {
            let url = Self::build_url(repository, request);
            match self
                .client
                .get_text(&url, &coordinates, repository.as_str())
                .await
            {
                Ok(body) => {
                    return parse_pom(&body).map_err(|e| {
                        ResolutionError::invalid_descriptor(coordinates.as_str(), e.to_string())
                    });
                }
                Err(e) => {
                    trace!(
                        %coordinates,
                        %repository,
                        error = %e,
                        "descriptor lookup failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ResolutionError::NoRepositories))
    }
}
