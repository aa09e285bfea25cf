//! Core domain models for relinfo
//!
//! This module contains the value types shared by the resolver and the URL builders:
//! - Dependency coordinates
//! - Version updates
//! - Repository and branch references
//! - VCS provider types
//! - Release-related URLs

mod dependency;
mod release_url;
mod repo;
mod update;
mod vcs_type;

pub use dependency::{ArtifactId, Dependency};
pub use release_url::ReleaseRelatedUrl;
pub use repo::{Branch, Repo};
pub use update::Update;
pub use vcs_type::VcsType;
