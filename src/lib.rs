//! relinfo - Release metadata for dependency updates
//!
//! This library provides the building blocks an update bot needs around a
//! single dependency update:
//! - Pull request head references per VCS provider
//! - Candidate release notes, changelog and version diff URLs
//! - Project URL resolution from Maven POMs

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolver;
pub mod vcs;
