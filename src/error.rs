//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ResolutionError: Issues fetching or reading project descriptors
//! - ConfigError: Issues with configuration files and CLI values
//!
//! Neither ever escapes the resolver or the URL builders; they surface only at
//! the metadata client seam and in the command-line shell.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Project descriptor resolution errors
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to project descriptor resolution
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Descriptor not present in the repository
    #[error("'{coordinates}' not found in {repository}")]
    NotFound {
        coordinates: String,
        repository: String,
    },

    /// Network request failed
    #[error("failed to fetch '{coordinates}' from {repository}: {message}")]
    NetworkError {
        coordinates: String,
        repository: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {repository}")]
    RateLimitExceeded { repository: String },

    /// Timeout
    #[error("timeout while fetching '{coordinates}' from {repository}")]
    Timeout {
        coordinates: String,
        repository: String,
    },

    /// Descriptor could not be parsed
    #[error("invalid project descriptor for '{coordinates}': {message}")]
    InvalidDescriptor { coordinates: String, message: String },

    /// No repository configured to resolve from
    #[error("no repositories configured")]
    NoRepositories,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Invalid URL value
    #[error("invalid URL '{value}': {message}")]
    InvalidUrl { value: String, message: String },

    /// Unknown VCS type
    #[error(
        "invalid VCS type '{value}': expected 'github', 'gitlab', 'bitbucket', 'bitbucket-server', or 'azure-repos'"
    )]
    InvalidVcsType { value: String },

    /// Malformed dependency coordinates
    #[error("invalid coordinates '{value}': expected format 'group:artifact:version'")]
    InvalidCoordinates { value: String },

    /// Concurrency must allow at least one request
    #[error("invalid concurrency: must be greater than zero")]
    InvalidConcurrency,
}

impl ResolutionError {
    /// Creates a new NotFound error
    pub fn not_found(coordinates: impl Into<String>, repository: impl Into<String>) -> Self {
        ResolutionError::NotFound {
            coordinates: coordinates.into(),
            repository: repository.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        coordinates: impl Into<String>,
        repository: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ResolutionError::NetworkError {
            coordinates: coordinates.into(),
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(repository: impl Into<String>) -> Self {
        ResolutionError::RateLimitExceeded {
            repository: repository.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(coordinates: impl Into<String>, repository: impl Into<String>) -> Self {
        ResolutionError::Timeout {
            coordinates: coordinates.into(),
            repository: repository.into(),
        }
    }

    /// Creates a new InvalidDescriptor error
    pub fn invalid_descriptor(coordinates: impl Into<String>, message: impl Into<String>) -> Self {
        ResolutionError::InvalidDescriptor {
            coordinates: coordinates.into(),
            message: message.into(),
        }
    }

    /// Returns true if the descriptor is simply absent from the repository
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolutionError::NotFound { .. })
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidUrl error
    pub fn invalid_url(value: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidUrl {
            value: value.into(),
            message: message.into(),
        }
    }
}
