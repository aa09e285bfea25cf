//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Exponential backoff retry logic (max 3 retries)
//! - Rate limit error handling

use crate::error::ResolutionError;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("relinfo/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ResolutionError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ResolutionError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ResolutionError::network_error(
                    String::new(),
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get_with_context(
        &self,
        url: &str,
        coordinates: &str,
        repository: &str,
    ) -> Result<reqwest::Response, ResolutionError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            trace!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(ResolutionError::rate_limit_exceeded(repository));

                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(delay)).await;
                            delay *= 2;
                            continue;
                        }
                        break;
                    }

                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(ResolutionError::not_found(coordinates, repository));
                    }

                    if !response.status().is_success() {
                        return Err(ResolutionError::network_error(
                            coordinates,
                            repository,
                            format!("HTTP {}", response.status()),
                        ));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = Some(ResolutionError::timeout(coordinates, repository));
                    } else {
                        last_error = Some(ResolutionError::network_error(
                            coordinates,
                            repository,
                            e.to_string(),
                        ));
                    }

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResolutionError::network_error(coordinates, repository, "unknown error")
        }))
    }

    /// Perform a GET request and return the response body as text
    pub async fn get_text(
        &self,
        url: &str,
        coordinates: &str,
        repository: &str,
    ) -> Result<String, ResolutionError> {
        let response = self.get_with_context(url, coordinates, repository).await?;

        response.text().await.map_err(|e| {
            ResolutionError::network_error(
                coordinates,
                repository,
                format!("failed to read response body: {}", e),
            )
        })
    }
}
