//! PokeAPI HTTP client
//!
//! This module provides functionality to fetch PokeAPI resources as raw
//! JSON payloads and decode them into the structs in [`crate::api`]. Every
//! fetch goes through the response cache first, keyed by the full request
//! URL, so repeated pagination and lookups within the cache interval never
//! touch the network.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cache::TimedCache;

use super::{AreaEncounters, LocationAreaPage, Pokemon};

/// Base URL for the public PokeAPI
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching from the PokeAPI
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The requested resource does not exist (HTTP 404)
    #[error("resource not found: {url}")]
    NotFound {
        /// URL of the missing resource
        url: String,
    },

    /// The server answered with a non-success status other than 404
    #[error("request to {url} failed with status {status}")]
    Status {
        /// The HTTP status code received
        status: StatusCode,
        /// URL of the failed request
        url: String,
    },

    /// Failed to parse a JSON response
    #[error("failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the PokeAPI with a cache-first fetch path
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    cache: TimedCache,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI
    pub fn new(cache: TimedCache) -> Self {
        Self {
            client: Client::new(),
            base_url: POKEAPI_BASE_URL.to_string(),
            cache,
        }
    }

    /// Points the client at a different API instance
    ///
    /// Useful for tests and self-hosted PokeAPI mirrors.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// URL of the first page of the location-area listing
    pub fn first_location_page(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches one page of the location-area listing
    ///
    /// Pagination navigates by the `next`/`previous` URLs embedded in the
    /// previous response, so this takes a full page URL rather than a name.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage, ApiError> {
        self.fetch_json(url).await
    }

    /// Fetches the Pokemon encounters for a named location area
    pub async fn area_encounters(&self, area: &str) -> Result<AreaEncounters, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        self.fetch_json(&url).await
    }

    /// Fetches a Pokemon by name
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches `url` through the cache and decodes the JSON body
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.fetch_cached(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns the raw response body for `url`, consulting the cache first
    ///
    /// On a miss the real request is performed and the successful body is
    /// stored under the full URL. Error responses are never cached.
    async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        if let Some(body) = self.cache.get(url) {
            tracing::debug!(url, "cache hit");
            return Ok(body);
        }

        tracing::debug!(url, "cache miss");
        let body = self.fetch(url).await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    /// Performs the HTTP GET and classifies the response status
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
