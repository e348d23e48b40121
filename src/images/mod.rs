//! Photo search for illustrating the suggested dish.
//!
//! Lookups go to an Unsplash-compatible `GET {base}/search/photos` endpoint
//! and return the first result's regular-size URL. Without an access key
//! the client is disabled and every lookup returns `None` without a request.

use crate::errors::{AppResult, ImageError};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// Client for the image search API.
pub struct ImageClient {
    base_url: String,
    access_key: Option<String>,
    client: Client,
}

impl ImageClient {
    /// Creates a new image client; `access_key: None` disables lookups.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        access_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ImageError::Unreachable)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key,
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.access_key.is_some()
    }

    /// Finds a photo URL for `query`.
    ///
    /// Returns `Ok(None)` when lookups are disabled or nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable, times out, answers with a
    /// non-success status, or sends a body that is not a search result.
    pub fn search(&self, query: &str) -> AppResult<Option<String>> {
        let Some(access_key) = &self.access_key else {
            debug!("No image access key configured, skipping lookup");
            return Ok(None);
        };

        debug!("Searching image for: {}", query);

        let url = format!("{}/search/photos", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("client_id", access_key.as_str()),
            ])
            .send()
            .map_err(ImageError::Unreachable)?;

        if !response.status().is_success() {
            return Err(ImageError::Status(response.status().as_u16()).into());
        }

        let search: SearchResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                ImageError::Unreachable(e)
            } else {
                ImageError::InvalidResponse(e.to_string())
            }
        })?;

        Ok(search.results.into_iter().next().map(|p| p.urls.regular))
    }
}
