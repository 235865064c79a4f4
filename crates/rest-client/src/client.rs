//! Generic REST client wrapper around reqwest.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.falconx.io")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/v1/pairs")
    /// * `query` - Optional query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request");

        let mut request = self.client.get(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    ///
    /// The body is taken as a pre-serialized string so that callers which
    /// sign the payload send exactly the bytes they signed.
    ///
    /// # Arguments
    /// * `path` - Request path
    /// * `query` - Optional query string (without leading '?')
    /// * `body` - Optional raw request body
    /// * `headers` - Optional additional headers
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        body: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "POST request");

        let mut request = self.client.post(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(RestError::RateLimited {
                    retry_after_ms: 60_000,
                });
            }

            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_no_query() {
        let client = RestClient::with_default_timeout("https://api.falconx.io").unwrap();
        assert_eq!(
            client.build_url("/v1/pairs", None),
            "https://api.falconx.io/v1/pairs"
        );
    }

    #[test]
    fn test_build_url_with_query() {
        let client = RestClient::with_default_timeout("https://api.falconx.io").unwrap();
        assert_eq!(
            client.build_url("/v1/quotes", Some("platform=api")),
            "https://api.falconx.io/v1/quotes?platform=api"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.falconx.io/").unwrap();
        assert_eq!(
            client.build_url("/v1/pairs", None),
            "https://api.falconx.io/v1/pairs"
        );
    }

    #[test]
    fn test_build_url_empty_query() {
        let client = RestClient::with_default_timeout("https://api.falconx.io").unwrap();
        assert_eq!(
            client.build_url("/v1/pairs", Some("")),
            "https://api.falconx.io/v1/pairs"
        );
    }
}
