//! `TmdbClient` - TMDB API transport implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbTransport;
use super::endpoints::{
    CompanyEndpoint, FindEndpoint, MovieEndpoint, PersonEndpoint, SearchEndpoint, TvEndpoint,
};
use super::error::TmdbError;
use super::options::RequestOptions;
use super::types::TmdbErrorResponse;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default response language.
const DEFAULT_LANGUAGE: &str = "en";

/// Default region (ISO 3166-1).
const DEFAULT_REGION: &str = "US";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff duration between retries.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Content type sent with JSON request bodies.
const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// TMDB API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer read access token (v4 auth).
    api_token: Option<String>,
    /// Options sent with every request (language, region, `api_key`).
    default_options: RequestOptions,
    /// Backoff unit between 429 retries.
    retry_backoff: Duration,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    api_token: Option<String>,
    user_agent: Option<String>,
    default_options: RequestOptions,
    retry_backoff: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_token: None,
            user_agent: None,
            default_options: RequestOptions::new()
                .with("language", DEFAULT_LANGUAGE)
                .with("region", DEFAULT_REGION),
            retry_backoff: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the v3 API key, sent as the `api_key` query parameter.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the read access token, sent as a Bearer header.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default response language (default: "en").
    #[must_use]
    pub fn language(self, language: impl Into<String>) -> Self {
        self.default_option("language", language.into())
    }

    /// Sets the default region (default: "US").
    #[must_use]
    pub fn region(self, region: impl Into<String>) -> Self {
        self.default_option("region", region.into())
    }

    /// Adds an option sent with every request unless overridden per call.
    #[must_use]
    pub fn default_option(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.default_options.insert(key, value);
        self
    }

    /// Sets the backoff unit between 429 retries (default: 1s).
    #[must_use]
    pub const fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = Some(backoff);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - Neither `api_key` nor `api_token` is set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        if self.api_key.is_none() && self.api_token.is_none() {
            bail!("api_key or api_token is required");
        }
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let mut default_options = self.default_options;
        if let Some(key) = self.api_key {
            default_options.insert("api_key", key);
        }

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token: self.api_token,
            default_options,
            retry_backoff: self.retry_backoff.unwrap_or(RETRY_BACKOFF),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Options sent with every request.
    #[must_use]
    pub const fn default_options(&self) -> &RequestOptions {
        &self.default_options
    }

    /// Find endpoint, optionally preloaded with an external ID.
    #[must_use]
    pub fn find(&self, external_id: Option<&str>) -> FindEndpoint<'_, Self> {
        FindEndpoint::new(self, external_id)
    }

    /// Search endpoint.
    #[must_use]
    pub const fn search(&self) -> SearchEndpoint<'_, Self> {
        SearchEndpoint::new(self)
    }

    /// Movie endpoint without an ID.
    #[must_use]
    pub const fn movie(&self) -> MovieEndpoint<'_, Self> {
        MovieEndpoint::new(self)
    }

    /// TV endpoint without an ID.
    #[must_use]
    pub const fn tv(&self) -> TvEndpoint<'_, Self> {
        TvEndpoint::new(self)
    }

    /// Person endpoint without an ID.
    #[must_use]
    pub const fn person(&self) -> PersonEndpoint<'_, Self> {
        PersonEndpoint::new(self)
    }

    /// Company endpoint without an ID.
    #[must_use]
    pub const fn company(&self) -> CompanyEndpoint<'_, Self> {
        CompanyEndpoint::new(self)
    }

    /// Converts a non-success response into `TmdbError::Status`.
    async fn status_error(response: reqwest::Response) -> TmdbError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<failed to read body>"));
        let (status_code, status_message) =
            match serde_json::from_str::<TmdbErrorResponse>(&body) {
                Ok(error_response) => (
                    Some(error_response.status_code),
                    Some(error_response.status_message),
                ),
                Err(_) => (None, None),
            };
        TmdbError::Status {
            status: status.as_u16(),
            status_code,
            status_message,
            body,
        }
    }
}

impl LocalTmdbTransport for TmdbClient {
    /// Sends a request with merged options and optional Bearer auth.
    /// Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip_all, fields(%method, path))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
        body: Option<&Value>,
    ) -> Result<Value, TmdbError> {
        if path.is_empty() {
            return Err(TmdbError::PathRequired);
        }

        let url = self
            .base_url
            .join(path)
            .map_err(|source| TmdbError::InvalidPath {
                path: String::from(path),
                source,
            })?;
        let merged = options.merged_over(&self.default_options);
        let query: Vec<(&str, &str)> = merged.iter().collect();

        let mut retries = 0u32;
        loop {
            let mut builder = self
                .http_client
                .request(method.clone(), url.clone())
                .query(&query);
            if let Some(ref token) = self.api_token {
                builder = builder.bearer_auth(token);
            }
            if method == Method::POST {
                builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
            }
            if let Some(content) = body {
                builder = builder.json(content);
            }
            let request = builder.build().map_err(|source| TmdbError::Unknown {
                path: String::from(path),
                source,
            })?;

            tracing::debug!(%method, path, "TMDB API request");

            let response = match self.http_client.execute(request).await {
                Ok(response) => response,
                Err(source) if source.is_builder() => {
                    return Err(TmdbError::Unknown {
                        path: String::from(path),
                        source,
                    });
                }
                Err(source) => {
                    return Err(TmdbError::NoResponse {
                        path: String::from(path),
                        source,
                    });
                }
            };

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(TmdbError::RateLimited {
                        retries: MAX_RETRIES,
                        path: String::from(path),
                    });
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(self.retry_backoff.saturating_mul(retries)).await;
                continue;
            }

            if !status.is_success() {
                return Err(Self::status_error(response).await);
            }

            let text = response
                .text()
                .await
                .map_err(|source| TmdbError::NoResponse {
                    path: String::from(path),
                    source,
                })?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(|source| TmdbError::Decode {
                path: String::from(path),
                source,
            });
        }
    }
}
