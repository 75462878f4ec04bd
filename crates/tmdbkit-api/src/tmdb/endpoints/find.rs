//! Find endpoint (`find/{external_id}`).
#![allow(clippy::future_not_send)]

use std::sync::LazyLock;

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::tmdb::api::LocalTmdbTransport;
use crate::tmdb::error::EndpointError;
use crate::tmdb::options::RequestOptions;

/// Scratch URL used to percent-encode the external ID segment.
#[allow(clippy::expect_used)]
static FIND_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/find").expect("failed to parse find base URL"));

/// Request path of a find call.
///
/// The external ID is always a single path segment: `/`, `?`, `#` and `%`
/// are percent-encoded, and a bare `.` or `..` is dropped.
pub(crate) fn find_path(external_id: &str) -> String {
    let mut url = FIND_BASE.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(external_id);
    }
    String::from(url.path().trim_start_matches('/'))
}

/// Looks up TMDB records by an external ID.
///
/// Pass `external_source` (`imdb_id`, `tvdb_id`, ...) in the options.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FindEndpoint<'a, T> {
    transport: &'a T,
    external_id: Option<String>,
}

impl<'a, T> FindEndpoint<'a, T> {
    /// Binds the find endpoint to `transport`, optionally with an external ID.
    #[must_use]
    pub fn new(transport: &'a T, external_id: Option<&str>) -> Self {
        Self {
            transport,
            external_id: external_id.map(String::from),
        }
    }

    /// Replaces the external ID.
    pub fn set_external_id(&mut self, external_id: impl Into<String>) -> &mut Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Current external ID.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }
}

impl<T: LocalTmdbTransport + Sync> FindEndpoint<'_, T> {
    /// Runs the find call for the current external ID.
    ///
    /// # Errors
    ///
    /// Returns `ExternalIdRequired` if no external ID is set, or `Transport`
    /// if the request fails.
    #[instrument(skip_all, fields(external_id = self.external_id.as_deref()))]
    pub async fn find_by_external_id(
        &self,
        options: &RequestOptions,
    ) -> Result<Value, EndpointError> {
        let external_id = self
            .external_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(EndpointError::ExternalIdRequired)?;
        let path = find_path(external_id);
        Ok(self
            .transport
            .request(Method::GET, &path, options, None)
            .await?)
    }
}
