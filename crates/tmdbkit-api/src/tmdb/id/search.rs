//! Search adapter: the two lookups the resolver needs, bound to one kind.
#![allow(clippy::future_not_send)]

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use super::kind::ResourceKind;
use crate::tmdb::api::LocalTmdbTransport;
use crate::tmdb::endpoints::find_path;
use crate::tmdb::error::TmdbError;
use crate::tmdb::options::RequestOptions;
use crate::tmdb::types::{FindResponse, SearchResultSet};

/// Lookups the resolver issues, independent of resource-specific requests.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SearchAdapter: Send)]
pub trait LocalSearchAdapter {
    /// Looks up `external_id` in the given external `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    async fn find_by_external_id(
        &self,
        external_id: &str,
        source: &str,
    ) -> Result<FindResponse, TmdbError>;

    /// Runs a free-text search.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    async fn search_by_query(&self, query: &str) -> Result<SearchResultSet, TmdbError>;
}

/// Search adapter backed by a TMDB transport and bound to one kind.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TransportSearchAdapter<'a, T> {
    transport: &'a T,
    kind: ResourceKind,
}

impl<'a, T> TransportSearchAdapter<'a, T> {
    /// Binds `transport` to the search endpoint of `kind`.
    #[must_use]
    pub const fn new(transport: &'a T, kind: ResourceKind) -> Self {
        Self { transport, kind }
    }

    /// Kind this adapter searches.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl<T: LocalTmdbTransport + Sync> LocalSearchAdapter for TransportSearchAdapter<'_, T> {
    #[instrument(skip_all, fields(kind = %self.kind))]
    async fn find_by_external_id(
        &self,
        external_id: &str,
        source: &str,
    ) -> Result<FindResponse, TmdbError> {
        let path = find_path(external_id);
        let options = RequestOptions::new().with("external_source", source);
        let value = self
            .transport
            .request(Method::GET, &path, &options, None)
            .await?;
        decode(&path, value)
    }

    #[instrument(skip_all, fields(kind = %self.kind))]
    async fn search_by_query(&self, query: &str) -> Result<SearchResultSet, TmdbError> {
        let path = self.kind.search_resource().path();
        let options = RequestOptions::new().with("query", query);
        let value = self
            .transport
            .request(Method::GET, path, &options, None)
            .await?;
        decode(path, value)
    }
}

fn decode<D: DeserializeOwned>(path: &str, value: Value) -> Result<D, TmdbError> {
    serde_json::from_value(value).map_err(|source| TmdbError::Decode {
        path: String::from(path),
        source,
    })
}
