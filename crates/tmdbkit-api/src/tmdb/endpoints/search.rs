//! Search endpoint (`search/{resource}`).
#![allow(clippy::future_not_send)]

use std::str::FromStr;

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::resource::parse_named;
use crate::tmdb::api::LocalTmdbTransport;
use crate::tmdb::error::{TmdbError, UnknownResource};
use crate::tmdb::options::RequestOptions;

/// Searchable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResource {
    /// `search/company`
    Companies,
    /// `search/collection`
    Collections,
    /// `search/keyword`
    Keywords,
    /// `search/movie`
    Movies,
    /// `search/multi`
    Multi,
    /// `search/person`
    People,
    /// `search/tv`
    Tv,
}

impl SearchResource {
    /// All searchable resources.
    pub const ALL: [Self; 7] = [
        Self::Companies,
        Self::Collections,
        Self::Keywords,
        Self::Movies,
        Self::Multi,
        Self::People,
        Self::Tv,
    ];

    /// Snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Collections => "collections",
            Self::Keywords => "keywords",
            Self::Movies => "movies",
            Self::Multi => "multi",
            Self::People => "people",
            Self::Tv => "tv",
        }
    }

    /// Request path, relative to the API base.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Companies => "search/company",
            Self::Collections => "search/collection",
            Self::Keywords => "search/keyword",
            Self::Movies => "search/movie",
            Self::Multi => "search/multi",
            Self::People => "search/person",
            Self::Tv => "search/tv",
        }
    }
}

impl FromStr for SearchResource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "search", s)
    }
}

/// Search endpoint. Every call expects `query` in its options.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SearchEndpoint<'a, T> {
    transport: &'a T,
}

impl<'a, T> SearchEndpoint<'a, T> {
    /// Binds the search endpoint to `transport`.
    #[must_use]
    pub const fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: LocalTmdbTransport + Sync> SearchEndpoint<'_, T> {
    /// Runs a search against `resource`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip_all, fields(resource = resource.as_str()))]
    pub async fn get(
        &self,
        resource: SearchResource,
        options: &RequestOptions,
    ) -> Result<Value, TmdbError> {
        if options.get("query").is_none() {
            tracing::warn!("search request without a query option");
        }
        self.transport
            .request(Method::GET, resource.path(), options, None)
            .await
    }
}
