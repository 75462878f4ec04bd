//! Locator resolution: ID, external ID, or query to a canonical TMDB ID.
#![allow(clippy::future_not_send)]

use std::borrow::Cow;

use tracing::instrument;

use super::kind::ResourceKind;
use super::locator::Locator;
use super::search::{LocalSearchAdapter, TransportSearchAdapter};
use super::sources::{ExternalSourceTable, native_id};
use crate::tmdb::endpoints::find_path;
use crate::tmdb::error::{ResolveError, TmdbError};

/// Per-resource inputs for resolution.
///
/// Built fresh for every endpoint and never mutated afterwards.
#[derive(Debug)]
pub struct ResolutionConfig<A> {
    sources: ExternalSourceTable,
    results_field: Cow<'static, str>,
    adapter: A,
}

impl<A> ResolutionConfig<A> {
    /// Bundles an external source table, the `find` result field to read,
    /// and a search adapter bound to the same resource kind.
    pub fn new(
        sources: ExternalSourceTable,
        results_field: impl Into<Cow<'static, str>>,
        adapter: A,
    ) -> Self {
        Self {
            sources,
            results_field: results_field.into(),
            adapter,
        }
    }

    /// External sources consulted for external IDs.
    #[must_use]
    pub const fn sources(&self) -> &ExternalSourceTable {
        &self.sources
    }

    /// Field of a `find` response holding candidates.
    #[must_use]
    pub fn results_field(&self) -> &str {
        &self.results_field
    }
}

impl<'a, T> ResolutionConfig<TransportSearchAdapter<'a, T>> {
    /// Default configuration for `kind`, searching through `transport`.
    #[must_use]
    pub fn for_kind(kind: ResourceKind, transport: &'a T) -> Self {
        Self::new(
            kind.external_sources(),
            kind.results_field(),
            TransportSearchAdapter::new(transport, kind),
        )
    }
}

impl<A: LocalSearchAdapter + Sync> ResolutionConfig<A> {
    /// Resolves `locator` to a canonical TMDB ID.
    ///
    /// Precedence is ID, then external ID, then query. An explicit ID or a
    /// `t<digits>` external ID is returned without any request. A failed
    /// external lookup falls back to the query when one is given.
    ///
    /// # Errors
    ///
    /// - `LocatorRequired` if the locator carries no usable field.
    /// - `UnrecognizedExternalSource` if the external ID matches no source
    ///   and there is no query to fall back to.
    /// - `NoResults` if the find or search call returned nothing.
    /// - `Transport` if a request failed.
    #[instrument(skip_all)]
    pub async fn resolve(&self, locator: &Locator) -> Result<u64, ResolveError> {
        if let Some(id) = locator.id {
            return Ok(id);
        }

        let query = locator.query();

        if let Some(external_id) = locator.external_id() {
            if let Some(id) = native_id(external_id) {
                tracing::debug!(external_id, id, "external ID is a TMDB ID");
                return Ok(id);
            }

            match self.resolve_external_id(external_id).await {
                Ok(id) => return Ok(id),
                Err(err) if query.is_some() => {
                    tracing::warn!(
                        external_id,
                        error = %err,
                        "external ID lookup failed, falling back to query"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        if let Some(query) = query {
            return self.resolve_query(query).await;
        }

        Err(ResolveError::LocatorRequired)
    }

    async fn resolve_external_id(&self, external_id: &str) -> Result<u64, ResolveError> {
        let source = self.sources.classify(external_id).ok_or_else(|| {
            ResolveError::UnrecognizedExternalSource {
                external_id: String::from(external_id),
            }
        })?;

        let response = self.adapter.find_by_external_id(external_id, source).await?;
        let records = response
            .results(&self.results_field)
            .map_err(|err| TmdbError::Decode {
                path: find_path(external_id),
                source: err,
            })?;
        records
            .first()
            .map(|record| record.id)
            .ok_or_else(|| ResolveError::NoResults {
                term: String::from(external_id),
            })
    }

    async fn resolve_query(&self, query: &str) -> Result<u64, ResolveError> {
        let response = self.adapter.search_by_query(query).await?;
        let first = if response.total_results == 0 {
            None
        } else {
            response.results.first()
        };
        first.map(|record| record.id).ok_or_else(|| ResolveError::NoResults {
            term: String::from(query),
        })
    }
}
