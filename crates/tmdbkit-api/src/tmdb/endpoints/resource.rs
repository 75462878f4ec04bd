//! Generic ID-scoped endpoint shared by movie, TV, person, and company.
#![allow(clippy::future_not_send)]

use std::marker::PhantomData;

use reqwest::Method;
use serde_json::{Value, json};
use tracing::instrument;

use crate::tmdb::api::LocalTmdbTransport;
use crate::tmdb::error::{EndpointError, UnknownResource};
use crate::tmdb::id::{Locator, ResolutionConfig, ResourceKind};
use crate::tmdb::options::RequestOptions;

/// Sub-resources addressable under `{kind}/{id}`.
pub trait ResourcePath: Copy {
    /// Kind these paths belong to.
    const KIND: ResourceKind;

    /// Collection lists under `{kind}/` that need no ID.
    type List: ListPath;

    /// Resource name (`details`, `credits`, ...).
    fn as_str(self) -> &'static str;

    /// Path segment after `{kind}/{id}`, `None` for the resource itself.
    fn segment(self) -> Option<&'static str> {
        Some(self.as_str())
    }
}

/// Lists under `{kind}/` (`popular`, `top_rated`, ...).
pub trait ListPath: Copy {
    /// Path segment after `{kind}/`.
    fn as_str(self) -> &'static str;
}

/// Kinds that accept user ratings (`{kind}/{id}/rating`).
pub trait Rateable: ResourcePath {}

/// ID state of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdState {
    /// No ID yet; `set_id` may be called once.
    Unresolved,
    /// ID fixed for the life of the endpoint.
    Resolved(u64),
}

/// Endpoint for one TMDB resource kind, addressed by canonical ID.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ResourceEndpoint<'a, T, P> {
    transport: &'a T,
    state: IdState,
    paths: PhantomData<fn() -> P>,
}

impl<'a, T, P: ResourcePath> ResourceEndpoint<'a, T, P> {
    /// Endpoint without an ID.
    #[must_use]
    pub const fn new(transport: &'a T) -> Self {
        Self {
            transport,
            state: IdState::Unresolved,
            paths: PhantomData,
        }
    }

    /// Endpoint for a known TMDB ID.
    #[must_use]
    pub const fn with_id(transport: &'a T, id: u64) -> Self {
        Self {
            transport,
            state: IdState::Resolved(id),
            paths: PhantomData,
        }
    }

    /// Resource kind of this endpoint.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        P::KIND
    }

    /// Current ID state.
    #[must_use]
    pub const fn state(&self) -> IdState {
        self.state
    }

    /// TMDB ID, if resolved.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self.state {
            IdState::Resolved(id) => Some(id),
            IdState::Unresolved => None,
        }
    }

    /// Request path for `resource` under this endpoint's ID.
    ///
    /// # Errors
    ///
    /// Returns `IdRequired` if no ID has been set.
    pub fn path(&self, resource: P) -> Result<String, EndpointError> {
        let id = self.id().ok_or(EndpointError::IdRequired)?;
        Ok(resource.segment().map_or_else(
            || format!("{}/{id}", P::KIND),
            |segment| format!("{}/{id}/{segment}", P::KIND),
        ))
    }
}

impl<T: LocalTmdbTransport + Sync, P: ResourcePath> ResourceEndpoint<'_, T, P> {
    /// Resolves `locator` and fixes the endpoint's ID.
    ///
    /// # Errors
    ///
    /// - `IdAlreadySet` if the endpoint already holds an ID (no request is made).
    /// - `Resolve` if the locator cannot be resolved.
    #[instrument(skip_all, fields(kind = %P::KIND))]
    pub async fn set_id(&mut self, locator: &Locator) -> Result<u64, EndpointError> {
        if let IdState::Resolved(_) = self.state {
            return Err(EndpointError::IdAlreadySet);
        }

        let config = ResolutionConfig::for_kind(P::KIND, self.transport);
        let id = config.resolve(locator).await?;
        tracing::debug!(id, "TMDB ID resolved");
        self.state = IdState::Resolved(id);
        Ok(id)
    }

    /// Fetches `resource` for this endpoint's ID.
    ///
    /// # Errors
    ///
    /// Returns `IdRequired` if no ID is set, or `Transport` if the request fails.
    #[instrument(skip_all, fields(kind = %P::KIND, resource = resource.as_str()))]
    pub async fn get(&self, resource: P, options: &RequestOptions) -> Result<Value, EndpointError> {
        let path = self.path(resource)?;
        Ok(self
            .transport
            .request(Method::GET, &path, options, None)
            .await?)
    }

    /// Fetches a list that needs no ID.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the request fails.
    #[instrument(skip_all, fields(kind = %P::KIND, list = list.as_str()))]
    pub async fn list(&self, list: P::List, options: &RequestOptions) -> Result<Value, EndpointError> {
        let path = format!("{}/{}", P::KIND, list.as_str());
        Ok(self
            .transport
            .request(Method::GET, &path, options, None)
            .await?)
    }
}

impl<T: LocalTmdbTransport + Sync, P: Rateable> ResourceEndpoint<'_, T, P> {
    /// Rates this resource (0.5 to 10.0). Pass `session_id` or
    /// `guest_session_id` in `options`.
    ///
    /// # Errors
    ///
    /// Returns `IdRequired` if no ID is set, or `Transport` if the request fails.
    #[instrument(skip_all, fields(kind = %P::KIND))]
    pub async fn add_rating(
        &self,
        value: f64,
        options: &RequestOptions,
    ) -> Result<Value, EndpointError> {
        let path = self.rating_path()?;
        let content = json!({ "value": value });
        Ok(self
            .transport
            .request(Method::POST, &path, options, Some(&content))
            .await?)
    }

    /// Removes the rating of this resource.
    ///
    /// # Errors
    ///
    /// Returns `IdRequired` if no ID is set, or `Transport` if the request fails.
    #[instrument(skip_all, fields(kind = %P::KIND))]
    pub async fn remove_rating(&self, options: &RequestOptions) -> Result<Value, EndpointError> {
        let path = self.rating_path()?;
        Ok(self
            .transport
            .request(Method::DELETE, &path, options, None)
            .await?)
    }

    fn rating_path(&self) -> Result<String, EndpointError> {
        let id = self.id().ok_or(EndpointError::IdRequired)?;
        Ok(format!("{}/{id}/rating", P::KIND))
    }
}

/// Looks up `name` among `all` by their `as_str` names.
pub(crate) fn parse_named<E: Copy>(
    all: &[E],
    as_str: fn(E) -> &'static str,
    endpoint: &'static str,
    name: &str,
) -> Result<E, UnknownResource> {
    all.iter()
        .copied()
        .find(|item| as_str(*item) == name)
        .ok_or_else(|| UnknownResource {
            endpoint,
            name: String::from(name),
        })
}
