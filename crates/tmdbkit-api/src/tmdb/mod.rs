//! TMDB API v3 client module.
//!
//! Sends requests through a shared transport that merges default options,
//! authenticates, and normalizes errors. Resource endpoints resolve their
//! canonical ID from a locator before addressing `{kind}/{id}` paths.

mod api;
mod client;
pub mod endpoints;
mod error;
pub mod id;
mod options;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbTransport, TmdbTransport};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{EndpointError, ResolveError, TmdbError, UnknownResource, UnsupportedResourceKind};
pub use id::{Locator, ResolutionConfig, ResourceKind};
pub use options::RequestOptions;
#[allow(clippy::module_name_repetitions)]
pub use types::{FindResponse, ResultRecord, SearchResultSet, TmdbErrorResponse};
