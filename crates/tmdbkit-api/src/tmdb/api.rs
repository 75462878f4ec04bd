//! `TmdbTransport` trait definition.
#![allow(clippy::future_not_send)]

use reqwest::Method;
use serde_json::Value;

use super::error::TmdbError;
use super::options::RequestOptions;

/// TMDB transport trait.
///
/// The single request routine every endpoint delegates to. Abstracted so
/// endpoints and the resolver can run against a mock in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbTransport: Send)]
pub trait LocalTmdbTransport {
    /// Sends a request and returns the decoded JSON body.
    ///
    /// `path` is relative to the API base URL (e.g. `movie/27205/credits`).
    /// `options` are merged over the transport's default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, the request cannot be sent,
    /// the API answers with a non-success status, or the body is not JSON.
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
        body: Option<&Value>,
    ) -> Result<Value, TmdbError>;
}
