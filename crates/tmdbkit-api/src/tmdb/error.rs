//! Error types for the TMDB transport, identifier resolution, and endpoints.

use thiserror::Error;

/// Transport-level failure.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// No request path was given.
    #[error("request path is required")]
    PathRequired,

    /// The request path could not be joined onto the base URL.
    #[error("invalid request path: {path}")]
    InvalidPath {
        /// Offending path.
        path: String,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },

    /// The API answered with a non-success status.
    #[error("TMDB API error (HTTP {status}): {}", status_message.as_deref().unwrap_or(body))]
    Status {
        /// HTTP status code.
        status: u16,
        /// TMDB error code from the response body, if present.
        status_code: Option<u32>,
        /// TMDB error message from the response body, if present.
        status_message: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// HTTP 429 persisted through every retry.
    #[error("TMDB API rate limit exceeded after {retries} retries: {path}")]
    RateLimited {
        /// Retries attempted.
        retries: u32,
        /// Request path.
        path: String,
    },

    /// The request was made but no response was received.
    #[error("request was made but no response was received: {path}")]
    NoResponse {
        /// Request path.
        path: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built or failed for an unknown reason.
    #[error("unknown error when sending request: {path}")]
    Unknown {
        /// Request path.
        path: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode JSON response: {path}")]
    Decode {
        /// Request path.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// Returns the HTTP status when the API answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure while turning a locator into a canonical ID.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ResolveError {
    /// None of ID, external ID, or query was given.
    #[error("a TMDB ID, external ID, or query is required")]
    LocatorRequired,

    /// The external ID matches no known source pattern.
    #[error("unrecognized external ID source: {external_id}")]
    UnrecognizedExternalSource {
        /// External ID as given.
        external_id: String,
    },

    /// A find or search call returned zero matches.
    #[error("no results found for {term}")]
    NoResults {
        /// External ID or query that was looked up.
        term: String,
    },

    /// The underlying request failed.
    #[error(transparent)]
    Transport(#[from] TmdbError),
}

/// Usage or request failure on an endpoint object.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum EndpointError {
    /// `set_id` was called on an endpoint that already holds an ID.
    #[error("TMDB ID is already set")]
    IdAlreadySet,

    /// The request needs an ID but none has been set.
    #[error("TMDB ID is required")]
    IdRequired,

    /// The find endpoint has no external ID.
    #[error("external ID is required")]
    ExternalIdRequired,

    /// Resolving the locator failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The underlying request failed.
    #[error(transparent)]
    Transport(#[from] TmdbError),
}

/// A resource kind name that has no endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported resource kind: {0}")]
pub struct UnsupportedResourceKind(pub String);

/// A resource, list, or search name unknown for its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {endpoint} resource: {name}")]
pub struct UnknownResource {
    /// Endpoint the name was parsed for.
    pub endpoint: &'static str,
    /// Name as given.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_tmdb_message() {
        // Arrange
        let err = TmdbError::Status {
            status: 401,
            status_code: Some(7),
            status_message: Some(String::from("Invalid API key")),
            body: String::from("{}"),
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg, "TMDB API error (HTTP 401): Invalid API key");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_status_error_falls_back_to_body() {
        // Arrange
        let err = TmdbError::Status {
            status: 502,
            status_code: None,
            status_message: None,
            body: String::from("Bad Gateway"),
        };

        // Act & Assert
        assert_eq!(err.to_string(), "TMDB API error (HTTP 502): Bad Gateway");
    }

    #[test]
    fn test_transport_error_is_transparent_through_resolve() {
        // Arrange
        let err = ResolveError::from(TmdbError::PathRequired);

        // Act & Assert
        assert_eq!(err.to_string(), "request path is required");
        assert!(matches!(
            err,
            ResolveError::Transport(TmdbError::PathRequired)
        ));
    }

    #[test]
    fn test_unsupported_kind_display() {
        // Arrange & Act
        let err = UnsupportedResourceKind(String::from("collection"));

        // Assert
        assert_eq!(err.to_string(), "unsupported resource kind: collection");
    }
}
