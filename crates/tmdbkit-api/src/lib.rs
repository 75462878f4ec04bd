//! TMDB API client library.
//!
//! Provides the TMDB v3 transport, per-resource endpoints, and the
//! identifier resolver that turns an ID, external ID, or free-text query
//! into a canonical TMDB ID.

/// TMDB API client.
pub mod tmdb;
