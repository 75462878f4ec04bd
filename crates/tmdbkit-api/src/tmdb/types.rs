//! TMDB API response types.

use serde::Deserialize;
use serde_json::{Map, Value};

// --- Search ---

/// Response from any `search/*` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultSet {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Search results, in API relevance order.
    #[serde(default)]
    pub results: Vec<ResultRecord>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single result record from a search or find response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRecord {
    /// TMDB ID.
    pub id: u64,
    /// Remaining fields as returned by the API.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResultRecord {
    /// Returns `title` for movies or `name` for everything else.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.fields
            .get("title")
            .or_else(|| self.fields.get("name"))
            .and_then(Value::as_str)
    }
}

// --- Find ---

/// Response from `find/{external_id}`.
///
/// Holds one result array per resource type, keyed by field name
/// (`movie_results`, `tv_results`, `person_results`, ...). Arrays are kept
/// as raw JSON and decoded on access, so a malformed array only fails the
/// caller that reads it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FindResponse {
    /// Top-level fields as returned by the API.
    pub fields: Map<String, Value>,
}

impl FindResponse {
    /// Decodes the results held in `field`, empty when absent or null.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is not an array of result records.
    pub fn results(&self, field: &str) -> Result<Vec<ResultRecord>, serde_json::Error> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Vec::<ResultRecord>::deserialize(value),
        }
    }

    /// Names of the fields holding arrays, in key order.
    pub fn result_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_array())
            .map(|(key, _)| key.as_str())
    }
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
