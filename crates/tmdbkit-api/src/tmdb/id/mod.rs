//! Identifier resolution.
//!
//! Maps a caller-supplied locator (TMDB ID, external ID, or free-text
//! query) to a single canonical TMDB ID, consulting the find and search
//! endpoints only when needed.

mod kind;
mod locator;
mod resolver;
mod search;
mod sources;

pub use kind::ResourceKind;
pub use locator::Locator;
pub use resolver::ResolutionConfig;
#[allow(clippy::module_name_repetitions)]
pub use search::{LocalSearchAdapter, SearchAdapter, TransportSearchAdapter};
pub use sources::{ExternalSourceTable, native_id};
