//! External ID recognizers.

use std::sync::LazyLock;

use regex::Regex;

/// Recognizes a TMDB ID written in external-ID form (`t27205`).
#[allow(clippy::expect_used)]
static NATIVE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^t([0-9]+)$").expect("failed to compile native ID regex"));

/// Extracts the TMDB ID embedded in a `t<digits>` string.
///
/// IMDB-style IDs such as `tt0137523` do not match.
#[must_use]
pub fn native_id(external_id: &str) -> Option<u64> {
    let caps = NATIVE_ID_RE.captures(external_id)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Ordered table of external sources and the pattern each one accepts.
///
/// Classification walks the table in insertion order and picks the
/// first source whose pattern matches.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ExternalSourceTable {
    entries: Vec<(String, Regex)>,
}

impl ExternalSourceTable {
    /// Builds a table from `(source, pattern)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn new<S, P>(entries: impl IntoIterator<Item = (S, P)>) -> Result<Self, regex::Error>
    where
        S: Into<String>,
        P: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(source, pattern)| Regex::new(pattern.as_ref()).map(|re| (source.into(), re)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { entries })
    }

    /// Returns the first source whose pattern matches `external_id`.
    #[must_use]
    pub fn classify(&self, external_id: &str) -> Option<&str> {
        let source = self
            .entries
            .iter()
            .find(|(_, pattern)| pattern.is_match(external_id))
            .map(|(source, _)| source.as_str())?;
        tracing::debug!("external ID {external_id} matched source {source}");
        Some(source)
    }

    /// Source names in classification order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(source, _)| source.as_str())
    }
}
