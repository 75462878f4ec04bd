//! Caller-supplied locator for a TMDB resource.

/// What the caller knows about the resource it wants.
///
/// Precedence when resolving is `id` > `external_id` > `query`. A query
/// given together with an external ID serves as the fallback when the
/// external lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locator {
    /// TMDB ID.
    pub id: Option<u64>,
    /// External ID (IMDB, Wikidata, TVDB, or `t<digits>`).
    pub external_id: Option<String>,
    /// Free-text search query.
    pub query: Option<String>,
}

impl Locator {
    /// Locator for a known TMDB ID.
    #[must_use]
    pub const fn by_id(id: u64) -> Self {
        Self {
            id: Some(id),
            external_id: None,
            query: None,
        }
    }

    /// Locator for an external ID.
    #[must_use]
    pub fn by_external_id(external_id: impl Into<String>) -> Self {
        Self {
            external_id: Some(external_id.into()),
            ..Self::default()
        }
    }

    /// Locator for a free-text query.
    #[must_use]
    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Adds a TMDB ID.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds an external ID.
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Adds a query, used as fallback for an external ID.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// External ID, ignoring blank strings.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        non_blank(self.external_id.as_deref())
    }

    /// Query, ignoring blank strings.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }

    /// Returns `true` if no usable field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.external_id().is_none() && self.query().is_none()
    }
}

impl From<u64> for Locator {
    fn from(id: u64) -> Self {
        Self::by_id(id)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        // Arrange & Act & Assert
        assert!(Locator::default().is_empty());
    }

    #[test]
    fn test_blank_strings_count_as_absent() {
        // Arrange
        let locator = Locator::by_external_id("").with_query("   ");

        // Act & Assert
        assert!(locator.is_empty());
        assert_eq!(locator.external_id(), None);
        assert_eq!(locator.query(), None);
    }

    #[test]
    fn test_builders_combine() {
        // Arrange & Act
        let locator = Locator::by_external_id("tt1375666").with_query("Inception");

        // Assert
        assert_eq!(locator.external_id(), Some("tt1375666"));
        assert_eq!(locator.query(), Some("Inception"));
        assert_eq!(locator.id, None);
        assert!(!locator.is_empty());
    }

    #[test]
    fn test_from_id() {
        // Arrange & Act
        let locator = Locator::from(27_205);

        // Assert
        assert_eq!(locator, Locator::by_id(27_205));
    }
}
