//! Resource kinds that support ID resolution.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::sources::ExternalSourceTable;
use crate::tmdb::endpoints::SearchResource;
use crate::tmdb::error::UnsupportedResourceKind;

#[allow(clippy::expect_used)]
static MOVIE_SOURCES: LazyLock<ExternalSourceTable> = LazyLock::new(|| {
    ExternalSourceTable::new([("imdb_id", r"^tt[0-9]+$"), ("wikidata_id", r"^Q[0-9]+$")])
        .expect("failed to compile movie external source patterns")
});

#[allow(clippy::expect_used)]
static TV_SOURCES: LazyLock<ExternalSourceTable> = LazyLock::new(|| {
    ExternalSourceTable::new([
        ("imdb_id", r"^tt[0-9]+$"),
        ("wikidata_id", r"^Q[0-9]+$"),
        ("tvdb_id", r"^[0-9]+$"),
    ])
    .expect("failed to compile TV external source patterns")
});

#[allow(clippy::expect_used)]
static PERSON_SOURCES: LazyLock<ExternalSourceTable> = LazyLock::new(|| {
    ExternalSourceTable::new([("imdb_id", r"^nm[0-9]+$"), ("wikidata_id", r"^Q[0-9]+$")])
        .expect("failed to compile person external source patterns")
});

#[allow(clippy::expect_used)]
static COMPANY_SOURCES: LazyLock<ExternalSourceTable> = LazyLock::new(|| {
    ExternalSourceTable::new([("imdb_id", r"^co[0-9]+$")])
        .expect("failed to compile company external source patterns")
});

/// A TMDB resource addressable by canonical ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `movie/{id}`
    Movie,
    /// `tv/{id}`
    Tv,
    /// `person/{id}`
    Person,
    /// `company/{id}`
    Company,
}

impl ResourceKind {
    /// All supported kinds.
    pub const ALL: [Self; 4] = [Self::Movie, Self::Tv, Self::Person, Self::Company];

    /// Name used on the command line and in paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::Company => "company",
        }
    }

    /// Field of a `find` response that holds results of this kind.
    #[must_use]
    pub const fn results_field(self) -> &'static str {
        match self {
            Self::Movie => "movie_results",
            Self::Tv => "tv_results",
            Self::Person => "person_results",
            Self::Company => "company_results",
        }
    }

    /// Search endpoint used for query lookups of this kind.
    #[must_use]
    pub const fn search_resource(self) -> SearchResource {
        match self {
            Self::Movie => SearchResource::Movies,
            Self::Tv => SearchResource::Tv,
            Self::Person => SearchResource::People,
            Self::Company => SearchResource::Companies,
        }
    }

    /// External ID sources accepted for this kind, in match order.
    #[must_use]
    pub fn external_sources(self) -> ExternalSourceTable {
        match self {
            Self::Movie => MOVIE_SOURCES.clone(),
            Self::Tv => TV_SOURCES.clone(),
            Self::Person => PERSON_SOURCES.clone(),
            Self::Company => COMPANY_SOURCES.clone(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnsupportedResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnsupportedResourceKind(String::from(s)))
    }
}
