//! TV series endpoint (`tv/{id}`).

use std::str::FromStr;

use super::resource::{ListPath, Rateable, ResourceEndpoint, ResourcePath, parse_named};
use crate::tmdb::error::UnknownResource;
use crate::tmdb::id::ResourceKind;

/// TV series endpoint.
pub type TvEndpoint<'a, T> = ResourceEndpoint<'a, T, TvResource>;

/// Resources under `tv/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvResource {
    /// `tv/{id}`
    Details,
    /// `tv/{id}/alternative_titles`
    AlternativeTitles,
    /// `tv/{id}/changes`
    Changes,
    /// `tv/{id}/content_ratings`
    ContentRatings,
    /// `tv/{id}/credits`
    Credits,
    /// `tv/{id}/episode_groups`
    EpisodeGroups,
    /// `tv/{id}/external_ids`
    ExternalIds,
    /// `tv/{id}/images`
    Images,
    /// `tv/{id}/keywords`
    Keywords,
    /// `tv/{id}/recommendations`
    Recommendations,
    /// `tv/{id}/reviews`
    Reviews,
    /// `tv/{id}/screened_theatrically`
    ScreenedTheatrically,
    /// `tv/{id}/similar`
    Similar,
    /// `tv/{id}/translations`
    Translations,
    /// `tv/{id}/videos`
    Videos,
    /// `tv/{id}/account_states`
    AccountStates,
}

impl TvResource {
    /// All TV resources.
    pub const ALL: [Self; 16] = [
        Self::Details,
        Self::AlternativeTitles,
        Self::Changes,
        Self::ContentRatings,
        Self::Credits,
        Self::EpisodeGroups,
        Self::ExternalIds,
        Self::Images,
        Self::Keywords,
        Self::Recommendations,
        Self::Reviews,
        Self::ScreenedTheatrically,
        Self::Similar,
        Self::Translations,
        Self::Videos,
        Self::AccountStates,
    ];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::AlternativeTitles => "alternative_titles",
            Self::Changes => "changes",
            Self::ContentRatings => "content_ratings",
            Self::Credits => "credits",
            Self::EpisodeGroups => "episode_groups",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::Keywords => "keywords",
            Self::Recommendations => "recommendations",
            Self::Reviews => "reviews",
            Self::ScreenedTheatrically => "screened_theatrically",
            Self::Similar => "similar",
            Self::Translations => "translations",
            Self::Videos => "videos",
            Self::AccountStates => "account_states",
        }
    }
}

impl ResourcePath for TvResource {
    const KIND: ResourceKind = ResourceKind::Tv;
    type List = TvList;

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }

    fn segment(self) -> Option<&'static str> {
        match self {
            Self::Details => None,
            other => Some(other.as_str()),
        }
    }
}

impl Rateable for TvResource {}

impl FromStr for TvResource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "tv", s)
    }
}

/// Lists under `tv/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvList {
    /// `tv/latest`
    Latest,
    /// `tv/airing_today`
    AiringToday,
    /// `tv/on_the_air`
    OnTheAir,
    /// `tv/popular`
    Popular,
    /// `tv/top_rated`
    TopRated,
}

impl TvList {
    /// All TV lists.
    pub const ALL: [Self; 5] = [
        Self::Latest,
        Self::AiringToday,
        Self::OnTheAir,
        Self::Popular,
        Self::TopRated,
    ];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::AiringToday => "airing_today",
            Self::OnTheAir => "on_the_air",
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
        }
    }
}

impl ListPath for TvList {
    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl FromStr for TvList {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "tv list", s)
    }
}
