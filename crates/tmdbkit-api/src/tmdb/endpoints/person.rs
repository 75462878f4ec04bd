//! Person endpoint (`person/{id}`).

use std::str::FromStr;

use super::resource::{ListPath, ResourceEndpoint, ResourcePath, parse_named};
use crate::tmdb::error::UnknownResource;
use crate::tmdb::id::ResourceKind;

/// Person endpoint.
pub type PersonEndpoint<'a, T> = ResourceEndpoint<'a, T, PersonResource>;

/// Resources under `person/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonResource {
    /// `person/{id}`
    Details,
    /// `person/{id}/changes`
    Changes,
    /// `person/{id}/movie_credits`
    MovieCredits,
    /// `person/{id}/tv_credits`
    TvCredits,
    /// `person/{id}/combined_credits`
    CombinedCredits,
    /// `person/{id}/external_ids`
    ExternalIds,
    /// `person/{id}/images`
    Images,
    /// `person/{id}/tagged_images`
    TaggedImages,
    /// `person/{id}/translations`
    Translations,
}

impl PersonResource {
    /// All person resources.
    pub const ALL: [Self; 9] = [
        Self::Details,
        Self::Changes,
        Self::MovieCredits,
        Self::TvCredits,
        Self::CombinedCredits,
        Self::ExternalIds,
        Self::Images,
        Self::TaggedImages,
        Self::Translations,
    ];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Changes => "changes",
            Self::MovieCredits => "movie_credits",
            Self::TvCredits => "tv_credits",
            Self::CombinedCredits => "combined_credits",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::TaggedImages => "tagged_images",
            Self::Translations => "translations",
        }
    }
}

impl ResourcePath for PersonResource {
    const KIND: ResourceKind = ResourceKind::Person;
    type List = PersonList;

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

impl FromStr for PersonResource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "person", s)
    }
}

/// Lists under `person/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonList {
    /// `person/latest`
    Latest,
    /// `person/popular`
    Popular,
}

impl PersonList {
    /// All person lists.
    pub const ALL: [Self; 2] = [Self::Latest, Self::Popular];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
        }
    }
}

impl ListPath for PersonList {
    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl FromStr for PersonList {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "person list", s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::tmdb::client::TmdbClient;
    use crate::tmdb::id::Locator;
    use crate::tmdb::options::RequestOptions;

    fn client_for(mock_server: &wiremock::MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .retry_backoff(Duration::from_millis(0))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_by_query_then_movie_credits() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let search_body = include_str!("../../../../../fixtures/tmdb/search_person_dicaprio.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/person"))
            .and(wiremock::matchers::query_param("query", "Leonardo DiCaprio"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(search_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/person/6193/movie_credits"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 6193, "cast": [{"id": 27205, "title": "Inception"}]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut endpoint = client.person();

        // Act
        endpoint
            .set_id(&Locator::by_query("Leonardo DiCaprio"))
            .await
            .unwrap();
        let credits = endpoint
            .get(PersonResource::MovieCredits, &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(credits["cast"][0]["title"], "Inception");
    }

    #[tokio::test]
    async fn test_popular_list() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/person/popular"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"page": 1, "results": [{"id": 6193}]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client
            .person()
            .list(PersonList::Popular, &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(page["results"][0]["id"], 6193);
    }
}
